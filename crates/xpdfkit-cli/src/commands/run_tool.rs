use crate::error::CliError;
use xpdfkit_core::{RunOptions, ToolName, Xpdf};

/// Invoke a tool with raw passthrough arguments, mirroring its own exit code.
pub async fn run(
    xpdf: &Xpdf,
    tool: &str,
    args: Vec<String>,
    run_opts: &RunOptions,
) -> Result<(), CliError> {
    let tool = tool.parse::<ToolName>()?;
    let result = xpdf.run(tool, &args, Some(run_opts)).await?;

    print!("{}", result.stdout);
    eprint!("{}", result.stderr);
    if result.exit_code != 0 {
        std::process::exit(result.exit_code.clamp(1, 255));
    }
    Ok(())
}
