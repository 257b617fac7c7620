use crate::error::CliError;
use xpdfkit_core::{list_tools, resolve_binary_path, RunOptions};

/// Print where each tool currently resolves with the given overrides.
pub fn run(run_opts: &RunOptions) -> Result<(), CliError> {
    let options = run_opts.resolve_options();
    for tool in list_tools() {
        match resolve_binary_path(*tool, &options) {
            Ok(path) => println!("{tool:<12} {}", path.display()),
            Err(_) => println!("{tool:<12} (not found)"),
        }
    }
    Ok(())
}
