use crate::error::CliError;
use std::path::PathBuf;
use xpdfkit_core::client::PdfToTextOptions;
use xpdfkit_core::tools::{CommonOptions, PdftotextOptions};
use xpdfkit_core::{OneOrMany, RunOptions, Xpdf};

pub async fn run(
    xpdf: &Xpdf,
    pdf: PathBuf,
    out: Option<PathBuf>,
    layout: bool,
    first_page: Option<u32>,
    last_page: Option<u32>,
    run_opts: &RunOptions,
) -> Result<(), CliError> {
    let to_stdout = out.is_none();
    let options = PdfToTextOptions {
        tool: PdftotextOptions {
            common: CommonOptions {
                first_page,
                last_page,
                ..Default::default()
            },
            layout,
            ..Default::default()
        },
        // "-" streams the text to stdout instead of a file.
        output: Some(OneOrMany::One(out.unwrap_or_else(|| PathBuf::from("-")))),
    };

    let result = xpdf.pdf_to_text(pdf, &options, Some(run_opts)).await?;
    if let OneOrMany::One(run) = result {
        if to_stdout {
            print!("{}", run.stdout);
        }
        if run.exit_code != 0 {
            eprint!("{}", run.stderr);
            std::process::exit(run.exit_code.clamp(1, 255));
        }
    }
    Ok(())
}
