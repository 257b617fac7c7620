use crate::error::CliError;
use crate::output;
use std::path::PathBuf;
use xpdfkit_core::tools::PdfinfoOptions;
use xpdfkit_core::{PdfInput, RunOptions, Xpdf};

pub async fn run(
    xpdf: &Xpdf,
    pdfs: Vec<PathBuf>,
    raw_dates: bool,
    output_format: &str,
    run_opts: &RunOptions,
) -> Result<(), CliError> {
    let inputs: Vec<PdfInput> = pdfs.into_iter().map(PdfInput::from).collect();
    let options = PdfinfoOptions {
        raw_dates,
        ..Default::default()
    };
    let result = xpdf.pdf_info(inputs, &options, Some(run_opts)).await?;

    match output_format {
        "json" => output::json::print(&result)?,
        _ => {
            for doc in result.as_slice() {
                output::table::print_info(doc);
            }
        }
    }
    Ok(())
}
