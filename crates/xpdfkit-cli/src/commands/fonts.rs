use crate::error::CliError;
use crate::output;
use std::path::PathBuf;
use xpdfkit_core::tools::PdffontsOptions;
use xpdfkit_core::{PdfInput, RunOptions, Xpdf};

pub async fn run(
    xpdf: &Xpdf,
    pdfs: Vec<PathBuf>,
    subst: bool,
    output_format: &str,
    run_opts: &RunOptions,
) -> Result<(), CliError> {
    let inputs: Vec<PdfInput> = pdfs.into_iter().map(PdfInput::from).collect();
    let options = PdffontsOptions {
        subst,
        ..Default::default()
    };
    let result = xpdf.pdf_fonts(inputs, &options, Some(run_opts)).await?;

    match output_format {
        "json" => output::json::print(&result)?,
        _ => {
            for doc in result.as_slice() {
                output::table::print_fonts(doc);
            }
        }
    }
    Ok(())
}
