use crate::error::CliError;
use crate::output;
use std::path::PathBuf;
use xpdfkit_core::tools::PdfdetachOptions;
use xpdfkit_core::{PdfInput, RunOptions, Xpdf};

pub async fn run(
    xpdf: &Xpdf,
    pdfs: Vec<PathBuf>,
    save_all: bool,
    out: Option<PathBuf>,
    output_format: &str,
    run_opts: &RunOptions,
) -> Result<(), CliError> {
    let inputs: Vec<PdfInput> = pdfs.into_iter().map(PdfInput::from).collect();
    let options = PdfdetachOptions {
        save_all,
        extract_path: out.map(|p| p.to_string_lossy().into_owned()),
        ..Default::default()
    };
    let result = xpdf.pdf_detach(inputs, &options, Some(run_opts)).await?;

    match output_format {
        "json" => output::json::print(&result)?,
        _ => {
            for doc in result.as_slice() {
                output::table::print_attachments(doc);
            }
        }
    }
    Ok(())
}
