use crate::error::XpdfError;
use crate::exec::run::{run, RunOptions, RunResult};
use crate::tool::ToolName;
use crate::tools::common::{apply_common_options, apply_passthrough, push_path, CommonOptions};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct PdfdetachOptions {
    pub common: CommonOptions,
    /// List attachments (`-list`). `None` lets the caller's layer pick a
    /// default based on the save options.
    pub list: Option<bool>,
    /// Save every attachment (`-saveall`).
    pub save_all: bool,
    /// Save the attachment with this number (`-save`).
    pub save: Option<String>,
    /// Destination path for saved attachments (`-o`).
    pub extract_path: Option<String>,
}

fn build_args(input: &Path, options: &PdfdetachOptions) -> Vec<String> {
    let mut args = Vec::new();
    apply_common_options(&mut args, &options.common);
    if options.list == Some(true) {
        args.push("-list".into());
    }
    if options.save_all {
        args.push("-saveall".into());
    }
    if let Some(save) = &options.save {
        args.push("-save".into());
        args.push(save.clone());
    }
    if let Some(path) = &options.extract_path {
        args.push("-o".into());
        args.push(path.clone());
    }
    apply_passthrough(&mut args, &options.common);
    push_path(&mut args, input);
    args
}

/// List or extract embedded files.
pub async fn pdfdetach(
    input: &Path,
    options: &PdfdetachOptions,
    run_opts: &RunOptions,
) -> Result<RunResult, XpdfError> {
    run(ToolName::Pdfdetach, &build_args(input, options), run_opts).await
}
