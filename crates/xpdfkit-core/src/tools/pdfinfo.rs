use crate::error::XpdfError;
use crate::exec::run::{run, RunOptions, RunResult};
use crate::tool::ToolName;
use crate::tools::common::{apply_common_options, apply_passthrough, push_path, CommonOptions};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct PdfinfoOptions {
    pub common: CommonOptions,
    /// Print dates unconverted, as stored in the file (`-rawdates`).
    pub raw_dates: bool,
}

fn build_args(input: &Path, options: &PdfinfoOptions) -> Vec<String> {
    let mut args = Vec::new();
    apply_common_options(&mut args, &options.common);
    if options.raw_dates {
        args.push("-rawdates".into());
    }
    apply_passthrough(&mut args, &options.common);
    push_path(&mut args, input);
    args
}

/// Print document metadata as `key: value` lines on stdout.
pub async fn pdfinfo(
    input: &Path,
    options: &PdfinfoOptions,
    run_opts: &RunOptions,
) -> Result<RunResult, XpdfError> {
    run(ToolName::Pdfinfo, &build_args(input, options), run_opts).await
}
