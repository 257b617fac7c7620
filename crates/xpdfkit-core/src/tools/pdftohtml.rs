use crate::error::XpdfError;
use crate::exec::run::{run, RunOptions, RunResult};
use crate::tool::ToolName;
use crate::tools::common::{apply_common_options, apply_passthrough, push_path, CommonOptions};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct PdftohtmlOptions {
    pub common: CommonOptions,
    /// Initial zoom factor (`-zoom`).
    pub zoom: Option<f64>,
    /// Emit XML instead of HTML (`-xml`).
    pub xml: bool,
    pub noframes: bool,
    /// Include document metadata (`-meta`).
    pub meta: bool,
}

fn build_args(input: &Path, output_dir: Option<&Path>, options: &PdftohtmlOptions) -> Vec<String> {
    let mut args = Vec::new();
    apply_common_options(&mut args, &options.common);
    if let Some(zoom) = options.zoom {
        args.push("-zoom".into());
        args.push(zoom.to_string());
    }
    if options.xml {
        args.push("-xml".into());
    }
    if options.noframes {
        args.push("-noframes".into());
    }
    if options.meta {
        args.push("-meta".into());
    }
    apply_passthrough(&mut args, &options.common);
    push_path(&mut args, input);
    if let Some(dir) = output_dir {
        push_path(&mut args, dir);
    }
    args
}

/// Convert to HTML in `output_dir` (the tool's own default directory naming
/// applies when absent).
pub async fn pdftohtml(
    input: &Path,
    output_dir: Option<&Path>,
    options: &PdftohtmlOptions,
    run_opts: &RunOptions,
) -> Result<RunResult, XpdfError> {
    run(
        ToolName::Pdftohtml,
        &build_args(input, output_dir, options),
        run_opts,
    )
    .await
}
