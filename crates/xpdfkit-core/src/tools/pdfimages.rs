use crate::error::XpdfError;
use crate::exec::run::{run, RunOptions, RunResult};
use crate::tool::ToolName;
use crate::tools::common::{apply_common_options, apply_passthrough, push_path, CommonOptions};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct PdfimagesOptions {
    pub common: CommonOptions,
    /// List images instead of extracting them (`-list`). `None` lets the
    /// caller's layer pick a default.
    pub list: Option<bool>,
    /// Dump raw image streams without conversion (`-raw`).
    pub raw: bool,
    pub png: bool,
    pub tiff: bool,
    /// Write JPEG streams as `.jpg` files (`-j`).
    pub jpeg: bool,
    pub all: bool,
}

fn build_args(input: &Path, output_root: Option<&Path>, options: &PdfimagesOptions) -> Vec<String> {
    let mut args = Vec::new();
    apply_common_options(&mut args, &options.common);
    if options.list == Some(true) {
        args.push("-list".into());
    }
    if options.raw {
        args.push("-raw".into());
    }
    if options.png {
        args.push("-png".into());
    }
    if options.tiff {
        args.push("-tiff".into());
    }
    if options.jpeg {
        args.push("-j".into());
    }
    if options.all {
        args.push("-all".into());
    }
    apply_passthrough(&mut args, &options.common);
    push_path(&mut args, input);
    if let Some(root) = output_root {
        push_path(&mut args, root);
    }
    args
}

/// List or extract embedded images; extracted files are named
/// `<root>-NNNN.<ext>`.
pub async fn pdfimages(
    input: &Path,
    output_root: Option<&Path>,
    options: &PdfimagesOptions,
    run_opts: &RunOptions,
) -> Result<RunResult, XpdfError> {
    run(
        ToolName::Pdfimages,
        &build_args(input, output_root, options),
        run_opts,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_flag_only_when_requested() {
        let options = PdfimagesOptions {
            list: Some(true),
            ..Default::default()
        };
        assert_eq!(
            build_args(Path::new("in.pdf"), None, &options),
            vec!["-list", "in.pdf"]
        );

        let options = PdfimagesOptions::default();
        assert_eq!(
            build_args(Path::new("in.pdf"), Some(Path::new("img")), &options),
            vec!["in.pdf", "img"]
        );
    }
}
