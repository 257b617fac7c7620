use crate::error::XpdfError;
use crate::exec::run::{run, RunOptions, RunResult};
use crate::tool::ToolName;
use crate::tools::common::{apply_common_options, apply_passthrough, push_path, CommonOptions};
use std::path::Path;

/// Line-ending convention for extracted text (`-eol`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eol {
    Unix,
    Dos,
    Mac,
}

impl Eol {
    fn as_str(&self) -> &'static str {
        match self {
            Eol::Unix => "unix",
            Eol::Dos => "dos",
            Eol::Mac => "mac",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PdftotextOptions {
    pub common: CommonOptions,
    /// Preserve the physical layout of the page (`-layout`).
    pub layout: bool,
    /// Keep content-stream order instead of reading order (`-raw`).
    pub raw_text: bool,
    /// Wrap the output in HTML with document metadata (`-htmlmeta`).
    pub html_meta: bool,
    /// Output text encoding name (`-enc`).
    pub encoding: Option<String>,
    pub eol: Option<Eol>,
}

fn build_args(input: &Path, output: Option<&Path>, options: &PdftotextOptions) -> Vec<String> {
    let mut args = Vec::new();
    apply_common_options(&mut args, &options.common);
    if options.layout {
        args.push("-layout".into());
    }
    if options.raw_text {
        args.push("-raw".into());
    }
    if options.html_meta {
        args.push("-htmlmeta".into());
    }
    if let Some(enc) = &options.encoding {
        args.push("-enc".into());
        args.push(enc.clone());
    }
    if let Some(eol) = options.eol {
        args.push("-eol".into());
        args.push(eol.as_str().into());
    }
    apply_passthrough(&mut args, &options.common);
    push_path(&mut args, input);
    if let Some(output) = output {
        push_path(&mut args, output);
    }
    args
}

/// Extract text. Without `output` the tool writes `<input>.txt`; pass `-` as
/// the output path to stream to stdout.
pub async fn pdftotext(
    input: &Path,
    output: Option<&Path>,
    options: &PdftotextOptions,
    run_opts: &RunOptions,
) -> Result<RunResult, XpdfError> {
    run(
        ToolName::Pdftotext,
        &build_args(input, output, options),
        run_opts,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_order() {
        let options = PdftotextOptions {
            common: CommonOptions {
                first_page: Some(1),
                quiet: true,
                extra_args: vec!["-nopgbrk".into()],
                ..Default::default()
            },
            layout: true,
            eol: Some(Eol::Unix),
            ..Default::default()
        };
        let args = build_args(Path::new("in.pdf"), Some(Path::new("-")), &options);
        assert_eq!(
            args,
            vec!["-f", "1", "-q", "-layout", "-eol", "unix", "-nopgbrk", "in.pdf", "-"]
        );
    }

    #[test]
    fn test_output_is_optional() {
        let args = build_args(Path::new("in.pdf"), None, &PdftotextOptions::default());
        assert_eq!(args, vec!["in.pdf"]);
    }
}
