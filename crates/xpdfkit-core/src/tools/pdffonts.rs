use crate::error::XpdfError;
use crate::exec::run::{run, RunOptions, RunResult};
use crate::tool::ToolName;
use crate::tools::common::{apply_common_options, apply_passthrough, push_path, CommonOptions};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct PdffontsOptions {
    pub common: CommonOptions,
    /// Report the substitute fonts that would actually be used (`-subst`).
    pub subst: bool,
}

fn build_args(input: &Path, options: &PdffontsOptions) -> Vec<String> {
    let mut args = Vec::new();
    apply_common_options(&mut args, &options.common);
    if options.subst {
        args.push("-subst".into());
    }
    apply_passthrough(&mut args, &options.common);
    push_path(&mut args, input);
    args
}

/// Print the font table on stdout.
pub async fn pdffonts(
    input: &Path,
    options: &PdffontsOptions,
    run_opts: &RunOptions,
) -> Result<RunResult, XpdfError> {
    run(ToolName::Pdffonts, &build_args(input, options), run_opts).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subst_flag() {
        let options = PdffontsOptions {
            subst: true,
            ..Default::default()
        };
        assert_eq!(
            build_args(Path::new("in.pdf"), &options),
            vec!["-subst", "in.pdf"]
        );
    }
}
