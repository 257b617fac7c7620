use crate::error::XpdfError;
use crate::exec::run::{run, RunOptions, RunResult};
use crate::tool::ToolName;
use crate::tools::common::{apply_common_options, apply_passthrough, push_path, CommonOptions};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct PdftopsOptions {
    pub common: CommonOptions,
    /// Generate Level 1 PostScript (`-level1`).
    pub level1: bool,
    pub level2: bool,
    pub level3: bool,
    /// Encapsulated PostScript output (`-eps`).
    pub eps: bool,
    /// Paper size name or `match` (`-paper`).
    pub paper_size: Option<String>,
}

fn build_args(input: &Path, output: Option<&Path>, options: &PdftopsOptions) -> Vec<String> {
    let mut args = Vec::new();
    apply_common_options(&mut args, &options.common);
    if options.level1 {
        args.push("-level1".into());
    }
    if options.level2 {
        args.push("-level2".into());
    }
    if options.level3 {
        args.push("-level3".into());
    }
    if options.eps {
        args.push("-eps".into());
    }
    if let Some(paper) = &options.paper_size {
        args.push("-paper".into());
        args.push(paper.clone());
    }
    apply_passthrough(&mut args, &options.common);
    push_path(&mut args, input);
    if let Some(output) = output {
        push_path(&mut args, output);
    }
    args
}

/// Convert to PostScript. Without `output` the tool writes `<input>.ps`.
pub async fn pdftops(
    input: &Path,
    output: Option<&Path>,
    options: &PdftopsOptions,
    run_opts: &RunOptions,
) -> Result<RunResult, XpdfError> {
    run(
        ToolName::Pdftops,
        &build_args(input, output, options),
        run_opts,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_and_paper_flags() {
        let options = PdftopsOptions {
            level2: true,
            eps: true,
            paper_size: Some("A4".into()),
            ..Default::default()
        };
        let args = build_args(Path::new("in.pdf"), Some(Path::new("out.ps")), &options);
        assert_eq!(
            args,
            vec!["-level2", "-eps", "-paper", "A4", "in.pdf", "out.ps"]
        );
    }
}
