use crate::error::XpdfError;
use crate::exec::run::{run, RunOptions, RunResult};
use crate::tool::ToolName;
use crate::tools::common::{apply_common_options, apply_passthrough, push_path};
use crate::tools::pdftoppm::{raster_args, PdftoppmOptions};
use std::path::Path;

/// `pdftopng` takes the full `pdftoppm` raster flag set plus `-transparent`.
#[derive(Debug, Clone, Default)]
pub struct PdftopngOptions {
    pub raster: PdftoppmOptions,
    pub transparent: bool,
}

fn build_args(input: &Path, output_root: Option<&Path>, options: &PdftopngOptions) -> Vec<String> {
    let mut args = Vec::new();
    apply_common_options(&mut args, &options.raster.common);
    raster_args(&mut args, &options.raster);
    if options.transparent {
        args.push("-transparent".into());
    }
    apply_passthrough(&mut args, &options.raster.common);
    push_path(&mut args, input);
    if let Some(root) = output_root {
        push_path(&mut args, root);
    }
    args
}

/// Rasterize to PNG files named `<root>-NNNNNN.png`.
pub async fn pdftopng(
    input: &Path,
    output_root: Option<&Path>,
    options: &PdftopngOptions,
    run_opts: &RunOptions,
) -> Result<RunResult, XpdfError> {
    run(
        ToolName::Pdftopng,
        &build_args(input, output_root, options),
        run_opts,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_follows_raster_flags() {
        let options = PdftopngOptions {
            raster: PdftoppmOptions {
                resolution: Some(150),
                ..Default::default()
            },
            transparent: true,
        };
        let args = build_args(Path::new("in.pdf"), None, &options);
        assert_eq!(args, vec!["-r", "150", "-transparent", "in.pdf"]);
    }
}
