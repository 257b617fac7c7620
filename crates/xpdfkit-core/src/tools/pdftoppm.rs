use crate::error::XpdfError;
use crate::exec::run::{run, RunOptions, RunResult};
use crate::tool::ToolName;
use crate::tools::common::{apply_common_options, apply_passthrough, push_path, CommonOptions};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct PdftoppmOptions {
    pub common: CommonOptions,
    /// Rasterization resolution in DPI (`-r`).
    pub resolution: Option<u32>,
    pub scale_to_x: Option<u32>,
    pub scale_to_y: Option<u32>,
    pub gray: bool,
    pub mono: bool,
    /// Crop window in pixels (`-x`/`-y`/`-W`/`-H`).
    pub crop_x: Option<u32>,
    pub crop_y: Option<u32>,
    pub crop_width: Option<u32>,
    pub crop_height: Option<u32>,
}

pub(crate) fn raster_args(args: &mut Vec<String>, options: &PdftoppmOptions) {
    if let Some(r) = options.resolution {
        args.push("-r".into());
        args.push(r.to_string());
    }
    if let Some(x) = options.scale_to_x {
        args.push("-scale-to-x".into());
        args.push(x.to_string());
    }
    if let Some(y) = options.scale_to_y {
        args.push("-scale-to-y".into());
        args.push(y.to_string());
    }
    if options.gray {
        args.push("-gray".into());
    }
    if options.mono {
        args.push("-mono".into());
    }
    if let Some(x) = options.crop_x {
        args.push("-x".into());
        args.push(x.to_string());
    }
    if let Some(y) = options.crop_y {
        args.push("-y".into());
        args.push(y.to_string());
    }
    if let Some(w) = options.crop_width {
        args.push("-W".into());
        args.push(w.to_string());
    }
    if let Some(h) = options.crop_height {
        args.push("-H".into());
        args.push(h.to_string());
    }
}

fn build_args(input: &Path, output_root: Option<&Path>, options: &PdftoppmOptions) -> Vec<String> {
    let mut args = Vec::new();
    apply_common_options(&mut args, &options.common);
    raster_args(&mut args, options);
    apply_passthrough(&mut args, &options.common);
    push_path(&mut args, input);
    if let Some(root) = output_root {
        push_path(&mut args, root);
    }
    args
}

/// Rasterize to PPM files named `<root>-NNNNNN.ppm`.
pub async fn pdftoppm(
    input: &Path,
    output_root: Option<&Path>,
    options: &PdftoppmOptions,
    run_opts: &RunOptions,
) -> Result<RunResult, XpdfError> {
    run(
        ToolName::Pdftoppm,
        &build_args(input, output_root, options),
        run_opts,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_flags() {
        let options = PdftoppmOptions {
            resolution: Some(300),
            gray: true,
            crop_width: Some(800),
            ..Default::default()
        };
        let args = build_args(Path::new("in.pdf"), Some(Path::new("page")), &options);
        assert_eq!(
            args,
            vec!["-r", "300", "-gray", "-W", "800", "in.pdf", "page"]
        );
    }
}
