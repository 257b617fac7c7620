//! High-level client: one-or-many fan-out over the tool wrappers.
//!
//! Every method accepts a single PDF or an ordered set, runs each input
//! concurrently (materializing buffer inputs to temp files for the duration
//! of the call), and collapses a single-element result back to a scalar.
//! Resolution and launch failures abort the whole fan-out; tool failures and
//! timeouts come back as data inside [`RunResult`].

use crate::error::XpdfError;
use crate::exec::resolve::resolve_binary_path;
use crate::exec::run::{RunOptions, RunResult};
use crate::input::PdfInput;
use crate::one_or_many::OneOrMany;
use crate::parsing::{
    parse_pdfdetach_output, parse_pdffonts_output, parse_pdfinfo_output, PdfDetachEntry, PdfFontRow,
};
use crate::tool::ToolName;
use crate::tools;
use crate::tools::{
    PdfdetachOptions, PdffontsOptions, PdfimagesOptions, PdfinfoOptions, PdftohtmlOptions,
    PdftoppmOptions, PdftopngOptions, PdftopsOptions, PdftotextOptions,
};
use futures::future::try_join_all;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Client-level defaults. Call-level [`RunOptions`] always win; `bin_dir`
/// feeds the resolver's client-configured tier, so missing tools still fall
/// through to the bundled directory and `PATH`.
#[derive(Debug, Clone, Default)]
pub struct XpdfConfig {
    pub bin_dir: Option<PathBuf>,
    pub use_system: Option<bool>,
    pub run: RunOptions,
}

/// `pdfinfo` outcome: the raw run plus the parsed `key: value` mapping.
#[derive(Debug, Clone, Serialize)]
pub struct PdfInfoResult {
    pub result: RunResult,
    pub info: HashMap<String, String>,
}

/// `pdffonts` outcome: the raw run plus the parsed font table.
#[derive(Debug, Clone, Serialize)]
pub struct PdfFontsResult {
    pub result: RunResult,
    pub fonts: Vec<PdfFontRow>,
}

/// `pdfdetach` outcome; `entries` is present only in list mode.
#[derive(Debug, Clone, Serialize)]
pub struct PdfDetachResult {
    pub result: RunResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<PdfDetachEntry>>,
}

/// Conversion options plus a per-input output selection: a scalar output
/// applies to every input, a sequence is picked by input index.
#[derive(Debug, Clone, Default)]
pub struct PdfToTextOptions {
    pub tool: PdftotextOptions,
    pub output: Option<OneOrMany<PathBuf>>,
}

#[derive(Debug, Clone, Default)]
pub struct PdfToPsOptions {
    pub tool: PdftopsOptions,
    pub output: Option<OneOrMany<PathBuf>>,
}

#[derive(Debug, Clone, Default)]
pub struct PdfToPpmOptions {
    pub tool: PdftoppmOptions,
    pub output_root: Option<OneOrMany<PathBuf>>,
}

#[derive(Debug, Clone, Default)]
pub struct PdfToPngOptions {
    pub tool: PdftopngOptions,
    pub output_root: Option<OneOrMany<PathBuf>>,
}

#[derive(Debug, Clone, Default)]
pub struct PdfToHtmlOptions {
    pub tool: PdftohtmlOptions,
    pub output_dir: Option<OneOrMany<PathBuf>>,
}

#[derive(Debug, Clone, Default)]
pub struct PdfImagesOptions {
    pub tool: PdfimagesOptions,
    pub output_root: Option<OneOrMany<PathBuf>>,
}

/// The methods [`Xpdf::batch`] can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMethod {
    PdfInfo,
    PdfFonts,
    PdfDetach,
    PdfImages,
    PdfToText,
    PdfToPs,
    PdfToPpm,
    PdfToPng,
    PdfToHtml,
}

/// Per-method option bags for [`Xpdf::batch`].
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    pub pdf_info: PdfinfoOptions,
    pub pdf_fonts: PdffontsOptions,
    pub pdf_detach: PdfdetachOptions,
    pub pdf_images: PdfImagesOptions,
    pub pdf_to_text: PdfToTextOptions,
    pub pdf_to_ps: PdfToPsOptions,
    pub pdf_to_ppm: PdfToPpmOptions,
    pub pdf_to_png: PdfToPngOptions,
    pub pdf_to_html: PdfToHtmlOptions,
}

/// Result of [`Xpdf::batch`], one field per requested method, each following
/// the one-vs-many collapse independently.
#[derive(Debug, Default, Serialize)]
pub struct BatchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_info: Option<OneOrMany<PdfInfoResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_fonts: Option<OneOrMany<PdfFontsResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_detach: Option<OneOrMany<PdfDetachResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_images: Option<OneOrMany<RunResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_to_text: Option<OneOrMany<RunResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_to_ps: Option<OneOrMany<RunResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_to_ppm: Option<OneOrMany<RunResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_to_png: Option<OneOrMany<RunResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_to_html: Option<OneOrMany<RunResult>>,
}

enum BatchItem {
    Info(OneOrMany<PdfInfoResult>),
    Fonts(OneOrMany<PdfFontsResult>),
    Detach(OneOrMany<PdfDetachResult>),
    Images(OneOrMany<RunResult>),
    ToText(OneOrMany<RunResult>),
    ToPs(OneOrMany<RunResult>),
    ToPpm(OneOrMany<RunResult>),
    ToPng(OneOrMany<RunResult>),
    ToHtml(OneOrMany<RunResult>),
}

/// Client over the Xpdf tools with a configured environment. PDFs are passed
/// to each method, not the constructor.
#[derive(Debug, Clone, Default)]
pub struct Xpdf {
    config: XpdfConfig,
}

impl Xpdf {
    pub fn new(config: XpdfConfig) -> Self {
        Xpdf { config }
    }

    /// Merge call-level options over the client defaults, call level winning
    /// field by field.
    fn merge_run_options(&self, over: Option<&RunOptions>) -> RunOptions {
        let base = &self.config.run;
        let over = over.cloned().unwrap_or_default();
        RunOptions {
            cwd: over.cwd.or_else(|| base.cwd.clone()),
            env: over.env.or_else(|| base.env.clone()),
            stdin: over.stdin.or_else(|| base.stdin.clone()),
            timeout: over.timeout.or(base.timeout),
            kill_signal: over.kill_signal.or(base.kill_signal),
            stdio: over.stdio.or(base.stdio),
            encoding: over.encoding.or(base.encoding),
            bin_dir: over.bin_dir.or_else(|| base.bin_dir.clone()),
            use_system: over
                .use_system
                .or(self.config.use_system)
                .or(base.use_system),
            config_bin_dir: over
                .config_bin_dir
                .or_else(|| self.config.bin_dir.clone())
                .or_else(|| base.config_bin_dir.clone()),
            bundled_dir: over.bundled_dir.or_else(|| base.bundled_dir.clone()),
        }
    }

    /// Execute an arbitrary tool invocation with the merged configuration.
    pub async fn run(
        &self,
        tool: ToolName,
        args: &[String],
        run_opts: Option<&RunOptions>,
    ) -> Result<RunResult, XpdfError> {
        crate::exec::run::run(tool, args, &self.merge_run_options(run_opts)).await
    }

    /// Blocking variant of [`Xpdf::run`].
    pub fn run_sync(
        &self,
        tool: ToolName,
        args: &[String],
        run_opts: Option<&RunOptions>,
    ) -> Result<RunResult, XpdfError> {
        crate::exec::run::run_sync(tool, args, &self.merge_run_options(run_opts))
    }

    /// Resolve a tool with this client's configuration.
    pub fn binary_path(&self, tool: ToolName) -> Result<PathBuf, XpdfError> {
        resolve_binary_path(tool, &self.merge_run_options(None).resolve_options())
    }

    /// Get PDF metadata for one or many PDFs.
    pub async fn pdf_info(
        &self,
        pdfs: impl Into<OneOrMany<PdfInput>>,
        options: &PdfinfoOptions,
        run_opts: Option<&RunOptions>,
    ) -> Result<OneOrMany<PdfInfoResult>, XpdfError> {
        let run_opts = self.merge_run_options(run_opts);
        let inputs: OneOrMany<PdfInput> = pdfs.into();
        let inputs = inputs.into_vec();
        let tasks = inputs.iter().map(|pdf| {
            let run_opts = &run_opts;
            async move {
                let pdf = pdf.materialize()?;
                let result = tools::pdfinfo(pdf.path(), options, run_opts).await?;
                let info = parse_pdfinfo_output(&result.stdout);
                Ok::<_, XpdfError>(PdfInfoResult { result, info })
            }
        });
        Ok(OneOrMany::collapse(try_join_all(tasks).await?))
    }

    /// List fonts used in one or many PDFs.
    pub async fn pdf_fonts(
        &self,
        pdfs: impl Into<OneOrMany<PdfInput>>,
        options: &PdffontsOptions,
        run_opts: Option<&RunOptions>,
    ) -> Result<OneOrMany<PdfFontsResult>, XpdfError> {
        let run_opts = self.merge_run_options(run_opts);
        let inputs: OneOrMany<PdfInput> = pdfs.into();
        let inputs = inputs.into_vec();
        let tasks = inputs.iter().map(|pdf| {
            let run_opts = &run_opts;
            async move {
                let pdf = pdf.materialize()?;
                let result = tools::pdffonts(pdf.path(), options, run_opts).await?;
                let fonts = parse_pdffonts_output(&result.stdout);
                Ok::<_, XpdfError>(PdfFontsResult { result, fonts })
            }
        });
        Ok(OneOrMany::collapse(try_join_all(tasks).await?))
    }

    /// List or extract embedded files. Defaults to listing unless a save
    /// option is set; an explicit `list` always wins.
    pub async fn pdf_detach(
        &self,
        pdfs: impl Into<OneOrMany<PdfInput>>,
        options: &PdfdetachOptions,
        run_opts: Option<&RunOptions>,
    ) -> Result<OneOrMany<PdfDetachResult>, XpdfError> {
        let run_opts = self.merge_run_options(run_opts);
        let should_list = options
            .list
            .unwrap_or(!options.save_all && options.save.is_none());
        let mut effective = options.clone();
        effective.list = Some(should_list);

        let inputs: OneOrMany<PdfInput> = pdfs.into();
        let inputs = inputs.into_vec();
        let tasks = inputs.iter().map(|pdf| {
            let run_opts = &run_opts;
            let effective = &effective;
            async move {
                let pdf = pdf.materialize()?;
                let result = tools::pdfdetach(pdf.path(), effective, run_opts).await?;
                let entries = should_list.then(|| parse_pdfdetach_output(&result.stdout));
                Ok::<_, XpdfError>(PdfDetachResult { result, entries })
            }
        });
        Ok(OneOrMany::collapse(try_join_all(tasks).await?))
    }

    /// List or extract embedded images; listing is the default.
    pub async fn pdf_images(
        &self,
        pdfs: impl Into<OneOrMany<PdfInput>>,
        options: &PdfImagesOptions,
        run_opts: Option<&RunOptions>,
    ) -> Result<OneOrMany<RunResult>, XpdfError> {
        let run_opts = self.merge_run_options(run_opts);
        let mut effective = options.tool.clone();
        effective.list = Some(effective.list.unwrap_or(true));

        let inputs: OneOrMany<PdfInput> = pdfs.into();
        let inputs = inputs.into_vec();
        let tasks = inputs.iter().enumerate().map(|(index, pdf)| {
            let run_opts = &run_opts;
            let effective = &effective;
            let root = select_output(&options.output_root, index);
            async move {
                let pdf = pdf.materialize()?;
                tools::pdfimages(pdf.path(), root.as_deref(), effective, run_opts).await
            }
        });
        Ok(OneOrMany::collapse(try_join_all(tasks).await?))
    }

    /// Extract text from one or many PDFs.
    pub async fn pdf_to_text(
        &self,
        pdfs: impl Into<OneOrMany<PdfInput>>,
        options: &PdfToTextOptions,
        run_opts: Option<&RunOptions>,
    ) -> Result<OneOrMany<RunResult>, XpdfError> {
        let run_opts = self.merge_run_options(run_opts);
        let inputs: OneOrMany<PdfInput> = pdfs.into();
        let inputs = inputs.into_vec();
        let tasks = inputs.iter().enumerate().map(|(index, pdf)| {
            let run_opts = &run_opts;
            let output = select_output(&options.output, index);
            async move {
                let pdf = pdf.materialize()?;
                tools::pdftotext(pdf.path(), output.as_deref(), &options.tool, run_opts).await
            }
        });
        Ok(OneOrMany::collapse(try_join_all(tasks).await?))
    }

    /// Convert to PostScript.
    pub async fn pdf_to_ps(
        &self,
        pdfs: impl Into<OneOrMany<PdfInput>>,
        options: &PdfToPsOptions,
        run_opts: Option<&RunOptions>,
    ) -> Result<OneOrMany<RunResult>, XpdfError> {
        let run_opts = self.merge_run_options(run_opts);
        let inputs: OneOrMany<PdfInput> = pdfs.into();
        let inputs = inputs.into_vec();
        let tasks = inputs.iter().enumerate().map(|(index, pdf)| {
            let run_opts = &run_opts;
            let output = select_output(&options.output, index);
            async move {
                let pdf = pdf.materialize()?;
                tools::pdftops(pdf.path(), output.as_deref(), &options.tool, run_opts).await
            }
        });
        Ok(OneOrMany::collapse(try_join_all(tasks).await?))
    }

    /// Rasterize to PPM images.
    pub async fn pdf_to_ppm(
        &self,
        pdfs: impl Into<OneOrMany<PdfInput>>,
        options: &PdfToPpmOptions,
        run_opts: Option<&RunOptions>,
    ) -> Result<OneOrMany<RunResult>, XpdfError> {
        let run_opts = self.merge_run_options(run_opts);
        let inputs: OneOrMany<PdfInput> = pdfs.into();
        let inputs = inputs.into_vec();
        let tasks = inputs.iter().enumerate().map(|(index, pdf)| {
            let run_opts = &run_opts;
            let root = select_output(&options.output_root, index);
            async move {
                let pdf = pdf.materialize()?;
                tools::pdftoppm(pdf.path(), root.as_deref(), &options.tool, run_opts).await
            }
        });
        Ok(OneOrMany::collapse(try_join_all(tasks).await?))
    }

    /// Rasterize to PNG images.
    pub async fn pdf_to_png(
        &self,
        pdfs: impl Into<OneOrMany<PdfInput>>,
        options: &PdfToPngOptions,
        run_opts: Option<&RunOptions>,
    ) -> Result<OneOrMany<RunResult>, XpdfError> {
        let run_opts = self.merge_run_options(run_opts);
        let inputs: OneOrMany<PdfInput> = pdfs.into();
        let inputs = inputs.into_vec();
        let tasks = inputs.iter().enumerate().map(|(index, pdf)| {
            let run_opts = &run_opts;
            let root = select_output(&options.output_root, index);
            async move {
                let pdf = pdf.materialize()?;
                tools::pdftopng(pdf.path(), root.as_deref(), &options.tool, run_opts).await
            }
        });
        Ok(OneOrMany::collapse(try_join_all(tasks).await?))
    }

    /// Convert to HTML.
    pub async fn pdf_to_html(
        &self,
        pdfs: impl Into<OneOrMany<PdfInput>>,
        options: &PdfToHtmlOptions,
        run_opts: Option<&RunOptions>,
    ) -> Result<OneOrMany<RunResult>, XpdfError> {
        let run_opts = self.merge_run_options(run_opts);
        let inputs: OneOrMany<PdfInput> = pdfs.into();
        let inputs = inputs.into_vec();
        let tasks = inputs.iter().enumerate().map(|(index, pdf)| {
            let run_opts = &run_opts;
            let dir = select_output(&options.output_dir, index);
            async move {
                let pdf = pdf.materialize()?;
                tools::pdftohtml(pdf.path(), dir.as_deref(), &options.tool, run_opts).await
            }
        });
        Ok(OneOrMany::collapse(try_join_all(tasks).await?))
    }

    /// Run several methods against the same input set in one call. Methods
    /// run concurrently; any failure aborts the whole batch.
    pub async fn batch(
        &self,
        pdfs: impl Into<OneOrMany<PdfInput>>,
        methods: &[BatchMethod],
        options: &BatchOptions,
        run_opts: Option<&RunOptions>,
    ) -> Result<BatchResult, XpdfError> {
        let inputs: OneOrMany<PdfInput> = pdfs.into();
        let tasks = methods.iter().map(|&method| {
            let inputs = inputs.clone();
            async move {
                Ok::<_, XpdfError>(match method {
                    BatchMethod::PdfInfo => {
                        BatchItem::Info(self.pdf_info(inputs, &options.pdf_info, run_opts).await?)
                    }
                    BatchMethod::PdfFonts => BatchItem::Fonts(
                        self.pdf_fonts(inputs, &options.pdf_fonts, run_opts).await?,
                    ),
                    BatchMethod::PdfDetach => BatchItem::Detach(
                        self.pdf_detach(inputs, &options.pdf_detach, run_opts)
                            .await?,
                    ),
                    BatchMethod::PdfImages => BatchItem::Images(
                        self.pdf_images(inputs, &options.pdf_images, run_opts)
                            .await?,
                    ),
                    BatchMethod::PdfToText => BatchItem::ToText(
                        self.pdf_to_text(inputs, &options.pdf_to_text, run_opts)
                            .await?,
                    ),
                    BatchMethod::PdfToPs => BatchItem::ToPs(
                        self.pdf_to_ps(inputs, &options.pdf_to_ps, run_opts).await?,
                    ),
                    BatchMethod::PdfToPpm => BatchItem::ToPpm(
                        self.pdf_to_ppm(inputs, &options.pdf_to_ppm, run_opts)
                            .await?,
                    ),
                    BatchMethod::PdfToPng => BatchItem::ToPng(
                        self.pdf_to_png(inputs, &options.pdf_to_png, run_opts)
                            .await?,
                    ),
                    BatchMethod::PdfToHtml => BatchItem::ToHtml(
                        self.pdf_to_html(inputs, &options.pdf_to_html, run_opts)
                            .await?,
                    ),
                })
            }
        });

        let mut out = BatchResult::default();
        for item in try_join_all(tasks).await? {
            match item {
                BatchItem::Info(v) => out.pdf_info = Some(v),
                BatchItem::Fonts(v) => out.pdf_fonts = Some(v),
                BatchItem::Detach(v) => out.pdf_detach = Some(v),
                BatchItem::Images(v) => out.pdf_images = Some(v),
                BatchItem::ToText(v) => out.pdf_to_text = Some(v),
                BatchItem::ToPs(v) => out.pdf_to_ps = Some(v),
                BatchItem::ToPpm(v) => out.pdf_to_ppm = Some(v),
                BatchItem::ToPng(v) => out.pdf_to_png = Some(v),
                BatchItem::ToHtml(v) => out.pdf_to_html = Some(v),
            }
        }
        Ok(out)
    }
}

fn select_output(output: &Option<OneOrMany<PathBuf>>, index: usize) -> Option<PathBuf> {
    output.as_ref().and_then(|o| o.select(index)).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_call_options_override_config_defaults() {
        let client = Xpdf::new(XpdfConfig {
            run: RunOptions {
                timeout: Some(Duration::from_secs(10)),
                ..Default::default()
            },
            ..Default::default()
        });
        let over = RunOptions {
            timeout: Some(Duration::from_secs(1)),
            ..Default::default()
        };
        let merged = client.merge_run_options(Some(&over));
        assert_eq!(merged.timeout, Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_config_bin_dir_feeds_soft_tier() {
        let client = Xpdf::new(XpdfConfig {
            bin_dir: Some(PathBuf::from("/opt/xpdf/bin")),
            ..Default::default()
        });
        let merged = client.merge_run_options(None);
        assert_eq!(merged.bin_dir, None);
        assert_eq!(
            merged.config_bin_dir,
            Some(PathBuf::from("/opt/xpdf/bin"))
        );
    }

    #[test]
    fn test_explicit_call_bin_dir_kept_as_hard_tier() {
        let client = Xpdf::new(XpdfConfig {
            bin_dir: Some(PathBuf::from("/opt/xpdf/bin")),
            ..Default::default()
        });
        let over = RunOptions {
            bin_dir: Some(PathBuf::from("/per/call")),
            ..Default::default()
        };
        let merged = client.merge_run_options(Some(&over));
        assert_eq!(merged.bin_dir, Some(PathBuf::from("/per/call")));
        assert_eq!(
            merged.config_bin_dir,
            Some(PathBuf::from("/opt/xpdf/bin"))
        );
    }

    #[test]
    fn test_base_fields_survive_when_not_overridden() {
        let client = Xpdf::new(XpdfConfig {
            use_system: Some(true),
            run: RunOptions {
                timeout: Some(Duration::from_secs(30)),
                ..Default::default()
            },
            ..Default::default()
        });
        let merged = client.merge_run_options(None);
        assert_eq!(merged.timeout, Some(Duration::from_secs(30)));
        assert_eq!(merged.use_system, Some(true));
    }
}
