use crate::error::CliError;
use clap::ValueEnum;
use std::path::PathBuf;
use xpdfkit_core::client::{
    PdfToHtmlOptions, PdfToPngOptions, PdfToPpmOptions, PdfToPsOptions,
};
use xpdfkit_core::tools::{PdftoppmOptions, PdftopngOptions};
use xpdfkit_core::{OneOrMany, RunOptions, RunResult, Xpdf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Ppm,
    Png,
    Ps,
    Html,
}

pub async fn run(
    xpdf: &Xpdf,
    pdf: PathBuf,
    to: Format,
    out: Option<PathBuf>,
    resolution: Option<u32>,
    run_opts: &RunOptions,
) -> Result<(), CliError> {
    let output = out.map(OneOrMany::One);
    let result = match to {
        Format::Ppm => {
            let options = PdfToPpmOptions {
                tool: PdftoppmOptions {
                    resolution,
                    ..Default::default()
                },
                output_root: output,
            };
            xpdf.pdf_to_ppm(pdf, &options, Some(run_opts)).await?
        }
        Format::Png => {
            let options = PdfToPngOptions {
                tool: PdftopngOptions {
                    raster: PdftoppmOptions {
                        resolution,
                        ..Default::default()
                    },
                    ..Default::default()
                },
                output_root: output,
            };
            xpdf.pdf_to_png(pdf, &options, Some(run_opts)).await?
        }
        Format::Ps => {
            let options = PdfToPsOptions {
                output,
                ..Default::default()
            };
            xpdf.pdf_to_ps(pdf, &options, Some(run_opts)).await?
        }
        Format::Html => {
            let options = PdfToHtmlOptions {
                output_dir: output,
                ..Default::default()
            };
            xpdf.pdf_to_html(pdf, &options, Some(run_opts)).await?
        }
    };

    if let OneOrMany::One(run) = result {
        report(&run);
    }
    Ok(())
}

fn report(run: &RunResult) {
    if run.exit_code != 0 {
        eprint!("{}", run.stderr);
        std::process::exit(run.exit_code.clamp(1, 255));
    }
    eprintln!(
        "{} finished in {} ms",
        run.command.display(),
        run.duration.as_millis()
    );
}
