mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use xpdfkit_core::{RunOptions, Xpdf, XpdfConfig};

#[derive(Parser)]
#[command(
    name = "xpdfkit",
    version,
    about = "Inspect and convert PDFs with the Xpdf command-line tools"
)]
struct Cli {
    /// Directory containing the Xpdf binaries (a tool missing here is an error)
    #[arg(long, global = true, value_name = "DIR")]
    bin_dir: Option<PathBuf>,

    /// Prefer binaries found on the system PATH over the bundled set
    #[arg(long, global = true)]
    use_system: bool,

    /// Kill a tool that runs longer than this many milliseconds
    #[arg(long, global = true, value_name = "MS")]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show document metadata
    Info {
        /// PDF file(s)
        #[arg(required = true)]
        pdfs: Vec<PathBuf>,

        /// Print dates as stored in the file, unconverted
        #[arg(long)]
        raw_dates: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// List the fonts a document uses
    Fonts {
        #[arg(required = true)]
        pdfs: Vec<PathBuf>,

        /// Report the substitute fonts that would actually be used
        #[arg(long)]
        subst: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// List or extract embedded files
    Attachments {
        #[arg(required = true)]
        pdfs: Vec<PathBuf>,

        /// Save every attachment instead of listing
        #[arg(long)]
        save_all: bool,

        /// Destination path for saved attachments
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short = 'o', long, default_value = "table")]
        output: String,
    },
    /// Extract text to stdout or a file
    Text {
        pdf: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short = 'O', long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Preserve the physical page layout
        #[arg(long)]
        layout: bool,

        /// First page to extract
        #[arg(short, long, value_name = "N")]
        first_page: Option<u32>,

        /// Last page to extract
        #[arg(short, long, value_name = "N")]
        last_page: Option<u32>,
    },
    /// Convert a PDF to another format
    Convert {
        pdf: PathBuf,

        /// Target format: ppm, png, ps or html
        #[arg(long, value_name = "FORMAT")]
        to: commands::convert::Format,

        /// Output file or root name (the tool's default when omitted)
        #[arg(short = 'O', long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Rasterization resolution in DPI (ppm/png only)
        #[arg(short, long, value_name = "DPI")]
        resolution: Option<u32>,
    },
    /// Invoke a tool directly with raw arguments
    Run {
        /// Tool name, e.g. pdftotext
        tool: String,

        /// Arguments passed through verbatim
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Show where each tool resolves
    Tools,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let run_opts = RunOptions {
        bin_dir: cli.bin_dir.clone(),
        use_system: cli.use_system.then_some(true),
        timeout: cli.timeout_ms.map(Duration::from_millis),
        ..Default::default()
    };
    let xpdf = Xpdf::new(XpdfConfig::default());

    let result = match cli.command {
        Commands::Info {
            pdfs,
            raw_dates,
            output,
        } => commands::info::run(&xpdf, pdfs, raw_dates, &output, &run_opts).await,
        Commands::Fonts {
            pdfs,
            subst,
            output,
        } => commands::fonts::run(&xpdf, pdfs, subst, &output, &run_opts).await,
        Commands::Attachments {
            pdfs,
            save_all,
            out,
            output,
        } => commands::attachments::run(&xpdf, pdfs, save_all, out, &output, &run_opts).await,
        Commands::Text {
            pdf,
            out,
            layout,
            first_page,
            last_page,
        } => commands::text::run(&xpdf, pdf, out, layout, first_page, last_page, &run_opts).await,
        Commands::Convert {
            pdf,
            to,
            out,
            resolution,
        } => commands::convert::run(&xpdf, pdf, to, out, resolution, &run_opts).await,
        Commands::Run { tool, args } => commands::run_tool::run(&xpdf, &tool, args, &run_opts).await,
        Commands::Tools => commands::tools::run(&run_opts),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
