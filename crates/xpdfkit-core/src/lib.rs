//! Typed, future-based wrappers around the Xpdf command-line tools.
//!
//! The crate locates the right binary (explicit directory, environment,
//! bundled set, or system `PATH`), builds each tool's argument vector from a
//! typed options struct, executes the process with timeout control, and for
//! the introspection tools parses stdout into structured data. PDFs can be
//! given as paths or as in-memory bytes; buffers are materialized to a
//! temporary file for the duration of the call.
//!
//! ```no_run
//! use xpdfkit_core::{OneOrMany, Xpdf, XpdfConfig};
//!
//! # async fn demo() -> Result<(), xpdfkit_core::XpdfError> {
//! let xpdf = Xpdf::new(XpdfConfig::default());
//! let info = xpdf
//!     .pdf_info("fixtures/sample.pdf", &Default::default(), None)
//!     .await?;
//! if let OneOrMany::One(doc) = info {
//!     println!("{:?} pages", doc.info.get("Pages"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod exec;
pub mod input;
pub mod one_or_many;
pub mod parsing;
pub mod tool;
pub mod tools;

pub use client::{BatchMethod, BatchOptions, BatchResult, Xpdf, XpdfConfig};
pub use error::XpdfError;
pub use exec::resolve::{default_bundled_dir, list_tools, resolve_binary_path, ResolveOptions};
pub use exec::run::{run, run_sync, KillSignal, OutputEncoding, RunOptions, RunResult, StdioMode};
pub use input::{with_pdf_path, MaterializedPdf, PdfInput};
pub use one_or_many::OneOrMany;
pub use tool::ToolName;
