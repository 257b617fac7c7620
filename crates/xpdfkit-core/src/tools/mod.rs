//! One thin wrapper per Xpdf tool.
//!
//! Every invoker builds its argument vector the same way: common page-range
//! and password flags, the tool's own flags in a fixed order, the caller's
//! passthrough arguments, then the input path and (for conversion tools) an
//! optional output destination. Validation beyond the option types is left
//! to the tool itself.

pub mod common;
pub mod pdfdetach;
pub mod pdffonts;
pub mod pdfimages;
pub mod pdfinfo;
pub mod pdftohtml;
pub mod pdftoppm;
pub mod pdftopng;
pub mod pdftops;
pub mod pdftotext;

pub use common::CommonOptions;
pub use pdfdetach::{pdfdetach, PdfdetachOptions};
pub use pdffonts::{pdffonts, PdffontsOptions};
pub use pdfimages::{pdfimages, PdfimagesOptions};
pub use pdfinfo::{pdfinfo, PdfinfoOptions};
pub use pdftohtml::{pdftohtml, PdftohtmlOptions};
pub use pdftoppm::{pdftoppm, PdftoppmOptions};
pub use pdftopng::{pdftopng, PdftopngOptions};
pub use pdftops::{pdftops, PdftopsOptions};
pub use pdftotext::{pdftotext, Eol, PdftotextOptions};
