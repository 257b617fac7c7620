use crate::error::XpdfError;
use std::fmt;
use std::str::FromStr;

/// The nine Xpdf command-line tools this crate wraps.
///
/// Each variant maps to exactly one executable name; the resolver uses this
/// as its lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolName {
    Pdftotext,
    Pdftops,
    Pdftoppm,
    Pdftopng,
    Pdftohtml,
    Pdfinfo,
    Pdfimages,
    Pdffonts,
    Pdfdetach,
}

impl ToolName {
    pub const ALL: [ToolName; 9] = [
        ToolName::Pdftotext,
        ToolName::Pdftops,
        ToolName::Pdftoppm,
        ToolName::Pdftopng,
        ToolName::Pdftohtml,
        ToolName::Pdfinfo,
        ToolName::Pdfimages,
        ToolName::Pdffonts,
        ToolName::Pdfdetach,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::Pdftotext => "pdftotext",
            ToolName::Pdftops => "pdftops",
            ToolName::Pdftoppm => "pdftoppm",
            ToolName::Pdftopng => "pdftopng",
            ToolName::Pdftohtml => "pdftohtml",
            ToolName::Pdfinfo => "pdfinfo",
            ToolName::Pdfimages => "pdfimages",
            ToolName::Pdffonts => "pdffonts",
            ToolName::Pdfdetach => "pdfdetach",
        }
    }

    /// Executable file name on the current platform.
    pub fn executable_name(&self) -> String {
        if cfg!(windows) {
            format!("{}.exe", self.as_str())
        } else {
            self.as_str().to_string()
        }
    }

    /// Check whether this tool can be resolved with default settings.
    pub fn is_available(&self) -> bool {
        crate::exec::resolve::resolve_binary_path(*self, &Default::default()).is_ok()
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = XpdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| XpdfError::UnknownTool(s.to_string()))
    }
}
