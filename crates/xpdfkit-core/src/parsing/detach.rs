use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// One attachment reported by `pdfdetach -list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PdfDetachEntry {
    pub name: String,
    /// Size in bytes when the tool reports one.
    pub size: Option<u64>,
}

static ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*\d+:\s+(.+?)(?:\s+\((\d+)\s+bytes\))?\s*$").unwrap());

/// Parse `pdfdetach -list` output: lines of the form `<index>: <name>`,
/// optionally followed by `(<N> bytes)`. Anything else (banner, blanks,
/// the attachment count line) is ignored.
pub fn parse_pdfdetach_output(stdout: &str) -> Vec<PdfDetachEntry> {
    stdout
        .lines()
        .filter_map(|line| {
            let caps = ENTRY.captures(line)?;
            Some(PdfDetachEntry {
                name: caps[1].to_string(),
                size: caps.get(2).and_then(|m| m.as_str().parse().ok()),
            })
        })
        .collect()
}
