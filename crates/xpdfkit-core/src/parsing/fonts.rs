use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// One row of the `pdffonts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PdfFontRow {
    pub name: String,
    pub font_type: Option<String>,
    pub encoding: Option<String>,
    /// "yes"/"no" embedded marker, as printed.
    pub embedded: Option<String>,
    pub subset: Option<String>,
    pub unicode: Option<String>,
    /// PDF object identifier, e.g. `"3 0"`.
    pub object_id: Option<String>,
}

static FIELD_GAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Parse the `pdffonts` table.
///
/// Skips blank lines and any banner before the column-header line (detected
/// case-insensitively by its leading `name` column) and the dashed separator
/// under it. Data lines split on runs of two or more spaces into the six
/// named columns; whatever tokens remain rejoin with single spaces as the
/// object identifier.
pub fn parse_pdffonts_output(stdout: &str) -> Vec<PdfFontRow> {
    let mut rows = Vec::new();
    let mut in_data = false;

    for line in stdout.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !in_data {
            if line.to_lowercase().starts_with("name") {
                in_data = true;
            }
            continue;
        }
        if line.chars().all(|c| c == '-' || c.is_whitespace()) {
            continue;
        }

        let mut fields = FIELD_GAP.split(line);
        let name = match fields.next() {
            Some(name) => name.to_string(),
            None => continue,
        };
        let mut take = || fields.next().map(str::to_string);
        let font_type = take();
        let encoding = take();
        let embedded = take();
        let subset = take();
        let unicode = take();
        let rest: Vec<&str> = fields.collect();
        rows.push(PdfFontRow {
            name,
            font_type,
            encoding,
            embedded,
            subset,
            unicode,
            object_id: if rest.is_empty() {
                None
            } else {
                Some(rest.join(" "))
            },
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row_with_object_id() {
        let stdout =
            "name  type  encoding  emb  sub  uni  object ID\n------\nF1  Type1  WinAnsi  yes  no  yes  3 0";
        let rows = parse_pdffonts_output(stdout);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.name, "F1");
        assert_eq!(row.font_type.as_deref(), Some("Type1"));
        assert_eq!(row.encoding.as_deref(), Some("WinAnsi"));
        assert_eq!(row.embedded.as_deref(), Some("yes"));
        assert_eq!(row.subset.as_deref(), Some("no"));
        assert_eq!(row.unicode.as_deref(), Some("yes"));
        assert_eq!(row.object_id.as_deref(), Some("3 0"));
    }

    #[test]
    fn test_banner_and_blank_lines_skipped() {
        let stdout = "\npdffonts version 4.05\nCopyright 1996-2024\n\nname   type\n-----  ----\nHelvetica  Type1\n";
        let rows = parse_pdffonts_output(stdout);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Helvetica");
        assert_eq!(rows[0].font_type.as_deref(), Some("Type1"));
        assert_eq!(rows[0].object_id, None);
    }

    #[test]
    fn test_name_with_single_spaces_stays_whole() {
        let stdout = "name  type\n----\nTimes New Roman  TrueType";
        let rows = parse_pdffonts_output(stdout);
        assert_eq!(rows[0].name, "Times New Roman");
    }

    #[test]
    fn test_empty_and_headerless_input_yield_nothing() {
        assert!(parse_pdffonts_output("").is_empty());
        assert!(parse_pdffonts_output("no table here\njust noise").is_empty());
    }
}
