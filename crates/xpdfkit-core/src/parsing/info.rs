use std::collections::HashMap;

/// Parse `pdfinfo` output into a key → value mapping.
///
/// Each line splits at its first colon; both sides are trimmed, empty keys
/// are dropped, and colon-less lines are ignored. A key printed twice keeps
/// its last value.
pub fn parse_pdfinfo_output(stdout: &str) -> HashMap<String, String> {
    let mut info = HashMap::new();
    for line in stdout.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        info.insert(key.to_string(), value.trim().to_string());
    }
    info
}
