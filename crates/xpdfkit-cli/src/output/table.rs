use xpdfkit_core::client::{PdfDetachResult, PdfFontsResult, PdfInfoResult};

pub fn print_info(doc: &PdfInfoResult) {
    let mut keys: Vec<&String> = doc.info.keys().collect();
    keys.sort();
    let width = keys.iter().map(|k| k.len()).max().unwrap_or(0);
    for key in keys {
        println!("{key:<width$}  {}", doc.info[key]);
    }
    if doc.result.exit_code != 0 {
        eprintln!(
            "warning: pdfinfo exited with {}: {}",
            doc.result.exit_code,
            doc.result.stderr.trim()
        );
    }
    println!();
}

pub fn print_fonts(doc: &PdfFontsResult) {
    if doc.fonts.is_empty() {
        println!("(no fonts reported)");
        return;
    }
    println!(
        "{:<32} {:<14} {:<12} {:<4} {:<4} {:<4} {}",
        "name", "type", "encoding", "emb", "sub", "uni", "object"
    );
    for font in &doc.fonts {
        println!(
            "{:<32} {:<14} {:<12} {:<4} {:<4} {:<4} {}",
            font.name,
            font.font_type.as_deref().unwrap_or("-"),
            font.encoding.as_deref().unwrap_or("-"),
            font.embedded.as_deref().unwrap_or("-"),
            font.subset.as_deref().unwrap_or("-"),
            font.unicode.as_deref().unwrap_or("-"),
            font.object_id.as_deref().unwrap_or("-"),
        );
    }
    println!();
}

pub fn print_attachments(doc: &PdfDetachResult) {
    match &doc.entries {
        Some(entries) if !entries.is_empty() => {
            for entry in entries {
                match entry.size {
                    Some(size) => println!("{}  ({size} bytes)", entry.name),
                    None => println!("{}", entry.name),
                }
            }
        }
        Some(_) => println!("(no attachments)"),
        // Save mode: the tool already wrote the files; relay its output.
        None => print!("{}", doc.result.stdout),
    }
    println!();
}
