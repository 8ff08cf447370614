use markbook_core::extraction::pdftotext::PdftotextExtractor;
use markbook_core::model::{DocumentKind, SourceDocument};
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), markbook_core::error::MarkbookError> {
    let bytes = std::fs::read(&input_file)?;
    let document = SourceDocument {
        name: document_label(&input_file),
        kind: DocumentKind::from_path(&input_file),
        bytes,
    };

    let extractor = PdftotextExtractor::new();
    let parsed = markbook_core::extract_document(&document, &extractor)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&parsed)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} record(s) from {}, written to {}",
                parsed.sheet.records.len(),
                parsed.sheet.source,
                path.display()
            );
            if !parsed.skipped_lines.is_empty() {
                eprintln!(
                    "  {} line(s) skipped during extraction",
                    parsed.skipped_lines.len()
                );
            }
        }
        None => match output_format {
            "json" => println!("{}", serde_json::to_string_pretty(&parsed)?),
            _ => print!("{}", output::table::format_parsed(&parsed)),
        },
    }

    Ok(())
}

/// File name component used as the sheet's source label.
pub fn document_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
