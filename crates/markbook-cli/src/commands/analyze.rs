use markbook_core::config::schema::AnalysisConfig;
use markbook_core::error::MarkbookError;
use markbook_core::extraction::pdftotext::PdftotextExtractor;
use markbook_core::model::{DocumentKind, SourceDocument};
use markbook_core::report;
use rust_decimal::Decimal;
use std::fs::File;
use std::path::PathBuf;

use crate::commands::extract::document_label;
use crate::output;

pub fn run(
    input_files: Vec<PathBuf>,
    max_marks: Vec<Decimal>,
    config_file: Option<PathBuf>,
    output_format: &str,
    csv_file: Option<PathBuf>,
    top: usize,
) -> Result<(), MarkbookError> {
    let config = resolve_config(config_file, max_marks)?;

    let mut documents = Vec::new();
    for path in &input_files {
        let bytes = std::fs::read(path)?;
        documents.push(SourceDocument {
            name: document_label(path),
            kind: DocumentKind::from_path(path),
            bytes,
        });
    }

    let extractor = PdftotextExtractor::new();
    let analysis = markbook_core::analyze(&documents, &extractor, &config)?;
    let summary = report::summarize(&analysis.table, top);

    if let Some(path) = &csv_file {
        let file = File::create(path)?;
        report::csv::write_csv(&analysis.table, file)?;
        eprintln!("Result table written to {}", path.display());
    }

    match output_format {
        "json" => output::json::print(&analysis, &summary)?,
        _ => output::table::print(&config, &analysis, &summary),
    }

    Ok(())
}

/// Combine a config file (if any) with command-line max marks. Flags win
/// when both supply max marks.
fn resolve_config(
    config_file: Option<PathBuf>,
    max_marks: Vec<Decimal>,
) -> Result<AnalysisConfig, MarkbookError> {
    match config_file {
        Some(path) => {
            let mut config = markbook_core::config::load_config(&path)?;
            if !max_marks.is_empty() {
                config.max_marks = max_marks;
            }
            Ok(config)
        }
        None => Ok(AnalysisConfig::with_max_marks(max_marks)),
    }
}
