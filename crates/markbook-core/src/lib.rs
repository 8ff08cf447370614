pub mod aggregate;
pub mod config;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod report;

use aggregate::outcome::{DuplicateRecord, ResultTable};
use config::schema::AnalysisConfig;
use error::MarkbookError;
use extraction::PdfExtractor;
use model::{DocumentKind, SourceDocument};
use parsing::{ParsedSheet, SkippedLine};
use serde::{Deserialize, Serialize};

/// Result of one analysis run: the merged table plus extraction and merge
/// diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub table: ResultTable,
    /// Near-miss lines skipped during extraction, across all documents.
    pub skipped_lines: Vec<SkippedLine>,
    /// In-document duplicate records dropped during the merge.
    pub duplicates: Vec<DuplicateRecord>,
}

/// Main API entry point: extract every document and merge the results into
/// a single table.
///
/// One extraction pass per document, one merge+compute pass over all of
/// them. Document-level failures (unreadable PDF, missing poppler) abort
/// the whole run; unparseable lines within a document do not.
pub fn analyze(
    documents: &[SourceDocument],
    extractor: &dyn PdfExtractor,
    config: &AnalysisConfig,
) -> Result<Analysis, MarkbookError> {
    let mut sheets = Vec::new();
    let mut skipped_lines = Vec::new();

    for document in documents {
        let parsed = extract_document(document, extractor)?;
        sheets.push(parsed.sheet);
        skipped_lines.extend(parsed.skipped_lines);
    }

    let aggregation = aggregate::aggregate(&sheets, &config.max_marks)?;

    Ok(Analysis {
        table: aggregation.table,
        skipped_lines,
        duplicates: aggregation.duplicates,
    })
}

/// Extract a single document into a mark sheet without aggregating.
pub fn extract_document(
    document: &SourceDocument,
    extractor: &dyn PdfExtractor,
) -> Result<ParsedSheet, MarkbookError> {
    match document.kind {
        DocumentKind::Pdf => {
            let pages = extractor.extract_pages(&document.bytes)?;
            Ok(parsing::parse_sheet(&pages, &document.name))
        }
        DocumentKind::Xlsx => extraction::xlsx::parse_xlsx_sheet(&document.bytes, &document.name),
    }
}
