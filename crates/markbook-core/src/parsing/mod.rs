pub mod values;

use crate::extraction::PageContent;
use crate::model::{MarkRecord, MarkSheet};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use values::{correct_artifact, parse_mark};

/// Line pattern for a marksheet data row: an optional registration number
/// (digits and hyphens), a name segment containing no digits, and a mark
/// anchored to the end of the line.
static LINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d[\d-]*)?\s*([^\d\n]+?)\s+([\d.]+)$").expect("valid pattern"));

/// Banner/footer fragments that disqualify a line before pattern matching.
const NOISE_MARKERS: &[&str] = &["Academic Year"];

/// A line that looked like a data row but could not be turned into a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedLine {
    pub line_text: String,
    pub reason: String,
}

/// Extraction output for one source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedSheet {
    pub sheet: MarkSheet,
    /// Near-miss lines, kept for diagnostics. Lines that never resembled a
    /// data row (titles, headers, blanks) are not recorded.
    pub skipped_lines: Vec<SkippedLine>,
}

/// Extract mark records from a document's text content.
///
/// Pages are processed in order, lines top-to-bottom. Extraction never fails
/// on malformed text; a document yielding zero records is valid output.
pub fn parse_sheet(pages: &[PageContent], source: &str) -> ParsedSheet {
    let mut records = Vec::new();
    let mut skipped_lines = Vec::new();

    for page in pages {
        for line in &page.lines {
            let line = line.trim();
            if line.is_empty() || is_noise_line(line) {
                continue;
            }

            let Some(caps) = LINE_PATTERN.captures(line) else {
                continue;
            };

            let reg_number = caps.get(1).map(|m| m.as_str().to_string());
            let student_name = caps[2].trim().to_string();

            match parse_mark(&caps[3]) {
                Ok(mark) => records.push(MarkRecord {
                    reg_number,
                    student_name,
                    mark: correct_artifact(mark),
                }),
                Err(_) => skipped_lines.push(SkippedLine {
                    line_text: line.to_string(),
                    reason: "trailing token is not a valid number".into(),
                }),
            }
        }
    }

    ParsedSheet {
        sheet: MarkSheet {
            source: source.to_string(),
            records,
        },
        skipped_lines,
    }
}

fn is_noise_line(line: &str) -> bool {
    NOISE_MARKERS.iter().any(|marker| line.contains(marker))
}
