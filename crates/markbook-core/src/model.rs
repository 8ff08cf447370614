use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Displayed in place of a registration number when the source line had none.
pub const UNKNOWN_REG: &str = "N/A";

/// One student's result extracted from a single marksheet line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkRecord {
    /// Registration number as printed on the sheet, if present.
    pub reg_number: Option<String>,
    /// Student name, trimmed of surrounding whitespace.
    pub student_name: String,
    /// Non-negative mark value.
    pub mark: Decimal,
}

impl MarkRecord {
    pub fn reg_display(&self) -> &str {
        self.reg_number.as_deref().unwrap_or(UNKNOWN_REG)
    }
}

/// All records extracted from one source document, in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkSheet {
    /// Label identifying the source document (usually the file name).
    pub source: String,
    pub records: Vec<MarkRecord>,
}

/// Performance band derived from a student's percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Excellent,
    Good,
    Fair,
    Weak,
}

impl Category {
    /// Bands ordered best to worst, as rendered in summaries.
    pub const ALL: [Category; 4] = [
        Category::Excellent,
        Category::Good,
        Category::Fair,
        Category::Weak,
    ];

    /// Band thresholds are inclusive on the lower bound.
    pub fn from_percentage(percentage: Decimal) -> Category {
        if percentage >= Decimal::from(80) {
            Category::Excellent
        } else if percentage >= Decimal::from(65) {
            Category::Good
        } else if percentage >= Decimal::from(50) {
            Category::Fair
        } else {
            Category::Weak
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Excellent => write!(f, "Excellent"),
            Category::Good => write!(f, "Good"),
            Category::Fair => write!(f, "Fair"),
            Category::Weak => write!(f, "Weak"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Xlsx,
}

impl DocumentKind {
    /// Guess the document kind from a file extension. Anything that is not
    /// an xlsx is treated as a PDF.
    pub fn from_path(path: &Path) -> DocumentKind {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("xlsx") => DocumentKind::Xlsx,
            _ => DocumentKind::Pdf,
        }
    }
}

/// An uploaded marksheet awaiting extraction.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub name: String,
    pub kind: DocumentKind,
    pub bytes: Vec<u8>,
}
