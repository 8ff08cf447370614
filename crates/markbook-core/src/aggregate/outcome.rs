use crate::model::{Category, UNKNOWN_REG};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One student's merged result across all input documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRow {
    /// Registration number, if any document carried one for this student.
    pub reg_number: Option<String>,
    pub student_name: String,
    /// One mark per input document, positionally aligned with the document
    /// order. 0 where the student was absent from that document.
    pub marks: Vec<Decimal>,
    /// Mean of (mark / max mark) across all documents, scaled to [0, 100].
    pub percentage: Decimal,
    pub category: Category,
}

impl StudentRow {
    pub fn reg_display(&self) -> &str {
        self.reg_number.as_deref().unwrap_or(UNKNOWN_REG)
    }
}

/// A record dropped because its identity already appeared earlier in the
/// same document (first record wins).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateRecord {
    pub source: String,
    pub reg_number: Option<String>,
    pub student_name: String,
}

/// The merged result table consumed by presenters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultTable {
    /// Labels for the mark columns, one per input document: "Marks",
    /// "Marks_1", "Marks_2", ...
    pub mark_columns: Vec<String>,
    /// Rows in first-seen order across the input documents.
    pub rows: Vec<StudentRow>,
}

impl ResultTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows ordered by percentage, best first. Ties keep table order.
    pub fn sorted_by_percentage(&self) -> Vec<&StudentRow> {
        let mut rows: Vec<&StudentRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| b.percentage.cmp(&a.percentage));
        rows
    }
}

/// Outcome of one merge+compute pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aggregation {
    pub table: ResultTable,
    /// In-document duplicates that were dropped during the merge.
    pub duplicates: Vec<DuplicateRecord>,
}
