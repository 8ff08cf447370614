pub mod outcome;

use crate::error::MarkbookError;
use crate::model::{Category, MarkSheet};
use outcome::{Aggregation, DuplicateRecord, ResultTable, StudentRow};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Identity a student merges under across documents.
///
/// Records without a registration number fall back to name plus occurrence
/// index within their document, so two unregistered students sharing a name
/// stay distinct while the k-th occurrence in one document still joins the
/// k-th occurrence in another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum StudentKey {
    Registered { reg: String, name: String },
    Unregistered { name: String, occurrence: usize },
}

/// Merge per-document mark sheets into a single result table.
///
/// Outer-join semantics: a student present in any one document appears in
/// the result, with 0 filled in for documents that lack them. `max_marks`
/// must align positionally with `sheets` and every value must be positive;
/// both are validated here before any merging happens.
pub fn aggregate(sheets: &[MarkSheet], max_marks: &[Decimal]) -> Result<Aggregation, MarkbookError> {
    if sheets.len() != max_marks.len() {
        return Err(MarkbookError::MaxMarksMismatch {
            sheets: sheets.len(),
            max_marks: max_marks.len(),
        });
    }

    for (sheet, max) in sheets.iter().zip(max_marks) {
        if *max <= Decimal::ZERO {
            return Err(MarkbookError::InvalidMaxMark {
                sheet: sheet.source.clone(),
                value: *max,
            });
        }
    }

    let columns = sheets.len();
    let mut order: Vec<StudentKey> = Vec::new();
    let mut index: HashMap<StudentKey, usize> = HashMap::new();
    let mut cells: Vec<Vec<Option<Decimal>>> = Vec::new();
    let mut duplicates = Vec::new();

    for (col, sheet) in sheets.iter().enumerate() {
        // Occurrence counters for unregistered records, reset per document.
        let mut unregistered_seen: HashMap<&str, usize> = HashMap::new();

        for record in &sheet.records {
            let key = match &record.reg_number {
                Some(reg) => StudentKey::Registered {
                    reg: reg.clone(),
                    name: record.student_name.clone(),
                },
                None => {
                    let count = unregistered_seen
                        .entry(record.student_name.as_str())
                        .or_insert(0);
                    let occurrence = *count;
                    *count += 1;
                    StudentKey::Unregistered {
                        name: record.student_name.clone(),
                        occurrence,
                    }
                }
            };

            let row = match index.get(&key) {
                Some(&row) => row,
                None => {
                    let row = order.len();
                    order.push(key.clone());
                    index.insert(key, row);
                    cells.push(vec![None; columns]);
                    row
                }
            };

            if cells[row][col].is_some() {
                // Same identity twice in one document: first record wins.
                duplicates.push(DuplicateRecord {
                    source: sheet.source.clone(),
                    reg_number: record.reg_number.clone(),
                    student_name: record.student_name.clone(),
                });
                continue;
            }

            cells[row][col] = Some(record.mark);
        }
    }

    let rows = order
        .into_iter()
        .zip(cells)
        .map(|(key, marks)| build_row(key, marks, max_marks))
        .collect();

    Ok(Aggregation {
        table: ResultTable {
            mark_columns: mark_column_labels(columns),
            rows,
        },
        duplicates,
    })
}

fn build_row(key: StudentKey, marks: Vec<Option<Decimal>>, max_marks: &[Decimal]) -> StudentRow {
    let (reg_number, student_name) = match key {
        StudentKey::Registered { reg, name } => (Some(reg), name),
        StudentKey::Unregistered { name, .. } => (None, name),
    };

    let marks: Vec<Decimal> = marks
        .into_iter()
        .map(|m| m.unwrap_or(Decimal::ZERO))
        .collect();

    let percentage = compute_percentage(&marks, max_marks);
    let category = Category::from_percentage(percentage);

    StudentRow {
        reg_number,
        student_name,
        marks,
        percentage,
        category,
    }
}

/// 100 * mean of (mark / max mark) over all mark columns.
fn compute_percentage(marks: &[Decimal], max_marks: &[Decimal]) -> Decimal {
    if marks.is_empty() {
        return Decimal::ZERO;
    }

    let ratio_sum = marks
        .iter()
        .zip(max_marks)
        .fold(Decimal::ZERO, |acc, (mark, max)| acc + *mark / *max);

    ratio_sum / Decimal::from(marks.len() as u64) * Decimal::ONE_HUNDRED
}

/// Column labels matching the output table schema: the first document's
/// column is plain "Marks", later ones get a positional suffix.
fn mark_column_labels(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            if i == 0 {
                "Marks".to_string()
            } else {
                format!("Marks_{i}")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MarkRecord;
    use rust_decimal_macros::dec;

    fn sheet(source: &str, records: Vec<MarkRecord>) -> MarkSheet {
        MarkSheet {
            source: source.into(),
            records,
        }
    }

    fn record(reg: Option<&str>, name: &str, mark: Decimal) -> MarkRecord {
        MarkRecord {
            reg_number: reg.map(|r| r.to_string()),
            student_name: name.into(),
            mark,
        }
    }

    #[test]
    fn test_single_sheet_percentage() {
        let sheets = vec![sheet(
            "term1.pdf",
            vec![record(Some("001"), "Amy", dec!(90))],
        )];
        let agg = aggregate(&sheets, &[dec!(100)]).unwrap();
        let row = &agg.table.rows[0];
        assert_eq!(row.marks, vec![dec!(90)]);
        assert_eq!(row.percentage, dec!(90));
        assert_eq!(row.category, Category::Excellent);
    }

    #[test]
    fn test_two_sheets_weighted_percentage() {
        // (90/100 + 40/50) / 2 * 100 = 85
        let sheets = vec![
            sheet("a.pdf", vec![record(Some("001"), "Amy", dec!(90))]),
            sheet("b.pdf", vec![record(Some("001"), "Amy", dec!(40))]),
        ];
        let agg = aggregate(&sheets, &[dec!(100), dec!(50)]).unwrap();
        assert_eq!(agg.table.rows.len(), 1);
        let row = &agg.table.rows[0];
        assert_eq!(row.marks, vec![dec!(90), dec!(40)]);
        assert_eq!(row.percentage, dec!(85));
        assert_eq!(row.category, Category::Excellent);
    }

    #[test]
    fn test_outer_join_fills_zero() {
        let sheets = vec![
            sheet("a.pdf", vec![record(Some("001"), "Amy", dec!(80))]),
            sheet("b.pdf", vec![record(Some("002"), "Ben", dec!(40))]),
        ];
        let agg = aggregate(&sheets, &[dec!(100), dec!(100)]).unwrap();
        assert_eq!(agg.table.rows.len(), 2);

        let amy = &agg.table.rows[0];
        assert_eq!(amy.marks, vec![dec!(80), dec!(0)]);
        let ben = &agg.table.rows[1];
        assert_eq!(ben.marks, vec![dec!(0), dec!(40)]);
    }

    #[test]
    fn test_row_order_is_first_seen() {
        let sheets = vec![
            sheet(
                "a.pdf",
                vec![
                    record(Some("002"), "Ben", dec!(40)),
                    record(Some("001"), "Amy", dec!(80)),
                ],
            ),
            sheet("b.pdf", vec![record(Some("003"), "Cleo", dec!(60))]),
        ];
        let agg = aggregate(&sheets, &[dec!(100), dec!(100)]).unwrap();
        let names: Vec<&str> = agg
            .table
            .rows
            .iter()
            .map(|r| r.student_name.as_str())
            .collect();
        assert_eq!(names, vec!["Ben", "Amy", "Cleo"]);
    }

    #[test]
    fn test_max_marks_count_mismatch_rejected() {
        let sheets = vec![sheet("a.pdf", vec![])];
        let err = aggregate(&sheets, &[]).unwrap_err();
        assert!(matches!(
            err,
            MarkbookError::MaxMarksMismatch {
                sheets: 1,
                max_marks: 0
            }
        ));
    }

    #[test]
    fn test_non_positive_max_mark_rejected() {
        let sheets = vec![sheet("a.pdf", vec![])];
        let err = aggregate(&sheets, &[dec!(0)]).unwrap_err();
        assert!(matches!(err, MarkbookError::InvalidMaxMark { .. }));

        let err = aggregate(&sheets, &[dec!(-5)]).unwrap_err();
        assert!(matches!(err, MarkbookError::InvalidMaxMark { .. }));
    }

    #[test]
    fn test_no_sheets_is_valid_and_empty() {
        let agg = aggregate(&[], &[]).unwrap();
        assert!(agg.table.is_empty());
        assert!(agg.table.mark_columns.is_empty());
    }

    #[test]
    fn test_empty_sheet_is_valid() {
        let sheets = vec![sheet("a.pdf", vec![])];
        let agg = aggregate(&sheets, &[dec!(100)]).unwrap();
        assert!(agg.table.is_empty());
        assert_eq!(agg.table.mark_columns, vec!["Marks"]);
    }

    #[test]
    fn test_in_document_duplicate_first_wins() {
        let sheets = vec![sheet(
            "a.pdf",
            vec![
                record(Some("001"), "Amy", dec!(90)),
                record(Some("001"), "Amy", dec!(10)),
            ],
        )];
        let agg = aggregate(&sheets, &[dec!(100)]).unwrap();
        assert_eq!(agg.table.rows.len(), 1);
        assert_eq!(agg.table.rows[0].marks, vec![dec!(90)]);
        assert_eq!(agg.duplicates.len(), 1);
        assert_eq!(agg.duplicates[0].source, "a.pdf");
    }

    #[test]
    fn test_unregistered_same_name_stay_distinct() {
        let sheets = vec![
            sheet(
                "a.pdf",
                vec![
                    record(None, "John Doe", dec!(30)),
                    record(None, "John Doe", dec!(70)),
                ],
            ),
            sheet(
                "b.pdf",
                vec![
                    record(None, "John Doe", dec!(40)),
                    record(None, "John Doe", dec!(80)),
                ],
            ),
        ];
        let agg = aggregate(&sheets, &[dec!(100), dec!(100)]).unwrap();
        assert_eq!(agg.table.rows.len(), 2);
        // Occurrence order aligns across documents
        assert_eq!(agg.table.rows[0].marks, vec![dec!(30), dec!(40)]);
        assert_eq!(agg.table.rows[1].marks, vec![dec!(70), dec!(80)]);
        assert!(agg.duplicates.is_empty());
    }

    #[test]
    fn test_percentage_bounds() {
        let sheets = vec![
            sheet(
                "a.pdf",
                vec![
                    record(Some("001"), "Top", dec!(100)),
                    record(Some("002"), "Bottom", dec!(0)),
                ],
            ),
            sheet("b.pdf", vec![record(Some("001"), "Top", dec!(50))]),
        ];
        let agg = aggregate(&sheets, &[dec!(100), dec!(50)]).unwrap();
        for row in &agg.table.rows {
            assert!(row.percentage >= dec!(0));
            assert!(row.percentage <= dec!(100));
        }
        assert_eq!(agg.table.rows[0].percentage, dec!(100));
    }

    #[test]
    fn test_mark_column_labels_positional_suffix() {
        assert_eq!(
            mark_column_labels(3),
            vec!["Marks", "Marks_1", "Marks_2"]
        );
    }

    #[test]
    fn test_sorted_by_percentage_descending() {
        let sheets = vec![sheet(
            "a.pdf",
            vec![
                record(Some("001"), "Low", dec!(20)),
                record(Some("002"), "High", dec!(95)),
                record(Some("003"), "Mid", dec!(60)),
            ],
        )];
        let agg = aggregate(&sheets, &[dec!(100)]).unwrap();
        let sorted = agg.table.sorted_by_percentage();
        let names: Vec<&str> = sorted.iter().map(|r| r.student_name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
    }
}
