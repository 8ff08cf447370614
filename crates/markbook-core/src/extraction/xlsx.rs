use std::io::Cursor;

use calamine::{Reader, Xlsx};
use rust_decimal::Decimal;

use crate::error::MarkbookError;
use crate::model::{MarkRecord, MarkSheet};
use crate::parsing::values::correct_artifact;
use crate::parsing::{ParsedSheet, SkippedLine};

/// Parse a spreadsheet marksheet into the same `ParsedSheet` that the PDF
/// path produces, so the result slots directly into `aggregate()`.
///
/// Expected layout on the first worksheet: one row per student with columns
/// `Reg Number | Student Name | Marks`. The header row is optional and the
/// reg number column may be blank.
pub fn parse_xlsx_sheet(bytes: &[u8], source: &str) -> Result<ParsedSheet, MarkbookError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| MarkbookError::ParseError(format!("failed to open xlsx: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| MarkbookError::ParseError("workbook has no worksheets".into()))?
        .map_err(|e| MarkbookError::ParseError(format!("failed to read worksheet: {e}")))?;

    let mut records = Vec::new();
    let mut skipped_lines = Vec::new();

    for row in range.rows() {
        let name = match row.get(1).and_then(cell_as_string) {
            Some(n) => n,
            None => continue, // blank spacer row
        };

        if is_header_row(&name, row.first().and_then(cell_as_string).as_deref()) {
            continue;
        }

        let reg_number = row.first().and_then(cell_as_string);

        match row.get(2).and_then(cell_as_decimal) {
            Some(mark) => {
                records.push(MarkRecord {
                    reg_number,
                    student_name: name,
                    mark: correct_artifact(mark),
                });
            }
            None => {
                let cell_text = row
                    .get(2)
                    .map(|c| format!("{c}"))
                    .unwrap_or_default();
                skipped_lines.push(SkippedLine {
                    line_text: format!("{name}: {cell_text}"),
                    reason: "non-numeric mark cell in xlsx".into(),
                });
            }
        }
    }

    Ok(ParsedSheet {
        sheet: MarkSheet {
            source: source.to_string(),
            records,
        },
        skipped_lines,
    })
}

fn is_header_row(name_cell: &str, reg_cell: Option<&str>) -> bool {
    name_cell.eq_ignore_ascii_case("student name")
        || reg_cell
            .map(|r| r.eq_ignore_ascii_case("reg number"))
            .unwrap_or(false)
}

fn cell_as_string(cell: &calamine::Data) -> Option<String> {
    match cell {
        calamine::Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        calamine::Data::Float(f) => Some(f.to_string()),
        calamine::Data::Int(i) => Some(i.to_string()),
        calamine::Data::Empty => None,
        _ => Some(format!("{cell}")),
    }
}

fn cell_as_decimal(cell: &calamine::Data) -> Option<Decimal> {
    match cell {
        calamine::Data::Float(f) => Some(f64_to_decimal(*f)),
        calamine::Data::Int(i) => Some(Decimal::from(*i)),
        calamine::Data::String(s) => s.trim().parse::<Decimal>().ok(),
        _ => None,
    }
}

/// Convert f64 to Decimal, preserving reasonable precision.
///
/// Uses string round-trip to avoid floating-point artifacts
/// (e.g., 87.5_f64 surviving as 87.5 rather than 87.4999...).
fn f64_to_decimal(f: f64) -> Decimal {
    let s = format!("{f}");
    s.parse::<Decimal>()
        .unwrap_or_else(|_| Decimal::try_from(f).unwrap_or_default())
}
