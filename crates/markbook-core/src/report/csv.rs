use crate::aggregate::outcome::ResultTable;
use crate::error::MarkbookError;
use std::io::Write;

/// Write the full result table as CSV: `Reg Number`, `Student Name`, the
/// mark columns, `Percentage` (2 decimals), `Category`. Rows keep table
/// order; presenters sort as they see fit.
pub fn write_csv<W: Write>(table: &ResultTable, writer: W) -> Result<(), MarkbookError> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["Reg Number".to_string(), "Student Name".to_string()];
    header.extend(table.mark_columns.iter().cloned());
    header.push("Percentage".to_string());
    header.push("Category".to_string());
    wtr.write_record(&header)?;

    for row in &table.rows {
        let mut record = vec![row.reg_display().to_string(), row.student_name.clone()];
        record.extend(row.marks.iter().map(|m| m.to_string()));
        record.push(format!("{:.2}", row.percentage));
        record.push(row.category.to_string());
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::outcome::StudentRow;
    use crate::model::Category;
    use rust_decimal_macros::dec;

    #[test]
    fn test_csv_header_and_rows() {
        let table = ResultTable {
            mark_columns: vec!["Marks".into(), "Marks_1".into()],
            rows: vec![
                StudentRow {
                    reg_number: Some("12-345".into()),
                    student_name: "Jane Doe".into(),
                    marks: vec![dec!(90), dec!(40)],
                    percentage: dec!(85),
                    category: Category::Excellent,
                },
                StudentRow {
                    reg_number: None,
                    student_name: "John Roe".into(),
                    marks: vec![dec!(30), dec!(0)],
                    percentage: dec!(15),
                    category: Category::Weak,
                },
            ],
        };

        let mut buf = Vec::new();
        write_csv(&table, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Reg Number,Student Name,Marks,Marks_1,Percentage,Category"
        );
        assert_eq!(lines[1], "12-345,Jane Doe,90,40,85.00,Excellent");
        assert_eq!(lines[2], "N/A,John Roe,30,0,15.00,Weak");
    }

    #[test]
    fn test_csv_empty_table_writes_header_only() {
        let table = ResultTable {
            mark_columns: vec![],
            rows: vec![],
        };
        let mut buf = Vec::new();
        write_csv(&table, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Reg Number,Student Name,Percentage,Category"));
    }
}
