use markbook_core::config::schema::AnalysisConfig;
use markbook_core::parsing::ParsedSheet;
use markbook_core::report::Summary;
use markbook_core::Analysis;

/// Render the analysis as the class-overview text report: summary metrics,
/// the full result table sorted best-first, and the weak-student section.
pub fn print(config: &AnalysisConfig, analysis: &Analysis, summary: &Summary) {
    println!("=== {} ===", config.class_name);
    if let Some(ref subject) = config.subject {
        println!("Subject: {subject}");
    }
    if let Some(ref instructor) = config.instructor {
        println!("Instructor: {instructor}");
    }
    println!();

    println!(
        "  Class average: {:.2}%    Students: {}",
        summary.class_average, summary.total_students
    );
    let counts: Vec<String> = summary
        .category_counts
        .iter()
        .map(|c| format!("{} {}", c.category, c.count))
        .collect();
    println!("  {}\n", counts.join("   "));

    if analysis.table.is_empty() {
        println!("  No student records extracted.");
        return;
    }

    print_result_table(analysis);

    if summary.weak_students.is_empty() {
        println!("  No students currently in the weak category.");
    } else {
        println!("  Students needing support:");
        for student in &summary.weak_students {
            println!("    {}  {:.2}%", student.student_name, student.percentage);
        }
    }
    println!();

    if !analysis.skipped_lines.is_empty() {
        eprintln!(
            "  {} line(s) skipped during extraction",
            analysis.skipped_lines.len()
        );
    }
    if !analysis.duplicates.is_empty() {
        eprintln!(
            "  {} duplicate record(s) dropped during merge",
            analysis.duplicates.len()
        );
    }
}

fn print_result_table(analysis: &Analysis) {
    let table = &analysis.table;
    let rows = table.sorted_by_percentage();

    let reg_width = rows
        .iter()
        .map(|r| r.reg_display().len())
        .chain(std::iter::once("Reg Number".len()))
        .max()
        .unwrap_or(10);
    let name_width = rows
        .iter()
        .map(|r| r.student_name.len())
        .chain(std::iter::once("Student Name".len()))
        .max()
        .unwrap_or(12);

    print!(
        "  {:<reg_width$}  {:<name_width$}",
        "Reg Number", "Student Name"
    );
    for col in &table.mark_columns {
        print!("  {col:>8}");
    }
    println!("  {:>10}  {}", "Percentage", "Category");

    for row in rows {
        print!(
            "  {:<reg_width$}  {:<name_width$}",
            row.reg_display(),
            row.student_name
        );
        for mark in &row.marks {
            print!("  {mark:>8}");
        }
        println!("  {:>9.2}%  {}", row.percentage, row.category);
    }
    println!();
}

/// Render a single extracted sheet (the `extract` command's table output).
pub fn format_parsed(parsed: &ParsedSheet) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n\n", parsed.sheet.source));

    if parsed.sheet.records.is_empty() {
        out.push_str("  No records extracted.\n");
    } else {
        let name_width = parsed
            .sheet
            .records
            .iter()
            .map(|r| r.student_name.len())
            .max()
            .unwrap_or(12);

        for record in &parsed.sheet.records {
            out.push_str(&format!(
                "  {:<10}  {:<name_width$}  {}\n",
                record.reg_display(),
                record.student_name,
                record.mark
            ));
        }
    }

    if !parsed.skipped_lines.is_empty() {
        out.push_str(&format!(
            "\n  {} line(s) skipped:\n",
            parsed.skipped_lines.len()
        ));
        for skipped in &parsed.skipped_lines {
            out.push_str(&format!(
                "    {} ({})\n",
                skipped.line_text, skipped.reason
            ));
        }
    }

    out
}
