use markbook_core::config::schema::AnalysisConfig;
use markbook_core::config::{self, builtin};
use markbook_core::error::MarkbookError;
use rust_decimal::Decimal;
use std::path::Path;

pub fn subjects() -> Result<(), MarkbookError> {
    println!("Recognized subjects:\n");
    for subject in builtin::SUBJECTS {
        println!("  {subject}");
    }
    Ok(())
}

pub fn example() -> Result<(), MarkbookError> {
    let example = AnalysisConfig {
        class_name: "Class 1".into(),
        instructor: Some("A. Instructor".into()),
        subject: Some(builtin::SUBJECTS[0].to_string()),
        max_marks: vec![Decimal::from(100), Decimal::from(50)],
    };
    println!("{}", serde_json::to_string_pretty(&example)?);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), MarkbookError> {
    let config = config::load_config(file)?;
    println!(
        "OK: class '{}', {} max mark value(s)",
        config.class_name,
        config.max_marks.len()
    );
    if let Some(subject) = config.subject {
        println!("  subject: {subject}");
    }
    Ok(())
}
