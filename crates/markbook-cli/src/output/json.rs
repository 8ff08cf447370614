use markbook_core::error::MarkbookError;
use markbook_core::report::Summary;
use markbook_core::Analysis;
use serde::Serialize;

#[derive(Serialize)]
struct AnalysisOutput<'a> {
    analysis: &'a Analysis,
    summary: &'a Summary,
}

pub fn print(analysis: &Analysis, summary: &Summary) -> Result<(), MarkbookError> {
    let output = AnalysisOutput { analysis, summary };
    let json = serde_json::to_string_pretty(&output)?;
    println!("{json}");
    Ok(())
}
