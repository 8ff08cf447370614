use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Caller-supplied settings for one analysis run, passed explicitly into
/// the pipeline boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_class_name")]
    pub class_name: String,
    #[serde(default)]
    pub instructor: Option<String>,
    /// Subject under analysis. When set, must be one of the recognized
    /// subjects (see `builtin::SUBJECTS`).
    #[serde(default)]
    pub subject: Option<String>,
    /// Maximum achievable mark per document, positionally aligned with the
    /// documents supplied to the run.
    pub max_marks: Vec<Decimal>,
}

fn default_class_name() -> String {
    "Class 1".to_string()
}

impl AnalysisConfig {
    /// A minimal config for flag-driven runs with no config file.
    pub fn with_max_marks(max_marks: Vec<Decimal>) -> AnalysisConfig {
        AnalysisConfig {
            class_name: default_class_name(),
            instructor: None,
            subject: None,
            max_marks,
        }
    }
}
