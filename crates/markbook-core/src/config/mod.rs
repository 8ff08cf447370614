pub mod builtin;
pub mod schema;

use crate::error::MarkbookError;
use rust_decimal::Decimal;
use schema::AnalysisConfig;
use std::path::Path;

/// Load an analysis config from a JSON file.
pub fn load_config(path: &Path) -> Result<AnalysisConfig, MarkbookError> {
    let content = std::fs::read_to_string(path).map_err(|e| MarkbookError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let config: AnalysisConfig =
        serde_json::from_str(&content).map_err(|e| MarkbookError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_config(&config)?;
    Ok(config)
}

/// Parse a config from a JSON string (no file path context).
pub fn parse_config_str(json: &str) -> Result<AnalysisConfig, MarkbookError> {
    let config: AnalysisConfig = serde_json::from_str(json).map_err(MarkbookError::Json)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate that a config is well-formed.
pub fn validate_config(config: &AnalysisConfig) -> Result<(), MarkbookError> {
    if config.class_name.trim().is_empty() {
        return Err(MarkbookError::ConfigInvalid(
            "class_name must not be empty".into(),
        ));
    }

    if let Some(ref subject) = config.subject {
        if !builtin::is_known_subject(subject) {
            return Err(MarkbookError::ConfigInvalid(format!(
                "unknown subject '{}'. Run 'markbook config subjects' for the recognized list",
                subject
            )));
        }
    }

    for max in &config.max_marks {
        if *max <= Decimal::ZERO {
            return Err(MarkbookError::ConfigInvalid(format!(
                "max marks must be positive, got {}",
                max
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_valid_config() {
        let json = r#"{
            "class_name": "L5 SOD",
            "instructor": "D. Niyitanga",
            "subject": "Apply JavaScript",
            "max_marks": ["100", "50"]
        }"#;
        let config = parse_config_str(json).unwrap();
        assert_eq!(config.class_name, "L5 SOD");
        assert_eq!(config.max_marks, vec![dec!(100), dec!(50)]);
    }

    #[test]
    fn test_defaults_applied() {
        let json = r#"{ "max_marks": ["100"] }"#;
        let config = parse_config_str(json).unwrap();
        assert_eq!(config.class_name, "Class 1");
        assert_eq!(config.instructor, None);
        assert_eq!(config.subject, None);
    }

    #[test]
    fn test_unknown_subject_rejected() {
        let json = r#"{
            "subject": "Alchemy",
            "max_marks": ["100"]
        }"#;
        assert!(matches!(
            parse_config_str(json),
            Err(MarkbookError::ConfigInvalid(_))
        ));
    }

    #[test]
    fn test_non_positive_max_mark_rejected() {
        let json = r#"{ "max_marks": ["0"] }"#;
        assert!(parse_config_str(json).is_err());

        let json = r#"{ "max_marks": ["-10"] }"#;
        assert!(parse_config_str(json).is_err());
    }

    #[test]
    fn test_empty_class_name_rejected() {
        let json = r#"{ "class_name": "  ", "max_marks": ["100"] }"#;
        assert!(parse_config_str(json).is_err());
    }
}
