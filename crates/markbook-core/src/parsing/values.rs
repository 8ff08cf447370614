use crate::error::MarkbookError;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

/// Raw mark value emitted by the upstream sheet generator in place of a true
/// zero. Corrected to 0 during extraction.
static ZERO_ARTIFACT: LazyLock<Decimal> = LazyLock::new(|| Decimal::new(1, 2)); // 0.01

/// Parse a mark token from a marksheet line.
///
/// The line pattern only admits digits and dots, but that still allows
/// malformed tokens like "1.2.3" through, which fail here.
pub fn parse_mark(s: &str) -> Result<Decimal, MarkbookError> {
    let s = s.trim();
    Decimal::from_str(s)
        .map_err(|e| MarkbookError::ParseError(format!("invalid mark '{}': {}", s, e)))
}

/// Normalize the 0.01 placeholder back to a true zero.
pub fn correct_artifact(mark: Decimal) -> Decimal {
    if mark == *ZERO_ARTIFACT {
        Decimal::ZERO
    } else {
        mark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_integer_mark() {
        assert_eq!(parse_mark("68").unwrap(), dec!(68));
    }

    #[test]
    fn test_parse_decimal_mark() {
        assert_eq!(parse_mark("87.5").unwrap(), dec!(87.5));
    }

    #[test]
    fn test_parse_whitespace_trimmed() {
        assert_eq!(parse_mark("  42  ").unwrap(), dec!(42));
    }

    #[test]
    fn test_parse_invalid_mark() {
        assert!(parse_mark("1.2.3").is_err());
        assert!(parse_mark("").is_err());
    }

    #[test]
    fn test_artifact_corrected_to_zero() {
        assert_eq!(correct_artifact(dec!(0.01)), Decimal::ZERO);
        assert_eq!(correct_artifact(dec!(0.010)), Decimal::ZERO);
    }

    #[test]
    fn test_real_marks_untouched() {
        assert_eq!(correct_artifact(dec!(0.1)), dec!(0.1));
        assert_eq!(correct_artifact(dec!(0)), dec!(0));
        assert_eq!(correct_artifact(dec!(87.5)), dec!(87.5));
    }
}
