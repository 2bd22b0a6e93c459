//! Validation of the raw temperature text

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a temperature value")]
    EmptyInput,

    #[error("Please enter a valid number")]
    NotANumber,
}

/// Parse the input field text into a finite temperature value.
///
/// Surrounding whitespace is ignored. Infinite and NaN spellings are
/// rejected along with anything `f64::from_str` refuses.
pub fn validate_input(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NotANumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(validate_input(""), Err(ValidationError::EmptyInput));
        assert_eq!(validate_input("   \t"), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_valid_numbers() {
        assert_eq!(validate_input("42"), Ok(42.0));
        assert_eq!(validate_input("  -40.5 "), Ok(-40.5));
        assert_eq!(validate_input("1e3"), Ok(1000.0));
        assert_eq!(validate_input(".5"), Ok(0.5));
    }

    #[test]
    fn test_not_a_number() {
        for raw in ["abc", "12abc", "1.2.3", "-", "NaN", "inf", "-infinity", "1e400"] {
            assert_eq!(
                validate_input(raw),
                Err(ValidationError::NotANumber),
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::EmptyInput.to_string(),
            "Please enter a temperature value"
        );
        assert_eq!(
            ValidationError::NotANumber.to_string(),
            "Please enter a valid number"
        );
    }
}
