// ============================================================================
// Number String Errors
// Error types for parsing, rounding and converting number strings
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing, rounding or converting a decimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumStrError {
    /// Input string was empty (or only whitespace for dirty parsing)
    EmptyInput,
    /// Input does not follow the native `[-]digits[.digits]` grammar
    MalformedNumberString,
    /// Dirty input contained no numeric digits at all
    NoNumericContent,
    /// Rounding target was below zero
    InvalidRoundingTarget,
    /// Rounding mode is uninitialized or unknown
    InvalidRoundingMode,
    /// Decimal separator is empty or contains digits
    InvalidSeparator,
    /// Number convention failed validation
    InvalidConfiguration,
    /// Value does not fit the requested numeric type
    Overflow,
    /// Floating point input was NaN or infinite
    NonFiniteFloat,
}

impl fmt::Display for NumStrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumStrError::EmptyInput => write!(f, "empty input: no characters to parse"),
            NumStrError::MalformedNumberString => write!(
                f,
                "malformed number string: expected [-]digits[.digits]"
            ),
            NumStrError::NoNumericContent => {
                write!(f, "no numeric content: input contains no digits")
            },
            NumStrError::InvalidRoundingTarget => write!(
                f,
                "invalid rounding target: fractional digits must be zero or greater"
            ),
            NumStrError::InvalidRoundingMode => {
                write!(f, "invalid rounding mode: mode is uninitialized or unknown")
            },
            NumStrError::InvalidSeparator => write!(
                f,
                "invalid decimal separator: must be non-empty and contain no digits"
            ),
            NumStrError::InvalidConfiguration => {
                write!(f, "invalid number convention configuration")
            },
            NumStrError::Overflow => {
                write!(f, "overflow: value does not fit the target numeric type")
            },
            NumStrError::NonFiniteFloat => {
                write!(f, "non-finite float: NaN and infinity have no digits")
            },
        }
    }
}

impl std::error::Error for NumStrError {}

/// Result type alias for number string operations
pub type NumStrResult<T> = Result<T, NumStrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumStrError::EmptyInput.to_string(),
            "empty input: no characters to parse"
        );
        assert_eq!(
            NumStrError::InvalidRoundingTarget.to_string(),
            "invalid rounding target: fractional digits must be zero or greater"
        );
        assert_eq!(
            NumStrError::NonFiniteFloat.to_string(),
            "non-finite float: NaN and infinity have no digits"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumStrError::NoNumericContent, NumStrError::NoNumericContent);
        assert_ne!(
            NumStrError::MalformedNumberString,
            NumStrError::NoNumericContent
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumStrError::Overflow);
        assert!(err.to_string().starts_with("overflow"));
    }
}
