// ============================================================================
// Spelling Errors
// Error types for number verbalization
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;

/// Errors that can occur while spelling a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpellError {
    /// Ordinal (or year) requested for a value outside its domain
    DomainValidation { value: Decimal },
    /// Integer part needs a scale word beyond the highest configured one
    UnsupportedMagnitude { value: u128, limit: u128 },
    /// No currency form registered for the code
    UnsupportedCurrency { code: String },
    /// The decomposer returned no fragments or could not make progress
    IncompleteDecomposition { value: u128 },
}

impl fmt::Display for SpellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpellError::DomainValidation { value } => {
                write!(f, "domain error: {} is not a positive integer", value)
            },
            SpellError::UnsupportedMagnitude { value, limit } => write!(
                f,
                "unsupported magnitude: {} must be below {}",
                value, limit
            ),
            SpellError::UnsupportedCurrency { code } => {
                write!(f, "unsupported currency: no forms registered for {:?}", code)
            },
            SpellError::IncompleteDecomposition { value } => {
                write!(f, "decomposition of {} produced no usable fragments", value)
            },
        }
    }
}

impl std::error::Error for SpellError {}

/// Result type alias for spelling operations
pub type SpellResult<T> = Result<T, SpellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SpellError::DomainValidation {
                value: Decimal::new(25, 1)
            }
            .to_string(),
            "domain error: 2.5 is not a positive integer"
        );
        assert_eq!(
            SpellError::UnsupportedMagnitude {
                value: 1_000_000,
                limit: 1_000_000
            }
            .to_string(),
            "unsupported magnitude: 1000000 must be below 1000000"
        );
        assert_eq!(
            SpellError::UnsupportedCurrency {
                code: "XYZ".to_string()
            }
            .to_string(),
            "unsupported currency: no forms registered for \"XYZ\""
        );
    }

    #[test]
    fn test_error_equality() {
        let a = SpellError::UnsupportedCurrency {
            code: "XYZ".to_string(),
        };
        assert_eq!(a.clone(), a);
        assert_ne!(a, SpellError::IncompleteDecomposition { value: 3 });
    }
}
