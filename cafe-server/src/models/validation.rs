//! Validation error types

use std::fmt;

/// Request body rejected before it reaches the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body is not JSON, not an object, or has the wrong content type
    MalformedBody { reason: String },

    /// Required field absent or `null`
    Missing { field: &'static str },

    /// Field present with the wrong JSON type; `expected` reads "a string"
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// Integer that does not fit the column
    OutOfRange { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBody { reason } => write!(f, "invalid request body: {}", reason),
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::WrongType { field, expected } => write!(f, "{} must be {}", field, expected),
            Self::OutOfRange { field } => {
                write!(f, "{} is out of range for a 32-bit integer", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::WrongType {
            field: "quantity",
            expected: "an integer",
        };
        assert_eq!(err.to_string(), "quantity must be an integer");
        assert_eq!(
            ValidationError::Missing { field: "item" }.to_string(),
            "item is required"
        );
    }
}
