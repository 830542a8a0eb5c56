//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is absent or empty when it is required
    Missing { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => {
                write!(f, "Item {} is required in the request body.", field)
            }
            Self::TooLong { field, max } => {
                write!(f, "Item {} exceeds maximum length of {} characters", field, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_display() {
        let err = ValidationError::Missing { field: "name" };
        assert_eq!(err.to_string(), "Item name is required in the request body.");
    }

    #[test]
    fn too_long_display() {
        let err = ValidationError::TooLong {
            field: "name",
            max: 255,
        };
        assert_eq!(
            err.to_string(),
            "Item name exceeds maximum length of 255 characters"
        );
    }
}
