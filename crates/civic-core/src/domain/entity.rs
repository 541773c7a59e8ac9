//! Domain Layer - Core Entity Trait
//!
//! Records with identity expose it through `Entity`, so views can key
//! lists on it without knowing the concrete record type.

use serde::{Deserialize, Serialize};

/// Contract for records that carry their own identifier
pub trait Entity: Clone {
    /// The type of the record's identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the record's identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    /// An identifier that names no known value
    UnknownId(String),
    /// Input that could not be parsed or validated
    InvalidInput(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::UnknownId(id) => write!(f, "Unknown identifier: {}", id),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::UnknownId("xyz".to_string());
        assert_eq!(err.to_string(), "Unknown identifier: xyz");

        let err = DomainError::InvalidInput("expected value".to_string());
        assert_eq!(err.to_string(), "Invalid input: expected value");
    }
}
