//! # Store Error Types
//!
//! Error types for entity store operations.
//!
//! ## Error Flow
//! ```text
//! std::io::Error / serde_json::Error      CoreError (domain)
//!              │                               │
//!              └──────────► StoreError ◄───────┘
//!                               │
//!                               ▼
//!               caller surfaces a recoverable value
//! ```

use thiserror::Error;

use pescaderia_core::{CoreError, ValidationError};

/// Entity store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a collection file failed.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A collection file exists but does not parse as the expected JSON
    /// array. The store never overwrites a malformed file; fix or remove it
    /// by hand.
    #[error("collection '{collection}' is malformed: {source}")]
    Malformed {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    /// A domain rule rejected the operation before any write happened.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Login rejected. Deliberately does not say which of the two was
    /// wrong.
    #[error("invalid username or password")]
    InvalidCredentials,
}

impl StoreError {
    /// Creates a Malformed error for a given collection.
    pub fn malformed(collection: impl Into<String>, source: serde_json::Error) -> Self {
        StoreError::Malformed {
            collection: collection.into(),
            source,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_wraps_through_core() {
        let err: StoreError = ValidationError::Required { field: "name" }.into();
        assert!(matches!(err, StoreError::Core(CoreError::Validation(_))));
        assert_eq!(err.to_string(), "validation error: name is required");
    }
}
