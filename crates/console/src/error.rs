//! Unified error handling.
//!
//! Module-level errors (`StorageError`, `RecordStoreError`, `AuthError`,
//! `GalleryError`) roll up into a single `ConsoleError` so callers at the
//! shell boundary handle one type. Every variant maps to a user-visible
//! notification; nothing here is retried automatically except the gallery
//! writer's single degrade-and-retry step.

use thiserror::Error;

use crate::config::ConfigError;
use crate::remote::RecordStoreError;
use crate::services::auth::AuthError;
use crate::services::gallery::GalleryError;
use crate::storage::StorageError;

/// Application-level error type for the console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Local persistence failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Remote record store operation failed.
    #[error("Record store error: {0}")]
    Records(#[from] RecordStoreError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Gallery write refused or failed.
    #[error("Gallery error: {0}")]
    Gallery(#[from] GalleryError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A required form field is missing or empty.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No user identity is present in the session.
    #[error("Not authenticated")]
    NotAuthenticated,
}

impl ConsoleError {
    /// Shorthand for a missing-required-field rejection.
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("missing required field: {field}"))
    }
}

/// Result type alias for `ConsoleError`.
pub type Result<T> = std::result::Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConsoleError::missing_field("name");
        assert_eq!(err.to_string(), "Validation error: missing required field: name");

        let err = ConsoleError::NotAuthenticated;
        assert_eq!(err.to_string(), "Not authenticated");
    }

    #[test]
    fn test_storage_error_converts() {
        let err: ConsoleError = StorageError::QuotaExceeded.into();
        assert!(matches!(err, ConsoleError::Storage(_)));
    }
}
