//! Unified error types for the datastore layer.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all Mobitrack datastore operations.
///
/// Validation failures, referential-integrity violations, and store-level
/// faults all surface through this enum. Absence on a read path is NOT an
/// error; lookups return `Ok(None)` instead.
#[derive(Error, Debug)]
pub enum MobitrackError {
    /// A required input was null, absent, or blank.
    ///
    /// Raised synchronously before any store access. The message is one of
    /// the fixed, field-specific strings in [`crate::validation`].
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A referenced record is not stored.
    ///
    /// Raised when an update names a missing id, or a create references a
    /// missing organization.
    #[error("Record does not exist: {resource_type} with id {id}")]
    RecordNotFound {
        resource_type: &'static str,
        id: String,
    },

    /// A create would violate a uniqueness constraint.
    #[error("Duplicate record: {0}")]
    DuplicateRecord(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Store-level failure (missing table or index, malformed document).
    #[error("Store error: {0}")]
    Store(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MobitrackError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::RecordNotFound { .. } => "RECORD_NOT_FOUND",
            Self::DuplicateRecord(_) => "DUPLICATE_RECORD",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Store(_) => "STORE_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates an invalid-input error.
    #[must_use]
    pub fn invalid_input<T: Into<String>>(message: T) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a record-not-found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::RecordNotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a duplicate-record error.
    #[must_use]
    pub fn duplicate<T: Into<String>>(message: T) -> Self {
        Self::DuplicateRecord(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a store error.
    #[must_use]
    pub fn store<T: Into<String>>(message: T) -> Self {
        Self::Store(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error is retriable.
    ///
    /// Validation and integrity failures are caller errors and never
    /// retried; only store-level faults may be transient.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

impl From<serde_json::Error> for MobitrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}
