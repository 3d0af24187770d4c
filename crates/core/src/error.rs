//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures (field validation, record
/// format). IO concerns are handled at the persistence boundary and surfaced
/// through the diagnostic channel, never through this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field value failed validation (e.g. non-positive id, blank name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A persisted record line could not be parsed.
    #[error("malformed record: {0}")]
    Format(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }
}
