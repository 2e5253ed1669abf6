// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised below the application layer: value-object checks,
/// uniqueness rules and the backing store.
///
/// `Conflict` and `NotFound` carry the name of the resource or field
/// involved ("article slug", "email", "favorite"); the display impl turns
/// that into the client-facing sentence. `Persistence` wraps driver-level
/// failures and is never echoed to API clients verbatim.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} already exists")]
    Conflict(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn conflict(what: impl Into<String>) -> Self {
        Self::Conflict(what.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}
