// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failure taxonomy of the orchestration layer. Domain failures pass
/// through transparently; the remaining variants are raised by the
/// services themselves and map one-to-one onto HTTP statuses at the edge.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request payload rejected before any collaborator is consulted
    /// (blank login credentials, empty comment body).
    #[error("{0}")]
    Validation(String),

    /// The named resource does not exist: "article", "comment", "profile".
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    Conflict(String),

    /// Credentials missing, unverifiable or wrong.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated, but not the owner of the targeted record.
    #[error("{0}")]
    Forbidden(String),

    /// A collaborator broke underneath us; details stay in the logs.
    #[error("{0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// `what` names the missing resource, not a full sentence.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}
