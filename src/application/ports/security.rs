// src/application/ports/security.rs
use crate::application::ApplicationResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use thiserror::Error;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature does not match")]
    InvalidSignature,
    #[error("token was signed with an unexpected algorithm")]
    WrongAlgorithm,
}

/// Signs and verifies the identity tokens handed out at login/registration.
/// Signing is deterministic HMAC; a signing failure is a configuration bug,
/// not a request error, so `issue` does not return a `Result`.
pub trait TokenCodec: Send + Sync {
    fn issue(&self, viewer: UserId) -> String;
    fn verify(&self, token: &str) -> Result<UserId, TokenError>;
}
