// tests/support/mocks/security.rs
use async_trait::async_trait;

use conduit_core::application::error::{ApplicationError, ApplicationResult};
use conduit_core::application::ports::security::PasswordHasher;

/// Reversible stand-in hasher so tests stay fast and deterministic.
#[derive(Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
