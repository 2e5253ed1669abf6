// src/infrastructure/security/password.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::security::PasswordHasher;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;
use async_trait::async_trait;

/// Argon2id hashing for account passwords. Hashing is CPU-bound, so both
/// operations run under `spawn_blocking` to keep the request executor free.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

fn hashing_failed(err: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::infrastructure(format!("password hashing: {err}"))
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            let hash = Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map_err(hashing_failed)?;
            Ok(hash.to_string())
        })
        .await
        .map_err(hashing_failed)?
    }

    async fn verify(&self, password: &str, stored_hash: &str) -> ApplicationResult<()> {
        let password = password.to_owned();
        let stored_hash = stored_hash.to_owned();
        tokio::task::spawn_blocking(move || {
            // A hash we cannot parse is a data problem, not a bad login.
            let parsed = PasswordHash::new(&stored_hash).map_err(hashing_failed)?;
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .map_err(|_| ApplicationError::unauthorized("password mismatch"))
        })
        .await
        .map_err(hashing_failed)?
    }
}
