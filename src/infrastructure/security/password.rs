// src/infrastructure/security/password.rs
use argon2::{
    Argon2, PasswordHash, PasswordVerifier,
    password_hash::{PasswordHasher as _, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};

/// Argon2id with default parameters. Hashing and verification run on the
/// blocking pool; both are deliberately slow.
pub struct Argon2PasswordHasher;

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| {
                    ApplicationError::infrastructure(format!("password hashing failed: {e}"))
                })
        })
        .await
        .map_err(|e| ApplicationError::infrastructure(format!("hashing task panicked: {e}")))?
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&expected_hash).map_err(|e| {
                ApplicationError::infrastructure(format!("stored password hash is malformed: {e}"))
            })?;
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .map_err(|_| ApplicationError::unauthorized("password mismatch"))
        })
        .await
        .map_err(|e| ApplicationError::infrastructure(format!("verification task panicked: {e}")))?
    }
}
