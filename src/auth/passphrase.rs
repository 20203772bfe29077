use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::errors::AppError;

/// The shared organizer passphrase, kept only as an argon2 hash.
///
/// This is a convenience gate for the organizer pages, not an account system.
#[derive(Clone)]
pub struct OrganizerGate {
    hash: String,
}

impl OrganizerGate {
    pub fn from_passphrase(passphrase: &str) -> Result<Self, AppError> {
        let hash = hash_passphrase(passphrase)?;
        Ok(Self { hash })
    }

    pub fn verify(&self, attempt: &str) -> bool {
        match verify_passphrase(attempt, &self.hash) {
            Ok(ok) => ok,
            Err(e) => {
                log::error!("Organizer passphrase verification failed: {e}");
                false
            }
        }
    }
}

pub fn hash_passphrase(passphrase: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(passphrase.as_bytes(), &salt)
        .map_err(|e| AppError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

pub fn verify_passphrase(attempt: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| AppError::Hash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(attempt.as_bytes(), &parsed_hash)
        .is_ok())
}
