//! Argon2id credential hashing

use super::CredentialHasher;
use crate::utils::error::{AclError, Result};
use argon2::password_hash::{self, SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// Default [`CredentialHasher`]: Argon2id with default parameters, encoded as
/// a PHC string so the salt and parameters travel with the hash
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AclError::crypto(format!("Failed to hash credential: {}", e)))
    }

    /// Parameters are read from the stored hash, not from `Argon2::default()`
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool> {
        let stored = PasswordHash::new(hash)
            .map_err(|e| AclError::crypto(format!("Unusable credential hash: {}", e)))?;

        match Argon2::default().verify_password(plaintext.as_bytes(), &stored) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AclError::crypto(format!(
                "Credential verification failed: {}",
                e
            ))),
        }
    }
}
