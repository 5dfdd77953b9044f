//! Credential hashing
//!
//! Users never store or compare plaintext secrets. Hashing and verification go
//! through a [`CredentialHasher`], so hosts can swap the algorithm without
//! touching the access control core.

pub mod password;

pub use password::Argon2Hasher;

use crate::utils::error::Result;

/// One-way hashing of account secrets
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext secret for storage
    fn hash(&self, plaintext: &str) -> Result<String>;

    /// Check a plaintext secret against a stored hash
    ///
    /// `Ok(false)` means the secret does not match. An error means the hash
    /// itself could not be used.
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool>;
}
