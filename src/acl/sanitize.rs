//! Incoming value sanitization

use crate::utils::crypto::CredentialHasher;
use crate::utils::error::{AclError, Result};
use serde_json::Value;

/// Turn a raw password value into a credential hash
///
/// Rejects anything that is not a string, keeping the original value in the
/// error. Strings are trimmed before hashing.
pub fn sanitize_password<H: CredentialHasher + ?Sized>(value: &Value, hasher: &H) -> Result<String> {
    match value {
        Value::String(password) => hasher.hash(password.trim()),
        other => Err(AclError::invalid_value(other.clone())),
    }
}
