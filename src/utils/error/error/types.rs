//! Error types for the access control layer

use thiserror::Error;

/// Result type alias for the access control layer
pub type Result<T> = std::result::Result<T, AclError>;

/// Main error type for the access control layer
///
/// Permission resolution never produces one of these; they come from the
/// store, the credential hasher, configuration loading and sanitization.
#[derive(Error, Debug)]
pub enum AclError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors reported by an entity store
    #[error("Storage error: {0}")]
    Storage(String),

    /// Password hashing and verification errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// A value rejected by a sanitizer
    #[error("Invalid value: {value}")]
    InvalidValue {
        /// The value as it was received
        value: serde_json::Value,
    },

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
