//! Helper functions for creating specific error types

use super::types::AclError;

/// Helper functions for creating specific errors
impl AclError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage(message.into())
    }

    pub fn crypto<S: Into<String>>(message: S) -> Self {
        Self::Crypto(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn invalid_value(value: impl Into<serde_json::Value>) -> Self {
        Self::InvalidValue {
            value: value.into(),
        }
    }

    /// Whether the error came from the entity store
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}
