//! Configuration management
//!
//! This module handles loading, validation, and management of the access
//! control configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AclError, Result};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Access control configuration
    #[serde(default)]
    pub acl: AclConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AclError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| AclError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// Reads `ACL_MAX_INHERIT_DEPTH`, `ACL_LOG_LEVEL` and `ACL_LOG_JSON` on top
    /// of the defaults.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();

        if let Ok(depth) = env::var("ACL_MAX_INHERIT_DEPTH") {
            config.acl.max_inherit_depth = depth
                .parse()
                .map_err(|e| AclError::Config(format!("Invalid max inherit depth: {}", e)))?;
        }
        if let Ok(level) = env::var("ACL_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(json) = env::var("ACL_LOG_JSON") {
            config.logging.json = json
                .parse()
                .map_err(|e| AclError::Config(format!("Invalid log json flag: {}", e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Get access control configuration
    pub fn acl(&self) -> &AclConfig {
        &self.acl
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.acl
            .validate()
            .map_err(|e| AclError::Config(format!("ACL config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| AclError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.acl = self.acl.merge(other.acl);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AclError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
