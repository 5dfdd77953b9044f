//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::models::*;
use std::collections::HashSet;
use tracing::debug;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for AclConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating access control configuration");

        if self.max_inherit_depth == 0 {
            return Err("max_inherit_depth must be at least 1".to_string());
        }

        let mut seen = HashSet::new();
        for seed in &self.default_roles {
            seed.validate()?;
            if !seen.insert(seed.machine_name.trim()) {
                return Err(format!(
                    "Duplicate default role machine_name: {}",
                    seed.machine_name
                ));
            }
        }

        Ok(())
    }
}

impl Validate for RoleSeed {
    fn validate(&self) -> Result<(), String> {
        let name = self.machine_name.trim();
        if name.is_empty() {
            return Err("Default role machine_name cannot be empty".to_string());
        }

        if self.inherit.as_deref().map(str::trim) == Some(name) {
            return Err(format!("Default role {} cannot inherit from itself", name));
        }

        if let Some(permission) = self.grant.iter().chain(&self.revoke).find(|p| p.is_empty()) {
            return Err(format!(
                "Default role {} has an empty permission name {:?}",
                name, permission
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
