//! Access control configuration

use super::*;
use crate::acl::registry::DEFAULT_MAX_INHERIT_DEPTH;
use crate::acl::role::Role;
use serde::{Deserialize, Serialize};

/// Access control configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclConfig {
    /// Maximum inheritance hops followed while resolving one permission
    #[serde(default = "default_max_inherit_depth")]
    pub max_inherit_depth: usize,
    /// Roles seeded into the store on bootstrap
    #[serde(default)]
    pub default_roles: Vec<RoleSeed>,
}

impl Default for AclConfig {
    fn default() -> Self {
        Self {
            max_inherit_depth: default_max_inherit_depth(),
            default_roles: Vec::new(),
        }
    }
}

impl AclConfig {
    /// Merge access control configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.max_inherit_depth != default_max_inherit_depth() {
            self.max_inherit_depth = other.max_inherit_depth;
        }
        if !other.default_roles.is_empty() {
            self.default_roles = other.default_roles;
        }
        self
    }
}

/// A role to create on bootstrap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSeed {
    pub machine_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_false")]
    pub is_super: bool,
    /// Permissions granted to the role
    #[serde(default)]
    pub grant: Vec<String>,
    /// Permissions explicitly revoked, overriding the inherited role
    #[serde(default)]
    pub revoke: Vec<String>,
    /// Machine name of the inherited role
    #[serde(default)]
    pub inherit: Option<String>,
}

impl RoleSeed {
    pub fn to_role(&self) -> Role {
        let mut role = Role::new(self.machine_name.trim())
            .with_title(&self.title)
            .with_super(self.is_super);
        role.set_description(self.description.as_deref());
        role.set_inherit(self.inherit.as_deref().map(str::trim));
        role.grant(&self.grant);
        role.revoke(&self.revoke);
        role
    }
}

fn default_max_inherit_depth() -> usize {
    DEFAULT_MAX_INHERIT_DEPTH
}
