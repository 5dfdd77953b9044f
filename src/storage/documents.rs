//! Persisted document shapes

use crate::acl::role::Role;
use crate::acl::types::{PermissionState, ROLE_KIND, RoleRef, USER_KIND};
use crate::acl::user::{RoleBinding, User};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::debug;

/// Entity types known to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    #[serde(rename = "acl-role")]
    Role,
    #[serde(rename = "acl-user")]
    User,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Role => ROLE_KIND,
            Self::User => USER_KIND,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored form of a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDocument {
    pub machine_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_super: bool,
    /// `true` for granted, `false` for revoked; unset names are absent
    #[serde(default)]
    pub permissions: BTreeMap<String, bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherit: Option<RoleRef>,
}

impl From<&Role> for RoleDocument {
    fn from(role: &Role) -> Self {
        Self {
            machine_name: role.machine_name().to_string(),
            title: role.title().to_string(),
            description: role.description().map(str::to_string),
            is_super: role.is_super(),
            permissions: role
                .permissions()
                .filter_map(|(name, state)| state.as_stored().map(|v| (name.to_string(), v)))
                .collect(),
            inherit: role.inherit().map(RoleRef::role),
        }
    }
}

impl From<RoleDocument> for Role {
    fn from(document: RoleDocument) -> Self {
        let inherit = match document.inherit {
            Some(link) if link.is_role() => Some(link.machine_name),
            Some(link) => {
                debug!(
                    "Ignoring inherit link of role {} to non-role entity {}",
                    document.machine_name, link.kind
                );
                None
            }
            None => None,
        };

        Self {
            machine_name: document.machine_name,
            title: document.title.trim().to_string(),
            description: document.description.map(|d| d.trim().to_string()),
            is_super: document.is_super,
            permissions: document
                .permissions
                .into_iter()
                .map(|(name, value)| (name, PermissionState::from_stored(value)))
                .collect::<HashMap<_, _>>(),
            inherit,
        }
    }
}

/// Stored form of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Credential hash, never plaintext
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub roles: BTreeMap<String, RoleRef>,
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            email: user.email().to_string(),
            display_name: user.display_name().map(str::to_string),
            password: user.password_hash().map(str::to_string),
            roles: user
                .bindings()
                .map(|(name, binding)| (name.to_string(), binding.to_ref()))
                .collect(),
        }
    }
}

/// Loaded users start with every binding unresolved; hydration binds them
impl From<UserDocument> for User {
    fn from(document: UserDocument) -> Self {
        Self {
            email: document.email.trim().to_string(),
            display_name: document.display_name.map(|d| d.trim().to_string()),
            password_hash: document.password,
            roles: document
                .roles
                .into_iter()
                .map(|(name, link)| (name, RoleBinding::Unresolved(link)))
                .collect(),
        }
    }
}

/// Any document the store can hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EntityDocument {
    #[serde(rename = "acl-role")]
    Role(RoleDocument),
    #[serde(rename = "acl-user")]
    User(UserDocument),
}

impl EntityDocument {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Role(_) => EntityKind::Role,
            Self::User(_) => EntityKind::User,
        }
    }

    /// Store key: machine name for roles, email for users
    pub fn key(&self) -> &str {
        match self {
            Self::Role(role) => &role.machine_name,
            Self::User(user) => &user.email,
        }
    }

    pub fn into_role(self) -> Option<RoleDocument> {
        match self {
            Self::Role(role) => Some(role),
            Self::User(_) => None,
        }
    }

    pub fn into_user(self) -> Option<UserDocument> {
        match self {
            Self::User(user) => Some(user),
            Self::Role(_) => None,
        }
    }
}

impl From<&Role> for EntityDocument {
    fn from(role: &Role) -> Self {
        Self::Role(role.into())
    }
}

impl From<&User> for EntityDocument {
    fn from(user: &User) -> Self {
        Self::User(user.into())
    }
}
