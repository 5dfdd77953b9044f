//! Shared access control type definitions

use serde::{Deserialize, Serialize};

/// Entity type of a role, as recorded in placeholders and documents
pub const ROLE_KIND: &str = "acl-role";

/// Entity type of a user
pub const USER_KIND: &str = "acl-user";

/// State of one permission in a role's permission map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PermissionState {
    /// Explicitly granted
    Granted,
    /// Explicitly revoked; stops inheritance fallback
    Revoked,
    /// Never set, or reset; the only state that falls back to the parent
    #[default]
    Unset,
}

impl PermissionState {
    /// Stored boolean form, `None` for [`PermissionState::Unset`]
    pub fn as_stored(self) -> Option<bool> {
        match self {
            Self::Granted => Some(true),
            Self::Revoked => Some(false),
            Self::Unset => None,
        }
    }

    pub fn from_stored(value: bool) -> Self {
        if value { Self::Granted } else { Self::Revoked }
    }
}

/// Reference to a role by type and machine name
///
/// This is both the persisted shape of a role link and the placeholder a user
/// holds for a role granted by bare name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRef {
    /// Entity type, `acl-role` for roles
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional entity subtype
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    /// Machine name of the referenced role
    pub machine_name: String,
}

impl RoleRef {
    /// Reference to an `acl-role` entity
    pub fn role<S: Into<String>>(machine_name: S) -> Self {
        Self {
            kind: ROLE_KIND.to_string(),
            subtype: None,
            machine_name: machine_name.into(),
        }
    }

    /// Whether this points at an `acl-role` entity
    pub fn is_role(&self) -> bool {
        self.kind == ROLE_KIND
    }
}

/// One permission name or a batch of them
///
/// Implemented for single names and for slices, arrays and vectors of names,
/// so that every permission operation accepts either form.
pub trait PermissionList {
    fn permission_names(&self) -> Vec<&str>;
}

impl PermissionList for str {
    fn permission_names(&self) -> Vec<&str> {
        vec![self]
    }
}

impl PermissionList for &str {
    fn permission_names(&self) -> Vec<&str> {
        vec![*self]
    }
}

impl PermissionList for String {
    fn permission_names(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl<S: AsRef<str>> PermissionList for [S] {
    fn permission_names(&self) -> Vec<&str> {
        self.iter().map(AsRef::as_ref).collect()
    }
}

impl<S: AsRef<str>, const N: usize> PermissionList for [S; N] {
    fn permission_names(&self) -> Vec<&str> {
        self.iter().map(AsRef::as_ref).collect()
    }
}

impl<S: AsRef<str>> PermissionList for Vec<S> {
    fn permission_names(&self) -> Vec<&str> {
        self.iter().map(AsRef::as_ref).collect()
    }
}
