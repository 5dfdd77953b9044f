//! User type definitions

use crate::acl::role::RoleHandle;
use crate::acl::types::RoleRef;
use std::collections::BTreeMap;

/// A role assigned to a user
#[derive(Debug, Clone)]
pub enum RoleBinding {
    /// Bound to a loaded role
    Resolved {
        handle: RoleHandle,
        /// Reference persisted for this binding
        link: RoleRef,
    },
    /// Placeholder recorded by name, waiting to be hydrated from the store
    Unresolved(RoleRef),
}

impl RoleBinding {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    pub fn handle(&self) -> Option<&RoleHandle> {
        match self {
            Self::Resolved { handle, .. } => Some(handle),
            Self::Unresolved(_) => None,
        }
    }

    /// Persisted reference for this binding
    ///
    /// A hydrated binding keeps the reference it was loaded from.
    pub fn to_ref(&self) -> RoleRef {
        match self {
            Self::Resolved { link, .. } => link.clone(),
            Self::Unresolved(placeholder) => placeholder.clone(),
        }
    }
}

/// User account
#[derive(Debug, Clone, Default)]
pub struct User {
    /// Email address, the user's key
    pub(crate) email: String,
    /// The name the user wishes to use for display purposes
    pub(crate) display_name: Option<String>,
    /// One-way hash of the account secret
    pub(crate) password_hash: Option<String>,
    /// Role bindings keyed by role machine name
    pub(crate) roles: BTreeMap<String, RoleBinding>,
}

impl User {
    /// Create a user with no roles, email trimmed
    pub fn new<S: AsRef<str>>(email: S) -> Self {
        Self {
            email: email.as_ref().trim().to_string(),
            ..Self::default()
        }
    }

    pub fn with_display_name<S: AsRef<str>>(mut self, display_name: S) -> Self {
        self.display_name = Some(display_name.as_ref().trim().to_string());
        self
    }

    /// Use an already computed credential hash
    pub fn with_password_hash<S: Into<String>>(mut self, hash: S) -> Self {
        self.password_hash = Some(hash.into());
        self
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }

    /// Machine names of all bound roles, resolved or not
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    pub fn bindings(&self) -> impl Iterator<Item = (&str, &RoleBinding)> {
        self.roles.iter().map(|(name, binding)| (name.as_str(), binding))
    }

    pub fn binding(&self, machine_name: &str) -> Option<&RoleBinding> {
        self.roles.get(machine_name)
    }
}
