//! Role type definitions

use crate::acl::types::PermissionState;
use std::collections::HashMap;

/// Role definition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Role {
    /// Unique machine name
    pub(crate) machine_name: String,
    /// Human readable title
    pub(crate) title: String,
    /// Role description
    pub(crate) description: Option<String>,
    /// Super roles are granted every permission
    pub(crate) is_super: bool,
    /// Granted and revoked permissions; unset names are absent
    pub(crate) permissions: HashMap<String, PermissionState>,
    /// Machine name of the inherited role
    pub(crate) inherit: Option<String>,
}

impl Role {
    /// Create an empty role
    pub fn new<S: Into<String>>(machine_name: S) -> Self {
        Self {
            machine_name: machine_name.into(),
            ..Self::default()
        }
    }

    /// Set the title, trimmed
    pub fn with_title<S: AsRef<str>>(mut self, title: S) -> Self {
        self.set_title(title);
        self
    }

    /// Set the description, trimmed
    pub fn with_description<S: AsRef<str>>(mut self, description: S) -> Self {
        self.set_description(Some(description));
        self
    }

    pub fn with_super(mut self, is_super: bool) -> Self {
        self.is_super = is_super;
        self
    }

    /// Inherit unset permissions from the named role
    pub fn inheriting<S: Into<String>>(mut self, parent: S) -> Self {
        self.inherit = Some(parent.into());
        self
    }

    pub fn machine_name(&self) -> &str {
        &self.machine_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title<S: AsRef<str>>(&mut self, title: S) {
        self.title = title.as_ref().trim().to_string();
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description<S: AsRef<str>>(&mut self, description: Option<S>) {
        self.description = description.map(|d| d.as_ref().trim().to_string());
    }

    pub fn is_super(&self) -> bool {
        self.is_super
    }

    pub fn set_super(&mut self, is_super: bool) {
        self.is_super = is_super;
    }

    pub fn inherit(&self) -> Option<&str> {
        self.inherit.as_deref()
    }

    /// Set or clear the inherited role
    ///
    /// The inheritance chain must stay acyclic; a cycle is only caught by the
    /// depth guard at query time.
    pub fn set_inherit<S: Into<String>>(&mut self, parent: Option<S>) {
        self.inherit = parent.map(Into::into);
    }

    /// Explicitly set permissions, in no particular order
    pub fn permissions(&self) -> impl Iterator<Item = (&str, PermissionState)> {
        self.permissions
            .iter()
            .map(|(name, state)| (name.as_str(), *state))
    }
}
