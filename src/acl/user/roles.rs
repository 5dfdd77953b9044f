//! Role assignment

use super::types::{RoleBinding, User};
use crate::acl::role::RoleHandle;
use crate::acl::types::RoleRef;
use tracing::debug;

/// Something that identifies a role: a bare machine name or a loaded role
///
/// Granting a loaded role binds it immediately; granting a bare name records
/// an unresolved placeholder.
pub trait RoleKey {
    fn role_key(&self) -> String;

    fn to_binding(&self) -> RoleBinding;
}

impl RoleKey for str {
    fn role_key(&self) -> String {
        self.to_string()
    }

    fn to_binding(&self) -> RoleBinding {
        RoleBinding::Unresolved(RoleRef::role(self))
    }
}

impl RoleKey for String {
    fn role_key(&self) -> String {
        self.clone()
    }

    fn to_binding(&self) -> RoleBinding {
        self.as_str().to_binding()
    }
}

impl RoleKey for RoleHandle {
    fn role_key(&self) -> String {
        self.machine_name()
    }

    fn to_binding(&self) -> RoleBinding {
        RoleBinding::Resolved {
            handle: self.clone(),
            link: RoleRef::role(self.machine_name()),
        }
    }
}

impl User {
    /// Grant a role to this user
    ///
    /// Does nothing when a binding with the same name exists, even if that
    /// binding is an unresolved placeholder. Returns whether a binding was
    /// added.
    pub fn grant<R: RoleKey + ?Sized>(&mut self, role: &R) -> bool {
        let name = role.role_key();
        if self.roles.contains_key(&name) {
            debug!("User {} already holds role {}", self.email, name);
            return false;
        }

        self.roles.insert(name, role.to_binding());
        true
    }

    /// Revoke a role from this user; returns whether it was bound
    pub fn revoke<R: RoleKey + ?Sized>(&mut self, role: &R) -> bool {
        self.roles.remove(&role.role_key()).is_some()
    }

    /// Determine if a role has been granted and resolved
    pub fn granted<R: RoleKey + ?Sized>(&self, role: &R) -> bool {
        self.roles
            .get(&role.role_key())
            .is_some_and(RoleBinding::is_resolved)
    }

    /// Replace a placeholder with a resolved handle, keeping its reference
    ///
    /// Used by hydration; unlike [`User::grant`] this overwrites placeholders.
    pub(crate) fn bind_resolved(&mut self, key: String, handle: RoleHandle, link: RoleRef) {
        self.roles.insert(key, RoleBinding::Resolved { handle, link });
    }
}
