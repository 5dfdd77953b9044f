//! Permission grants and resolution

use super::types::Role;
use crate::acl::registry::RoleLookup;
use crate::acl::types::{PermissionList, PermissionState};
use tracing::{debug, warn};

impl Role {
    /// Grant permissions to this role
    pub fn grant<P: PermissionList + ?Sized>(&mut self, permissions: &P) {
        for permission in permissions.permission_names() {
            self.permissions
                .insert(permission.to_string(), PermissionState::Granted);
        }
    }

    /// Revoke permissions from this role
    ///
    /// A revoked permission is denied even when the inherited role grants it.
    pub fn revoke<P: PermissionList + ?Sized>(&mut self, permissions: &P) {
        for permission in permissions.permission_names() {
            self.permissions
                .insert(permission.to_string(), PermissionState::Revoked);
        }
    }

    /// Return permissions to the unset state
    pub fn reset<P: PermissionList + ?Sized>(&mut self, permissions: &P) {
        for permission in permissions.permission_names() {
            self.permissions.remove(permission);
        }
    }

    /// State of a permission in this role's own map
    pub fn state(&self, permission: &str) -> PermissionState {
        self.permissions
            .get(permission)
            .copied()
            .unwrap_or(PermissionState::Unset)
    }

    /// Determine if a permission or permissions have been granted
    ///
    /// Every requested permission must resolve to granted. Unset permissions
    /// fall back to the inherited role, looked up through `lookup`.
    pub fn granted<P, L>(&self, permissions: &P, lookup: &L) -> bool
    where
        P: PermissionList + ?Sized,
        L: RoleLookup + ?Sized,
    {
        if self.is_super {
            return true;
        }

        let permissions = permissions.permission_names();
        if permissions.is_empty() {
            debug!(
                "Empty permission request against role {} resolves as granted",
                self.machine_name
            );
        }

        permissions
            .into_iter()
            .all(|permission| self.resolves(permission, lookup, 0))
    }

    /// Resolve a single permission, `depth` inheritance hops from the
    /// role the query started at
    pub(crate) fn resolves<L: RoleLookup + ?Sized>(
        &self,
        permission: &str,
        lookup: &L,
        depth: usize,
    ) -> bool {
        if self.is_super {
            return true;
        }

        match self.state(permission) {
            PermissionState::Granted => true,
            PermissionState::Revoked => false,
            PermissionState::Unset => {
                let Some(parent) = self.inherit.as_deref() else {
                    return false;
                };

                if depth >= lookup.max_inherit_depth() {
                    warn!(
                        "Inheritance depth limit {} reached at role {} while resolving {}; check for an inheritance cycle",
                        lookup.max_inherit_depth(),
                        self.machine_name,
                        permission
                    );
                    return false;
                }

                match lookup.role(parent) {
                    Some(handle) => handle
                        .read_recursive()
                        .resolves(permission, lookup, depth + 1),
                    None => {
                        debug!(
                            "Role {} inherits from unknown role {}",
                            self.machine_name, parent
                        );
                        false
                    }
                }
            }
        }
    }
}
