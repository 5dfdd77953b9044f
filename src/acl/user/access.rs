//! Permission access and credential checks

use super::types::{RoleBinding, User};
use crate::acl::registry::RoleLookup;
use crate::acl::sanitize::sanitize_password;
use crate::acl::types::PermissionList;
use crate::utils::crypto::CredentialHasher;
use crate::utils::error::Result;
use tracing::{debug, warn};

impl User {
    /// Determine if a permission or permissions are granted by any role
    ///
    /// Each permission needs at least one resolved role that grants it;
    /// placeholders never count.
    pub fn access<P, L>(&self, permissions: &P, lookup: &L) -> bool
    where
        P: PermissionList + ?Sized,
        L: RoleLookup + ?Sized,
    {
        let permissions = permissions.permission_names();
        if permissions.is_empty() {
            debug!(
                "Empty permission request for user {} resolves as granted",
                self.email
            );
        }

        permissions.into_iter().all(|permission| {
            self.roles.values().any(|binding| match binding {
                RoleBinding::Resolved { handle, .. } => handle.read().granted(permission, lookup),
                RoleBinding::Unresolved(_) => false,
            })
        })
    }

    /// Determines if the candidate matches the stored password
    pub fn password_match<H: CredentialHasher + ?Sized>(&self, candidate: &str, hasher: &H) -> bool {
        let Some(hash) = self.password_hash.as_deref() else {
            debug!("User {} has no password set", self.email);
            return false;
        };

        match hasher.verify(candidate, hash) {
            Ok(matched) => matched,
            Err(e) => {
                warn!("Password verification failed for user {}: {}", self.email, e);
                false
            }
        }
    }

    /// Sanitize and hash a raw password value, then store the hash
    pub fn set_password<H: CredentialHasher + ?Sized>(
        &mut self,
        value: &serde_json::Value,
        hasher: &H,
    ) -> Result<()> {
        self.password_hash = Some(sanitize_password(value, hasher)?);
        Ok(())
    }
}
