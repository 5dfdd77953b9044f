//! Shared role references

use super::types::Role;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::fmt;
use std::sync::Arc;

/// Shared, mutable reference to a [`Role`]
///
/// Users and the role registry hold clones of the same handle, so a change
/// made through one is seen by all of them.
#[derive(Clone)]
pub struct RoleHandle(Arc<RwLock<Role>>);

impl RoleHandle {
    pub fn new(role: Role) -> Self {
        Self(Arc::new(RwLock::new(role)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Role> {
        self.0.read()
    }

    /// Read lock that never waits on a queued writer
    ///
    /// Used while walking an inheritance chain, which may revisit a role
    /// whose lock this thread already holds.
    pub(crate) fn read_recursive(&self) -> RwLockReadGuard<'_, Role> {
        self.0.read_recursive()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Role> {
        self.0.write()
    }

    pub fn machine_name(&self) -> String {
        self.read().machine_name().to_string()
    }

    /// Whether both handles point at the same role instance
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Copy of the current role state
    pub fn snapshot(&self) -> Role {
        self.read().clone()
    }
}

impl From<Role> for RoleHandle {
    fn from(role: Role) -> Self {
        Self::new(role)
    }
}

impl fmt::Debug for RoleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RoleHandle").field(&*self.read_recursive()).finish()
    }
}
