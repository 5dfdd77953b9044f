//! Role lookup for inheritance resolution

use super::role::{Role, RoleHandle};
use dashmap::DashMap;
use tracing::debug;

/// Default bound on inheritance hops during one resolution
pub const DEFAULT_MAX_INHERIT_DEPTH: usize = 16;

/// Resolves inherited role names at query time
pub trait RoleLookup {
    /// Find a role by machine name
    fn role(&self, machine_name: &str) -> Option<RoleHandle>;

    /// Maximum number of inheritance hops a single resolution may take
    fn max_inherit_depth(&self) -> usize {
        DEFAULT_MAX_INHERIT_DEPTH
    }
}

/// Lookup that resolves nothing, for evaluating roles in isolation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInherit;

impl RoleLookup for NoInherit {
    fn role(&self, _machine_name: &str) -> Option<RoleHandle> {
        None
    }
}

/// In-memory set of loaded roles keyed by machine name
#[derive(Debug)]
pub struct RoleRegistry {
    roles: DashMap<String, RoleHandle>,
    max_inherit_depth: usize,
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INHERIT_DEPTH)
    }
}

impl RoleRegistry {
    pub fn new(max_inherit_depth: usize) -> Self {
        Self {
            roles: DashMap::new(),
            max_inherit_depth,
        }
    }

    /// Register a role, replacing any role with the same machine name
    pub fn insert(&self, role: Role) -> RoleHandle {
        let handle = RoleHandle::new(role);
        self.insert_handle(handle.clone());
        handle
    }

    /// Register an existing handle
    pub fn insert_handle(&self, handle: RoleHandle) {
        let name = handle.machine_name();
        debug!("Registering role {}", name);
        self.roles.insert(name, handle);
    }

    /// Register a role, overwriting a registered role of the same name in
    /// place so existing handles see the new state
    pub fn upsert(&self, role: Role) -> RoleHandle {
        match self.get(role.machine_name()) {
            Some(existing) => {
                *existing.write() = role;
                existing
            }
            None => self.insert(role),
        }
    }

    pub fn get(&self, machine_name: &str) -> Option<RoleHandle> {
        self.roles.get(machine_name).map(|entry| entry.value().clone())
    }

    pub fn remove(&self, machine_name: &str) -> Option<RoleHandle> {
        self.roles.remove(machine_name).map(|(_, handle)| handle)
    }

    pub fn contains(&self, machine_name: &str) -> bool {
        self.roles.contains_key(machine_name)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Machine names of all registered roles, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.roles.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }
}

impl RoleLookup for RoleRegistry {
    fn role(&self, machine_name: &str) -> Option<RoleHandle> {
        self.get(machine_name)
    }

    fn max_inherit_depth(&self) -> usize {
        self.max_inherit_depth
    }
}
