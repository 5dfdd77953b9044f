//! Access control system wiring
//!
//! Connects the in-memory entities to an [`EntityStore`] and a
//! [`CredentialHasher`]. Mutations always change memory first and then save;
//! a failed save is returned as-is and the in-memory change stays.

use super::registry::{RoleLookup, RoleRegistry};
use super::role::{Role, RoleHandle};
use super::types::{PermissionList, RoleRef};
use super::user::{RoleBinding, RoleKey, User};
use crate::config::{AclConfig, Validate};
use crate::storage::{EntityDocument, EntityKind, EntityStore};
use crate::utils::crypto::CredentialHasher;
use crate::utils::error::{AclError, Result};
use tracing::{debug, info, warn};

/// Access control system for managing roles and users
#[derive(Debug)]
pub struct AclSystem<S, H> {
    /// Access control configuration
    config: AclConfig,
    /// Loaded roles
    registry: RoleRegistry,
    /// Persistence collaborator
    store: S,
    /// Credential hashing collaborator
    hasher: H,
}

impl<S: EntityStore, H: CredentialHasher> AclSystem<S, H> {
    /// Create a new access control system
    pub fn new(config: &AclConfig, store: S, hasher: H) -> Result<Self> {
        info!("Initializing access control system");

        config
            .validate()
            .map_err(|e| AclError::Config(format!("ACL config error: {}", e)))?;

        Ok(Self {
            config: config.clone(),
            registry: RoleRegistry::new(config.max_inherit_depth),
            store,
            hasher,
        })
    }

    pub fn config(&self) -> &AclConfig {
        &self.config
    }

    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Consume the system and hand back its store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Seed the configured default roles
    ///
    /// Roles already in the store are loaded instead of overwritten. Returns
    /// the number of roles created.
    pub async fn bootstrap(&self) -> Result<usize> {
        info!(
            "Seeding {} default roles",
            self.config.default_roles.len()
        );

        let mut created = 0;
        for seed in &self.config.default_roles {
            let name = seed.machine_name.trim();
            if self.load_role(name).await?.is_some() {
                debug!("Default role {} already stored", name);
                continue;
            }

            self.create_role(seed.to_role()).await?;
            created += 1;
        }

        info!("Access control bootstrap created {} roles", created);
        Ok(created)
    }

    // ==================== Roles ====================

    /// Register a role and persist it
    ///
    /// The role is registered even when the save fails.
    pub async fn create_role(&self, role: Role) -> Result<RoleHandle> {
        debug!("Creating role {}", role.machine_name());
        let handle = self.registry.upsert(role);
        self.save_role(&handle).await?;
        Ok(handle)
    }

    /// Persist the current state of a role
    pub async fn save_role(&self, role: &RoleHandle) -> Result<()> {
        let document = EntityDocument::from(&*role.read());
        self.store.save(document).await
    }

    /// Grant permissions to a role and persist it
    pub async fn grant_permissions<P>(&self, role: &RoleHandle, permissions: &P) -> Result<()>
    where
        P: PermissionList + Sync + ?Sized,
    {
        role.write().grant(permissions);
        self.save_role(role).await
    }

    /// Revoke permissions from a role and persist it
    pub async fn revoke_permissions<P>(&self, role: &RoleHandle, permissions: &P) -> Result<()>
    where
        P: PermissionList + Sync + ?Sized,
    {
        role.write().revoke(permissions);
        self.save_role(role).await
    }

    /// Reset permissions on a role and persist it
    pub async fn reset_permissions<P>(&self, role: &RoleHandle, permissions: &P) -> Result<()>
    where
        P: PermissionList + Sync + ?Sized,
    {
        role.write().reset(permissions);
        self.save_role(role).await
    }

    /// Determine if a role grants permissions, following inheritance
    /// through the registry
    pub fn role_granted<P: PermissionList + ?Sized>(&self, role: &RoleHandle, permissions: &P) -> bool {
        role.read().granted(permissions, &self.registry)
    }

    /// Loaded role by name, loading it from the store when needed
    pub async fn role(&self, machine_name: &str) -> Result<Option<RoleHandle>> {
        match self.registry.get(machine_name) {
            Some(handle) => Ok(Some(handle)),
            None => self.load_role(machine_name).await,
        }
    }

    /// Load a role and its inheritance chain from the store
    ///
    /// A role that is already registered is refreshed in place.
    pub async fn load_role(&self, machine_name: &str) -> Result<Option<RoleHandle>> {
        let Some(handle) = self.fetch_role(machine_name).await? else {
            debug!("Role {} not found in store", machine_name);
            return Ok(None);
        };

        self.load_inherit_chain(&handle).await?;
        Ok(Some(handle))
    }

    async fn fetch_role(&self, machine_name: &str) -> Result<Option<RoleHandle>> {
        let Some(document) = self.store.load(EntityKind::Role, machine_name).await? else {
            return Ok(None);
        };

        let document = document.into_role().ok_or_else(|| {
            AclError::storage(format!("Document {} is not a role", machine_name))
        })?;

        Ok(Some(self.registry.upsert(Role::from(document))))
    }

    async fn load_inherit_chain(&self, role: &RoleHandle) -> Result<()> {
        let mut next = role.read().inherit().map(str::to_string);
        let mut hops = 0;

        while let Some(parent) = next.take() {
            if hops >= self.registry.max_inherit_depth() {
                warn!(
                    "Stopped loading inheritance chain of {} at {} hops",
                    role.machine_name(),
                    hops
                );
                break;
            }
            hops += 1;

            let parent_handle = match self.registry.get(&parent) {
                Some(handle) => handle,
                None => match self.fetch_role(&parent).await? {
                    Some(handle) => handle,
                    None => {
                        debug!("Inherited role {} not found in store", parent);
                        break;
                    }
                },
            };

            next = parent_handle.read().inherit().map(str::to_string);
        }

        Ok(())
    }

    // ==================== Users ====================

    /// Create a user with a sanitized password and persist it
    pub async fn register_user(
        &self,
        email: &str,
        display_name: Option<&str>,
        password: &serde_json::Value,
    ) -> Result<User> {
        let mut user = User::new(email);
        if let Some(display_name) = display_name {
            user = user.with_display_name(display_name);
        }
        user.set_password(password, &self.hasher)?;

        info!("Registering user {}", user.email());
        self.save_user(&user).await?;
        Ok(user)
    }

    /// Persist the current state of a user
    pub async fn save_user(&self, user: &User) -> Result<()> {
        self.store.save(EntityDocument::from(user)).await
    }

    /// Grant a role to a user and persist the user
    ///
    /// When the user already holds the role nothing changes and nothing is
    /// saved. Returns whether a binding was added.
    pub async fn assign_role<R>(&self, user: &mut User, role: &R) -> Result<bool>
    where
        R: RoleKey + Sync + ?Sized,
    {
        if !user.grant(role) {
            return Ok(false);
        }

        self.save_user(user).await?;
        Ok(true)
    }

    /// Revoke a role from a user and persist the user
    pub async fn unassign_role<R>(&self, user: &mut User, role: &R) -> Result<bool>
    where
        R: RoleKey + Sync + ?Sized,
    {
        let removed = user.revoke(role);
        self.save_user(user).await?;
        Ok(removed)
    }

    /// Load a user and resolve its role placeholders
    pub async fn load_user(&self, email: &str) -> Result<Option<User>> {
        let Some(document) = self.store.load(EntityKind::User, email).await? else {
            debug!("User {} not found in store", email);
            return Ok(None);
        };

        let document = document
            .into_user()
            .ok_or_else(|| AclError::storage(format!("Document {} is not a user", email)))?;

        let mut user = User::from(document);
        self.hydrate(&mut user).await?;
        Ok(Some(user))
    }

    /// Replace role placeholders with loaded roles
    ///
    /// Placeholders for other entity types, or for roles the store does not
    /// hold, stay unresolved. Returns the number of bindings resolved.
    pub async fn hydrate(&self, user: &mut User) -> Result<usize> {
        let pending: Vec<(String, RoleRef)> = user
            .bindings()
            .filter_map(|(key, binding)| match binding {
                RoleBinding::Unresolved(placeholder) if placeholder.is_role() => {
                    Some((key.to_string(), placeholder.clone()))
                }
                RoleBinding::Unresolved(placeholder) => {
                    debug!(
                        "Skipping {} binding {} on user {}",
                        placeholder.kind,
                        key,
                        user.email()
                    );
                    None
                }
                RoleBinding::Resolved { .. } => None,
            })
            .collect();

        let mut resolved = 0;
        for (key, placeholder) in pending {
            let loaded = self.role(&placeholder.machine_name).await?;
            match loaded {
                Some(handle) => {
                    user.bind_resolved(key, handle, placeholder);
                    resolved += 1;
                }
                None => debug!(
                    "Role {} of user {} stays unresolved",
                    placeholder.machine_name,
                    user.email()
                ),
            }
        }

        Ok(resolved)
    }

    /// Determine if a user has access to permissions, following inheritance
    /// through the registry
    pub fn access<P: PermissionList + ?Sized>(&self, user: &User, permissions: &P) -> bool {
        user.access(permissions, &self.registry)
    }

    /// Load a user and check a candidate password
    ///
    /// Returns the hydrated user only when the password matches.
    pub async fn authenticate(&self, email: &str, candidate: &str) -> Result<Option<User>> {
        let Some(user) = self.load_user(email).await? else {
            return Ok(None);
        };

        if user.password_match(candidate, &self.hasher) {
            Ok(Some(user))
        } else {
            debug!("Password mismatch for user {}", email);
            Ok(None)
        }
    }
}
