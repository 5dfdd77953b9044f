//! # entity-acl
//!
//! Role and user access control for entity stores.
//!
//! ## Features
//!
//! - **Tri-state permissions**: each permission on a role is granted, revoked or unset
//! - **Single-parent inheritance**: unset permissions fall back to one inherited role
//! - **Super roles**: granted every permission, revocations included
//! - **User access**: a permission is granted when any resolved role grants it
//! - **Pluggable collaborators**: entity store and credential hasher are traits
//!
//! ## Quick Start
//!
//! ```rust
//! use entity_acl::{Role, RoleRegistry, User};
//!
//! let registry = RoleRegistry::default();
//!
//! let mut editor = Role::new("editor");
//! editor.grant("edit");
//! registry.insert(editor);
//!
//! let mut admin = Role::new("admin").inheriting("editor");
//! admin.grant("publish");
//! let admin = registry.insert(admin);
//!
//! let mut user = User::new("jane@example.com");
//! user.grant(&admin);
//!
//! assert!(user.access(&["edit", "publish"], &registry));
//! ```
//!
//! ## With a store
//!
//! ```rust,no_run
//! use entity_acl::{AclSystem, Argon2Hasher, Config, MemoryStore, Role};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/acl.yaml").await?;
//!     let acl = AclSystem::new(config.acl(), MemoryStore::new(), Argon2Hasher)?;
//!     acl.bootstrap().await?;
//!
//!     let editor = acl.create_role(Role::new("editor")).await?;
//!     acl.grant_permissions(&editor, "edit").await?;
//!
//!     if let Some(user) = acl.load_user("jane@example.com").await? {
//!         println!("can edit: {}", acl.access(&user, "edit"));
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod acl;
pub mod config;
pub mod storage;
pub mod utils;

// Re-export main types
pub use acl::{
    AclSystem, NoInherit, PermissionList, PermissionState, Role, RoleBinding, RoleHandle,
    RoleKey, RoleLookup, RoleRef, RoleRegistry, User,
};
pub use config::Config;
pub use storage::{EntityDocument, EntityKind, EntityStore, MemoryStore};
pub use utils::crypto::{Argon2Hasher, CredentialHasher};
pub use utils::error::{AclError, Result};
pub use utils::logging::init_logging;

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
