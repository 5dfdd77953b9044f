//! Storage layer for access control entities
//!
//! The core never talks to a backend directly. It hands whole documents to an
//! [`EntityStore`] and loads them back by kind and key.

pub mod documents;
pub mod memory;

pub use documents::{EntityDocument, EntityKind, RoleDocument, UserDocument};
pub use memory::MemoryStore;

use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence collaborator for roles and users
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Insert or replace a document
    async fn save(&self, document: EntityDocument) -> Result<()>;

    /// Load a document by kind and key
    async fn load(&self, kind: EntityKind, key: &str) -> Result<Option<EntityDocument>>;

    /// Delete a document; returns whether it existed
    async fn delete(&self, kind: EntityKind, key: &str) -> Result<bool>;
}
