//! In-process entity store

use super::EntityStore;
use super::documents::{EntityDocument, EntityKind};
use crate::utils::error::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

/// Entity store holding serialized documents in memory
///
/// Documents go through the same JSON form a document database would see,
/// so loads never share state with the saved entity.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: DashMap<(EntityKind, String), serde_json::Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Raw stored JSON for a document
    pub fn raw(&self, kind: EntityKind, key: &str) -> Option<serde_json::Value> {
        self.documents
            .get(&(kind, key.to_string()))
            .map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn save(&self, document: EntityDocument) -> Result<()> {
        let key = (document.kind(), document.key().to_string());
        let value = serde_json::to_value(&document)?;
        debug!("Saving {} {}", key.0, key.1);
        self.documents.insert(key, value);
        Ok(())
    }

    async fn load(&self, kind: EntityKind, key: &str) -> Result<Option<EntityDocument>> {
        let Some(value) = self.raw(kind, key) else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_value(value)?))
    }

    async fn delete(&self, kind: EntityKind, key: &str) -> Result<bool> {
        Ok(self.documents.remove(&(kind, key.to_string())).is_some())
    }
}
