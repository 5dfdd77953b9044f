//! Entity store doubles

use async_trait::async_trait;
use entity_acl::{AclError, EntityDocument, EntityKind, EntityStore, MemoryStore, Result};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Memory store whose saves can be made to fail
#[derive(Debug, Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    failing: AtomicBool,
    saves: AtomicUsize,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_saves(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of save attempts, failed ones included
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }
}

#[async_trait]
impl EntityStore for FlakyStore {
    async fn save(&self, document: EntityDocument) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AclError::storage(format!(
                "write rejected for {}",
                document.key()
            )));
        }
        self.inner.save(document).await
    }

    async fn load(&self, kind: EntityKind, key: &str) -> Result<Option<EntityDocument>> {
        self.inner.load(kind, key).await
    }

    async fn delete(&self, kind: EntityKind, key: &str) -> Result<bool> {
        self.inner.delete(kind, key).await
    }
}
