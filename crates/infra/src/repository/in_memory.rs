use std::sync::{PoisonError, RwLock};

use stocktake_inventory::Inventory;

use super::r#trait::{InventoryRepository, PersistenceError};

/// In-memory snapshot store for tests/dev.
///
/// Keeps the encoded JSON document rather than the value, so `load` goes
/// through the same decoding path as the file-backed repository.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    document: RwLock<Option<String>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a raw document (may be malformed, for tests).
    pub fn with_document(raw: impl Into<String>) -> Self {
        Self {
            document: RwLock::new(Some(raw.into())),
        }
    }

    /// Current raw document. A poisoned lock still yields the last write.
    pub fn document(&self) -> Option<String> {
        self.document
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl InventoryRepository for InMemoryRepository {
    fn load(&self) -> Result<Inventory, PersistenceError> {
        let raw = self
            .document()
            .ok_or_else(|| PersistenceError::Missing("memory".to_string()))?;

        serde_json::from_str(&raw).map_err(|source| PersistenceError::Parse {
            path: "memory".into(),
            source,
        })
    }

    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(inventory).map_err(PersistenceError::Encode)?;
        let mut document = self.document.write().unwrap_or_else(PoisonError::into_inner);
        *document = Some(raw);
        Ok(())
    }
}
