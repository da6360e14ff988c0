use std::fs;
use std::path::{Path, PathBuf};

use stocktake_inventory::Inventory;

use super::r#trait::{InventoryRepository, PersistenceError};

/// File used when no path is configured.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// Inventory snapshot stored as a UTF-8 JSON object `{ "<item>": <qty>, ... }`.
///
/// The file is read and written as a single blob. A crash while writing can
/// leave it truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_FILE)
    }
}

impl InventoryRepository for JsonFileRepository {
    fn load(&self) -> Result<Inventory, PersistenceError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;

        let inventory: Inventory =
            serde_json::from_str(&raw).map_err(|source| PersistenceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!(path = %self.path.display(), items = inventory.len(), "inventory loaded");
        Ok(inventory)
    }

    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(inventory).map_err(PersistenceError::Encode)?;
        fs::write(&self.path, raw).map_err(|e| self.io_error(e))?;

        tracing::info!(path = %self.path.display(), items = inventory.len(), "inventory saved");
        Ok(())
    }
}

/// Read `path` and return its inventory snapshot.
pub fn load_inventory(path: impl AsRef<Path>) -> Result<Inventory, PersistenceError> {
    JsonFileRepository::new(path.as_ref()).load()
}

/// Overwrite `path` with a snapshot of `inventory`.
pub fn save_inventory(path: impl AsRef<Path>, inventory: &Inventory) -> Result<(), PersistenceError> {
    JsonFileRepository::new(path.as_ref()).save(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_repository_uses_inventory_json() {
        let repo = JsonFileRepository::default();
        assert_eq!(repo.path(), Path::new("inventory.json"));
    }

    #[test]
    fn missing_file_is_io_not_found() {
        let repo = JsonFileRepository::new("definitely/not/here/inventory.json");
        let err = repo.load().unwrap_err();
        assert!(matches!(err, PersistenceError::Io { .. }));
        assert!(err.is_not_found());
    }
}
