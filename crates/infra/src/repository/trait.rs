use std::path::PathBuf;

use thiserror::Error;

use stocktake_inventory::Inventory;

/// Persistence failures. These always propagate to the caller.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored document is not a JSON object of item name -> integer.
    #[error("malformed inventory document {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode inventory: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("no inventory snapshot stored in {0}")]
    Missing(String),
}

impl PersistenceError {
    pub fn is_not_found(&self) -> bool {
        match self {
            PersistenceError::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            PersistenceError::Missing(_) => true,
            _ => false,
        }
    }
}

/// Whole-snapshot storage for an [`Inventory`].
pub trait InventoryRepository: Send + Sync {
    /// Read the stored snapshot.
    fn load(&self) -> Result<Inventory, PersistenceError>;

    /// Overwrite the stored snapshot with `inventory`.
    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError>;

    /// Replace `inventory` wholesale with the stored snapshot.
    ///
    /// On error `inventory` is left untouched.
    fn load_into(&self, inventory: &mut Inventory) -> Result<(), PersistenceError> {
        let loaded = self.load()?;
        inventory.replace_with(loaded);
        Ok(())
    }
}
