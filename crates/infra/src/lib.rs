//! Infrastructure layer: persistence adapters for the inventory.

pub mod repository;

pub use repository::{
    DEFAULT_INVENTORY_FILE, InMemoryRepository, InventoryRepository, JsonFileRepository,
    PersistenceError, load_inventory, save_inventory,
};
