//! Inventory persistence boundary.
//!
//! The store is always read and written whole: `load` replaces the in-memory
//! inventory, `save` overwrites the previous snapshot. There is no atomic
//! rename, backup or file locking.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryRepository;
pub use json_file::{DEFAULT_INVENTORY_FILE, JsonFileRepository, load_inventory, save_inventory};
pub use r#trait::{InventoryRepository, PersistenceError};
