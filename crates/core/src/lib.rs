//! `stocktake-core` — inventory foundation building blocks.
//!
//! Typed boundary values and the shared error model. No IO.

pub mod error;
pub mod id;
pub mod quantity;
pub mod value_object;

pub use error::{InventoryError, InventoryResult};
pub use id::ItemName;
pub use quantity::Quantity;
pub use value_object::ValueObject;
