use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use stocktake_core::{InventoryError, InventoryResult, ItemName, Quantity};

use crate::activity::ActivityLog;

/// Threshold used by [`Inventory::check_low_default`].
pub const DEFAULT_LOW_THRESHOLD: i64 = 5;

/// In-memory stock levels keyed by item name.
///
/// Keys are plain strings: any name that reaches the store (including one
/// read back from disk) is kept verbatim. Validation of untyped input happens
/// in [`Inventory::add_from_text`] via [`ItemName`].
///
/// Iteration follows insertion order, which is also the order used by the
/// report, by low-stock queries and by serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    stock: IndexMap<String, i64>,
}

/// Outcome of a successful [`Inventory::remove`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The entry survives with this quantity.
    Remaining(i64),
    /// The quantity reached zero or below and the entry was dropped.
    Deleted,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increase the stock of `item` by `quantity`, creating the entry at 0.
    ///
    /// An empty item name is ignored and leaves both the inventory and `log`
    /// untouched. Any other name, blank ones included, is stored as given.
    /// Negative quantities are accepted as-is.
    pub fn add(
        &mut self,
        item: &str,
        quantity: i64,
        log: Option<&mut ActivityLog>,
    ) -> InventoryResult<()> {
        if item.is_empty() {
            tracing::debug!("ignoring add for empty item name");
            return Ok(());
        }

        let current = self.stock.entry(item.to_string()).or_insert(0);
        *current = current
            .checked_add(quantity)
            .ok_or_else(|| InventoryError::overflow(item))?;

        tracing::debug!(item, quantity, "stock added");
        if let Some(log) = log {
            log.record(format!("Added {quantity} of {item}"));
        }
        Ok(())
    }

    /// Strict variant of [`Inventory::add`] for untyped text input.
    ///
    /// Both values must parse (`ItemName` rejects blank names, `Quantity`
    /// rejects non-integers); otherwise a validation error is returned and
    /// nothing changes.
    pub fn add_from_text(
        &mut self,
        item: &str,
        quantity: &str,
        log: Option<&mut ActivityLog>,
    ) -> InventoryResult<()> {
        let name = ItemName::parse(item)?;
        let quantity = Quantity::parse(quantity)?;
        self.add(name.as_str(), quantity.get(), log)
    }

    /// Decrease the stock of `item` by `quantity`.
    ///
    /// Drops the entry once its quantity is zero or below. A missing item
    /// leaves the inventory unchanged, logs `item not found`, and returns
    /// [`InventoryError::NotFound`] for the caller to handle or ignore.
    pub fn remove(&mut self, item: &str, quantity: i64) -> InventoryResult<Removal> {
        let Some(current) = self.stock.get_mut(item) else {
            tracing::info!(item, "item not found");
            return Err(InventoryError::not_found(item));
        };

        let updated = current
            .checked_sub(quantity)
            .ok_or_else(|| InventoryError::overflow(item))?;

        if updated <= 0 {
            self.stock.shift_remove(item);
            tracing::debug!(item, "stock depleted, entry removed");
            Ok(Removal::Deleted)
        } else {
            *current = updated;
            tracing::debug!(item, remaining = updated, "stock removed");
            Ok(Removal::Remaining(updated))
        }
    }

    pub fn get_quantity(&self, item: &str) -> InventoryResult<i64> {
        self.stock
            .get(item)
            .copied()
            .ok_or_else(|| InventoryError::not_found(item))
    }

    /// Items whose quantity is strictly below `threshold`, in iteration order.
    pub fn check_low(&self, threshold: i64) -> Vec<&str> {
        self.stock
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn check_low_default(&self) -> Vec<&str> {
        self.check_low(DEFAULT_LOW_THRESHOLD)
    }

    /// Swap in a whole new set of stock levels (used when loading from disk).
    pub fn replace_with(&mut self, other: Inventory) {
        *self = other;
    }

    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.stock.iter().map(|(name, qty)| (name.as_str(), *qty))
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self {
            stock: iter.into_iter().map(|(name, qty)| (name.into(), qty)).collect(),
        }
    }
}
