//! Strongly-typed item identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;
use crate::value_object::ValueObject;

/// Validated item name for untyped input at the boundary.
///
/// Construction rejects names that are empty or whitespace-only. The name is
/// kept exactly as given (no trimming), so `"apple"` and `" apple"` are
/// distinct items. The store itself keys on plain strings and does not
/// require this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, InventoryError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InventoryError::validation("item name cannot be empty"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for ItemName {}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ItemName {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ItemName {
    type Error = InventoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}
