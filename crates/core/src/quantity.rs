//! Stock quantity value object.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;
use crate::value_object::ValueObject;

/// Signed stock count.
///
/// Negative values are allowed; the store never clamps at zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parse untyped input (e.g. text from a file or a prompt).
    ///
    /// Surrounding whitespace is ignored; anything that is not a base-10
    /// integer fitting in `i64` is rejected.
    pub fn parse(raw: &str) -> Result<Self, InventoryError> {
        raw.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| InventoryError::validation(format!("quantity {raw:?}: {e}")))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl ValueObject for Quantity {}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Quantity> for i64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl FromStr for Quantity {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
