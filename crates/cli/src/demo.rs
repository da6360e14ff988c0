//! Fixed demonstration sequence over a fresh inventory.

use std::io::Write;

use anyhow::Context;

use stocktake_core::InventoryError;
use stocktake_infra::{InventoryRepository, JsonFileRepository};
use stocktake_inventory::{ActivityLog, Inventory};

use crate::config::DemoConfig;

/// State left behind by a demo run.
#[derive(Debug, Clone)]
pub struct DemoOutcome {
    pub inventory: Inventory,
    pub activity: ActivityLog,
}

/// Run the demo, writing human-readable output to `out`.
///
/// Steps: stock a few items, reject an untyped add, remove stock (one item
/// is missing and tolerated), query, persist, reload and report.
pub fn run<W: Write>(config: &DemoConfig, mut out: W) -> anyhow::Result<DemoOutcome> {
    let mut inventory = Inventory::new();
    let mut activity = ActivityLog::new();

    inventory.add("apple", 10, Some(&mut activity))?;
    inventory.add("banana", -2, Some(&mut activity))?;

    if let Err(err) = inventory.add_from_text("123", "ten", Some(&mut activity)) {
        tracing::warn!(%err, "rejected untyped stock entry");
    }

    for (item, qty) in [("apple", 3), ("orange", 1)] {
        match inventory.remove(item, qty) {
            Ok(_) | Err(InventoryError::NotFound { .. }) => {}
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(out, "Apple stock: {}", inventory.get_quantity("apple")?)?;

    let low = inventory.check_low(config.low_threshold);
    writeln!(out, "Low items: {low:?}")?;

    let repository = JsonFileRepository::new(&config.data_file);
    repository
        .save(&inventory)
        .with_context(|| format!("saving inventory to {}", config.data_file.display()))?;
    repository
        .load_into(&mut inventory)
        .with_context(|| format!("loading inventory from {}", config.data_file.display()))?;

    inventory.write_report(&mut out)?;

    writeln!(out, "Activity log")?;
    for entry in activity.iter() {
        writeln!(out, "{entry}")?;
    }

    Ok(DemoOutcome {
        inventory,
        activity,
    })
}
