use std::path::PathBuf;

use stocktake_infra::DEFAULT_INVENTORY_FILE;
use stocktake_inventory::DEFAULT_LOW_THRESHOLD;

pub const DATA_FILE_ENV: &str = "STOCKTAKE_DATA_FILE";
pub const LOW_THRESHOLD_ENV: &str = "STOCKTAKE_LOW_THRESHOLD";

/// Runtime settings for the demo, read once at startup.
///
/// Every field has a default, so an empty environment reproduces the fixed
/// demonstration exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub data_file: PathBuf,
    pub low_threshold: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_INVENTORY_FILE),
            low_threshold: DEFAULT_LOW_THRESHOLD,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let data_file = lookup(DATA_FILE_ENV)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file);

        let low_threshold = match lookup(LOW_THRESHOLD_ENV) {
            Some(raw) => raw.trim().parse::<i64>().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %raw,
                    default = defaults.low_threshold,
                    "{LOW_THRESHOLD_ENV} is not an integer; using default"
                );
                defaults.low_threshold
            }),
            None => defaults.low_threshold,
        };

        Self {
            data_file,
            low_threshold,
        }
    }
}
