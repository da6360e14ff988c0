//! Inventory domain module.
//!
//! This crate holds the in-memory stock mapping and the rules for changing
//! it, implemented as deterministic logic with no file IO. Persistence lives
//! in `stocktake-infra`.

pub mod activity;
pub mod report;
pub mod stock;

pub use activity::{ActivityLog, LogEntry};
pub use report::REPORT_HEADER;
pub use stock::{DEFAULT_LOW_THRESHOLD, Inventory, Removal};
