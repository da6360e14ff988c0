//! Command-line entry point: configuration and the demonstration run.

pub mod config;
pub mod demo;

pub use config::DemoConfig;
pub use demo::{DemoOutcome, run};
