use anyhow::Context;

use stocktake_cli::{DemoConfig, run};

fn main() -> anyhow::Result<()> {
    stocktake_observability::init();

    let config = DemoConfig::from_env();
    tracing::info!(data_file = %config.data_file.display(), "starting inventory demo");

    run(&config, std::io::stdout().lock()).context("inventory demo failed")?;
    Ok(())
}
