use anyhow::Result;
use chp_dispatch::{config, pipeline, telemetry};
use config::Config;
use telemetry::init_tracing;
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let cfg = Config::load()?;
    info!(units = cfg.units.len(), "starting CHP dispatch run");

    pipeline::run(&cfg)?;

    Ok(())
}
