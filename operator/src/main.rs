//! Stakepool Operator
//!
//! Execution environment for the staking pool core: loads configuration,
//! replays a journal of authenticated calls through a single execution lane
//! and prints the resulting pool state.

mod config;
mod journal;
mod lane;
mod summary;

use anyhow::{Context, Result};
use config::Config;
use summary::Summary;
use stakepool_program::StakingPool;

#[tokio::main]
async fn main() -> Result<()> {
    // `stakepool-operator init [path]` writes a default config and exits
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("init") {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        let path = args.get(1).map(String::as_str).unwrap_or(config::DEFAULT_CONFIG_PATH);
        return Config::write_default(path);
    }

    // Load configuration before logging so its level applies. Only a
    // missing file falls back to the built-in default.
    let loaded = Config::load()?;
    let found = loaded.is_some();
    let config = loaded.unwrap_or_else(Config::default_local);

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if !found {
        log::warn!("No config file found, using default local config");
    }

    log::info!("Starting stakepool operator");
    log::info!("Pool owner: {}", config.owner);

    let engine = StakingPool::with_config(config.owner, config.engine)
        .context("Invalid engine configuration")?;

    let journal_path = config.journal_path();
    let lines = journal::read_journal(&journal_path)?;
    log::info!("Replaying {} calls from {}", lines.len(), journal_path.display());

    let (lane, worker) = lane::spawn(engine, config.channel_capacity);
    let stats = lane::replay(&lane, lines).await?;

    // Closing the last handle stops the lane and hands the engine back
    drop(lane);
    let engine = worker.await.context("Execution lane failed")?;

    log::info!(
        "Replay finished: {} applied, {} rejected, {} events",
        stats.applied,
        stats.rejected,
        stats.events
    );

    let summary = Summary::from_engine(&engine, stats);
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
    );

    Ok(())
}
