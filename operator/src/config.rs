//! Operator configuration

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use stakepool_common::Identity;
use stakepool_program::EngineConfig;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "STAKEPOOL_CONFIG";

/// Config file used when the variable is unset
pub const DEFAULT_CONFIG_PATH: &str = "stakepool.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Owner identity (base58), fixed for the deployment
    pub owner: Identity,

    /// JSON-lines call journal to replay
    pub journal_path: String,

    /// Log filter used when RUST_LOG is unset
    pub log_level: String,

    /// Requests buffered in front of the execution lane
    pub channel_capacity: usize,

    /// Reward settlement tunables
    #[serde(default)]
    pub engine: EngineConfig,
}

impl Config {
    /// Load configuration from the TOML file named by `STAKEPOOL_CONFIG`
    ///
    /// `Ok(None)` means no file exists at that path. A file that exists but
    /// cannot be read, parsed or validated is an error.
    pub fn load() -> Result<Option<Self>> {
        let config_path =
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    /// Load configuration from a TOML file, `Ok(None)` if it does not exist
    pub fn load_from(path: &str) -> Result<Option<Self>> {
        let expanded = shellexpand::tilde(path);
        let config_str = match std::fs::read_to_string(expanded.as_ref()) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).context(format!("Failed to read config file: {}", path));
            }
        };

        let config: Config = toml::from_str(&config_str)
            .context("Failed to parse config TOML")?;

        config
            .validate()
            .context(format!("Invalid config file: {}", path))?;
        Ok(Some(config))
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.channel_capacity > 0, "channel_capacity must be greater than 0");
        ensure!(self.engine.reward_scale > 0, "engine.reward_scale must be greater than 0");
        Ok(())
    }

    /// Create default configuration for a local replay
    pub fn default_local() -> Self {
        Self {
            owner: Identity::new([1u8; 32]),
            journal_path: "journal.jsonl".to_string(),
            log_level: "info".to_string(),
            channel_capacity: 64,
            engine: EngineConfig::default(),
        }
    }

    /// Journal path with `~` expanded
    pub fn journal_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.journal_path).as_ref())
    }

    /// Write default config to file
    pub fn write_default(path: &str) -> Result<()> {
        let config = Self::default_local();
        let toml_str = toml::to_string_pretty(&config)
            .context("Failed to serialize config")?;

        std::fs::write(path, toml_str)
            .context(format!("Failed to write config to {}", path))?;

        log::info!("Created default config at {}", path);
        Ok(())
    }
}
