use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub solver: SolverConfig,
    pub units: Vec<UnitConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// CSV with columns `t,gas_price,power_price`, one row per time step.
    pub prices: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnitConfig {
    pub id: String,
    /// CSV with the unit's Min/Max operating limits table.
    pub limits: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub table: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolverConfig {
    /// Forwarded to CBC as the `sec` parameter when set.
    pub time_limit_seconds: Option<u64>,
    #[serde(default)]
    pub log_level: u8,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { time_limit_seconds: None, log_level: 0 }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from("config/default.toml")
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("CHP__").split("__"));
        Ok(figment.extract()?)
    }
}
