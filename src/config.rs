//! Runtime configuration.
//!
//! Settings come from an optional TOML file, then environment overrides:
//!
//! | Variable                    | Field                     |
//! |-----------------------------|---------------------------|
//! | `ALGOSCOPE_CONFIG`          | path of the TOML file     |
//! | `ALGOSCOPE_ADDR`            | `server.addr`             |
//! | `ALGOSCOPE_LOG`             | `log.filter`              |
//! | `ALGOSCOPE_HISTORY_CAPACITY`| `engine.history_capacity` |
//! | `ALGOSCOPE_STEP_LIMIT`      | `engine.step_limit`       |
//!
//! Every field has a default, so an empty file (or none at all) is valid.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::instrument::InstrumentSettings;
use crate::trace::{DEFAULT_STEP_LIMIT, DEFAULT_TRACE_ELEMENT_LIMIT};

pub const CONFIG_ENV: &str = "ALGOSCOPE_CONFIG";

/// Largest accepted input, in elements.
pub const DEFAULT_MAX_INPUT_SIZE: usize = 100_000;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub server: ServerConfig,
    pub engine: EngineConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Request bodies above this size are rejected
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            max_body_bytes: 16 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub max_input_size: usize,
    pub history_capacity: usize,
    pub step_limit: usize,
    /// Elements held across the stored steps of one traced run
    pub trace_element_limit: usize,
    pub pin_cpu: bool,
    /// Run compared algorithms in random order
    pub shuffle_compare_order: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            step_limit: DEFAULT_STEP_LIMIT,
            trace_element_limit: DEFAULT_TRACE_ELEMENT_LIMIT,
            pin_cpu: false,
            shuffle_compare_order: false,
        }
    }
}

impl EngineConfig {
    pub fn instrument_settings(&self) -> InstrumentSettings {
        InstrumentSettings {
            step_limit: self.step_limit,
            trace_element_limit: self.trace_element_limit,
            pin_cpu: self.pin_cpu,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info,algoscope=debug".to_string(),
        }
    }
}

impl Config {
    /// Load from `path`, or from `ALGOSCOPE_CONFIG` when no path is given,
    /// then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV).map(std::path::PathBuf::from);
        let mut config = match path.or(from_env.as_deref()) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply overrides from a variable lookup.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("ALGOSCOPE_ADDR") {
            self.server.addr = addr
                .parse()
                .with_context(|| format!("invalid ALGOSCOPE_ADDR '{}'", addr))?;
        }
        if let Some(filter) = lookup("ALGOSCOPE_LOG") {
            self.log.filter = filter;
        }
        if let Some(capacity) = lookup("ALGOSCOPE_HISTORY_CAPACITY") {
            self.engine.history_capacity = capacity
                .parse()
                .with_context(|| format!("invalid ALGOSCOPE_HISTORY_CAPACITY '{}'", capacity))?;
        }
        if let Some(limit) = lookup("ALGOSCOPE_STEP_LIMIT") {
            self.engine.step_limit = limit
                .parse()
                .with_context(|| format!("invalid ALGOSCOPE_STEP_LIMIT '{}'", limit))?;
        }
        Ok(())
    }
}
