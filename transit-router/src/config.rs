//! Router configuration.
//!
//! Defaults match the file names the network data ships with, read from the
//! current directory. `from_env` lets deployments point at another data
//! directory, size the shortest-path cache, and switch output to JSON.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::cache::CacheConfig;

/// Environment variable naming the data directory.
pub const DATA_DIR_VAR: &str = "TRANSIT_DATA_DIR";

/// Environment variable for the shortest-path cache capacity.
pub const CACHE_CAPACITY_VAR: &str = "TRANSIT_CACHE_CAPACITY";

/// Environment variable selecting the output format.
pub const OUTPUT_VAR: &str = "TRANSIT_OUTPUT";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable holds an unusable value
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// How query results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable console text.
    #[default]
    Text,
    /// One JSON document per result.
    Json,
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err("expected \"text\" or \"json\""),
        }
    }
}

/// Locations of the four source files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    /// Stop list (`id,name`).
    pub stops: PathBuf,
    /// Line list (`number,name,stop,...`).
    pub lines: PathBuf,
    /// Distance matrix.
    pub distances: PathBuf,
    /// Passenger list (`id,name,from,to`).
    pub passengers: PathBuf,
}

impl DataFiles {
    /// The default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            stops: dir.join("durak_listesi.txt"),
            lines: dir.join("hatlar.txt"),
            distances: dir.join("durak_mesafeleri.txt"),
            passengers: dir.join("yolcu_listesi.txt"),
        }
    }
}

impl Default for DataFiles {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

/// Configuration for the router binary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouterConfig {
    /// Source files.
    pub data: DataFiles,

    /// Shortest-path tree cache.
    pub cache: CacheConfig,

    /// Output format for query results.
    pub output: OutputFormat,
}

impl RouterConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(data: DataFiles, cache: CacheConfig, output: OutputFormat) -> Self {
        Self {
            data,
            cache,
            output,
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_VAR) {
            config.data = DataFiles::in_dir(dir);
        }

        if let Some(value) = lookup(CACHE_CAPACITY_VAR) {
            let capacity = value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: CACHE_CAPACITY_VAR,
                value: value.clone(),
                reason: "expected a non-negative integer",
            })?;
            config.cache.max_capacity = capacity;
        }

        if let Some(value) = lookup(OUTPUT_VAR) {
            config.output = value.parse().map_err(|reason| ConfigError::InvalidValue {
                var: OUTPUT_VAR,
                value: value.clone(),
                reason,
            })?;
        }

        Ok(config)
    }

    /// Set the data files.
    pub fn with_data(mut self, data: DataFiles) -> Self {
        self.data = data;
        self
    }

    /// Set the output format.
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }
}
