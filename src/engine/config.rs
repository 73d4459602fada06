// Configuration for the tally engine and form UI
// Every section has a documented default so a missing file is never an error

use crate::engine::field::Field;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Toast lifetime bounds in milliseconds
pub const TOAST_DURATION_RANGE: RangeInclusive<u64> = 500..=30_000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Identity constants stamped onto every response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            user_id: "john_doe_17091999".to_string(),
            email: "john@xyz.com".to_string(),
            roll_number: "ABCD123".to_string(),
        }
    }
}

/// Form UI settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long a toast stays visible (default 3000ms, clamped to 500..=30000)
    pub toast_duration_ms: u64,

    /// Event poll timeout of the terminal loop (default 100ms)
    pub tick_rate_ms: u64,

    /// Fields pre-selected in the multi-select list (default: all)
    pub default_fields: Vec<Field>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3000,
            tick_rate_ms: 100,
            default_fields: Field::ALL.to_vec(),
        }
    }
}

impl UiConfig {
    pub fn toast_duration_ms(&self) -> u64 {
        self.toast_duration_ms.clamp(
            *TOAST_DURATION_RANGE.start(),
            *TOAST_DURATION_RANGE.end(),
        )
    }

    pub fn tick_rate_ms(&self) -> u64 {
        self.tick_rate_ms.max(10)
    }
}

/// Master configuration combining all tally settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub identity: Identity,
    pub ui: UiConfig,
}

impl Config {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content, path)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Explicit path first, then the user config file if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// `<config_dir>/tally/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tally").join("config.toml"))
}
