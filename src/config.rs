//! Encoder configuration.
//!
//! Settings come from a TOML file, then environment variables (optionally
//! supplied through a `.env` file) override individual keys:
//!
//! ```toml
//! default_station = "WFR"
//!
//! [logging]
//! level = "info"
//! file = "metar_encoder.log"
//! console_timestamps = false
//! ```
//!
//! | Variable                | Overrides                    |
//! |-------------------------|------------------------------|
//! | `METAR_CONFIG`          | path of the TOML file        |
//! | `METAR_LOG_LEVEL`       | `logging.level`              |
//! | `METAR_LOG_FILE`        | `logging.file`               |
//! | `METAR_DEFAULT_STATION` | `default_station`            |

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::logging::LogLevel;
use crate::stations::Station;

/// Config file read when `METAR_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "./metar_encoder.toml";

pub const ENV_CONFIG_PATH: &str = "METAR_CONFIG";
pub const ENV_LOG_LEVEL: &str = "METAR_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "METAR_LOG_FILE";
pub const ENV_DEFAULT_STATION: &str = "METAR_DEFAULT_STATION";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Configuration types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Append log lines to this file as well as the console.
    pub file: Option<String>,
    pub console_timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warning,
            file: None,
            console_timestamps: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Station used when an observation does not name one.
    pub default_station: Station,
    pub logging: LoggingConfig,
}

impl EncoderConfig {
    pub fn from_toml_str(text: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Toml {
            path: path.to_string(),
            source,
        })
    }

    /// Reads a config file. A missing file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        Self::from_toml_str(&text, &display)
    }

    /// Applies overrides from `lookup`, which maps a variable name to its value.
    ///
    /// Empty values are ignored, except `METAR_LOG_FILE` where an empty value
    /// turns file logging off.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            self.logging.level = value.parse().map_err(|reason| ConfigError::InvalidValue {
                key: ENV_LOG_LEVEL,
                value: value.clone(),
                reason,
            })?;
        }

        if let Some(value) = lookup(ENV_LOG_FILE) {
            let value = value.trim();
            self.logging.file = (!value.is_empty()).then(|| value.to_string());
        }

        if let Some(value) = lookup(ENV_DEFAULT_STATION).filter(|v| !v.trim().is_empty()) {
            self.default_station =
                value
                    .parse()
                    .map_err(|e: crate::codes::LookupError| ConfigError::InvalidValue {
                        key: ENV_DEFAULT_STATION,
                        value: value.clone(),
                        reason: e.to_string(),
                    })?;
        }

        Ok(())
    }
}

/// Loads the configuration the way the binary does, without an explicit
/// config path.
pub fn load_config() -> Result<EncoderConfig, ConfigError> {
    load_config_from(None)
}

/// Reads `.env` if present, then resolves the configuration against the
/// process environment. See [`resolve_config`].
pub fn load_config_from(explicit: Option<&Path>) -> Result<EncoderConfig, ConfigError> {
    dotenv::dotenv().ok();
    resolve_config(explicit, |key| std::env::var(key).ok())
}

/// Picks the config file and applies overrides from `lookup`.
///
/// The file is `explicit` when given, else the one named by `METAR_CONFIG`,
/// else [`DEFAULT_CONFIG_PATH`] if it exists, else built-in defaults.
/// `METAR_*` overrides are applied last on every path.
pub fn resolve_config<F>(explicit: Option<&Path>, lookup: F) -> Result<EncoderConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match (explicit, lookup(ENV_CONFIG_PATH)) {
        (Some(path), _) => EncoderConfig::load(path)?,
        (None, Some(path)) => EncoderConfig::load(path)?,
        (None, None) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            EncoderConfig::load(DEFAULT_CONFIG_PATH)?
        }
        (None, None) => EncoderConfig::default(),
    };

    config.apply_overrides(lookup)?;
    Ok(config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
