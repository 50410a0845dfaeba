//! Observation file reader.
//!
//! Reads an [`ObservationInput`] from JSON or TOML. Every key is optional:
//! missing fields take the blank-form defaults, and a missing `station` takes
//! the caller's default station (normally the configured one).
//!
//! ```toml
//! station = "WFR"
//! wind_direction = "270"
//! wind_speed = "15"
//! visibility = "9999"
//! min_visibility = "1600"
//! min_visibility_direction = "NW"
//! temperature = "18"
//! humidity = "65"
//! pressure = "1012"
//!
//! [present_weather]
//! intensity = "light"
//! precipitation = "rain"
//!
//! [[clouds]]
//! amount = "SCT"
//! height_ft = "2500"
//! # ... exactly three [[clouds]] entries when the key is present
//! ```

use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::model::ObservationInput;
use crate::stations::Station;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read observation from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid observation JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid observation TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported observation file '{path}': expected a .json or .toml extension")]
    UnsupportedFormat { path: String },
}

// ============================================================================
// Record structure
// ============================================================================

/// On-disk shape of an observation: the input fields plus an optional
/// station, so an omitted station can fall back to the configured default.
#[derive(Debug, Deserialize)]
struct ObservationRecord {
    station: Option<Station>,
    #[serde(flatten)]
    observation: ObservationInput,
}

impl ObservationRecord {
    fn into_input(self, default_station: Station) -> ObservationInput {
        ObservationInput {
            station: self.station.unwrap_or(default_station),
            ..self.observation
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses an observation from JSON text.
pub fn parse_observation_json(
    text: &str,
    default_station: Station,
) -> Result<ObservationInput, IngestError> {
    let record: ObservationRecord = serde_json::from_str(text)?;
    Ok(record.into_input(default_station))
}

/// Parses an observation from TOML text.
pub fn parse_observation_toml(
    text: &str,
    default_station: Station,
) -> Result<ObservationInput, IngestError> {
    let record: ObservationRecord = toml::from_str(text)?;
    Ok(record.into_input(default_station))
}

/// Reads a JSON observation from any reader (e.g. stdin).
pub fn read_observation_json<R: Read>(
    mut reader: R,
    default_station: Station,
) -> Result<ObservationInput, IngestError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| IngestError::Io {
            path: "<stdin>".to_string(),
            source,
        })?;
    parse_observation_json(&text, default_station)
}

/// Loads an observation file, choosing the format by extension.
pub fn load_observation(
    path: impl AsRef<Path>,
    default_station: Station,
) -> Result<ObservationInput, IngestError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    let parse: fn(&str, Station) -> Result<ObservationInput, IngestError> =
        match extension.as_deref() {
            Some("json") => parse_observation_json,
            Some("toml") => parse_observation_toml,
            _ => return Err(IngestError::UnsupportedFormat { path: display }),
        };

    let text = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: display,
        source,
    })?;
    parse(&text, default_station)
}

// ============================================================================
// Tests
// ============================================================================
