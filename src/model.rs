//! Core data types for the METAR encoder.
//!
//! This module defines the shared domain model imported by all other modules:
//! the raw observation record handed over by whatever front end collected it,
//! the per-field error produced by the encoders, and the final report value.
//! It contains no encoding logic and no I/O.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codes::{
    CloudCover, CompassDirection, Descriptor, Intensity, Obscuration, Precipitation,
};
use crate::stations::Station;

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

/// Field name embedded in the marker for an unparseable cloud height.
pub const FIELD_CLOUDS: &str = "CLOUDS";

/// Field name embedded in the marker for an unparseable temperature.
pub const FIELD_TEMPERATURE: &str = "TEMPERATURE";

/// Field name embedded in the marker for an unparseable pressure.
pub const FIELD_PRESSURE: &str = "PRESSURE";

/// Field name embedded in the marker for an unparseable wind direction.
pub const FIELD_WIND_DIRECTION: &str = "WIND DIRECTION";

/// Field name embedded in the marker when the dew point cannot be derived.
pub const FIELD_DEW_POINT: &str = "DEW POINT";

/// Number of cloud layers carried by every observation.
pub const CLOUD_LAYER_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// One cloud layer as entered: a cover amount and a height in feet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudLayerInput {
    pub amount: CloudCover,
    pub height_ft: String, // raw text, e.g. "2500"
}

impl CloudLayerInput {
    pub fn new(amount: CloudCover, height_ft: impl Into<String>) -> Self {
        Self {
            amount,
            height_ft: height_ft.into(),
        }
    }
}

impl Default for CloudLayerInput {
    fn default() -> Self {
        Self::new(CloudCover::Skc, "")
    }
}

/// The four selections that make up the present-weather group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentWeatherInput {
    pub intensity: Intensity,
    pub descriptor: Descriptor,
    pub precipitation: Precipitation,
    pub obscuration: Obscuration,
}

/// A raw observation record, exactly as collected from the operator.
///
/// Numeric fields are kept as text: they are validated by the encoders, and
/// a value that does not parse shows up as an error marker in the report
/// rather than being rejected here. Selection fields are closed enums, so an
/// unknown code can only ever fail at the deserialization boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationInput {
    pub station: Station,
    pub wind_direction: String,  // degrees true
    pub wind_speed: String,      // knots, copied through verbatim
    pub visibility: String,      // prevailing, metres, copied through verbatim
    pub min_visibility: String,  // metres, copied through verbatim
    pub min_visibility_direction: CompassDirection,
    pub present_weather: PresentWeatherInput,
    pub clouds: [CloudLayerInput; CLOUD_LAYER_COUNT],
    pub temperature: String,     // whole degrees Celsius
    pub humidity: String,        // relative humidity, percent
    pub pressure: String,        // QNH, hectopascals
}

impl ObservationInput {
    /// Replaces the station when `station` is given.
    ///
    /// Used for a command-line station, which beats both the station in the
    /// observation file and the configured default.
    pub fn with_station_override(self, station: Option<Station>) -> Self {
        match station {
            Some(station) => Self { station, ..self },
            None => self,
        }
    }
}

// ---------------------------------------------------------------------------
// Encoded field types
// ---------------------------------------------------------------------------

/// A field that failed validation.
///
/// Rendered in place of the field's value so the problem is visible in the
/// finished report instead of aborting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("!!! ERROR in {field} !!!")]
pub struct FieldError {
    pub field: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str) -> Self {
        Self { field }
    }
}

/// Result of encoding a single field: either its token or a [`FieldError`].
pub type EncodedField<T> = Result<T, FieldError>;

/// Renders an encoded field, substituting the error marker on failure.
pub fn render_field<T: fmt::Display>(field: &EncodedField<T>) -> String {
    match field {
        Ok(value) => value.to_string(),
        Err(err) => err.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Report type
// ---------------------------------------------------------------------------

/// A finished METAR report.
///
/// Tokens are separated by exactly one space and the text never starts or
/// ends with whitespace. Only [`crate::report`] constructs these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MetarReport(String);

impl MetarReport {
    pub(crate) fn from_normalized(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Space-separated tokens of the report, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ')
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MetarReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MetarReport {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_override_replaces_only_when_given() {
        let input = ObservationInput {
            station: Station::Atka,
            temperature: "5".to_string(),
            ..Default::default()
        };

        let kept = input.clone().with_station_override(None);
        assert_eq!(kept, input);

        let replaced = input.with_station_override(Some(Station::Dixie));
        assert_eq!(replaced.station, Station::Dixie);
        assert_eq!(replaced.temperature, "5");
    }

    #[test]
    fn test_field_error_renders_marker() {
        let err = FieldError::new(FIELD_WIND_DIRECTION);
        assert_eq!(err.to_string(), "!!! ERROR in WIND DIRECTION !!!");
    }

    #[test]
    fn test_render_field_uses_value_or_marker() {
        let ok: EncodedField<String> = Ok("M05".to_string());
        let bad: EncodedField<String> = Err(FieldError::new(FIELD_PRESSURE));
        assert_eq!(render_field(&ok), "M05");
        assert_eq!(render_field(&bad), "!!! ERROR in PRESSURE !!!");
    }

    #[test]
    fn test_default_observation_matches_blank_form() {
        let input = ObservationInput::default();
        assert_eq!(input.station, Station::Wfr);
        assert_eq!(input.present_weather.intensity, Intensity::Nsw);
        assert_eq!(input.present_weather.descriptor, Descriptor::None);
        assert_eq!(input.min_visibility_direction, CompassDirection::None);
        for layer in &input.clouds {
            assert_eq!(layer.amount, CloudCover::Skc);
            assert!(layer.height_ft.is_empty());
        }
        assert!(input.temperature.is_empty());
    }

    #[test]
    fn test_report_tokens_split_on_single_spaces() {
        let report = MetarReport::from_normalized("WFR 011200Z Q1012".to_string());
        let tokens: Vec<_> = report.tokens().collect();
        assert_eq!(tokens, vec!["WFR", "011200Z", "Q1012"]);
        assert_eq!(report.to_string(), report.as_str());
    }
}
