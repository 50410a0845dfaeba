//! Report assembly.
//!
//! Runs every field encoder over an [`ObservationInput`] and joins the
//! resulting tokens into a single METAR line:
//!
//! ```text
//! STATION DDHHMMZ dddffKT VVVV VVVVD wx CCChhh CCChhh CCChhh TT/DD QPPPP
//! ```
//!
//! Empty optional parts collapse away, so the finished report never has
//! leading, trailing, or doubled spaces.
//!
//! # Clock injection
//! Every function takes the observation time as `now: DateTime<Utc>` instead
//! of calling `Utc::now()`. Callers sample the clock once per report, and
//! tests stay deterministic.

use chrono::{DateTime, Utc};

use crate::codes::CodeTable;
use crate::encode::{
    calculate_dew_point, format_pressure, format_temperature, format_wind_direction,
    validate_cloud_height, CloudHeight,
};
use crate::model::{
    render_field, CloudLayerInput, EncodedField, FieldError, MetarReport, ObservationInput,
    PresentWeatherInput, CLOUD_LAYER_COUNT,
};
use crate::stations::Station;

// ---------------------------------------------------------------------------
// Encoded observation
// ---------------------------------------------------------------------------

/// One encoded cloud layer: amount code and height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudLayer {
    pub amount: &'static str,
    pub height: EncodedField<CloudHeight>,
}

impl CloudLayer {
    fn encode(input: &CloudLayerInput) -> Self {
        Self {
            amount: input.amount.code(),
            height: validate_cloud_height(&input.height_ft),
        }
    }

    /// Amount code followed directly by the height, e.g. `SCT25`.
    pub fn token(&self) -> String {
        format!("{}{}", self.amount, render_field(&self.height))
    }
}

/// Every field of an observation, encoded but not yet joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedObservation {
    pub wind_direction: EncodedField<String>,
    pub wind_speed: String,
    pub visibility: String,
    pub min_visibility: String,
    pub present_weather: String,
    pub clouds: [CloudLayer; CLOUD_LAYER_COUNT],
    pub temperature: EncodedField<String>,
    pub dew_point: EncodedField<String>,
    pub pressure: EncodedField<String>,
}

impl EncodedObservation {
    /// Fields that failed validation, in report order.
    pub fn field_errors(&self) -> Vec<FieldError> {
        let cloud_errors = self.clouds.iter().map(|layer| layer.height.as_ref().err());
        std::iter::once(self.wind_direction.as_ref().err())
            .chain(cloud_errors)
            .chain([
                self.temperature.as_ref().err(),
                self.dew_point.as_ref().err(),
                self.pressure.as_ref().err(),
            ])
            .flatten()
            .copied()
            .collect()
    }

    pub fn is_clean(&self) -> bool {
        self.field_errors().is_empty()
    }

    /// Joins the encoded fields into a finished report for `station` at `now`.
    pub fn render(&self, station: Station, now: DateTime<Utc>) -> MetarReport {
        let wind = format!(
            "{}{}KT",
            render_field(&self.wind_direction),
            self.wind_speed
        );
        let clouds = self
            .clouds
            .iter()
            .map(CloudLayer::token)
            .collect::<Vec<_>>()
            .join(" ");
        let temperature = format!(
            "{}/{}",
            render_field(&self.temperature),
            render_field(&self.dew_point)
        );
        let pressure = format!("Q{}", render_field(&self.pressure));
        let timestamp = format_timestamp(now);

        let parts: [&str; 9] = [
            station.code(),
            &timestamp,
            &wind,
            &self.visibility,
            &self.min_visibility,
            &self.present_weather,
            &clouds,
            &temperature,
            &pressure,
        ];
        let line = parts.join(" ");

        MetarReport::from_normalized(collapse_whitespace(&line))
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Encodes an observation into a METAR report issued at `now`.
///
/// Never fails: a field that does not validate is replaced in the report by
/// its `!!! ERROR in <FIELD> !!!` marker.
pub fn generate_report(input: &ObservationInput, now: DateTime<Utc>) -> MetarReport {
    encode_observation(input).render(input.station, now)
}

/// Runs every field encoder over `input`.
pub fn encode_observation(input: &ObservationInput) -> EncodedObservation {
    EncodedObservation {
        wind_direction: format_wind_direction(&input.wind_direction),
        wind_speed: input.wind_speed.clone(),
        visibility: input.visibility.clone(),
        min_visibility: format!(
            "{}{}",
            input.min_visibility,
            input.min_visibility_direction.code()
        ),
        present_weather: present_weather_code(&input.present_weather),
        clouds: input.clouds.each_ref().map(CloudLayer::encode),
        temperature: format_temperature(&input.temperature),
        dew_point: calculate_dew_point(&input.temperature, &input.humidity),
        pressure: format_pressure(&input.pressure),
    }
}

/// Day, hour and minute of `now` followed by `Z`, e.g. `011230Z`.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.format("%d%H%MZ").to_string()
}

/// Intensity, descriptor, precipitation and obscuration codes run together.
pub fn present_weather_code(weather: &PresentWeatherInput) -> String {
    [
        weather.intensity.code(),
        weather.descriptor.code(),
        weather.precipitation.code(),
        weather.obscuration.code(),
    ]
    .concat()
}

/// Replaces every run of whitespace with a single space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
