//! Dew point derivation.
//!
//! Observers enter temperature and relative humidity; the dew point is
//! derived with the Magnus-Tetens approximation:
//!
//! ```text
//! es = 6.112 * exp(a*T / (T + b))     saturation vapour pressure, hPa
//! ea = RH/100 * es                    actual vapour pressure, hPa
//! Td = b * ln(ea/6.112) / (a - ln(ea/6.112))
//! ```
//!
//! with `a = 17.27` and `b = 237.7 °C`.

use super::{parse_integer, sign_prefixed};
use crate::model::{EncodedField, FieldError, FIELD_DEW_POINT};

/// Magnus coefficient `a` (dimensionless).
pub const MAGNUS_A: f64 = 17.27;

/// Magnus coefficient `b`, in °C.
pub const MAGNUS_B: f64 = 237.7;

/// Saturation vapour pressure at 0 °C, in hPa.
pub const MAGNUS_E0: f64 = 6.112;

/// Saturation vapour pressure over water at `temp_c`, in hPa.
pub fn saturation_vapour_pressure(temp_c: f64) -> f64 {
    MAGNUS_E0 * ((MAGNUS_A * temp_c) / (temp_c + MAGNUS_B)).exp()
}

/// Dew point in °C, or `None` when it is undefined for the inputs
/// (humidity at or below zero, or a non-finite intermediate).
pub fn dew_point_celsius(temp_c: f64, relative_humidity: f64) -> Option<f64> {
    let ea = (relative_humidity / 100.0) * saturation_vapour_pressure(temp_c);
    if ea.is_nan() || ea <= 0.0 {
        return None;
    }
    let gamma = (ea / MAGNUS_E0).ln();
    let dew_point = (MAGNUS_B * gamma) / (MAGNUS_A - gamma);
    dew_point.is_finite().then_some(dew_point)
}

/// Encodes the dew point for a raw temperature (°C) and relative humidity (%).
///
/// The result is rounded to the nearest whole degree, halves to even, and
/// written with the `M` prefix below zero. Either input failing to parse, or
/// an undefined result, yields the `DEW POINT` marker.
pub fn calculate_dew_point(temp_raw: &str, humidity_raw: &str) -> EncodedField<String> {
    let error = FieldError::new(FIELD_DEW_POINT);
    let temp = parse_integer(temp_raw).ok_or(error)?;
    let humidity = parse_integer(humidity_raw).ok_or(error)?;

    let dew_point = dew_point_celsius(temp as f64, humidity as f64).ok_or(error)?;
    Ok(sign_prefixed(dew_point.round_ties_even() as i64))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
