//! Single-field encoders: wind direction, temperature, pressure, cloud height.

use std::fmt;

use super::{parse_integer, sign_prefixed};
use crate::model::{
    EncodedField, FieldError, FIELD_CLOUDS, FIELD_PRESSURE, FIELD_TEMPERATURE,
    FIELD_WIND_DIRECTION,
};

// ---------------------------------------------------------------------------
// Cloud height
// ---------------------------------------------------------------------------

/// Height of a cloud layer base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudHeight {
    /// Base height in hundreds of feet.
    Hundreds(i64),
    /// Height at or below 100 ft, or at or above 99999 ft.
    Indeterminate,
}

impl CloudHeight {
    /// Value written for an indeterminate height.
    pub const INDETERMINATE: i64 = 99999;

    /// Numeric height code: hundreds of feet, or the indeterminate sentinel.
    pub fn value(self) -> i64 {
        match self {
            CloudHeight::Hundreds(h) => h,
            CloudHeight::Indeterminate => Self::INDETERMINATE,
        }
    }
}

impl fmt::Display for CloudHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloudHeight::Hundreds(h) => write!(f, "{}", h),
            CloudHeight::Indeterminate => write!(f, "{}", Self::INDETERMINATE),
        }
    }
}

/// Converts a layer height in feet to hundreds of feet.
///
/// Heights strictly between 100 and 99999 ft are truncated to hundreds
/// (`2550` → 25). Anything outside that range is
/// [`CloudHeight::Indeterminate`], which is a valid result and not an error.
pub fn validate_cloud_height(raw: &str) -> EncodedField<CloudHeight> {
    let height = parse_integer(raw).ok_or(FieldError::new(FIELD_CLOUDS))?;
    if 100 < height && height < CloudHeight::INDETERMINATE {
        Ok(CloudHeight::Hundreds(height / 100))
    } else {
        Ok(CloudHeight::Indeterminate)
    }
}

// ---------------------------------------------------------------------------
// Temperature
// ---------------------------------------------------------------------------

/// Formats a whole-degree temperature, `M`-prefixed when below zero.
pub fn format_temperature(raw: &str) -> EncodedField<String> {
    parse_integer(raw)
        .map(sign_prefixed)
        .ok_or(FieldError::new(FIELD_TEMPERATURE))
}

// ---------------------------------------------------------------------------
// Pressure
// ---------------------------------------------------------------------------

/// Formats a QNH value in hectopascals.
///
/// Values under 1000 get exactly one leading `0`, so `998` becomes `0998`.
/// Values under 100 are therefore not padded to four digits (`50` → `050`).
pub fn format_pressure(raw: &str) -> EncodedField<String> {
    let pressure = parse_integer(raw).ok_or(FieldError::new(FIELD_PRESSURE))?;
    if pressure < 1000 {
        Ok(format!("0{}", pressure))
    } else {
        Ok(pressure.to_string())
    }
}

// ---------------------------------------------------------------------------
// Wind direction
// ---------------------------------------------------------------------------

/// Rounds a wind direction to the nearest ten degrees, zero-padded to three
/// digits.
///
/// Halfway values round to the even multiple of twenty: `25` → `020`,
/// `35` → `040`, `5` → `000`.
pub fn format_wind_direction(raw: &str) -> EncodedField<String> {
    let degrees = parse_integer(raw).ok_or(FieldError::new(FIELD_WIND_DIRECTION))?;
    Ok(format!("{:03}", round_to_tens(degrees)))
}

/// Nearest multiple of ten, ties to even tens.
fn round_to_tens(value: i64) -> i128 {
    let value = i128::from(value);
    let mut tens = value.div_euclid(10);
    let rem = value.rem_euclid(10);
    if rem > 5 || (rem == 5 && tens % 2 != 0) {
        tens += 1;
    }
    tens * 10
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
