//! Field encoders.
//!
//! Each encoder turns one or two raw text fields into a METAR token. They
//! are independent and stateless: a value that does not parse becomes a
//! [`FieldError`](crate::model::FieldError) for that field only, and the
//! rest of the report is still produced.
//!
//! Submodules:
//! - `fields`: wind direction, temperature, pressure, cloud height.
//! - `dew_point`: Magnus-Tetens dew point from temperature and humidity.

pub mod dew_point;
pub mod fields;

pub use dew_point::calculate_dew_point;
pub use fields::{
    format_pressure, format_temperature, format_wind_direction, validate_cloud_height,
    CloudHeight,
};

/// Parses a whole number the way operators type it: surrounding whitespace
/// is ignored, a leading `+` or `-` is accepted, and single underscores may
/// group digits (`1_013`).
pub(crate) fn parse_integer(raw: &str) -> Option<i64> {
    let text = raw.trim();
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text).as_bytes();

    // An underscore must sit between two digits.
    let grouping_ok = digits.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && i + 1 < digits.len()
                && digits[i - 1].is_ascii_digit()
                && digits[i + 1].is_ascii_digit())
    });
    if !grouping_ok {
        return None;
    }
    text.replace('_', "").parse().ok()
}

/// Writes a signed value with the METAR `M` prefix for negatives.
pub(crate) fn sign_prefixed(value: i64) -> String {
    if value < 0 {
        format!("M{}", value.unsigned_abs())
    } else {
        value.to_string()
    }
}
