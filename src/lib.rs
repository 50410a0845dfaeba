//! METAR encoder.
//!
//! Turns a surface weather observation, as typed in by an observer, into a
//! single-line METAR report:
//!
//! ```text
//! WFR 011305Z 27015KT 9999 1600NW -RA SCT25 99999 99999 18/11 Q1012
//! ```
//!
//! The core ([`encode`], [`codes`], [`report`]) is pure and synchronous:
//! [`generate_report`] takes an [`ObservationInput`] and the observation
//! time and always returns a report. A numeric field that does not parse
//! is written into the report as `!!! ERROR in <FIELD> !!!` instead of
//! failing the whole report.
//!
//! The outer layer ([`ingest`], [`config`], [`logging`]) reads observation
//! files and settings for the `metar-encoder` binary.

pub mod codes;
pub mod config;
pub mod encode;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod report;
pub mod stations;

pub use model::{
    CloudLayerInput, EncodedField, FieldError, MetarReport, ObservationInput, PresentWeatherInput,
};
pub use report::{encode_observation, generate_report, EncodedObservation};
pub use stations::Station;
