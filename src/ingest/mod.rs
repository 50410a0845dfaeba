//! Observation ingest.
//!
//! Submodules:
//! - `observation`: reads observation records from JSON / TOML files.

pub mod observation;

pub use observation::{
    load_observation, parse_observation_json, parse_observation_toml, read_observation_json,
    IngestError,
};
