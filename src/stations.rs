//! Station registry for the METAR encoder.
//!
//! Defines the closed set of stations a report can be issued for, along with
//! their display metadata. This is the single source of truth for station
//! identifiers. Other modules refer to [`Station`] values rather than
//! hardcoding codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::codes::LookupError;

// ---------------------------------------------------------------------------
// Station identifiers
// ---------------------------------------------------------------------------

/// A reporting station. The report starts with its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Station {
    #[default]
    Wfr,
    Wwa,
    Atka,
    Dixie,
}

impl Station {
    /// Identifier written at the start of every report.
    pub fn code(self) -> &'static str {
        self.info().code
    }

    /// Registry entry for this station.
    pub fn info(self) -> &'static StationInfo {
        // The registry holds exactly one entry per variant, in variant order.
        &STATION_REGISTRY[self as usize]
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Station {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_station(s.trim())
            .map(|info| info.station)
            .ok_or_else(|| LookupError::UnknownKey {
                table: "station",
                key: s.to_string(),
            })
    }
}

impl TryFrom<String> for Station {
    type Error = LookupError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Station> for &'static str {
    fn from(station: Station) -> Self {
        station.code()
    }
}

// ---------------------------------------------------------------------------
// Station metadata
// ---------------------------------------------------------------------------

/// Metadata for a single reporting station.
#[derive(Debug)]
pub struct StationInfo {
    pub station: Station,
    /// Identifier used at the head of the report.
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// All stations reports can be generated for, in selection order.
pub static STATION_REGISTRY: &[StationInfo] = &[
    StationInfo {
        station: Station::Wfr,
        code: "WFR",
        name: "Wolf's Fang Runway",
        description: "Blue-ice runway. Default station for new observations.",
    },
    StationInfo {
        station: Station::Wwa,
        code: "WWA",
        name: "Whichaway Camp",
        description: "Camp skiway.",
    },
    StationInfo {
        station: Station::Atka,
        code: "ATKA",
        name: "Atka Iceport",
        description: "Ice shelf landing site.",
    },
    StationInfo {
        station: Station::Dixie,
        code: "DIXIE",
        name: "Dixie",
        description: "Field landing site.",
    },
];

/// Returns the codes of all registered stations.
pub fn all_station_codes() -> Vec<&'static str> {
    STATION_REGISTRY.iter().map(|s| s.code).collect()
}

/// Looks up a station by code, ignoring ASCII case. Returns `None` if not found.
pub fn find_station(code: &str) -> Option<&'static StationInfo> {
    STATION_REGISTRY
        .iter()
        .find(|s| s.code.eq_ignore_ascii_case(code))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
