//! Structured logging for the METAR encoder
//!
//! Provides leveled logging tagged with the emitting component and, where
//! relevant, the station a report is being generated for. Supports console
//! output and an optional append-only log file. The encoding core never
//! logs; only the outer layers (CLI, ingest, configuration) do.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::str::FromStr;
use std::sync::Mutex;

use crate::model::FieldError;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    #[serde(alias = "warn")]
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Encoder,
    Ingest,
    Config,
    Cli,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Encoder => write!(f, "ENC"),
            Component::Ingest => write!(f, "INGEST"),
            Component::Config => write!(f, "CFG"),
            Component::Cli => write!(f, "CLI"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>, console_timestamps: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console_timestamps,
        };

        if let Ok(mut slot) = LOGGER.lock() {
            *slot = Some(logger);
        }
    }

    fn log(&self, level: LogLevel, component: Component, station: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
        let log_entry = format_entry(&timestamp, level, component, station, message);
        let station_part = station.map(|s| format!(" [{}]", s)).unwrap_or_default();

        // Console output goes to stderr so stdout carries only the report.
        if self.console_timestamps {
            eprintln!("{}", log_entry);
        } else {
            match level {
                LogLevel::Error => eprintln!("✗ {}{}: {}", component, station_part, message),
                LogLevel::Warning => eprintln!("⚠ {}{}: {}", component, station_part, message),
                LogLevel::Info => eprintln!("{}", message),
                LogLevel::Debug => {} // Skip debug in non-timestamp mode
            }
        }

        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

/// One log line: `<timestamp> <LEVEL> <COMPONENT>[ [station]]: <message>`.
pub fn format_entry(
    timestamp: &str,
    level: LogLevel,
    component: Component,
    station: Option<&str>,
    message: &str,
) -> String {
    let station_part = station.map(|s| format!(" [{}]", s)).unwrap_or_default();
    format!(
        "{} {} {}{}: {}",
        timestamp, level, component, station_part, message
    )
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    Logger::init(min_level, log_file.map(String::from), console_timestamps);
}

fn dispatch(level: LogLevel, component: Component, station: Option<&str>, message: &str) {
    if let Ok(guard) = LOGGER.lock() {
        if let Some(logger) = guard.as_ref() {
            logger.log(level, component, station, message);
        }
    }
}

pub fn info(component: Component, station: Option<&str>, message: &str) {
    dispatch(LogLevel::Info, component, station, message);
}

pub fn warn(component: Component, station: Option<&str>, message: &str) {
    dispatch(LogLevel::Warning, component, station, message);
}

pub fn error(component: Component, station: Option<&str>, message: &str) {
    dispatch(LogLevel::Error, component, station, message);
}

pub fn debug(component: Component, station: Option<&str>, message: &str) {
    dispatch(LogLevel::Debug, component, station, message);
}

// ---------------------------------------------------------------------------
// Field Validation Logging
// ---------------------------------------------------------------------------

/// Log each field that failed validation while encoding a report.
///
/// Field errors never stop a report from being produced, so they are
/// warnings rather than errors.
pub fn log_field_errors(station: &str, errors: &[FieldError]) {
    for err in errors {
        let message = format!("{} could not be encoded; marker written to report", err.field);
        warn(Component::Encoder, Some(station), &message);
    }
}

/// Log a one-line summary of a generated report.
pub fn log_report_summary(station: &str, report: &str, field_errors: usize) {
    if field_errors == 0 {
        info(Component::Encoder, Some(station), &format!("Report generated: {}", report));
    } else {
        warn(
            Component::Encoder,
            Some(station),
            &format!(
                "Report generated with {} field error(s): {}",
                field_errors, report
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("INFO".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!(" warning ".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_format_entry_with_and_without_station() {
        let line = format_entry(
            "2024-05-01 13:05:00 UTC",
            LogLevel::Warning,
            Component::Encoder,
            Some("WFR"),
            "PRESSURE could not be encoded",
        );
        assert_eq!(
            line,
            "2024-05-01 13:05:00 UTC WARN ENC [WFR]: PRESSURE could not be encoded"
        );

        let line = format_entry("t", LogLevel::Info, Component::Config, None, "loaded");
        assert_eq!(line, "t INFO CFG: loaded");
    }

    #[test]
    fn test_field_errors_written_to_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metar.log");
        let path_str = path.to_str().unwrap();

        init_logger(LogLevel::Debug, Some(path_str), true);
        log_field_errors(
            "ATKA",
            &[FieldError::new("CLOUDS"), FieldError::new("DEW POINT")],
        );
        debug(Component::Cli, None, "done");

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("WARN ENC [ATKA]: CLOUDS could not be encoded; marker written to report"));
        assert!(lines[1].contains("DEW POINT"));
        assert!(lines[2].ends_with("DEBUG CLI: done"));
    }
}
