//! `metar-encoder`: generate a METAR report from an observation file.
//!
//! ```text
//! metar-encoder observation.toml
//! metar-encoder --station ATKA --at 2024-05-01T13:05:00Z observation.json
//! cat observation.json | metar-encoder --json
//! ```

use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use std::process;

use metar_encoder::config;
use metar_encoder::ingest;
use metar_encoder::logging::{self, Component};
use metar_encoder::stations::{Station, STATION_REGISTRY};
use metar_encoder::{encode_observation, MetarReport};

/// Encode a surface observation as a single-line METAR report
#[derive(Debug, Parser)]
#[command(name = "metar-encoder", version)]
struct Args {
    /// Observation file (.json or .toml). JSON is read from stdin when omitted.
    #[arg(value_name = "OBSERVATION")]
    observation: Option<PathBuf>,

    /// Station to report for, overriding the observation file
    #[arg(short, long, value_name = "CODE")]
    station: Option<Station>,

    /// Observation time (RFC 3339). Defaults to the current UTC time.
    #[arg(long, value_name = "TIME")]
    at: Option<DateTime<Utc>>,

    /// Print the report and any field errors as JSON
    #[arg(long)]
    json: bool,

    /// Config file, instead of METAR_CONFIG / ./metar_encoder.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// List the known stations and exit
    #[arg(long)]
    list_stations: bool,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    station: Station,
    report: &'a MetarReport,
    field_errors: Vec<&'static str>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        logging::error(Component::Cli, None, &e.to_string());
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.list_stations {
        for info in STATION_REGISTRY {
            println!("{:<6} {:<20} {}", info.code, info.name, info.description);
        }
        return Ok(());
    }

    let config = config::load_config_from(args.config.as_deref())?;
    logging::init_logger(
        config.logging.level,
        config.logging.file.as_deref(),
        config.logging.console_timestamps,
    );
    logging::debug(
        Component::Config,
        None,
        &format!("default station {}", config.default_station),
    );

    let input = match &args.observation {
        Some(path) => {
            logging::debug(
                Component::Ingest,
                None,
                &format!("reading observation from {}", path.display()),
            );
            ingest::load_observation(path, config.default_station)?
        }
        None => ingest::read_observation_json(std::io::stdin().lock(), config.default_station)?,
    }
    .with_station_override(args.station);

    // Sample the clock exactly once per report.
    let now = args.at.unwrap_or_else(Utc::now);

    let encoded = encode_observation(&input);
    let field_errors = encoded.field_errors();
    let report = encoded.render(input.station, now);

    let station = input.station.code();
    logging::log_field_errors(station, &field_errors);
    logging::log_report_summary(station, report.as_str(), field_errors.len());

    if args.json {
        let output = JsonOutput {
            station: input.station,
            report: &report,
            field_errors: field_errors.iter().map(|e| e.field).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", report);
    }

    Ok(())
}
