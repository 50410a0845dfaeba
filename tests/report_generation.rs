/// Integration tests for end-to-end METAR report generation
///
/// Tests verify:
/// 1. Observation files (JSON and TOML) encode to the expected report
/// 2. Field validation failures surface as inline markers
/// 3. Output invariants: single spacing, token order, determinism
///
/// Run with: cargo test --test report_generation

use chrono::{DateTime, TimeZone, Utc};
use metar_encoder::codes::{
    CloudCover, CompassDirection, Descriptor, Intensity, Obscuration, Precipitation,
};
use metar_encoder::config::EncoderConfig;
use metar_encoder::ingest;
use metar_encoder::{
    encode_observation, generate_report, CloudLayerInput, ObservationInput, PresentWeatherInput,
    Station,
};

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

/// A fixed observation time: 2025-01-09 06:50:00 UTC.
fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 9, 6, 50, 0).unwrap()
}

fn reference_observation() -> ObservationInput {
    ObservationInput {
        station: Station::Wfr,
        wind_direction: "270".to_string(),
        wind_speed: "15".to_string(),
        visibility: "9999".to_string(),
        min_visibility: "1600".to_string(),
        min_visibility_direction: CompassDirection::NorthWest,
        present_weather: PresentWeatherInput {
            intensity: Intensity::Light,
            descriptor: Descriptor::None,
            precipitation: Precipitation::Rain,
            obscuration: Obscuration::None,
        },
        clouds: [
            CloudLayerInput::new(CloudCover::Sct, "2500"),
            CloudLayerInput::new(CloudCover::None, "0"),
            CloudLayerInput::new(CloudCover::None, "0"),
        ],
        temperature: "18".to_string(),
        humidity: "65".to_string(),
        pressure: "1012".to_string(),
    }
}

fn assert_well_spaced(report: &str) {
    assert_eq!(report, report.trim(), "report has leading/trailing space: {:?}", report);
    assert!(!report.contains("  "), "report has a double space: {:?}", report);
}

// ---------------------------------------------------------------------------
// 1. Reference observation
// ---------------------------------------------------------------------------

#[test]
fn test_reference_observation_token_order() {
    let report = generate_report(&reference_observation(), fixed_now());

    assert!(
        report.as_str().starts_with("WFR 090650Z 27015KT 9999 1600NW -RA SCT25 "),
        "unexpected report: {}",
        report
    );
    assert_eq!(
        report.as_str(),
        "WFR 090650Z 27015KT 9999 1600NW -RA SCT25 99999 99999 18/11 Q1012"
    );

    let tokens: Vec<_> = report.tokens().collect();
    assert_eq!(tokens.len(), 11);
    assert_eq!(tokens[0], "WFR");
    assert_eq!(tokens[1], "090650Z");
    assert!(tokens[9].contains('/'));
    assert!(tokens[10].starts_with('Q'));
}

#[test]
fn test_repeated_generation_is_byte_identical() {
    let input = reference_observation();
    let reports: Vec<_> = (0..5).map(|_| generate_report(&input, fixed_now())).collect();
    assert!(reports.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_timestamp_follows_supplied_clock() {
    let input = reference_observation();
    let later = Utc.with_ymd_and_hms(2025, 1, 10, 0, 5, 0).unwrap();
    let report = generate_report(&input, later);
    assert_eq!(report.tokens().nth(1), Some("100005Z"));
}

#[test]
fn test_sub_zero_observation() {
    let mut input = reference_observation();
    input.station = Station::Atka;
    input.temperature = "-12".to_string();
    input.humidity = "80".to_string();
    input.pressure = "987".to_string();
    input.present_weather = PresentWeatherInput {
        intensity: Intensity::Moderate,
        descriptor: Descriptor::Blowing,
        precipitation: Precipitation::Snow,
        obscuration: Obscuration::None,
    };

    let report = generate_report(&input, fixed_now());
    assert!(report.as_str().starts_with("ATKA "));
    assert!(report.as_str().contains(" BLSN "));
    assert!(report.as_str().ends_with(" M12/M15 Q0987"), "got {}", report);
}

// ---------------------------------------------------------------------------
// 2. Field errors
// ---------------------------------------------------------------------------

#[test]
fn test_every_numeric_field_can_fail_independently() {
    let mut input = reference_observation();
    input.wind_direction = "W".to_string();
    input.clouds[0].height_ft = "twenty five hundred".to_string();
    input.temperature = "18C".to_string();
    input.pressure = "1012hPa".to_string();

    let report = generate_report(&input, fixed_now());
    let text = report.as_str();

    assert!(text.contains("!!! ERROR in WIND DIRECTION !!!15KT"));
    assert!(text.contains("SCT!!! ERROR in CLOUDS !!!"));
    assert!(text.contains("!!! ERROR in TEMPERATURE !!!/!!! ERROR in DEW POINT !!!"));
    assert!(text.ends_with("Q!!! ERROR in PRESSURE !!!"));
    // Fields that were fine are still encoded.
    assert!(text.contains(" 9999 1600NW -RA "));
    assert_well_spaced(text);

    let fields: Vec<_> = encode_observation(&input)
        .field_errors()
        .into_iter()
        .map(|e| e.field)
        .collect();
    assert_eq!(
        fields,
        vec!["WIND DIRECTION", "CLOUDS", "TEMPERATURE", "DEW POINT", "PRESSURE"]
    );
}

#[test]
fn test_blank_form_still_produces_a_report() {
    let report = generate_report(&ObservationInput::default(), fixed_now());
    assert!(report.as_str().starts_with("WFR 090650Z !!! ERROR in WIND DIRECTION !!!KT NSW "));
    assert_well_spaced(report.as_str());
}

// ---------------------------------------------------------------------------
// 3. Observation files
// ---------------------------------------------------------------------------

#[test]
fn test_json_file_encodes_to_reference_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("obs.json");
    std::fs::write(
        &path,
        r#"{
            "wind_direction": "270",
            "wind_speed": "15",
            "visibility": "9999",
            "min_visibility": "1600",
            "min_visibility_direction": "NW",
            "present_weather": { "intensity": "-", "precipitation": "rain" },
            "clouds": [
                { "amount": "SCT: 3-4/8", "height_ft": "2500" },
                { "amount": "", "height_ft": "0" },
                { "amount": "", "height_ft": "0" }
            ],
            "temperature": "18",
            "humidity": "65",
            "pressure": "1012"
        }"#,
    )
    .unwrap();

    let config = EncoderConfig::default();
    let input = ingest::load_observation(&path, config.default_station).unwrap();
    assert_eq!(input, reference_observation());

    let report = generate_report(&input, fixed_now());
    assert_eq!(
        report.as_str(),
        "WFR 090650Z 27015KT 9999 1600NW -RA SCT25 99999 99999 18/11 Q1012"
    );
}

#[test]
fn test_toml_file_uses_configured_default_station() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("metar_encoder.toml");
    std::fs::write(&config_path, "default_station = \"WWA\"\n").unwrap();
    let obs_path = dir.path().join("obs.toml");
    std::fs::write(
        &obs_path,
        r#"
wind_direction = "183"
wind_speed = "08"
visibility = "5000"
min_visibility = "3000"
temperature = "-4"
humidity = "90"
pressure = "1003"

[present_weather]
intensity = "moderate"
obscuration = "mist"

[[clouds]]
amount = "FEW"
height_ft = "800"

[[clouds]]
amount = "BKN"
height_ft = "2000"

[[clouds]]
amount = "OVC"
height_ft = "5000"
"#,
    )
    .unwrap();

    let config = EncoderConfig::load(&config_path).unwrap();
    let input = ingest::load_observation(&obs_path, config.default_station).unwrap();
    let report = generate_report(&input, fixed_now());

    assert_eq!(
        report.as_str(),
        "WWA 090650Z 18008KT 5000 3000 BR FEW8 BKN20 OVC50 M4/M5 Q1003"
    );
}

// ---------------------------------------------------------------------------
// 4. Station precedence
// ---------------------------------------------------------------------------

#[test]
fn test_station_precedence_override_then_file_then_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("metar_encoder.toml");
    std::fs::write(&config_path, "default_station = \"WWA\"\n").unwrap();
    let config = metar_encoder::config::resolve_config(Some(config_path.as_path()), |_| None)
        .unwrap();

    let with_station = dir.path().join("atka.json");
    std::fs::write(&with_station, r#"{ "station": "ATKA", "pressure": "1000" }"#).unwrap();
    let without_station = dir.path().join("plain.json");
    std::fs::write(&without_station, r#"{ "pressure": "1000" }"#).unwrap();

    // No station anywhere but the config.
    let input = ingest::load_observation(&without_station, config.default_station)
        .unwrap()
        .with_station_override(None);
    assert_eq!(input.station, Station::Wwa);

    // The file's station beats the config.
    let input = ingest::load_observation(&with_station, config.default_station)
        .unwrap()
        .with_station_override(None);
    assert_eq!(input.station, Station::Atka);

    // A command-line station beats both.
    let input = ingest::load_observation(&with_station, config.default_station)
        .unwrap()
        .with_station_override(Some(Station::Dixie));
    assert_eq!(input.station, Station::Dixie);
    assert!(generate_report(&input, fixed_now()).as_str().starts_with("DIXIE 090650Z "));
}
