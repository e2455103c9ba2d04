//! Tests for command-line parsing of `Config`.

use clap::Parser;
use smokepeer::config::{LocationSource, LogFormat, LogLevel};
use smokepeer::Config;
use std::path::PathBuf;

#[test]
fn test_parse_inline_locations() {
    let config = Config::try_parse_from(["smokepeer", "--gpu-locations", "LPT-US,FRA-DE"]).unwrap();
    assert_eq!(config.gpu_locations.as_deref(), Some("LPT-US,FRA-DE"));
    assert_eq!(
        config.location_source().unwrap(),
        LocationSource::Inline("LPT-US,FRA-DE".to_string())
    );
    assert!(!config.dry_run);
}

#[test]
fn test_parse_config_file() {
    let config =
        Config::try_parse_from(["smokepeer", "--gpu-config-file", "/etc/smokepeer/locations"])
            .unwrap();
    assert_eq!(
        config.location_source().unwrap(),
        LocationSource::File(PathBuf::from("/etc/smokepeer/locations"))
    );
}

#[test]
fn test_dry_run_and_print_config_are_the_same_flag() {
    let dry = Config::try_parse_from(["smokepeer", "--gpu-locations", "A-US", "--dry-run"]).unwrap();
    let print =
        Config::try_parse_from(["smokepeer", "--gpu-locations", "A-US", "--print-config"]).unwrap();
    assert!(dry.dry_run);
    assert!(print.dry_run);
}

#[test]
fn test_lptdns_flag() {
    let config = Config::try_parse_from([
        "smokepeer",
        "--gpu-locations",
        "A-US",
        "--lptdns",
        "nodes.example.net",
    ])
    .unwrap();
    assert_eq!(config.dns_name, "nodes.example.net");
}

#[test]
fn test_path_and_probe_options() {
    let config = Config::try_parse_from([
        "smokepeer",
        "--gpu-locations",
        "A-US",
        "--db-path",
        "/var/lib/smokepeer/state.db",
        "--geoip-db",
        "/opt/geo/City.mmdb",
        "--output",
        "/tmp/Targets",
        "--ping-count",
        "5",
        "--ping-binary",
        "/usr/bin/ping",
    ])
    .unwrap();
    assert_eq!(config.db_path, PathBuf::from("/var/lib/smokepeer/state.db"));
    assert_eq!(config.geoip_db, PathBuf::from("/opt/geo/City.mmdb"));
    assert_eq!(config.output, PathBuf::from("/tmp/Targets"));
    assert_eq!(config.ping_count, 5);
    assert_eq!(config.ping_binary, PathBuf::from("/usr/bin/ping"));
}

#[test]
fn test_ping_count_must_be_positive() {
    let result = Config::try_parse_from(["smokepeer", "--gpu-locations", "A-US", "--ping-count", "0"]);
    assert!(result.is_err());
}

#[test]
fn test_logging_options() {
    let config = Config::try_parse_from([
        "smokepeer",
        "--gpu-locations",
        "A-US",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .unwrap();
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_invalid_log_level_rejected() {
    let result =
        Config::try_parse_from(["smokepeer", "--gpu-locations", "A-US", "--log-level", "loud"]);
    assert!(result.is_err());
}

#[test]
fn test_unknown_flag_rejected() {
    let err = Config::try_parse_from(["smokepeer", "--gpu-location", "A-US"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_both_sources_parse_but_conflict() {
    // clap accepts both; the run rejects the combination with its own status
    let config = Config::try_parse_from([
        "smokepeer",
        "--gpu-locations",
        "A-US",
        "--gpu-config-file",
        "locations.txt",
    ])
    .unwrap();
    assert!(config.location_source().is_err());
}
