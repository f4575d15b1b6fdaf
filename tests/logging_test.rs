// ABOUTME: Integration tests for logging configuration
// ABOUTME: Validates environment parsing, verbosity handling and subscriber installation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use growth_status::logging::{LogFormat, LoggingConfig, DEFAULT_SERVICE_NAME};
use serial_test::serial;
use std::env;

const LOGGING_VARS: [&str; 7] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "SERVICE_NAME",
    "SERVICE_VERSION",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
];

fn clear_env() {
    for var in LOGGING_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "growth-batch");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "growth-batch");
    // production turns on location and thread details
    assert!(config.include_location);
    assert!(config.include_thread);

    clear_env();
}

#[test]
#[serial]
fn test_logging_config_from_empty_env_matches_default() {
    clear_env();

    let config = LoggingConfig::from_env();
    let default = LoggingConfig::default();

    assert_eq!(config.level, default.level);
    assert_eq!(config.format, default.format);
    assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
    assert!(!config.include_location);
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "growth-status");
    assert!(!config.include_thread);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::parse(" compact "), LogFormat::Compact);
    assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::parse("xml"), LogFormat::Pretty);
}

#[test]
fn test_verbose_raises_level_to_debug() {
    let config = LoggingConfig::default().verbose();
    assert_eq!(config.level, "debug");

    let config = LoggingConfig {
        level: "trace".into(),
        ..LoggingConfig::default()
    }
    .verbose();
    assert_eq!(config.level, "trace");
}

#[test]
fn test_env_filter_accepts_crate_directives() {
    let config = LoggingConfig {
        level: "warn".into(),
        ..LoggingConfig::default()
    };
    let filter = config.env_filter().to_string();
    assert!(filter.contains("growth_status=warn"));
    assert!(filter.contains("growth_core=warn"));
}

#[test]
fn test_second_init_fails() {
    let config = LoggingConfig {
        format: LogFormat::Compact,
        level: "error".into(),
        ..LoggingConfig::default()
    };

    assert!(config.init().is_ok());
    assert!(config.init().is_err());
}
