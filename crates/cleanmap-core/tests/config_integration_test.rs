//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use cleanmap_core::config::{CliConfigOverrides, ConfigSource, LayeredConfig};
use cleanmap_core::models::{DistanceUnit, ValidityMode};
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

fn clear_env() {
    env::remove_var("CLEANMAP_DISTANCE_UNIT");
    env::remove_var("CLEANMAP_VALIDITY");
    env::remove_var("CLEANMAP_LIMIT");
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", content).unwrap();
    file
}

#[test]
#[serial]
fn test_partial_file_configuration() {
    clear_env();
    let file = config_file(
        r#"
limit = 25
# Only override the limit, leave others as defaults
"#,
    );

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();

    assert_eq!(config.limit.value, Some(25));
    assert_eq!(config.limit.source, ConfigSource::File);
    assert_eq!(config.distance_unit.value, DistanceUnit::Meters);
    assert_eq!(config.distance_unit.source, ConfigSource::Default);
    assert_eq!(config.validity.source, ConfigSource::Default);
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let file = config_file(
        r#"
distance_unit = "Miles"
validity = "Lenient"
"#,
    );

    env::set_var("CLEANMAP_DISTANCE_UNIT", "km");
    env::set_var("CLEANMAP_VALIDITY", "strict");

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();

    assert_eq!(config.distance_unit.value, DistanceUnit::Kilometers);
    assert_eq!(config.distance_unit.source, ConfigSource::Environment);
    assert_eq!(config.validity.value, ValidityMode::Strict);
    assert_eq!(config.validity.source, ConfigSource::Environment);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_values_are_ignored() {
    clear_env();
    env::set_var("CLEANMAP_DISTANCE_UNIT", "parsecs");
    env::set_var("CLEANMAP_LIMIT", "0");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.distance_unit.value, DistanceUnit::Meters);
    assert_eq!(config.distance_unit.source, ConfigSource::Default);
    assert_eq!(config.limit.value, None);

    clear_env();
}

#[test]
#[serial]
fn test_full_precedence_chain() {
    clear_env();
    let file = config_file(
        r#"
distance_unit = "Feet"
validity = "Strict"
limit = 10
"#,
    );

    env::set_var("CLEANMAP_LIMIT", "20");
    env::set_var("CLEANMAP_VALIDITY", "lenient");

    let mut config =
        LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();

    config.update_from_cli(CliConfigOverrides {
        distance_unit: None,
        validity: None,
        limit: Some(2),
    });

    // File value survives where nothing higher was given
    assert_eq!(config.distance_unit.value, DistanceUnit::Feet);
    assert_eq!(config.distance_unit.source, ConfigSource::File);
    // Environment beats file
    assert_eq!(config.validity.value, ValidityMode::Lenient);
    assert_eq!(config.validity.source, ConfigSource::Environment);
    // CLI beats environment
    assert_eq!(config.limit.value, Some(2));
    assert_eq!(config.limit.source, ConfigSource::Cli);

    clear_env();
}
