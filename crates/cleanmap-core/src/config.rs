use crate::error::{CleanmapError, Result};
use crate::models::{DistanceUnit, ValidityMode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "cleanmap.toml";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for proximity queries
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub distance_unit: ConfigValue<DistanceUnit>,
    pub validity: ConfigValue<ValidityMode>,
    /// Maximum number of results; `None` means unlimited
    pub limit: ConfigValue<Option<usize>>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            distance_unit: ConfigValue::new(DistanceUnit::Meters, ConfigSource::Default),
            validity: ConfigValue::new(ValidityMode::Lenient, ConfigSource::Default),
            limit: ConfigValue::new(None, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| CleanmapError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| CleanmapError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(distance_unit) = file_config.distance_unit {
            self.distance_unit.update(distance_unit, ConfigSource::File);
        }

        if let Some(validity) = file_config.validity {
            self.validity.update(validity, ConfigSource::File);
        }

        if let Some(limit) = file_config.limit {
            if limit == 0 {
                return Err(CleanmapError::ConfigInvalid {
                    key: "limit".to_string(),
                    reason: format!("Invalid limit: {}. Use a positive integer", limit),
                });
            }
            self.limit.update(Some(limit), ConfigSource::File);
        }

        Ok(self)
    }

    /// Load the file only if it exists
    pub fn load_from_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        if path.as_ref().exists() {
            self.load_from_file(path)
        } else {
            tracing::debug!(path = %path.as_ref().display(), "No config file, using defaults");
            Ok(self)
        }
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // CLEANMAP_DISTANCE_UNIT
        if let Ok(unit_str) = env::var("CLEANMAP_DISTANCE_UNIT") {
            match parse_distance_unit(&unit_str) {
                Ok(unit) => self.distance_unit.update(unit, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid CLEANMAP_DISTANCE_UNIT value '{}': expected meters, kilometers, miles, or feet",
                    unit_str
                ),
            }
        }

        // CLEANMAP_VALIDITY
        if let Ok(validity_str) = env::var("CLEANMAP_VALIDITY") {
            match parse_validity_mode(&validity_str) {
                Ok(validity) => self.validity.update(validity, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid CLEANMAP_VALIDITY value '{}': expected strict or lenient",
                    validity_str
                ),
            }
        }

        // CLEANMAP_LIMIT
        if let Ok(limit_str) = env::var("CLEANMAP_LIMIT") {
            match parse_limit(&limit_str) {
                Ok(limit) => self.limit.update(Some(limit), ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid CLEANMAP_LIMIT value '{}': expected a positive integer",
                    limit_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(distance_unit) = overrides.distance_unit {
            self.distance_unit.update(distance_unit, ConfigSource::Cli);
        }

        if let Some(validity) = overrides.validity {
            self.validity.update(validity, ConfigSource::Cli);
        }

        if let Some(limit) = overrides.limit {
            self.limit.update(Some(limit), ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "distance_unit".to_string(),
            (format!("{:?}", self.distance_unit.value), self.distance_unit.source),
        );

        map.insert(
            "validity".to_string(),
            (format!("{:?}", self.validity.value), self.validity.source),
        );

        let limit = match self.limit.value {
            Some(limit) => limit.to_string(),
            None => "unlimited".to_string(),
        };
        map.insert("limit".to_string(), (limit, self.limit.source));

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    distance_unit: Option<DistanceUnit>,
    validity: Option<ValidityMode>,
    limit: Option<usize>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub distance_unit: Option<DistanceUnit>,
    pub validity: Option<ValidityMode>,
    pub limit: Option<usize>,
}

/// Parse distance unit from string
pub fn parse_distance_unit(s: &str) -> Result<DistanceUnit> {
    match s.to_lowercase().as_str() {
        "meters" | "m" => Ok(DistanceUnit::Meters),
        "kilometers" | "km" => Ok(DistanceUnit::Kilometers),
        "miles" | "mi" => Ok(DistanceUnit::Miles),
        "feet" | "ft" => Ok(DistanceUnit::Feet),
        _ => Err(CleanmapError::ConfigInvalid {
            key: "distance_unit".to_string(),
            reason: format!("Invalid distance unit: {}. Use meters, kilometers, miles, or feet", s),
        }),
    }
}

/// Parse validity mode from string
pub fn parse_validity_mode(s: &str) -> Result<ValidityMode> {
    match s.to_lowercase().as_str() {
        "strict" => Ok(ValidityMode::Strict),
        "lenient" => Ok(ValidityMode::Lenient),
        _ => Err(CleanmapError::ConfigInvalid {
            key: "validity".to_string(),
            reason: format!("Invalid validity mode: {}. Use strict or lenient", s),
        }),
    }
}

/// Parse a result limit; zero is rejected
pub fn parse_limit(s: &str) -> Result<usize> {
    match s.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(CleanmapError::ConfigInvalid {
            key: "limit".to_string(),
            reason: format!("Invalid limit: {}. Use a positive integer", s),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.distance_unit.value, DistanceUnit::Meters);
        assert_eq!(config.distance_unit.source, ConfigSource::Default);
        assert_eq!(config.validity.value, ValidityMode::Lenient);
        assert_eq!(config.limit.value, None);
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        value.update(400, ConfigSource::Cli);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(500, ConfigSource::File);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
distance_unit = "Kilometers"
validity = "Strict"
limit = 5
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.distance_unit.value, DistanceUnit::Kilometers);
        assert_eq!(config.distance_unit.source, ConfigSource::File);
        assert_eq!(config.validity.value, ValidityMode::Strict);
        assert_eq!(config.limit.value, Some(5));
    }

    #[test]
    fn test_load_from_missing_optional_file() {
        let config = LayeredConfig::with_defaults()
            .load_from_optional_file("/nonexistent/cleanmap.toml")
            .unwrap();

        assert_eq!(config.distance_unit.source, ConfigSource::Default);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "distance_unit = \"Parsecs\"").unwrap();

        let result = LayeredConfig::with_defaults().load_from_file(file.path());
        assert!(matches!(result, Err(CleanmapError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_zero_limit_in_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "limit = 0").unwrap();

        let result = LayeredConfig::with_defaults().load_from_file(file.path());
        match result {
            Err(CleanmapError::ConfigInvalid { key, .. }) => assert_eq!(key, "limit"),
            other => panic!("expected ConfigInvalid for limit, got {:?}", other.map(|c| c.limit.value)),
        }
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();

        let overrides = CliConfigOverrides {
            distance_unit: Some(DistanceUnit::Miles),
            validity: None,
            limit: Some(3),
        };

        config.update_from_cli(overrides);

        assert_eq!(config.distance_unit.value, DistanceUnit::Miles);
        assert_eq!(config.distance_unit.source, ConfigSource::Cli);
        assert_eq!(config.limit.value, Some(3));
        assert_eq!(config.validity.source, ConfigSource::Default);
    }

    #[test]
    fn test_parse_distance_unit() {
        assert_eq!(parse_distance_unit("meters").unwrap(), DistanceUnit::Meters);
        assert_eq!(parse_distance_unit("m").unwrap(), DistanceUnit::Meters);
        assert_eq!(parse_distance_unit("KM").unwrap(), DistanceUnit::Kilometers);
        assert_eq!(parse_distance_unit("ft").unwrap(), DistanceUnit::Feet);
        assert!(parse_distance_unit("furlongs").is_err());
    }

    #[test]
    fn test_parse_validity_mode() {
        assert_eq!(parse_validity_mode("strict").unwrap(), ValidityMode::Strict);
        assert_eq!(parse_validity_mode("LENIENT").unwrap(), ValidityMode::Lenient);
        assert!(parse_validity_mode("sloppy").is_err());
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit("10").unwrap(), 10);
        assert_eq!(parse_limit(" 7 ").unwrap(), 7);
        assert!(parse_limit("0").is_err());
        assert!(parse_limit("-1").is_err());
        assert!(parse_limit("many").is_err());
    }

    #[test]
    fn test_inspection_map() {
        let config = LayeredConfig::with_defaults();
        let map = config.to_inspection_map();

        assert_eq!(map.len(), 3);
        let (limit, source) = &map["limit"];
        assert_eq!(limit, "unlimited");
        assert_eq!(*source, ConfigSource::Default);
    }
}
