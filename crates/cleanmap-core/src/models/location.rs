use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use super::{Coordinates, Located};
use crate::error::{CleanmapError, Result};

/// How badly a spot is polluted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Severity {
    Low,
    #[default]
    Moderate,
    High,
}

/// A polluted location as stored in the flat-file record set.
///
/// The record is owned by the persistence layer; here it is only read and
/// ordered by proximity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutedLocation {
    /// Unique identifier
    pub id: Uuid,

    /// Human-readable title, when one was resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Centre of the polluted area
    pub coordinates: Coordinates,

    /// Radius of the polluted area in meters
    #[serde(default)]
    pub radius: u32,

    #[serde(default)]
    pub severity: Severity,

    /// Cleanup progress in percent (0..=100)
    #[serde(default, deserialize_with = "deserialize_progress")]
    pub progress: u8,
}

/// Highest accepted cleanup progress, in percent
pub const MAX_PROGRESS: u8 = 100;

fn deserialize_progress<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = u8::deserialize(deserializer)?;

    if value > MAX_PROGRESS {
        return Err(serde::de::Error::custom(format!(
            "invalid progress: {}, expected a percentage in 0..={}",
            value, MAX_PROGRESS
        )));
    }
    Ok(value)
}

impl PollutedLocation {
    /// Create a new record with a fresh identifier
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: None,
            coordinates,
            radius: 0,
            severity: Severity::default(),
            progress: 0,
        }
    }

    /// Set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the radius in meters
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the severity
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Load every record from a JSON array file
    pub fn load_all<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CleanmapError::LocationsNotFound { path: path.to_path_buf() });
        }

        let content = fs::read_to_string(path)?;
        let locations: Vec<Self> = serde_json::from_str(&content)?;

        tracing::debug!(count = locations.len(), path = %path.display(), "Loaded locations");
        Ok(locations)
    }
}

impl Located for PollutedLocation {
    fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}
