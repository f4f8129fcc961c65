//! Error types for Cleanmap

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CleanmapError {
    // Coordinate errors
    #[error("Invalid coordinates ({latitude}, {longitude}): {reason}")]
    InvalidCoordinates {
        latitude: f64,
        longitude: f64,
        reason: String,
    },

    #[error("Invalid location {id}: {reason}")]
    InvalidLocation { id: Uuid, reason: String },

    // Record file errors
    #[error("Location file not found at {path}")]
    LocationsNotFound { path: PathBuf },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CleanmapError {
    fn from(err: serde_json::Error) -> Self {
        CleanmapError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CleanmapError>;
