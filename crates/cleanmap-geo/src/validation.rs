use crate::models::{Coordinates, PollutedLocation, ValidityMode};
use cleanmap_core::error::{CleanmapError, Result};

/// Validation result with details
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Validation error with location details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub location: String,
    pub reason: String,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        Self { is_valid: true, errors: Vec::new() }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, location: String, reason: String) {
        self.is_valid = false;
        self.errors.push(ValidationError { location, reason });
    }

    /// The first reason, if any
    pub fn first_reason(&self) -> Option<&str> {
        self.errors.first().map(|e| e.reason.as_str())
    }
}

/// Validate a coordinate pair, collecting every problem found
pub fn validate_coordinates(coordinates: &Coordinates) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if !coordinates.latitude.is_finite() {
        result.add_error("latitude".to_string(), "Latitude must be finite".to_string());
    } else if !coordinates.latitude_in_range() {
        result.add_error(
            "latitude".to_string(),
            format!("Latitude must be within [-90, 90], found {}", coordinates.latitude),
        );
    }

    if !coordinates.longitude.is_finite() {
        result.add_error("longitude".to_string(), "Longitude must be finite".to_string());
    } else if !coordinates.longitude_in_range() {
        result.add_error(
            "longitude".to_string(),
            format!("Longitude must be within [-180, 180], found {}", coordinates.longitude),
        );
    }

    result
}

/// Validate and hand the coordinates back, or fail on the first problem
pub fn ensure_valid(coordinates: Coordinates) -> Result<Coordinates> {
    let validation = validate_coordinates(&coordinates);
    if validation.is_valid {
        Ok(coordinates)
    } else {
        Err(CleanmapError::InvalidCoordinates {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            reason: validation.first_reason().unwrap_or("Invalid coordinates").to_string(),
        })
    }
}

/// Records that passed screening
#[derive(Debug, Clone)]
pub struct Screened {
    pub locations: Vec<PollutedLocation>,

    /// Number of records dropped in lenient mode
    pub skipped: usize,
}

/// Screen a record set before proximity queries.
///
/// Strict mode fails on the first record with bad coordinates. Lenient mode
/// drops such records and counts them.
pub fn screen_locations(locations: Vec<PollutedLocation>, mode: ValidityMode) -> Result<Screened> {
    let mut kept = Vec::with_capacity(locations.len());
    let mut skipped = 0;

    for location in locations {
        let validation = validate_coordinates(&location.coordinates);
        if validation.is_valid {
            kept.push(location);
            continue;
        }

        let reason = validation.first_reason().unwrap_or("Invalid coordinates").to_string();
        match mode {
            ValidityMode::Strict => {
                return Err(CleanmapError::InvalidLocation { id: location.id, reason });
            }
            ValidityMode::Lenient => {
                tracing::warn!(id = %location.id, %reason, "Skipping location with invalid coordinates");
                skipped += 1;
            }
        }
    }

    Ok(Screened { locations: kept, skipped })
}

/// Count records with invalid coordinates
pub fn count_invalid_locations(locations: &[PollutedLocation]) -> usize {
    locations.iter().filter(|l| !l.coordinates.is_within_range()).count()
}
