//! Latitude/longitude value type and the capability of exposing one.
//!
//! `Coordinates` deliberately performs no range checking on construction.
//! Range validation is an explicit step taken at the boundary (see
//! `cleanmap_geo::validation`), never inside the distance math.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the Earth's surface in decimal degrees (WGS 84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, expected within [-90, 90]
    pub latitude: f64,

    /// Longitude in degrees, expected within [-180, 180]
    pub longitude: f64,
}

impl Coordinates {
    pub const MIN_LATITUDE: f64 = -90.0;
    pub const MAX_LATITUDE: f64 = 90.0;
    pub const MIN_LONGITUDE: f64 = -180.0;
    pub const MAX_LONGITUDE: f64 = 180.0;

    /// Create coordinates from a latitude/longitude pair
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Latitude is inside [-90, 90]. NaN is never in range.
    pub fn latitude_in_range(&self) -> bool {
        (Self::MIN_LATITUDE..=Self::MAX_LATITUDE).contains(&self.latitude)
    }

    /// Longitude is inside [-180, 180]. NaN is never in range.
    pub fn longitude_in_range(&self) -> bool {
        (Self::MIN_LONGITUDE..=Self::MAX_LONGITUDE).contains(&self.longitude)
    }

    /// Check whether both components are inside their ranges
    pub fn is_within_range(&self) -> bool {
        self.latitude_in_range() && self.longitude_in_range()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for Coordinates {
    /// Build from a `(latitude, longitude)` tuple
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Anything that can be placed on the map.
///
/// Used as the sort key for proximity ordering. Implementors only expose a
/// position; identity and lifecycle belong to whoever owns the record.
pub trait Located {
    fn coordinates(&self) -> Coordinates;
}

impl Located for Coordinates {
    fn coordinates(&self) -> Coordinates {
        *self
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn coordinates(&self) -> Coordinates {
        (**self).coordinates()
    }
}

impl<T: Located + ?Sized> Located for Box<T> {
    fn coordinates(&self) -> Coordinates {
        (**self).coordinates()
    }
}
