//! Models for cleanmap-geo.
//!
//! This module re-exports canonical types from `cleanmap-core` and provides
//! conversions to the `geo` crate.

// Re-export canonical types from cleanmap-core
pub use cleanmap_core::models::{
    Coordinates, Distance, DistanceUnit, Located, PollutedLocation, Severity, ValidityMode,
};

/// Convert coordinates to a `geo::Point` (x = longitude, y = latitude)
pub fn to_geo_point(coordinates: Coordinates) -> geo::Point<f64> {
    geo::Point::new(coordinates.longitude, coordinates.latitude)
}

/// Extension trait for located values with geo-crate operations
pub trait LocatedExt: Located {
    /// Convert the position to a `geo::Point`
    fn to_geo(&self) -> geo::Point<f64> {
        to_geo_point(self.coordinates())
    }
}

impl<T: Located + ?Sized> LocatedExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{haversine_distance, EARTH_RADIUS_METERS};
    use geo::{Distance as _, Haversine};

    #[test]
    fn test_point_axis_order() {
        let coords = Coordinates::new(54.6872, 25.2797);
        let point = to_geo_point(coords);

        assert_eq!(point.x(), 25.2797);
        assert_eq!(point.y(), 54.6872);
    }

    #[test]
    fn test_located_ext() {
        let location = PollutedLocation::new(Coordinates::new(-8.5069, 115.2625));
        assert_eq!(location.to_geo(), geo::Point::new(115.2625, -8.5069));
    }

    #[test]
    fn test_agrees_with_geo_haversine_up_to_radius() {
        let paris = Coordinates::new(48.8566, 2.3522);
        let london = Coordinates::new(51.5074, -0.1276);
        let vilnius = Coordinates::new(54.6872, 25.2797);

        // geo uses the mean Earth radius, so every ratio is the same radius ratio
        let ratio = |a: Coordinates, b: Coordinates| {
            haversine_distance(a, b) / Haversine.distance(to_geo_point(a), to_geo_point(b))
        };

        let r1 = ratio(paris, london);
        let r2 = ratio(london, vilnius);

        assert!((r1 - r2).abs() < 1e-9, "ratios differ: {} vs {}", r1, r2);
        assert!((r1 - EARTH_RADIUS_METERS / 6_371_000.0).abs() < 1e-5);
    }
}
