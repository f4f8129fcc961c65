use crate::models::{Coordinates, Distance, DistanceUnit, Located};

/// Earth radius used for every distance in cleanmap, in meters.
///
/// Calibrated for the latitude and elevation of Vilnius rather than the mean
/// radius (~6,371,000 m). Stored distances were produced with this value, so
/// it must not change.
pub const EARTH_RADIUS_METERS: f64 = 6_364_050.0;

/// Great-circle distance between two points in meters, using the haversine
/// formula.
///
/// Never fails. Out-of-range input is not rejected here and yields a finite
/// value that may not be physically meaningful; validate beforehand with
/// [`crate::validation::validate_coordinates`] when that matters.
pub fn haversine_distance(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push sqrt(h) just past 1 near antipodes, where asin is undefined
    let c = h.sqrt().min(1.0).asin();

    2.0 * EARTH_RADIUS_METERS * c
}

/// Distance helpers for anything [`Located`]
pub trait GeoDistance: Located {
    /// Distance to another located value in meters
    fn distance_to<L: Located + ?Sized>(&self, other: &L) -> f64 {
        haversine_distance(self.coordinates(), other.coordinates())
    }

    /// Distance to another located value in the given unit
    fn distance_to_in<L: Located + ?Sized>(&self, other: &L, unit: DistanceUnit) -> Distance {
        Distance::meters(self.distance_to(other)).convert(unit)
    }
}

impl<T: Located + ?Sized> GeoDistance for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn vilnius_center() -> Coordinates {
        Coordinates::new(54.6872, 25.2797)
    }

    #[test]
    fn test_same_point_is_zero() {
        let p = vilnius_center();
        assert_eq!(haversine_distance(p, p), 0.0);
    }

    #[test]
    fn test_short_distance() {
        let d = haversine_distance(vilnius_center(), Coordinates::new(54.687866, 25.275202));
        assert!((d - 298.4).abs() <= 0.8952, "expected ~298.4 m, got {}", d);
    }

    #[test]
    fn test_city_distance() {
        let a = Coordinates::new(54.730026, 25.2621);
        let b = Coordinates::new(54.675209, 25.273415);
        let d = haversine_distance(a, b);
        assert!((d - 6139.0).abs() <= 18.417, "expected ~6139 m, got {}", d);
    }

    #[test]
    fn test_antipodal_points_clamp() {
        let max = PI * EARTH_RADIUS_METERS;

        let d = haversine_distance(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 180.0));
        assert!(d.is_finite());
        assert!(d <= max + 1e-6);
        assert!((d - max).abs() < 1e-3);

        let poles = haversine_distance(Coordinates::new(90.0, 0.0), Coordinates::new(-90.0, 0.0));
        assert!((poles - max).abs() < 1e-3);
    }

    #[test]
    fn test_out_of_range_input_is_finite() {
        let d = haversine_distance(Coordinates::new(500.0, -900.0), Coordinates::new(-270.0, 720.0));
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }

    #[test]
    fn test_nan_input_is_treated_as_farthest() {
        let d = haversine_distance(Coordinates::new(f64::NAN, 0.0), Coordinates::new(0.0, 0.0));
        assert!((d - PI * EARTH_RADIUS_METERS).abs() < 1e-6);
    }

    #[test]
    fn test_one_degree_on_equator() {
        let d = haversine_distance(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 1.0));
        let expected = EARTH_RADIUS_METERS * 1.0_f64.to_radians();
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn test_distance_to_in_units() {
        let a = Coordinates::new(54.730026, 25.2621);
        let b = Coordinates::new(54.675209, 25.273415);

        let meters = a.distance_to(&b);
        let km = a.distance_to_in(&b, DistanceUnit::Kilometers);

        assert_eq!(km.unit, DistanceUnit::Kilometers);
        assert!((km.value * 1000.0 - meters).abs() < 1e-6);
    }
}
