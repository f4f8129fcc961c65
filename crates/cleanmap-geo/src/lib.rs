//! Cleanmap Geo - Great-circle distance and proximity ordering
//!
//! This crate handles the geodesic side of cleanmap: haversine distance,
//! ordering located records by distance from a reference point, and the
//! explicit coordinate validation callers run before any of it.

pub mod distance;
pub mod models;
pub mod proximity;
pub mod validation;

pub use distance::{haversine_distance, GeoDistance, EARTH_RADIUS_METERS};
pub use proximity::{
    into_ordered_by_distance, nearest, order_by_distance, ranked_by_distance, within_distance,
    Ranked,
};
pub use validation::{ensure_valid, screen_locations, validate_coordinates, Screened};
