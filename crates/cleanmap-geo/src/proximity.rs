//! Ordering located records by distance from a reference point.
//!
//! Every ordering here is a stable sort on ascending haversine distance:
//! records at the same distance keep the order they were given in. Callers
//! rely on that for deterministic output over equidistant data.

use crate::distance::haversine_distance;
use crate::models::{Coordinates, Distance, Located};
use serde::Serialize;

/// An item paired with its distance from the reference point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ranked<T> {
    pub item: T,

    /// Distance from the reference point in meters
    pub distance: f64,
}

impl<T> Ranked<T> {
    pub fn new(item: T, distance: f64) -> Self {
        Self { item, distance }
    }
}

/// Decorate every item with its distance, then stable-sort ascending.
fn rank<T: Located>(reference: Coordinates, items: impl IntoIterator<Item = T>) -> Vec<Ranked<T>> {
    let mut ranked: Vec<Ranked<T>> = items
        .into_iter()
        .map(|item| {
            let distance = haversine_distance(reference, item.coordinates());
            Ranked::new(item, distance)
        })
        .collect();

    // slice::sort_by is stable
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    tracing::debug!(count = ranked.len(), %reference, "Ordered by distance");
    ranked
}

/// Order items by ascending distance from `reference`.
///
/// Returns references into `items` without mutating it. Ties keep their input
/// order; an empty slice gives an empty vector.
pub fn order_by_distance<T: Located>(reference: Coordinates, items: &[T]) -> Vec<&T> {
    rank(reference, items).into_iter().map(|ranked| ranked.item).collect()
}

/// Same ordering as [`order_by_distance`], keeping each item's distance.
pub fn ranked_by_distance<T: Located>(reference: Coordinates, items: &[T]) -> Vec<Ranked<&T>> {
    rank(reference, items)
}

/// Owned variant of [`order_by_distance`].
pub fn into_ordered_by_distance<T: Located>(reference: Coordinates, items: Vec<T>) -> Vec<T> {
    rank(reference, items).into_iter().map(|ranked| ranked.item).collect()
}

/// The closest item, or `None` when there are none.
///
/// On ties the earliest item wins.
pub fn nearest<T: Located>(reference: Coordinates, items: &[T]) -> Option<Ranked<&T>> {
    items
        .iter()
        .map(|item| Ranked::new(item, haversine_distance(reference, item.coordinates())))
        .reduce(|best, candidate| {
            if candidate.distance.total_cmp(&best.distance).is_lt() {
                candidate
            } else {
                best
            }
        })
}

/// Items no farther than `max` from `reference`, closest first.
///
/// The bound is inclusive. The result is always a prefix of
/// [`ranked_by_distance`] over the same input.
pub fn within_distance<T: Located>(
    reference: Coordinates,
    items: &[T],
    max: Distance,
) -> Vec<Ranked<&T>> {
    let max_meters = max.to_meters();
    let mut ranked = rank(reference, items);
    let cutoff = ranked.partition_point(|ranked| ranked.distance <= max_meters);
    ranked.truncate(cutoff);
    ranked
}
