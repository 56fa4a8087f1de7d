//! Order destinations into a visiting sequence.
//!
//! The route builder is a greedy nearest-neighbour heuristic: starting
//! from the current position it repeatedly travels to the closest
//! unvisited destination. It is O(n²) in the destination count, which
//! is fine at the tens-of-locations scale this assistant serves, and
//! it is *not* globally optimal: adversarial layouts (e.g. two
//! destinations in opposite directions) produce visible doubling back
//! that an exact TSP solver would avoid.

use log::debug;

use crate::geomath::distance_km;
use crate::{Coordinate, Location};

/// Order `destinations` by repeated nearest-neighbour selection from
/// `start`.
///
/// Returns a permutation of `destinations` as clones, each annotated
/// with the leg distance from the previous point in `distance_km`. The
/// input is never mutated. Exact-distance ties resolve to the element
/// encountered first in the pool's current order, so results are
/// deterministic for a given input order.
///
/// An empty input yields an empty route; there are no error cases.
///
/// # Examples
/// ```
/// use masar_core::{Coordinate, Location, build_route};
///
/// let start = Coordinate::new(0.0, 0.0)?;
/// let stops = vec![
///     Location::new(1, "بعيد", "", Coordinate::new(0.0, 2.0)?)?,
///     Location::new(2, "قريب", "", Coordinate::new(0.0, 1.0)?)?,
/// ];
/// let route = build_route(start, &stops);
/// assert_eq!(route[0].id, 2);
/// assert_eq!(route[1].id, 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn build_route(start: Coordinate, destinations: &[Location]) -> Vec<Location> {
    let mut pool: Vec<&Location> = destinations.iter().collect();
    let mut route = Vec::with_capacity(pool.len());
    let mut position = start;

    while let Some(first) = pool.first() {
        let mut nearest_index = 0;
        let mut nearest_km = distance_km(position, first.coordinate);
        for (index, candidate) in pool.iter().enumerate().skip(1) {
            let km = distance_km(position, candidate.coordinate);
            // Strict comparison keeps the first-encountered element on ties.
            if km < nearest_km {
                nearest_index = index;
                nearest_km = km;
            }
        }

        // `remove`, not `swap_remove`: the pool keeps its relative order
        // so later ties stay deterministic.
        let mut stop = pool.remove(nearest_index).clone();
        position = stop.coordinate;
        stop.distance_km = Some(nearest_km);
        route.push(stop);
    }

    debug!(
        "built route over {} destinations from {start}",
        route.len()
    );
    route
}

/// Annotate each location with its distance from `from` and sort by
/// that distance, ascending.
///
/// Unlike [`build_route`] this measures every location from the same
/// point; it backs the "closest first" listing next to the map. The
/// sort is stable, so equally distant locations keep their input order.
#[must_use]
pub fn sort_by_distance(locations: &[Location], from: Coordinate) -> Vec<Location> {
    let mut sorted: Vec<Location> = locations
        .iter()
        .map(|location| {
            let mut annotated = location.clone();
            annotated.distance_km = Some(distance_km(from, location.coordinate));
            annotated
        })
        .collect();
    sorted.sort_by(|a, b| {
        let a_km = a.distance_km.unwrap_or(0.0);
        let b_km = b.distance_km.unwrap_or(0.0);
        a_km.total_cmp(&b_km)
    });
    sorted
}
