//! Per-leg and aggregate figures for an ordered route.
//!
//! A summary is a pure derivation from a start point and a route; it
//! is discarded and regenerated whenever either input changes, never
//! stored independently.

use std::time::Duration;

use crate::geomath::{distance_km, estimate_duration, format_distance, format_duration};
use crate::{Coordinate, Location};

/// One step of the route: the hop from the previous point to a stop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteLeg {
    /// Where the leg starts (the start point or the previous stop).
    pub from: Coordinate,
    /// The stop this leg arrives at.
    pub to: Coordinate,
    /// Great-circle length of the leg in kilometres.
    pub distance_km: f64,
    /// Estimated travel time at the assumed average speed.
    pub duration: Duration,
}

impl RouteLeg {
    /// Display form of the leg distance (`"500 متر"`, `"2.3 كم"`).
    #[must_use]
    pub fn distance_text(&self) -> String {
        format_distance(self.distance_km)
    }

    /// Display form of the leg duration (`"15 دقيقة"`).
    #[must_use]
    pub fn duration_text(&self) -> String {
        format_duration(self.duration)
    }
}

/// Aggregate figures for a whole route.
///
/// # Examples
/// ```
/// use masar_core::{Coordinate, Location, summarize};
///
/// let start = Coordinate::new(0.0, 0.0)?;
/// let stops = vec![Location::new(1, "عميل", "", Coordinate::new(0.0, 1.0)?)?];
/// let summary = summarize(start, &stops);
/// assert_eq!(summary.legs.len(), 1);
/// assert!((summary.total_distance_km - 111.19).abs() < 0.5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSummary {
    /// Per-stop legs in visiting order.
    pub legs: Vec<RouteLeg>,
    /// Sum of the leg distances in kilometres.
    pub total_distance_km: f64,
    /// Duration estimated from the total distance. Whole-minute
    /// rounding applies once here, so this may differ slightly from the
    /// sum of the per-leg durations.
    pub total_duration: Duration,
}

impl RouteSummary {
    /// The zero summary of an empty route.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            legs: Vec::new(),
            total_distance_km: 0.0,
            total_duration: Duration::ZERO,
        }
    }

    /// Display form of the total distance.
    #[must_use]
    pub fn total_distance_text(&self) -> String {
        format_distance(self.total_distance_km)
    }

    /// Display form of the total duration.
    #[must_use]
    pub fn total_duration_text(&self) -> String {
        format_duration(self.total_duration)
    }
}

impl Default for RouteSummary {
    fn default() -> Self {
        Self::empty()
    }
}

/// Walk `route` once from `start`, deriving per-leg and total figures.
///
/// The total distance is exactly the sum of consecutive
/// [`distance_km`] calls along `[start, route...]`. An empty route
/// yields [`RouteSummary::empty`].
#[must_use]
pub fn summarize(start: Coordinate, route: &[Location]) -> RouteSummary {
    let mut legs = Vec::with_capacity(route.len());
    let mut total_distance_km = 0.0;
    let mut previous = start;

    for stop in route {
        let km = distance_km(previous, stop.coordinate);
        legs.push(RouteLeg {
            from: previous,
            to: stop.coordinate,
            distance_km: km,
            duration: estimate_duration(km),
        });
        total_distance_km += km;
        previous = stop.coordinate;
    }

    RouteSummary {
        legs,
        total_distance_km,
        total_duration: estimate_duration(total_distance_km),
    }
}
