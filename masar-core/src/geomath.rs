//! Distance, duration and display-formatting primitives.
//!
//! These are pure functions over validated coordinates. Range checks
//! happen at the parsing boundary ([`crate::parse`]); nothing here
//! validates its inputs.
//!
//! Durations assume a constant average driving speed and are rounded
//! to whole minutes, which is the resolution the UI displays.

use std::time::Duration;

use crate::Coordinate;

/// Mean Earth radius in kilometres, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Assumed average driving speed for duration estimates, in km/h.
pub const AVERAGE_SPEED_KMH: f64 = 50.0;

/// Great-circle distance between two coordinates in kilometres.
///
/// Haversine on a sphere of radius [`EARTH_RADIUS_KM`]. Symmetric in
/// its arguments and exactly zero for identical coordinates.
///
/// # Examples
/// ```
/// use masar_core::{Coordinate, geomath::distance_km};
///
/// let origin = Coordinate::new(0.0, 0.0)?;
/// let east = Coordinate::new(0.0, 1.0)?;
/// let km = distance_km(origin, east);
/// assert!((km - 111.19).abs() < 0.5);
/// assert_eq!(distance_km(origin, origin), 0.0);
/// # Ok::<(), masar_core::CoordinateError>(())
/// ```
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();
    let h = (delta_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push h past 1 for near-antipodal pairs; sqrt(1 - h)
    // must not see a negative operand.
    let h = h.min(1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Estimate travel time for `distance_km` at [`AVERAGE_SPEED_KMH`].
///
/// The estimate is rounded to whole minutes; zero distance yields a
/// zero duration. Distances are produced by [`distance_km`] and are
/// therefore never negative.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use masar_core::geomath::estimate_duration;
///
/// assert_eq!(estimate_duration(50.0), Duration::from_secs(60 * 60));
/// assert_eq!(estimate_duration(0.0), Duration::ZERO);
/// ```
#[must_use]
pub fn estimate_duration(distance_km: f64) -> Duration {
    debug_assert!(distance_km >= 0.0, "distances are never negative");
    let hours = distance_km / AVERAGE_SPEED_KMH;
    let minutes = (hours * 60.0).round();
    Duration::from_secs(minutes as u64 * 60)
}

/// Format a duration for display, in Arabic, to minute resolution.
///
/// Under an hour renders minutes only; otherwise hours, with minutes
/// appended when non-zero.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use masar_core::geomath::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(45 * 60)), "45 دقيقة");
/// assert_eq!(format_duration(Duration::from_secs(60 * 60)), "1 ساعة");
/// assert_eq!(format_duration(Duration::from_secs(90 * 60)), "1 ساعة و 30 دقيقة");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.as_secs() / 60;
    if total_minutes < 60 {
        return format!("{total_minutes} دقيقة");
    }
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if minutes > 0 {
        format!("{hours} ساعة و {minutes} دقيقة")
    } else {
        format!("{hours} ساعة")
    }
}

/// Format a distance for display, in Arabic.
///
/// Sub-kilometre distances render as whole metres, everything else as
/// kilometres with one decimal place.
///
/// # Examples
/// ```
/// use masar_core::geomath::format_distance;
///
/// assert_eq!(format_distance(0.5), "500 متر");
/// assert_eq!(format_distance(2.34), "2.3 كم");
/// ```
#[must_use]
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        let metres = (distance_km * 1000.0).round() as i64;
        format!("{metres} متر")
    } else {
        format!("{distance_km:.1} كم")
    }
}
