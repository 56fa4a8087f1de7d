//! Destination locations and the session's fixed starting point.

use thiserror::Error;

use crate::Coordinate;

/// A named destination the user wants to visit.
///
/// Identity (`id`) is assigned by the owning [`Session`](crate::Session)
/// at creation and never reused. `distance_km` stays `None` until the
/// location is placed into a route, at which point the route builder
/// annotates a clone with the leg distance from the previous point.
///
/// # Examples
/// ```
/// use masar_core::{Coordinate, Location};
///
/// let coordinate = Coordinate::new(30.0444, 31.2357)?;
/// let stop = Location::new(1, "عميل رقم 1", "وسط البلد، القاهرة", coordinate)?;
/// assert_eq!(stop.id, 1);
/// assert!(stop.distance_km.is_none());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Unique identifier within a session.
    pub id: u64,
    /// Non-empty display name.
    pub name: String,
    /// Display address; may be synthesised from the coordinate.
    pub address: String,
    /// Validated position.
    pub coordinate: Coordinate,
    /// Leg distance from the previous route point, once routed.
    pub distance_km: Option<f64>,
}

/// Errors returned by [`Location::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The display name was empty or whitespace only.
    #[error("location name must not be empty")]
    EmptyName,
}

impl Location {
    /// Validates and constructs a [`Location`].
    ///
    /// The name must contain at least one non-whitespace character; the
    /// address may be empty (callers synthesise one from the coordinate
    /// when the user leaves it blank).
    pub fn new(
        id: u64,
        name: impl Into<String>,
        address: impl Into<String>,
        coordinate: Coordinate,
    ) -> Result<Self, LocationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LocationError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            address: address.into(),
            coordinate,
            distance_km: None,
        })
    }
}

/// The route's fixed starting point: where the user is now.
///
/// At most one exists per session; replacing it invalidates any
/// previously derived route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrentPosition {
    /// Validated position.
    pub coordinate: Coordinate,
    /// Display address for the starting point.
    pub address: String,
}

impl CurrentPosition {
    /// Construct a current position from a coordinate and an address.
    pub fn new(coordinate: Coordinate, address: impl Into<String>) -> Self {
        Self {
            coordinate,
            address: address.into(),
        }
    }
}
