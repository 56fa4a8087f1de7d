//! Validated geographic coordinates.
//!
//! Every coordinate that enters the engine passes through
//! [`Coordinate::new`], which rejects out-of-range values instead of
//! clamping them. Downstream geometry (distance, routing, summaries)
//! trusts its inputs and performs no further validation.

use thiserror::Error;

/// A validated latitude/longitude pair in degrees (WGS84).
///
/// Invariant: `-90 <= lat <= 90` and `-180 <= lng <= 180`. The fields
/// are public for read access; construct values through
/// [`Coordinate::new`] so the invariant holds.
///
/// # Examples
/// ```
/// use masar_core::Coordinate;
///
/// let cairo = Coordinate::new(30.0444, 31.2357)?;
/// assert_eq!(cairo.lat, 30.0444);
/// assert!(Coordinate::new(200.0, 31.0).is_err());
/// # Ok::<(), masar_core::CoordinateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Latitude in degrees, southern hemisphere negative.
    pub lat: f64,
    /// Longitude in degrees, western hemisphere negative.
    pub lng: f64,
}

/// Errors returned by [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude was outside `-90..=90` degrees.
    #[error("latitude {0} is outside -90..=90 degrees")]
    LatitudeOutOfRange(f64),
    /// Longitude was outside `-180..=180` degrees.
    #[error("longitude {0} is outside -180..=180 degrees")]
    LongitudeOutOfRange(f64),
}

impl Coordinate {
    /// Validates and constructs a [`Coordinate`].
    ///
    /// Out-of-range values are an error, never clamped; `NaN` fails
    /// both range checks.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinateError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Convert to a [`geo::Coord`] (`x` = longitude, `y` = latitude)
    /// for map-rendering consumers.
    ///
    /// # Examples
    /// ```
    /// use masar_core::Coordinate;
    ///
    /// let c = Coordinate::new(30.0, 31.0)?.to_coord();
    /// assert_eq!(c.x, 31.0);
    /// assert_eq!(c.y, 30.0);
    /// # Ok::<(), masar_core::CoordinateError>(())
    /// ```
    #[must_use]
    pub const fn to_coord(self) -> geo::Coord<f64> {
        geo::Coord {
            x: self.lng,
            y: self.lat,
        }
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.to_coord()
    }
}

impl TryFrom<geo::Coord<f64>> for Coordinate {
    type Error = CoordinateError;

    /// Re-validates ranges; map layers may hand back arbitrary coords.
    fn try_from(coord: geo::Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(coord.y, coord.x)
    }
}

impl std::fmt::Display for Coordinate {
    /// Marker-label format: `"lat, lng"` with six decimal places.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}
