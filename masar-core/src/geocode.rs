//! Resolve free-text addresses to coordinates.
//!
//! Address geocoding is an injected capability: the engine depends on
//! the seam but ships no implementation. Hosts must supply a real
//! provider; tests inject the deterministic fake from the
//! `test_support` module.

use thiserror::Error;

use crate::Coordinate;

/// Errors returned by [`Geocoder::geocode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The provider could not resolve the address to a coordinate.
    #[error("address could not be resolved: {0}")]
    Unresolved(String),
    /// The provider itself failed (network, quota, etc.).
    #[error("geocoding provider failed: {0}")]
    Provider(String),
}

/// Translate a free-text address into a validated [`Coordinate`].
///
/// Implementations must be `Send + Sync` so hosts can share one
/// provider across threads, and must return range-valid coordinates;
/// results feed straight into route construction.
///
/// # Examples
/// ```
/// use masar_core::{Coordinate, Geocoder, GeocodeError};
///
/// struct CityCentre(Coordinate);
///
/// impl Geocoder for CityCentre {
///     fn geocode(&self, _address: &str) -> Result<Coordinate, GeocodeError> {
///         Ok(self.0)
///     }
/// }
///
/// let provider = CityCentre(Coordinate::new(30.0444, 31.2357).unwrap());
/// assert!(provider.geocode("شارع التحرير، القاهرة").is_ok());
/// ```
pub trait Geocoder: Send + Sync {
    /// Resolve `address`, or report why it could not be resolved.
    fn geocode(&self, address: &str) -> Result<Coordinate, GeocodeError>;
}
