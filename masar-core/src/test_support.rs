//! Deterministic collaborator fakes for unit and behaviour tests.
//!
//! The production engine resolves addresses and positions through the
//! [`Geocoder`] and [`PositionProvider`] seams; tests inject these
//! fixed-value fakes instead of anything random or networked.

use crate::{Coordinate, CurrentPosition, GeocodeError, Geocoder, PositionError, PositionProvider};

/// A geocoder that resolves every address to one fixed coordinate.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeocoder {
    /// The coordinate returned for every address.
    pub coordinate: Coordinate,
}

impl FixedGeocoder {
    /// Resolve everything to `coordinate`.
    #[must_use]
    pub const fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }
}

impl Geocoder for FixedGeocoder {
    fn geocode(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        if address.trim().is_empty() {
            return Err(GeocodeError::Unresolved(address.to_owned()));
        }
        Ok(self.coordinate)
    }
}

/// A position provider that always reports the same current position.
#[derive(Debug, Clone)]
pub struct FixedPositionProvider {
    position: CurrentPosition,
}

impl FixedPositionProvider {
    /// Always report `position`.
    #[must_use]
    pub const fn new(position: CurrentPosition) -> Self {
        Self { position }
    }
}

impl PositionProvider for FixedPositionProvider {
    fn current_position(&self) -> Result<CurrentPosition, PositionError> {
        Ok(self.position.clone())
    }
}

/// A provider standing in for a host without positioning hardware.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailablePositionProvider;

impl PositionProvider for UnavailablePositionProvider {
    fn current_position(&self) -> Result<CurrentPosition, PositionError> {
        Err(PositionError::Unavailable)
    }
}
