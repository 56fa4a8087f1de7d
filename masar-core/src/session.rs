//! Ephemeral session state: destinations, start point, derived route.
//!
//! The session is the single owner of the location collection and the
//! current position. The route is a derived view over those inputs,
//! never independent state: every mutation clears it synchronously
//! before returning, so a stale ordering can never be observed. Nothing
//! is persisted; the session lives and dies with the host process.

use log::debug;
use thiserror::Error;

use crate::route::build_route;
use crate::summary::{RouteSummary, summarize};
use crate::{Coordinate, CurrentPosition, Location, LocationError};

/// Errors returned by [`Session::optimize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Route construction needs a starting point.
    #[error("current position must be set before building a route")]
    NoCurrentPosition,
}

/// A single planning session.
///
/// # Examples
/// ```
/// use masar_core::{Coordinate, CurrentPosition, Session};
///
/// let mut session = Session::new();
/// session.set_current_position(CurrentPosition::new(
///     Coordinate::new(30.0444, 31.2357)?,
///     "الموقع الحالي",
/// ));
/// session.add_location("عميل رقم 1", "", Coordinate::new(30.05, 31.24)?)?;
/// let route = session.optimize()?;
/// assert_eq!(route.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct Session {
    locations: Vec<Location>,
    current_position: Option<CurrentPosition>,
    route: Option<Vec<Location>>,
    next_id: u64,
}

impl Session {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Destinations in insertion order.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The fixed starting point, if set.
    #[must_use]
    pub fn current_position(&self) -> Option<&CurrentPosition> {
        self.current_position.as_ref()
    }

    /// The last computed route, if still valid.
    #[must_use]
    pub fn route(&self) -> Option<&[Location]> {
        self.route.as_deref()
    }

    /// Add a destination and return its freshly assigned identifier.
    ///
    /// Identifiers are never reused within a session, even after
    /// removals. An empty `address` is replaced with one synthesised
    /// from the coordinate, matching what the input form displays.
    ///
    /// # Errors
    /// [`LocationError::EmptyName`] when `name` is blank.
    pub fn add_location(
        &mut self,
        name: impl Into<String>,
        address: impl Into<String>,
        coordinate: Coordinate,
    ) -> Result<u64, LocationError> {
        let address = address.into();
        let address = if address.trim().is_empty() {
            format!("الموقع ({:.4}, {:.4})", coordinate.lat, coordinate.lng)
        } else {
            address
        };

        let id = self.next_id;
        let location = Location::new(id, name, address, coordinate)?;
        self.next_id += 1;
        self.locations.push(location);
        self.invalidate_route();
        debug!(
            "added location {id}; session now holds {}",
            self.locations.len()
        );
        Ok(id)
    }

    /// Remove a destination by id. Returns whether anything was removed.
    pub fn remove_location(&mut self, id: u64) -> bool {
        let before = self.locations.len();
        self.locations.retain(|location| location.id != id);
        let removed = self.locations.len() != before;
        if removed {
            self.invalidate_route();
        }
        removed
    }

    /// Set or replace the starting point.
    pub fn set_current_position(&mut self, position: CurrentPosition) {
        self.current_position = Some(position);
        self.invalidate_route();
    }

    /// Build (or rebuild) the route over the current inputs.
    ///
    /// The result is stored on the session and also returned. An empty
    /// location collection yields an empty route, not an error.
    ///
    /// # Errors
    /// [`SessionError::NoCurrentPosition`] when no start is set.
    pub fn optimize(&mut self) -> Result<&[Location], SessionError> {
        let start = self
            .current_position
            .as_ref()
            .ok_or(SessionError::NoCurrentPosition)?
            .coordinate;
        let route = build_route(start, &self.locations);
        self.route = Some(route);
        Ok(self.route.as_deref().unwrap_or_default())
    }

    /// Summary of the stored route, if one exists.
    #[must_use]
    pub fn summary(&self) -> Option<RouteSummary> {
        let start = self.current_position.as_ref()?.coordinate;
        let route = self.route.as_deref()?;
        Some(summarize(start, route))
    }

    fn invalidate_route(&mut self) {
        if self.route.take().is_some() {
            debug!("session inputs changed; derived route discarded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn coordinate(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[fixture]
    fn session() -> Session {
        let mut session = Session::new();
        session.set_current_position(CurrentPosition::new(
            coordinate(30.0444, 31.2357),
            "الموقع الحالي",
        ));
        session
    }

    #[rstest]
    fn assigns_sequential_ids_never_reused(mut session: Session) {
        let first = session.add_location("أ", "", coordinate(30.1, 31.1)).unwrap();
        let second = session.add_location("ب", "", coordinate(30.2, 31.2)).unwrap();
        assert_ne!(first, second);

        assert!(session.remove_location(second));
        let third = session.add_location("ج", "", coordinate(30.3, 31.3)).unwrap();
        assert_ne!(third, second);
        assert_ne!(third, first);
    }

    #[rstest]
    fn synthesises_address_from_coordinate(mut session: Session) {
        session
            .add_location("مخزن", "  ", coordinate(30.0444, 31.2357))
            .unwrap();
        let location = session.locations().last().unwrap();
        assert_eq!(location.address, "الموقع (30.0444, 31.2357)");
    }

    #[rstest]
    fn blank_name_is_rejected(mut session: Session) {
        assert_eq!(
            session
                .add_location("", "", coordinate(30.1, 31.1))
                .unwrap_err(),
            LocationError::EmptyName
        );
        assert!(session.locations().is_empty());
    }

    #[rstest]
    fn optimize_requires_current_position() {
        let mut session = Session::new();
        assert_eq!(session.optimize(), Err(SessionError::NoCurrentPosition));
    }

    #[rstest]
    fn optimize_with_no_locations_yields_empty_route(mut session: Session) {
        assert!(session.optimize().unwrap().is_empty());
        assert_eq!(session.summary(), Some(RouteSummary::empty()));
    }

    #[rstest]
    fn adding_a_location_invalidates_the_route(mut session: Session) {
        session
            .add_location("أ", "", coordinate(30.1, 31.1))
            .unwrap();
        session.optimize().unwrap();
        assert!(session.route().is_some());

        session
            .add_location("ب", "", coordinate(30.2, 31.2))
            .unwrap();
        assert!(session.route().is_none());
        assert!(session.summary().is_none());
    }

    #[rstest]
    fn removing_a_location_invalidates_the_route(mut session: Session) {
        let id = session.add_location("أ", "", coordinate(30.1, 31.1)).unwrap();
        session.optimize().unwrap();
        assert!(session.remove_location(id));
        assert!(session.route().is_none());
    }

    #[rstest]
    fn removing_an_unknown_id_keeps_the_route(mut session: Session) {
        session
            .add_location("أ", "", coordinate(30.1, 31.1))
            .unwrap();
        session.optimize().unwrap();
        assert!(!session.remove_location(999));
        assert!(session.route().is_some());
    }

    #[rstest]
    fn replacing_the_start_invalidates_the_route(mut session: Session) {
        session
            .add_location("أ", "", coordinate(30.1, 31.1))
            .unwrap();
        session.optimize().unwrap();
        session.set_current_position(CurrentPosition::new(coordinate(31.0, 30.0), "مكان آخر"));
        assert!(session.route().is_none());
    }

    #[rstest]
    fn optimize_orders_nearest_first(mut session: Session) {
        session
            .add_location("بعيد", "", coordinate(30.5, 31.8))
            .unwrap();
        session
            .add_location("قريب", "", coordinate(30.05, 31.24))
            .unwrap();
        let route = session.optimize().unwrap();
        assert_eq!(route[0].name, "قريب");
        assert_eq!(route[1].name, "بعيد");
    }

    #[rstest]
    fn summary_matches_stored_route(mut session: Session) {
        session
            .add_location("أ", "", coordinate(30.1, 31.1))
            .unwrap();
        session.optimize().unwrap();
        let summary = session.summary().unwrap();
        assert_eq!(summary.legs.len(), 1);
        assert!(summary.total_distance_km > 0.0);
    }
}
