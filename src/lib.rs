//! Facade crate for the Masar route-planning engine.
//!
//! Re-exports the core API: coordinate parsing, greedy
//! nearest-neighbour route construction, distance/time summaries,
//! session state and the collaborator seams (geocoding, positioning).

#![forbid(unsafe_code)]

pub use masar_core::{
    AVERAGE_SPEED_KMH, Coordinate, CoordinateError, CurrentPosition, EARTH_RADIUS_KM,
    GeocodeError, Geocoder, Location, LocationError, ParseError, PositionError, PositionProvider,
    RouteLeg, RouteSummary, Session, SessionError, build_route, distance_km, estimate_duration,
    format_distance, format_duration, navlink, parse_coordinate_from_link, parse_coordinate_pair,
    sort_by_distance, summarize,
};

#[cfg(feature = "test-support")]
pub use masar_core::test_support;
