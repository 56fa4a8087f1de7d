//! Core engine for the Masar route-planning assistant.
//!
//! A user records their current position and a set of destinations
//! (pasted map links, typed coordinate pairs, or geocoded addresses);
//! the engine orders the destinations into a visiting sequence by
//! greedy nearest-neighbour selection and derives per-leg and total
//! distance/time figures for display.
//!
//! The crate is deliberately synchronous and stateless at the function
//! level: parsing, routing and summarising are pure functions over
//! in-memory values, and [`Session`] is the only mutable owner of
//! state. Malformed user input is signalled with explicit `Result`
//! values, never panics.
//!
//! # Examples
//! ```
//! use masar_core::{Coordinate, CurrentPosition, Session, parse};
//!
//! let mut session = Session::new();
//! session.set_current_position(CurrentPosition::new(
//!     Coordinate::new(30.0444, 31.2357)?,
//!     "الموقع الحالي",
//! ));
//!
//! let pasted = "https://maps.google.com/?q=30.0626,31.2497";
//! let coordinate = parse::parse_coordinate_from_link(pasted)?;
//! session.add_location("عميل رقم 1", "", coordinate)?;
//!
//! session.optimize()?;
//! let summary = session.summary().expect("route was just built");
//! assert_eq!(summary.legs.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

mod coord;
pub mod geocode;
pub mod geomath;
mod location;
pub mod navlink;
pub mod parse;
pub mod position;
mod route;
mod session;
mod summary;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use coord::{Coordinate, CoordinateError};
pub use geocode::{GeocodeError, Geocoder};
pub use geomath::{
    AVERAGE_SPEED_KMH, EARTH_RADIUS_KM, distance_km, estimate_duration, format_distance,
    format_duration,
};
pub use location::{CurrentPosition, Location, LocationError};
pub use parse::{ParseError, parse_coordinate_from_link, parse_coordinate_pair};
pub use position::{PositionError, PositionProvider};
pub use route::{build_route, sort_by_distance};
pub use session::{Session, SessionError};
pub use summary::{RouteLeg, RouteSummary, summarize};
