//! Hand-off links into external navigation applications.
//!
//! Pure string formatting over an ordered route; nothing here talks to
//! the network. Coordinates are rendered bare (`lat,lng`), which needs
//! no percent-encoding.

use crate::{Coordinate, Location};

fn point(coordinate: Coordinate) -> String {
    format!("{},{}", coordinate.lat, coordinate.lng)
}

/// Google Maps Directions link visiting every stop in route order.
///
/// The last stop becomes the destination and the earlier stops become
/// `waypoints`; an empty route navigates back to the origin.
///
/// # Examples
/// ```
/// use masar_core::{Coordinate, Location, navlink::directions_url};
///
/// let start = Coordinate::new(30.0, 31.0)?;
/// let stops = vec![
///     Location::new(1, "أ", "", Coordinate::new(30.1, 31.1)?)?,
///     Location::new(2, "ب", "", Coordinate::new(30.2, 31.2)?)?,
/// ];
/// let url = directions_url(start, &stops);
/// assert!(url.contains("origin=30,31"));
/// assert!(url.contains("destination=30.2,31.2"));
/// assert!(url.contains("waypoints=30.1,31.1"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn directions_url(start: Coordinate, route: &[Location]) -> String {
    let origin = point(start);
    let destination = route
        .last()
        .map_or_else(|| origin.clone(), |stop| point(stop.coordinate));

    let mut url = format!(
        "https://www.google.com/maps/dir/?api=1&origin={origin}&destination={destination}"
    );
    if route.len() > 1 {
        let waypoints: Vec<String> = route[..route.len() - 1]
            .iter()
            .map(|stop| point(stop.coordinate))
            .collect();
        url.push_str("&waypoints=");
        url.push_str(&waypoints.join("|"));
    }
    url.push_str("&travelmode=driving");
    url
}

/// Alternative sequence link: every point in order as path segments.
///
/// Some clients handle `maps/dir/p1/p2/…` better than the Directions
/// API form, so both are offered.
#[must_use]
pub fn waypoint_path_url(start: Coordinate, route: &[Location]) -> String {
    let mut points = Vec::with_capacity(route.len() + 1);
    points.push(point(start));
    points.extend(route.iter().map(|stop| point(stop.coordinate)));
    format!("https://www.google.com/maps/dir/{}", points.join("/"))
}

/// Link showing a single place on the map.
#[must_use]
pub fn place_url(coordinate: Coordinate) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        point(coordinate)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn stop(id: u64, lat: f64, lng: f64) -> Location {
        Location::new(
            id,
            format!("موقع {id}"),
            "",
            Coordinate::new(lat, lng).unwrap(),
        )
        .unwrap()
    }

    fn start() -> Coordinate {
        Coordinate::new(30.0444, 31.2357).unwrap()
    }

    #[rstest]
    fn empty_route_navigates_back_to_origin() {
        let url = directions_url(start(), &[]);
        assert!(url.contains("origin=30.0444,31.2357"));
        assert!(url.contains("destination=30.0444,31.2357"));
        assert!(!url.contains("waypoints"));
        assert!(url.ends_with("&travelmode=driving"));
    }

    #[rstest]
    fn single_stop_has_no_waypoints() {
        let url = directions_url(start(), &[stop(1, 30.1, 31.1)]);
        assert!(url.contains("destination=30.1,31.1"));
        assert!(!url.contains("waypoints"));
    }

    #[rstest]
    fn waypoints_preserve_route_order() {
        let route = vec![stop(1, 30.1, 31.1), stop(2, 30.2, 31.2), stop(3, 30.3, 31.3)];
        let url = directions_url(start(), &route);
        assert!(url.contains("waypoints=30.1,31.1|30.2,31.2"));
        assert!(url.contains("destination=30.3,31.3"));
    }

    #[rstest]
    fn sequence_url_lists_every_point() {
        let route = vec![stop(1, 30.1, 31.1), stop(2, 30.2, 31.2)];
        let url = waypoint_path_url(start(), &route);
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/30.0444,31.2357/30.1,31.1/30.2,31.2"
        );
    }

    #[rstest]
    fn place_url_embeds_the_coordinate() {
        assert_eq!(
            place_url(start()),
            "https://www.google.com/maps/search/?api=1&query=30.0444,31.2357"
        );
    }
}
