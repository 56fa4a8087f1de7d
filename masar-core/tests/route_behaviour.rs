//! End-to-end behaviour of route construction and summarising.
//!
//! Exercises the public API the way the host application does: parse
//! pasted text, collect locations in a session, optimise, summarise,
//! and hand off to navigation links.

use masar_core::{
    Coordinate, CurrentPosition, Location, Session, SessionError, build_route, navlink, parse,
    summarize,
};
use rstest::rstest;

fn coordinate(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng).unwrap()
}

fn stop(id: u64, name: &str, lat: f64, lng: f64) -> Location {
    Location::new(id, name, "", coordinate(lat, lng)).unwrap()
}

#[rstest]
fn plans_a_delivery_round_from_pasted_links() {
    let mut session = Session::new();
    session.set_current_position(CurrentPosition::new(
        coordinate(30.0444, 31.2357),
        "وسط البلد، القاهرة",
    ));

    let pasted = [
        ("عميل رقم 1", "https://maps.google.com/?q=30.0626,31.2497"),
        ("عميل رقم 2", "https://www.google.com/maps/@30.0131,31.2089,15z"),
        ("عميل رقم 3", "30.0561,31.3300"),
    ];
    for (name, text) in pasted {
        let parsed = parse::parse_coordinate_from_link(text).unwrap();
        session.add_location(name, "", parsed).unwrap();
    }

    let route = session.optimize().unwrap().to_vec();
    assert_eq!(route.len(), 3);
    assert!(route.iter().all(|stop| stop.distance_km.is_some()));

    let summary = session.summary().unwrap();
    assert_eq!(summary.legs.len(), 3);
    let leg_sum: f64 = summary.legs.iter().map(|leg| leg.distance_km).sum();
    assert!((summary.total_distance_km - leg_sum).abs() < 1e-9);

    let url = navlink::directions_url(session.current_position().unwrap().coordinate, &route);
    assert!(url.starts_with("https://www.google.com/maps/dir/?api=1&origin=30.0444,31.2357"));
    assert!(url.contains("&waypoints="));
}

#[rstest]
fn an_empty_session_is_not_an_error() {
    let mut session = Session::new();
    session.set_current_position(CurrentPosition::new(coordinate(30.0, 31.0), "هنا"));
    let route = session.optimize().unwrap();
    assert!(route.is_empty());

    let summary = session.summary().unwrap();
    assert_eq!(summary.total_distance_km, 0.0);
    assert_eq!(summary.total_duration_text(), "0 دقيقة");
}

#[rstest]
fn a_session_without_a_start_refuses_to_optimise() {
    let mut session = Session::new();
    assert_eq!(session.optimize(), Err(SessionError::NoCurrentPosition));
}

#[rstest]
fn greedy_route_and_summary_agree_on_the_adversarial_layout() {
    // Greedy goes east first and doubles back, and the summary reports
    // the cost of that choice rather than the optimum.
    let start = coordinate(0.0, 0.0);
    let stops = vec![
        stop(1, "شرق", 0.0, 1.0),
        stop(2, "غرب", 0.0, -1.0),
        stop(3, "شرق بعيد", 0.0, 2.0),
    ];

    let route = build_route(start, &stops);
    let ids: Vec<u64> = route.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 3, 2]);

    let greedy = summarize(start, &route).total_distance_km;
    let alternative = [
        stops[1].clone(),
        stops[0].clone(),
        stops[2].clone(),
    ];
    let better = summarize(start, &alternative).total_distance_km;
    assert!(greedy > better, "greedy {greedy} should exceed {better}");
}
