//! Extract coordinates from pasted text.
//!
//! Users paste whatever their messaging or map app hands them: full
//! Google/Apple/Waze links, shortened links with decorative text
//! around them, or a coordinate pair typed by hand. A single strict
//! grammar would reject most of it, so each entry point is an ordered
//! chain of lenient matchers with range validation as the final gate.
//! New map-service formats are added by appending a matcher; existing
//! ones are never touched.
//!
//! Neither entry point panics for any input; [`ParseError::NotFound`]
//! is the uniform failure signal.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use thiserror::Error;

use crate::Coordinate;

/// Errors returned by the parsing entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No pattern produced a range-valid coordinate pair.
    #[error("no valid coordinates found in text")]
    NotFound,
}

/// A single lenient attempt at one textual shape.
type Matcher = fn(&str) -> Option<Coordinate>;

/// Query-parameter links: `maps.google.com/?q=30.0444,31.2357`,
/// `waze.com/ul?q=…`, WhatsApp shares and Apple Maps all use this shape.
static QUERY_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[?&]q=(-?\d+\.?\d*),\s*(-?\d+\.?\d*)").expect("pattern compiles")
});

/// Path-embedded pairs: `google.com/maps/@30.0444,31.2357,15z`.
static PATH_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(-?\d+\.?\d*),\s*(-?\d+\.?\d*)").expect("pattern compiles"));

/// Fallback: a bare decimal pair anywhere in the text.
static BARE_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(-?\d+\.?\d+),\s*(-?\d+\.?\d+)").expect("pattern compiles"));

/// Anchored pair formats for hand-typed coordinates, tried in order.
static COMMA_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?\d+\.?\d*),\s*(-?\d+\.?\d*)$").expect("pattern compiles"));
static SPACE_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?\d+\.?\d*)\s+(-?\d+\.?\d*)$").expect("pattern compiles"));
static LABELLED_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^lat:\s*(-?\d+\.?\d*),?\s*lng:\s*(-?\d+\.?\d*)$").expect("pattern compiles")
});
static DEGREE_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(-?\d+\.?\d*)°?\s*[NS]?,?\s*(-?\d+\.?\d*)°?\s*[EW]?$")
        .expect("pattern compiles")
});

/// Parse the two capture groups and gate them on the range invariant.
fn captured_pair(caps: &regex::Captures<'_>) -> Option<Coordinate> {
    let lat = caps.get(1)?.as_str().parse().ok()?;
    let lng = caps.get(2)?.as_str().parse().ok()?;
    Coordinate::new(lat, lng).ok()
}

/// First occurrence of `re` in `text`, gated on the range invariant.
///
/// Each pattern contributes only its first occurrence; when that pair
/// is out of range the matcher fails and the chain moves on to the
/// next pattern.
fn first_pair(re: &Regex, text: &str) -> Option<Coordinate> {
    re.captures(text).as_ref().and_then(captured_pair)
}

fn match_query_param(text: &str) -> Option<Coordinate> {
    first_pair(&QUERY_PARAM, text)
}

fn match_path_anchor(text: &str) -> Option<Coordinate> {
    first_pair(&PATH_ANCHOR, text)
}

fn match_bare_pair(text: &str) -> Option<Coordinate> {
    first_pair(&BARE_PAIR, text)
}

fn match_comma_pair(text: &str) -> Option<Coordinate> {
    COMMA_PAIR.captures(text).as_ref().and_then(captured_pair)
}

fn match_space_pair(text: &str) -> Option<Coordinate> {
    SPACE_PAIR.captures(text).as_ref().and_then(captured_pair)
}

fn match_labelled_pair(text: &str) -> Option<Coordinate> {
    LABELLED_PAIR
        .captures(text)
        .as_ref()
        .and_then(captured_pair)
}

fn match_degree_pair(text: &str) -> Option<Coordinate> {
    DEGREE_PAIR.captures(text).as_ref().and_then(captured_pair)
}

/// Link matchers in priority order; the bare pair is the last resort.
const LINK_MATCHERS: &[(&str, Matcher)] = &[
    ("query-param", match_query_param),
    ("path-anchor", match_path_anchor),
    ("bare-pair", match_bare_pair),
];

/// Hand-typed pair formats in priority order.
const PAIR_MATCHERS: &[(&str, Matcher)] = &[
    ("comma", match_comma_pair),
    ("whitespace", match_space_pair),
    ("labelled", match_labelled_pair),
    ("degree", match_degree_pair),
];

fn run_chain(matchers: &[(&str, Matcher)], text: &str) -> Result<Coordinate, ParseError> {
    let trimmed = text.trim();
    for (name, matcher) in matchers {
        if let Some(coordinate) = matcher(trimmed) {
            debug!("matcher `{name}` extracted {coordinate}");
            return Ok(coordinate);
        }
    }
    debug!("no matcher extracted a coordinate from {} bytes", text.len());
    Err(ParseError::NotFound)
}

/// Extract a coordinate from a pasted map-sharing link or free text.
///
/// Tries, in order: query-parameter `q=lat,lng` links, path-embedded
/// `@lat,lng` links, then any bare decimal pair in the text. Each
/// pattern is judged on its first occurrence only; an out-of-range
/// pair fails that pattern and the next one is tried.
///
/// # Examples
/// ```
/// use masar_core::parse::parse_coordinate_from_link;
///
/// let c = parse_coordinate_from_link("https://www.google.com/maps/@30.0444,31.2357,15z")?;
/// assert_eq!((c.lat, c.lng), (30.0444, 31.2357));
///
/// assert!(parse_coordinate_from_link("الصق رابط الموقع هنا").is_err());
/// # Ok::<(), masar_core::ParseError>(())
/// ```
///
/// # Errors
/// [`ParseError::NotFound`] when no pattern yields a range-valid pair.
pub fn parse_coordinate_from_link(text: &str) -> Result<Coordinate, ParseError> {
    run_chain(LINK_MATCHERS, text)
}

/// Parse a hand-typed coordinate pair.
///
/// Accepts `lat,lng`, whitespace-separated, labelled
/// (`lat: x, lng: y`) and degree-suffixed (`30.04° N, 31.23° E`)
/// forms. Hemisphere letters are accepted but never negate the value.
///
/// # Examples
/// ```
/// use masar_core::parse::parse_coordinate_pair;
///
/// let c = parse_coordinate_pair("30.0444,31.2357")?;
/// assert_eq!((c.lat, c.lng), (30.0444, 31.2357));
///
/// assert!(parse_coordinate_pair("200,31").is_err());
/// # Ok::<(), masar_core::ParseError>(())
/// ```
///
/// # Errors
/// [`ParseError::NotFound`] when no format yields a range-valid pair.
pub fn parse_coordinate_pair(text: &str) -> Result<Coordinate, ParseError> {
    run_chain(PAIR_MATCHERS, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn coordinate(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[rstest]
    #[case("https://maps.google.com/?q=30.0444,31.2357")]
    #[case("https://maps.apple.com/?q=30.0444,31.2357")]
    #[case("https://waze.com/ul?q=30.0444,31.2357")]
    #[case("Location: https://maps.google.com/?q=30.0444,31.2357")]
    #[case("https://www.google.com/maps/@30.0444,31.2357,15z")]
    #[case("30.0444,31.2357")]
    #[case("تعال هنا https://maps.google.com/?q=30.0444,31.2357 في انتظارك")]
    fn extracts_from_known_link_shapes(#[case] text: &str) {
        assert_eq!(
            parse_coordinate_from_link(text),
            Ok(coordinate(30.0444, 31.2357))
        );
    }

    #[rstest]
    #[case("")]
    #[case("no coordinates here")]
    #[case("https://maps.app.goo.gl/AbCdEf")]
    #[case("العنوان: شارع التحرير")]
    fn link_without_pair_is_not_found(#[case] text: &str) {
        assert_eq!(parse_coordinate_from_link(text), Err(ParseError::NotFound));
    }

    #[rstest]
    fn out_of_range_query_falls_through_to_later_pattern() {
        let text = "?q=200.0,31.0 via @30.0444,31.2357,15z";
        assert_eq!(
            parse_coordinate_from_link(text),
            Ok(coordinate(30.0444, 31.2357))
        );
    }

    #[rstest]
    fn only_the_first_occurrence_of_each_pattern_counts() {
        // The first q= pair is out of range, so the query pattern
        // fails outright; the later valid pair is never considered.
        let text = "?q=95.0,31.0&q=30.0444,31.2357";
        assert_eq!(parse_coordinate_from_link(text), Err(ParseError::NotFound));
    }

    #[rstest]
    fn out_of_range_bare_pair_is_not_found() {
        assert_eq!(
            parse_coordinate_from_link("rendezvous at 123.45,678.90"),
            Err(ParseError::NotFound)
        );
    }

    #[rstest]
    #[case("30.0444,31.2357")]
    #[case("30.0444, 31.2357")]
    #[case("30.0444 31.2357")]
    #[case("  30.0444,31.2357  ")]
    #[case("lat: 30.0444, lng: 31.2357")]
    #[case("LAT: 30.0444 LNG: 31.2357")]
    #[case("30.0444° N, 31.2357° E")]
    #[case("30.0444N 31.2357E")]
    fn parses_supported_pair_formats(#[case] text: &str) {
        assert_eq!(parse_coordinate_pair(text), Ok(coordinate(30.0444, 31.2357)));
    }

    #[rstest]
    fn negative_values_are_preserved() {
        assert_eq!(
            parse_coordinate_pair("-33.8688, 151.2093"),
            Ok(coordinate(-33.8688, 151.2093))
        );
    }

    #[rstest]
    #[case("200,31")]
    #[case("30,200")]
    #[case("30.0444")]
    #[case("a,b")]
    #[case("")]
    #[case("lat: , lng: ")]
    fn invalid_pairs_are_not_found(#[case] text: &str) {
        assert_eq!(parse_coordinate_pair(text), Err(ParseError::NotFound));
    }

    #[rstest]
    fn binary_garbage_does_not_panic() {
        let garbage = "\u{0}\u{1}\u{fffd}@@,,q=--..°°";
        assert_eq!(parse_coordinate_from_link(garbage), Err(ParseError::NotFound));
        assert_eq!(parse_coordinate_pair(garbage), Err(ParseError::NotFound));
    }
}
