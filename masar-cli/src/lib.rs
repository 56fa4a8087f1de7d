//! Command-line interface for the Masar route planner.
//!
//! `masar plan` takes a start position and a list of `name=text`
//! destinations, where `text` is anything the engine can parse: a
//! pasted map link, a `q=`/`@` URL fragment, or a typed coordinate
//! pair. It prints the optimised visiting order with per-leg and total
//! figures, plus Google Maps hand-off links.

#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use log::debug;
use thiserror::Error;

use masar_core::{
    CurrentPosition, LocationError, ParseError, Session, SessionError, navlink,
    parse_coordinate_from_link, parse_coordinate_pair,
};

/// Run the Masar CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] for unparseable arguments or destination
/// texts; the binary prints it and exits non-zero.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => {
            let report = render_plan(&args)?;
            println!("{report}");
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "masar",
    about = "ترتيب مواقع التوصيل في مسار واحد يبدأ من موقعك الحالي",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order destinations into a visiting sequence from the start point.
    Plan(PlanArgs),
}

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser)]
struct PlanArgs {
    /// Start position: a coordinate pair such as "30.0444,31.2357".
    #[arg(long, env = "MASAR_START", value_name = "coords")]
    start: String,
    /// Display address for the start position.
    #[arg(
        long,
        env = "MASAR_START_ADDRESS",
        default_value = "الموقع الحالي",
        value_name = "text"
    )]
    start_address: String,
    /// Destinations as `name=location-text` entries, e.g.
    /// `"عميل 1=https://maps.google.com/?q=30.06,31.25"`.
    #[arg(value_name = "name=text", required = true)]
    destinations: Vec<String>,
}

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Arguments did not parse.
    #[error(transparent)]
    ArgumentParsing(clap::Error),
    /// The start position text held no valid coordinate pair.
    #[error("could not parse start position {text:?}")]
    InvalidStart {
        /// The rejected input text.
        text: String,
        /// Parser failure.
        #[source]
        source: ParseError,
    },
    /// A destination entry was not of the form `name=text`.
    #[error("destination entry {entry:?} must be name=location-text")]
    MalformedDestination {
        /// The rejected entry.
        entry: String,
    },
    /// A destination's location text held no valid coordinates.
    #[error("could not parse a location for destination {name:?}")]
    UnparseableDestination {
        /// The destination's name part.
        name: String,
        /// Parser failure.
        #[source]
        source: ParseError,
    },
    /// A destination failed validation (e.g. a blank name).
    #[error("invalid destination entry {entry:?}")]
    InvalidDestination {
        /// The rejected entry.
        entry: String,
        /// Validation failure.
        #[source]
        source: LocationError,
    },
    /// Session-level failure; not reachable through `plan`, which
    /// always sets a start first.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Parse lenient location text: a typed pair first, then link shapes.
fn parse_location_text(text: &str) -> Result<masar_core::Coordinate, ParseError> {
    parse_coordinate_pair(text).or_else(|_| parse_coordinate_from_link(text))
}

fn build_session(args: &PlanArgs) -> Result<Session, CliError> {
    let start = parse_coordinate_pair(&args.start).map_err(|source| CliError::InvalidStart {
        text: args.start.clone(),
        source,
    })?;

    let mut session = Session::new();
    session.set_current_position(CurrentPosition::new(start, args.start_address.clone()));

    for entry in &args.destinations {
        let (name, text) = entry
            .split_once('=')
            .ok_or_else(|| CliError::MalformedDestination {
                entry: entry.clone(),
            })?;
        let coordinate =
            parse_location_text(text).map_err(|source| CliError::UnparseableDestination {
                name: name.to_owned(),
                source,
            })?;
        session
            .add_location(name.trim(), "", coordinate)
            .map_err(|source| CliError::InvalidDestination {
                entry: entry.clone(),
                source,
            })?;
    }
    Ok(session)
}

fn render_plan(args: &PlanArgs) -> Result<String, CliError> {
    let mut session = build_session(args)?;
    let route = session.optimize()?.to_vec();
    debug!("planned a route over {} destinations", route.len());

    let summary = session.summary().unwrap_or_default();
    let start = session
        .current_position()
        .map(|position| position.coordinate)
        .ok_or(SessionError::NoCurrentPosition)?;

    let mut report = String::new();
    report.push_str(&format!("خطة المسار ({} مواقع)\n", route.len()));
    for (index, (stop, leg)) in route.iter().zip(&summary.legs).enumerate() {
        report.push_str(&format!(
            "{}. {} — {} — {}\n",
            index + 1,
            stop.name,
            leg.distance_text(),
            leg.duration_text(),
        ));
    }
    report.push_str(&format!(
        "الإجمالي: {} — {}\n",
        summary.total_distance_text(),
        summary.total_duration_text(),
    ));
    report.push_str(&format!(
        "رابط الاتجاهات: {}\n",
        navlink::directions_url(start, &route)
    ));
    report.push_str(&format!(
        "رابط بديل: {}",
        navlink::waypoint_path_url(start, &route)
    ));
    Ok(report)
}
