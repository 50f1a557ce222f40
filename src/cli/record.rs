//! Define the record subcommand
use super::TerminalView;
use crate::config::Config;
use crate::store::RouteStore;
use crate::{distance_label, Coordinate, Error, MapSession, SqliteRouteStore, TrackingMode};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use structopt::StructOpt;

/// Replay location samples through the tracker and save them as a new route
#[derive(Debug, StructOpt)]
pub struct RecordOpts {
    /// File with one "latitude,longitude" sample per line, if not provided or "-" is used
    /// samples are read from stdin
    #[structopt(name = "FILE", parse(from_os_str))]
    input: Option<PathBuf>,
    /// Deliver every sample as if the map were in this mode (tracking, browsing-history, idle)
    #[structopt(long)]
    mode: Option<TrackingMode>,
}

pub fn record_command(config: Config, opts: RecordOpts) -> Result<(), Box<dyn std::error::Error>> {
    let reader: Box<dyn BufRead> = match &opts.input {
        Some(path) if path.to_string_lossy() != "-" => Box::new(BufReader::new(File::open(path)?)),
        _ => Box::new(BufReader::new(io::stdin())),
    };

    let store = SqliteRouteStore::open(config.database())?;
    let mut session = MapSession::new(store, TerminalView::new());
    session.start_tracking();

    // samples are processed one at a time in the order they are read
    let mut accepted = 0;
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let coordinate = match parse_sample(&line) {
            Ok(Some(coordinate)) => coordinate,
            Ok(None) => continue,
            Err(e) => {
                warn!("Skipping line {}: {}", line_no + 1, e);
                continue;
            }
        };
        let mode = opts.mode.unwrap_or_else(|| session.mode());
        if session.on_location_update(coordinate, mode) {
            accepted += 1;
        }
    }
    debug!("Accepted {} location samples", accepted);

    session.stop_tracking()?;
    let count = session.store().count()?;
    let route = session.store().get(count - 1)?;
    info!(
        "Saved route {} with {} points ({})",
        count - 1,
        route.len(),
        distance_label(route.total_distance())
    );
    println!(
        "{}\t{}\t{}",
        count - 1,
        route.len(),
        distance_label(route.total_distance())
    );

    Ok(())
}

/// Parse a "latitude,longitude" line, blank lines and "#" comments produce None
fn parse_sample(line: &str) -> Result<Option<Coordinate>, Error> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut parts = line.split(',').map(str::trim);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(lat), Some(lon), None) => {
            let latitude = lat
                .parse::<f64>()
                .map_err(|_| Error::InvalidCoordinate(line.to_string()))?;
            let longitude = lon
                .parse::<f64>()
                .map_err(|_| Error::InvalidCoordinate(line.to_string()))?;
            Ok(Some(Coordinate::new(latitude, longitude)))
        }
        _ => Err(Error::InvalidCoordinate(line.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_samples() {
        assert_eq!(
            parse_sample(" 55.75, 37.61 ").unwrap(),
            Some(Coordinate::new(55.75, 37.61))
        );
        assert_eq!(parse_sample("").unwrap(), None);
        assert_eq!(parse_sample("# header").unwrap(), None);
    }

    #[test]
    fn garbage_values_are_kept() {
        let coordinate = parse_sample("NaN,200").unwrap().unwrap();
        assert!(coordinate.latitude().is_nan());
        assert_eq!(coordinate.longitude(), 200.0);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_sample("55.75").is_err());
        assert!(parse_sample("55.75,37.61,12").is_err());
        assert!(parse_sample("north,east").is_err());
    }
}
