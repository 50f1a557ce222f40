//! Presentation layer that writes session updates to the terminal
use crate::session::PresentationLayer;
use crate::{encode_coordinates, Coordinate, Navigation, PresentationUpdate, RouteSummary};
use log::{debug, info, trace, warn};

/// Prints saved routes to stdout and reports everything else through the logger
#[derive(Clone, Debug, Default)]
pub struct TerminalView {
    polyline: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print routes as an encoded polyline instead of one coordinate per line
    pub fn with_polyline(polyline: bool) -> Self {
        TerminalView { polyline }
    }
}

impl PresentationLayer for TerminalView {
    fn center_on(&mut self, coordinate: Coordinate, region_radius: f64) {
        trace!(
            "Map centered on {:.6}, {:.6} ({} m radius)",
            coordinate.latitude(),
            coordinate.longitude(),
            region_radius
        );
    }

    fn tracking_changed(&mut self, update: PresentationUpdate) {
        if update.highlight {
            info!("Tracking is on");
        } else {
            info!("Tracking is off");
        }
    }

    fn show_route(&mut self, index: usize, summary: &RouteSummary, navigation: Navigation) {
        println!(
            "Route {} ({} points, {})",
            index,
            summary.coordinates.len(),
            summary.label
        );
        if let Some(midpoint) = summary.midpoint {
            println!(
                "Midpoint: {:.6}, {:.6}",
                midpoint.latitude(),
                midpoint.longitude()
            );
        }
        println!(
            "Previous: {}, Next: {}",
            yes_no(navigation.can_go_prev),
            yes_no(navigation.can_go_next)
        );

        if self.polyline {
            match encode_coordinates(&summary.coordinates) {
                Ok(encoded) => println!("{}", encoded),
                Err(e) => warn!("Could not encode route {} as a polyline: {}", index, e),
            }
        } else {
            for coordinate in &summary.coordinates {
                println!("{},{}", coordinate.latitude(), coordinate.longitude());
            }
        }
    }

    fn clear_routes(&mut self) {
        debug!("Cleared displayed routes");
    }

    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
