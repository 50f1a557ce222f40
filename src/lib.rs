//! Record GPS tracks, keep finished routes in a local database and page through them.
//!
//! Location samples flow through [`filter::accept`] into a [`RouteTracker`], which saves a
//! [`Route`] to a [`RouteStore`] each time recording stops. [`MapSession`] ties these together
//! for a presentation layer.
pub mod cli;
pub mod config;
pub mod db;
mod error;
pub mod filter;
mod gps;
pub mod history;
pub mod session;
pub mod store;
pub mod tracker;

pub use db::{SavedRoute, SqliteRouteStore};
pub use error::Error;
pub use filter::TrackingMode;
pub use gps::{
    distance_label, encode_coordinates, rounded_meters, total_distance, Coordinate, Route,
};
pub use history::{navigation, HistoryBrowser, Navigation, RouteSummary};
pub use session::{MapSession, PresentationLayer};
pub use store::{MemoryRouteStore, RouteStore};
pub use tracker::{PresentationUpdate, RouteTracker, TrackerState};
