//! Decide which live location samples reach the map and the active track
use crate::Error;
use std::str::FromStr;

/// What the user is currently doing with the map
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackingMode {
    /// A route is being recorded
    Tracking,
    /// The user is paging through previously saved routes
    BrowsingHistory,
    /// Neither recording nor browsing
    Idle,
}

impl FromStr for TrackingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tracking" => Ok(TrackingMode::Tracking),
            "browsing-history" | "browsing" => Ok(TrackingMode::BrowsingHistory),
            "idle" => Ok(TrackingMode::Idle),
            _ => Err(Error::InvalidConfigurationValue(format!(
                "Unknown mode {}: expected: tracking, browsing-history, idle",
                s
            ))),
        }
    }
}

/// Return true when a location sample should update the last known location
///
/// Samples are rejected while browsing history so live updates do not pull the map
/// away from the route being viewed.
pub fn accept(mode: TrackingMode) -> bool {
    mode != TrackingMode::BrowsingHistory
}
