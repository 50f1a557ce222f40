//! Paging through saved routes
use crate::{distance_label, Coordinate, Route};

/// Which paging controls are available at a position in the route history
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

/// Compute paging availability from the number of stored routes and the displayed index
pub fn navigation(count: usize, index: usize) -> Navigation {
    Navigation {
        can_go_prev: index > 0 && index < count,
        can_go_next: index + 1 < count,
    }
}

/// Cursor over the route history, browsing starts on the most recently saved route
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryBrowser {
    count: usize,
    index: usize,
}

impl HistoryBrowser {
    /// Start browsing a history of `count` routes, returns None when there is nothing to show
    pub fn open(count: usize) -> Option<Self> {
        if count == 0 {
            None
        } else {
            Some(HistoryBrowser {
                count,
                index: count - 1,
            })
        }
    }

    /// Start browsing at a specific index, returns None if the index is not valid
    pub fn open_at(count: usize, index: usize) -> Option<Self> {
        if index < count {
            Some(HistoryBrowser { count, index })
        } else {
            None
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn navigation(&self) -> Navigation {
        navigation(self.count, self.index)
    }

    /// Move to the previous (older) route, returns false if already at the oldest
    pub fn previous(&mut self) -> bool {
        if self.navigation().can_go_prev {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Move to the next (newer) route, returns false if already at the newest
    pub fn next(&mut self) -> bool {
        if self.navigation().can_go_next {
            self.index += 1;
            true
        } else {
            false
        }
    }
}

/// Everything the map needs to draw a saved route
#[derive(Clone, Debug, PartialEq)]
pub struct RouteSummary {
    pub coordinates: Vec<Coordinate>,
    /// anchor for the distance annotation
    pub midpoint: Option<Coordinate>,
    /// total length in meters, may be NaN for routes with garbage samples
    pub distance: f64,
    pub label: String,
}

impl From<&Route> for RouteSummary {
    fn from(route: &Route) -> Self {
        let distance = route.total_distance();
        RouteSummary {
            coordinates: route.coordinates().to_vec(),
            midpoint: route.midpoint(),
            distance,
            label: distance_label(distance),
        }
    }
}
