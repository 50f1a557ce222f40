//! Presenter that connects live location updates, route recording and history browsing
//! to whatever is drawing the map.
use crate::filter::{accept, TrackingMode};
use crate::history::{HistoryBrowser, Navigation, RouteSummary};
use crate::store::RouteStore;
use crate::tracker::{PresentationUpdate, RouteTracker};
use crate::{Coordinate, Error};
use log::{debug, error, trace};

/// Radius in meters of the map region shown around the current location
pub const DEFAULT_REGION_RADIUS: f64 = 1000.0;

/// Callbacks implemented by the layer that renders the map and controls
///
/// The session owns its presentation layer but never inspects it, everything flows one way
/// through these methods.
pub trait PresentationLayer {
    /// Re-center the map on the latest accepted location
    fn center_on(&mut self, coordinate: Coordinate, region_radius: f64);

    /// Redraw the tracking toggle
    fn tracking_changed(&mut self, update: PresentationUpdate);

    /// Draw a saved route and update the paging controls
    fn show_route(&mut self, index: usize, summary: &RouteSummary, navigation: Navigation);

    /// Remove any saved route currently drawn
    fn clear_routes(&mut self);

    /// Show a one-time message to the user
    fn notify(&mut self, message: &str);
}

/// Single threaded presenter, every call is expected to come from the same event loop
pub struct MapSession<S, V> {
    tracker: RouteTracker<S>,
    view: V,
    browser: Option<HistoryBrowser>,
    last_location: Option<Coordinate>,
    region_radius: f64,
}

impl<S: RouteStore, V: PresentationLayer> MapSession<S, V> {
    pub fn new(store: S, view: V) -> Self {
        MapSession {
            tracker: RouteTracker::new(store),
            view,
            browser: None,
            last_location: None,
            region_radius: DEFAULT_REGION_RADIUS,
        }
    }

    pub fn with_region_radius(mut self, region_radius: f64) -> Self {
        self.region_radius = region_radius;
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn tracker(&self) -> &RouteTracker<S> {
        &self.tracker
    }

    pub fn store(&self) -> &S {
        self.tracker.store()
    }

    pub fn last_location(&self) -> Option<Coordinate> {
        self.last_location
    }

    /// Index of the saved route being displayed, if browsing
    pub fn history_index(&self) -> Option<usize> {
        self.browser.map(|b| b.index())
    }

    pub fn into_parts(self) -> (S, V) {
        (self.tracker.into_store(), self.view)
    }

    /// Mode derived from the session's own state
    pub fn mode(&self) -> TrackingMode {
        if self.browser.is_some() {
            TrackingMode::BrowsingHistory
        } else if self.tracker.is_recording() {
            TrackingMode::Tracking
        } else {
            TrackingMode::Idle
        }
    }

    /// Process one location sample delivered under the given mode
    ///
    /// Returns false if the sample was rejected because the user is browsing history.
    pub fn on_location_update(&mut self, coordinate: Coordinate, mode: TrackingMode) -> bool {
        if !accept(mode) {
            trace!("Location update ignored while browsing history");
            return false;
        }
        self.last_location = Some(coordinate);
        self.view.center_on(coordinate, self.region_radius);
        self.tracker.add_sample(coordinate);
        true
    }

    /// Start recording when idle, stop and save when recording
    pub fn toggle_tracking(&mut self) -> Result<(), Error> {
        if self.tracker.is_recording() {
            self.stop_tracking()
        } else {
            self.start_tracking();
            Ok(())
        }
    }

    pub fn start_tracking(&mut self) {
        if self.browser.is_some() {
            self.close_history();
        }
        let update = self.tracker.start();
        self.view.tracking_changed(update);
    }

    /// Stop recording and save the route
    ///
    /// On a failed write the route is discarded, the toggle is reset and the user notified
    /// before the error is returned.
    pub fn stop_tracking(&mut self) -> Result<(), Error> {
        match self.tracker.stop() {
            Ok(update) => {
                self.view.tracking_changed(update);
                Ok(())
            }
            Err(e) => {
                error!("Route could not be saved: {}", e);
                self.view.tracking_changed(PresentationUpdate {
                    highlight: false,
                    rotate: true,
                });
                self.view
                    .notify(&format!("The route could not be saved: {}", e));
                Err(e)
            }
        }
    }

    /// Begin browsing saved routes starting at the most recent one
    ///
    /// Returns false if nothing was shown, either because a route is being recorded or
    /// because there are no saved routes.
    pub fn show_history(&mut self) -> Result<bool, Error> {
        if self.tracker.is_recording() {
            self.view
                .notify("Stop tracking before viewing saved routes");
            return Ok(false);
        }
        match HistoryBrowser::open(self.tracker.store().count()?) {
            Some(browser) => {
                self.browser = Some(browser);
                self.display_current()?;
                Ok(true)
            }
            None => {
                self.view.notify("There are no saved routes");
                Ok(false)
            }
        }
    }

    /// Begin browsing saved routes at a specific index
    pub fn show_history_at(&mut self, index: usize) -> Result<(), Error> {
        let count = self.tracker.store().count()?;
        match HistoryBrowser::open_at(count, index) {
            Some(browser) => {
                self.browser = Some(browser);
                self.display_current()
            }
            None => Err(Error::IndexOutOfRange { index, count }),
        }
    }

    /// Show the next older route, returns false if there is none
    pub fn previous_route(&mut self) -> Result<bool, Error> {
        let moved = self.browser.as_mut().map_or(false, |b| b.previous());
        if moved {
            self.display_current()?;
        }
        Ok(moved)
    }

    /// Show the next newer route, returns false if there is none
    pub fn next_route(&mut self) -> Result<bool, Error> {
        let moved = self.browser.as_mut().map_or(false, |b| b.next());
        if moved {
            self.display_current()?;
        }
        Ok(moved)
    }

    pub fn close_history(&mut self) {
        if self.browser.take().is_some() {
            debug!("Closed route history");
            self.view.clear_routes();
        }
    }

    /// Delete every saved route, confirmation is expected to have happened already
    pub fn delete_all_routes(&mut self) -> Result<(), Error> {
        if let Err(e) = self.tracker.store_mut().delete_all() {
            self.view
                .notify(&format!("Saved routes could not be deleted: {}", e));
            return Err(e);
        }
        self.browser = None;
        self.view.clear_routes();
        Ok(())
    }

    fn display_current(&mut self) -> Result<(), Error> {
        let browser = match self.browser {
            Some(browser) => browser,
            None => return Ok(()),
        };
        let route = self.tracker.store().get(browser.index())?;
        let summary = RouteSummary::from(&route);
        debug!(
            "Displaying route {} of {} ({})",
            browser.index() + 1,
            browser.count(),
            summary.label
        );
        self.view
            .show_route(browser.index(), &summary, browser.navigation());
        Ok(())
    }
}
