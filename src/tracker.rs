//! State machine that turns a stream of location samples into saved routes
use crate::store::RouteStore;
use crate::{Coordinate, Error, Route};
use log::{debug, info, trace, warn};
use std::mem;

/// Whether a route is currently being recorded
#[derive(Clone, Debug, PartialEq)]
pub enum TrackerState {
    Idle,
    /// Samples collected since recording started, in arrival order
    Recording(Vec<Coordinate>),
}

/// Describes how the tracking toggle should be redrawn after a transition
///
/// The tracker never animates anything itself, it only reports what changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresentationUpdate {
    /// toggle is shown in its active style
    pub highlight: bool,
    /// toggle should play its rotation animation
    pub rotate: bool,
}

/// Records GPS samples between `start` and `stop` and saves the result to a route store
#[derive(Debug)]
pub struct RouteTracker<S> {
    state: TrackerState,
    store: S,
}

impl<S: RouteStore> RouteTracker<S> {
    pub fn new(store: S) -> Self {
        RouteTracker {
            state: TrackerState::Idle,
            store,
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn is_recording(&self) -> bool {
        matches!(self.state, TrackerState::Recording(_))
    }

    /// Samples collected so far for the route in progress
    pub fn current_samples(&self) -> &[Coordinate] {
        match &self.state {
            TrackerState::Recording(buffer) => buffer.as_slice(),
            TrackerState::Idle => &[],
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Begin recording a new route with an empty buffer
    ///
    /// Calling this while already recording is ignored, samples collected so far are kept.
    pub fn start(&mut self) -> PresentationUpdate {
        if self.is_recording() {
            warn!(
                "Ignoring start request, already recording a route with {} points",
                self.current_samples().len()
            );
            return PresentationUpdate {
                highlight: true,
                rotate: false,
            };
        }
        debug!("Started recording a new route");
        self.state = TrackerState::Recording(Vec::new());
        PresentationUpdate {
            highlight: true,
            rotate: true,
        }
    }

    /// Append a sample to the route in progress, samples are dropped while idle
    pub fn add_sample(&mut self, coordinate: Coordinate) {
        match &mut self.state {
            TrackerState::Recording(buffer) => {
                trace!(
                    "Recorded sample #{}: {}, {}",
                    buffer.len(),
                    coordinate.latitude(),
                    coordinate.longitude()
                );
                buffer.push(coordinate);
            }
            TrackerState::Idle => trace!("Not recording, sample dropped"),
        }
    }

    /// Finish the route in progress and hand it to the store
    ///
    /// The tracker is idle afterwards even if the write fails, in that case the route is lost
    /// and the store error is returned. Stopping while idle saves nothing.
    pub fn stop(&mut self) -> Result<PresentationUpdate, Error> {
        let buffer = match mem::replace(&mut self.state, TrackerState::Idle) {
            TrackerState::Recording(buffer) => buffer,
            TrackerState::Idle => {
                warn!("Ignoring stop request, no route is being recorded");
                return Ok(PresentationUpdate {
                    highlight: false,
                    rotate: false,
                });
            }
        };
        let route = Route::new(buffer);
        let points = route.len();
        self.store.append(route)?;
        info!("Saved route with {} points", points);
        Ok(PresentationUpdate {
            highlight: false,
            rotate: true,
        })
    }
}
