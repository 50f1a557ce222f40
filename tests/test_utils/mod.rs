use route_tracker::{
    Coordinate, Error, Navigation, PresentationLayer, PresentationUpdate, Route, RouteStore,
    RouteSummary,
};

/// Presentation layer that keeps every callback for later inspection
#[derive(Debug, Default)]
pub struct RecordingView {
    pub centered_on: Vec<Coordinate>,
    pub tracking_updates: Vec<PresentationUpdate>,
    pub shown: Vec<(usize, RouteSummary, Navigation)>,
    pub cleared: usize,
    pub notices: Vec<String>,
}

impl PresentationLayer for RecordingView {
    fn center_on(&mut self, coordinate: Coordinate, _region_radius: f64) {
        self.centered_on.push(coordinate);
    }

    fn tracking_changed(&mut self, update: PresentationUpdate) {
        self.tracking_updates.push(update);
    }

    fn show_route(&mut self, index: usize, summary: &RouteSummary, navigation: Navigation) {
        self.shown.push((index, summary.clone(), navigation));
    }

    fn clear_routes(&mut self) {
        self.cleared += 1;
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Store whose writes always fail, reads behave like an empty store
#[derive(Debug, Default)]
pub struct FailingStore {
    pub attempts: usize,
}

impl RouteStore for FailingStore {
    fn append(&mut self, _route: Route) -> Result<(), Error> {
        self.attempts += 1;
        Err(Error::PersistenceWriteFailure("disk full".to_string()))
    }

    fn count(&self) -> Result<usize, Error> {
        Ok(0)
    }

    fn list(&self) -> Result<Vec<Route>, Error> {
        Ok(Vec::new())
    }

    fn get(&self, index: usize) -> Result<Route, Error> {
        Err(Error::IndexOutOfRange { index, count: 0 })
    }

    fn delete_all(&mut self) -> Result<(), Error> {
        Err(Error::PersistenceWriteFailure("disk full".to_string()))
    }
}

pub fn coordinates(pairs: &[(f64, f64)]) -> Vec<Coordinate> {
    pairs.iter().map(|&p| Coordinate::from(p)).collect()
}
