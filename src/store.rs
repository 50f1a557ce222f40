//! Ordered, append-only collections of saved routes
use crate::{Error, Route};
use log::debug;

/// Storage backend for finished routes
///
/// Routes are kept in save order, oldest first. Stored routes are never modified, the only
/// removal is `delete_all` which clears the whole collection at once. Readers always receive
/// owned copies so later writes cannot change a snapshot that was already handed out.
pub trait RouteStore {
    /// Add a route to the end of the collection, it becomes index `count() - 1`
    fn append(&mut self, route: Route) -> Result<(), Error>;

    /// Number of routes currently stored
    fn count(&self) -> Result<usize, Error>;

    /// Every stored route, oldest first
    fn list(&self) -> Result<Vec<Route>, Error>;

    /// Fetch a single route by its position in save order
    fn get(&self, index: usize) -> Result<Route, Error>;

    /// Remove every stored route
    fn delete_all(&mut self) -> Result<(), Error>;
}

impl<S: RouteStore + ?Sized> RouteStore for &mut S {
    fn append(&mut self, route: Route) -> Result<(), Error> {
        (**self).append(route)
    }

    fn count(&self) -> Result<usize, Error> {
        (**self).count()
    }

    fn list(&self) -> Result<Vec<Route>, Error> {
        (**self).list()
    }

    fn get(&self, index: usize) -> Result<Route, Error> {
        (**self).get(index)
    }

    fn delete_all(&mut self) -> Result<(), Error> {
        (**self).delete_all()
    }
}

/// Route store kept entirely in memory, contents are lost when it is dropped
#[derive(Clone, Debug, Default)]
pub struct MemoryRouteStore {
    routes: Vec<Route>,
}

impl MemoryRouteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RouteStore for MemoryRouteStore {
    fn append(&mut self, route: Route) -> Result<(), Error> {
        debug!("Appending route with {} points to memory store", route.len());
        self.routes.push(route);
        Ok(())
    }

    fn count(&self) -> Result<usize, Error> {
        Ok(self.routes.len())
    }

    fn list(&self) -> Result<Vec<Route>, Error> {
        Ok(self.routes.clone())
    }

    fn get(&self, index: usize) -> Result<Route, Error> {
        self.routes
            .get(index)
            .cloned()
            .ok_or(Error::IndexOutOfRange {
                index,
                count: self.routes.len(),
            })
    }

    fn delete_all(&mut self) -> Result<(), Error> {
        self.routes.clear();
        Ok(())
    }
}
