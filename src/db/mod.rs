//! SQLite backed route store and database utility functions
use crate::store::RouteStore;
use crate::{Coordinate, Error, Route};
use chrono::{DateTime, Local, Utc};
use log::{debug, error, info};
use rusqlite::{params, Connection, Row, NO_PARAMS};
use std::convert::TryFrom;
use std::path::{Path, PathBuf};

mod schema;
pub use schema::create_database;

static DATABASE_NAME: &str = "route-tracker.db";

/// A stored route along with the time it was saved
#[derive(Clone, Debug, PartialEq)]
pub struct SavedRoute {
    pub time_created: DateTime<Local>,
    pub route: Route,
}

/// Route store persisted in a local SQLite database
///
/// Every append and delete runs inside a single transaction so a failed write leaves no
/// partial route behind.
#[derive(Debug)]
pub struct SqliteRouteStore {
    conn: Connection,
}

impl SqliteRouteStore {
    /// Open (and create if needed) the database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let conn = open_db_connection(path.as_ref())?;
        Self::from_connection(conn)
    }

    /// Open a database that only lives as long as the store
    pub fn open_in_memory() -> Result<Self, Error> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Self, Error> {
        create_database(&mut conn)?;
        Ok(SqliteRouteStore { conn })
    }

    /// Every stored route with its save time, oldest first
    pub fn list_saved(&self) -> Result<Vec<SavedRoute>, Error> {
        // left join so routes recorded without any samples are still returned
        let mut stmt = self.conn.prepare(
            "select r.id, r.time_created, c.sequence, c.latitude, c.longitude
                from routes r
                left join route_coordinates c on c.route_id = r.id
                order by r.id, c.sequence",
        )?;
        let mut rows = stmt.query(NO_PARAMS)?;

        let mut saved: Vec<SavedRoute> = Vec::new();
        let mut coordinates: Vec<Coordinate> = Vec::new();
        let mut current: Option<(i64, DateTime<Local>)> = None;
        while let Some(row) = rows.next()? {
            let route_id: i64 = row.get(0)?;
            if current.map(|(id, _)| id) != Some(route_id) {
                if let Some((_, time_created)) = current.take() {
                    saved.push(SavedRoute {
                        time_created,
                        route: Route::new(coordinates),
                    });
                    coordinates = Vec::new();
                }
                current = Some((route_id, row.get(1)?));
            }
            if row.get::<usize, Option<i64>>(2)?.is_some() {
                coordinates.push(coordinate_from_row(row, 3)?);
            }
        }
        // catch last route which gets missed by the conditional
        if let Some((_, time_created)) = current {
            saved.push(SavedRoute {
                time_created,
                route: Route::new(coordinates),
            });
        }

        Ok(saved)
    }

    fn route_id_at(&self, offset: i64) -> Result<Option<i64>, Error> {
        let mut stmt = self
            .conn
            .prepare("select id from routes order by id limit 1 offset ?")?;
        let mut rows = stmt.query(params![offset])?;
        let route_id = match rows.next()? {
            Some(row) => Some(row.get(0)?),
            None => None,
        };
        Ok(route_id)
    }

    fn load_coordinates(&self, route_id: i64) -> Result<Vec<Coordinate>, Error> {
        let mut stmt = self.conn.prepare(
            "select latitude, longitude from route_coordinates
                where route_id = ?
                order by sequence",
        )?;
        let mut rows = stmt.query(params![route_id])?;
        let mut coordinates = Vec::new();
        while let Some(row) = rows.next()? {
            coordinates.push(coordinate_from_row(row, 0)?);
        }
        Ok(coordinates)
    }

    fn insert_route(&mut self, route: &Route) -> rusqlite::Result<i64> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "insert into routes (time_created) values (?1)",
            params![Utc::now()],
        )?;
        let route_id = tx.last_insert_rowid();
        {
            let mut stmt = tx.prepare_cached(
                "insert into route_coordinates (latitude, longitude, sequence, route_id)
                 values (?1, ?2, ?3, ?4)",
            )?;
            for (sequence, coordinate) in route.coordinates().iter().enumerate() {
                stmt.execute(params![
                    coordinate.latitude(),
                    coordinate.longitude(),
                    sequence as i64,
                    route_id
                ])?;
            }
        }
        tx.commit()?;
        Ok(route_id)
    }

    fn delete_routes(&mut self) -> rusqlite::Result<usize> {
        let tx = self.conn.transaction()?;
        tx.execute("delete from route_coordinates", NO_PARAMS)?;
        let deleted = tx.execute("delete from routes", NO_PARAMS)?;
        tx.commit()?;
        Ok(deleted)
    }
}

impl RouteStore for SqliteRouteStore {
    fn append(&mut self, route: Route) -> Result<(), Error> {
        match self.insert_route(&route) {
            Ok(route_id) => {
                debug!(
                    "Inserted route {} with {} coordinates",
                    route_id,
                    route.len()
                );
                Ok(())
            }
            Err(e) => {
                error!("Could not save route with {} points: {}", route.len(), e);
                Err(Error::PersistenceWriteFailure(e.to_string()))
            }
        }
    }

    fn count(&self) -> Result<usize, Error> {
        let count: i64 = self
            .conn
            .query_row("select count(*) from routes", NO_PARAMS, |r| r.get(0))?;
        Ok(count as usize)
    }

    fn list(&self) -> Result<Vec<Route>, Error> {
        Ok(self
            .list_saved()?
            .into_iter()
            .map(|saved| saved.route)
            .collect())
    }

    fn get(&self, index: usize) -> Result<Route, Error> {
        // sqlite treats a negative offset as 0, so indices past i64::MAX never reach the query
        let offset = match i64::try_from(index) {
            Ok(offset) => offset,
            Err(_) => {
                return Err(Error::IndexOutOfRange {
                    index,
                    count: self.count()?,
                })
            }
        };
        match self.route_id_at(offset)? {
            Some(route_id) => Ok(Route::new(self.load_coordinates(route_id)?)),
            None => Err(Error::IndexOutOfRange {
                index,
                count: self.count()?,
            }),
        }
    }

    fn delete_all(&mut self) -> Result<(), Error> {
        match self.delete_routes() {
            Ok(deleted) => {
                info!("Deleted {} stored route(s)", deleted);
                Ok(())
            }
            Err(e) => {
                error!("Could not delete stored routes: {}", e);
                Err(Error::PersistenceWriteFailure(e.to_string()))
            }
        }
    }
}

/// Read a latitude, longitude column pair, NULL values come back as NaN
fn coordinate_from_row(row: &Row, first_column: usize) -> rusqlite::Result<Coordinate> {
    let latitude: Option<f64> = row.get(first_column)?;
    let longitude: Option<f64> = row.get(first_column + 1)?;
    Ok(Coordinate::new(
        latitude.unwrap_or(f64::NAN),
        longitude.unwrap_or(f64::NAN),
    ))
}

pub fn open_db_connection(path: &Path) -> rusqlite::Result<Connection> {
    debug!("Connected to local database located at: {:?}", path);
    Connection::open(path)
}

/// Default location of the database file
pub fn db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(PathBuf::new)
        .join(DATABASE_NAME)
}
