use log::debug;
use rusqlite::{params, Connection, Result};

/// Create the required tables if they do not exist yet
pub fn create_database(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute(
        "create table if not exists routes (
            time_created  datetime not null,
            id            integer primary key
        )",
        params![],
    )?;

    // latitude and longitude are nullable since sqlite stores NaN values as NULL
    tx.execute(
        "create table if not exists route_coordinates (
            latitude   float,
            longitude  float,
            sequence   integer not null,
            route_id   integer not null,
            id         integer primary key
        )",
        params![],
    )?;

    tx.execute(
        "create index if not exists route_coordinates_route_id
            on route_coordinates (route_id, sequence)",
        params![],
    )?;

    tx.commit()?;
    debug!("Completed database initialization");
    Ok(())
}
