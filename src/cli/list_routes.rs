//! Define the list subcommand
use crate::config::Config;
use crate::{rounded_meters, SqliteRouteStore};
use structopt::StructOpt;

/// List all routes in the local database
#[derive(Debug, StructOpt)]
pub struct ListRoutesOpts {
    /// Reverse route ordering to be new -> old
    #[structopt(short, long)]
    reverse: bool,
    /// Limit results returned to "N" entries
    #[structopt(short, long)]
    number: Option<usize>,
}

pub fn list_routes_command(
    config: Config,
    opts: ListRoutesOpts,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteRouteStore::open(config.database())?;
    let mut routes: Vec<(usize, _)> = store.list_saved()?.into_iter().enumerate().collect();
    if opts.reverse {
        routes.reverse();
    }
    if let Some(value) = opts.number {
        routes.truncate(value);
    }

    println!("Index\tDate\t\t\tPoints\tDistance[m]");
    for (index, saved) in routes {
        println!(
            "{}\t{}\t{}\t{}",
            index,
            saved.time_created.format("%Y-%m-%d %H:%M"),
            saved.route.len(),
            rounded_meters(saved.route.total_distance())
        );
    }

    Ok(())
}
