//! Define show subcommand
use super::TerminalView;
use crate::config::Config;
use crate::{MapSession, SqliteRouteStore};
use structopt::StructOpt;

/// Show a saved route, its distance and which neighbouring routes exist
#[derive(Debug, StructOpt)]
pub struct ShowOpts {
    /// Index of the route to show (use the list command to see indices), the most recently
    /// saved route is shown if omitted
    #[structopt(name = "INDEX")]
    index: Option<usize>,
    /// Print the route as a Google encoded polyline instead of one coordinate per line
    #[structopt(short, long)]
    polyline: bool,
}

pub fn show_command(config: Config, opts: ShowOpts) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteRouteStore::open(config.database())?;
    let mut session = MapSession::new(store, TerminalView::with_polyline(opts.polyline));
    match opts.index {
        Some(index) => session.show_history_at(index)?,
        None => {
            session.show_history()?;
        }
    }
    session.close_history();

    Ok(())
}
