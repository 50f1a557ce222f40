//! Define the delete-all subcommand
use super::TerminalView;
use crate::config::Config;
use crate::store::RouteStore;
use crate::{MapSession, SqliteRouteStore};
use log::info;
use std::io::{self, BufRead, Write};
use structopt::StructOpt;

/// Remove every saved route from the local database
#[derive(Debug, StructOpt)]
pub struct DeleteAllOpts {
    /// Do not ask for confirmation
    #[structopt(short, long)]
    yes: bool,
}

pub fn delete_all_command(
    config: Config,
    opts: DeleteAllOpts,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteRouteStore::open(config.database())?;
    let count = store.count()?;
    if count == 0 {
        println!("There are no saved routes");
        return Ok(());
    }

    if !opts.yes && config.confirm_delete() {
        let question = format!("Delete all {} saved route(s)?", count);
        if !confirm(&question, io::stdin().lock())? {
            info!("Nothing was deleted");
            return Ok(());
        }
    }

    let mut session = MapSession::new(store, TerminalView::new());
    session.delete_all_routes()?;
    println!("Deleted {} route(s)", count);

    Ok(())
}

/// Ask a yes/no question, anything other than "y" or "yes" counts as no
fn confirm<R: BufRead>(question: &str, mut input: R) -> io::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
