//! Define the application's command line interface
use crate::config::Config;
use simplelog::LevelFilter;
use structopt::StructOpt;

mod delete_all;
use delete_all::{delete_all_command, DeleteAllOpts};
mod list_routes;
use list_routes::{list_routes_command, ListRoutesOpts};
mod record;
use record::{record_command, RecordOpts};
mod show;
use show::{show_command, ShowOpts};
mod terminal;
pub use terminal::TerminalView;

/// Record GPS tracks and browse the routes saved in the local database
#[derive(Debug, StructOpt)]
#[structopt(name = "route-tracker")]
pub struct Cli {
    /// Log more than the configured level, can be repeated (e.g. -vv)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: i32,
    /// Log less than the configured level, can be repeated (e.g. -qq)
    #[structopt(short, long, parse(from_occurrences))]
    quiet: i32,
    #[structopt(subcommand)]
    cmd: Command,
}

impl Cli {
    /// Shift the configured log level by the verbose and quiet flag counts
    ///
    /// Each -v raises the level one step (e.g. info -> debug) and each -q lowers it, clamped
    /// between off and trace.
    pub fn verbosity(&self, configured: LevelFilter) -> LevelFilter {
        shift_level(configured, self.verbose - self.quiet)
    }

    /// Consume options struct and return the result of subcommand execution
    pub fn execute_subcommand(self, config: Config) -> Result<(), Box<dyn std::error::Error>> {
        self.cmd.execute(config)
    }
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Record a new route from a stream of "latitude,longitude" samples
    #[structopt(name = "record")]
    Record(RecordOpts),
    /// List routes stored in the database
    #[structopt(name = "list")]
    List(ListRoutesOpts),
    /// Show a saved route along with its distance
    #[structopt(name = "show")]
    Show(ShowOpts),
    /// Delete every saved route
    #[structopt(name = "delete-all")]
    DeleteAll(DeleteAllOpts),
}

impl Command {
    /// Consume enum variant and return the result of the command's execution
    fn execute(self, config: Config) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Command::Record(opts) => record_command(config, opts),
            Command::List(opts) => list_routes_command(config, opts),
            Command::Show(opts) => show_command(config, opts),
            Command::DeleteAll(opts) => delete_all_command(config, opts),
        }
    }
}

static LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

fn shift_level(level: LevelFilter, steps: i32) -> LevelFilter {
    let current = LEVELS.iter().position(|l| *l == level).unwrap_or(3) as i32;
    let shifted = (current + steps).max(0).min(LEVELS.len() as i32 - 1);
    LEVELS[shifted as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::from_iter(args.iter().copied())
    }

    #[test]
    fn flags_shift_configured_level() {
        assert_eq!(
            cli(&["route-tracker", "list"]).verbosity(LevelFilter::Warn),
            LevelFilter::Warn
        );
        assert_eq!(
            cli(&["route-tracker", "-v", "list"]).verbosity(LevelFilter::Warn),
            LevelFilter::Info
        );
        assert_eq!(
            cli(&["route-tracker", "-qq", "list"]).verbosity(LevelFilter::Debug),
            LevelFilter::Warn
        );
    }

    #[test]
    fn shifted_level_is_clamped() {
        assert_eq!(shift_level(LevelFilter::Debug, 5), LevelFilter::Trace);
        assert_eq!(shift_level(LevelFilter::Error, -3), LevelFilter::Off);
        assert_eq!(shift_level(LevelFilter::Info, 0), LevelFilter::Info);
    }
}
