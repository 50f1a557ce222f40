use log::debug;
use route_tracker::cli::Cli;
use route_tracker::config::{config_file, Config};
use simplelog::{Config as LogConfig, TermLogger, TerminalMode};
use structopt::StructOpt;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = Cli::from_args();
    let config = Config::load_default_file()?;
    let level_filter = opt.verbosity(config.log_level());
    TermLogger::init(level_filter, LogConfig::default(), TerminalMode::Mixed)?;
    debug!("Using configuration from {:?}", config_file());

    // execute the requested subcommand
    opt.execute_subcommand(config)
}
