use anyhow::Result;
use std::path::Path;

use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::config::{Config, LogConfig, resolve_data_dir};
use crate::logging;
use crate::types::LogLevel;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Run);

    match command {
        Commands::Run => {
            let config = Config::load_from(&Config::path_in(&data_dir))?;
            init_logging(&data_dir, &config.log, cli.log_level);
            handlers::tui::handle(&config)
        }

        Commands::Demo { format } => {
            // The demo ignores [ui]; a broken file only costs the [log] settings.
            let log = Config::load_from(&Config::path_in(&data_dir))
                .map(|config| config.log)
                .unwrap_or_default();
            init_logging(&data_dir, &log, cli.log_level);
            handlers::demo::handle(format)
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show { format } => {
                let config = Config::load_from(&Config::path_in(&data_dir))?;
                handlers::config::show(&data_dir, &config, format)
            }
            ConfigCommand::Init { force } => handlers::config::init(&data_dir, force),
            ConfigCommand::Path => handlers::config::path(&data_dir),
        },
    }
}

fn init_logging(data_dir: &Path, log: &LogConfig, cli_level: Option<LogLevel>) {
    if let Err(e) = logging::init(data_dir, log, cli_level) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
}
