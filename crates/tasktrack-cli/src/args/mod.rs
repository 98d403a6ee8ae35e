mod commands;

pub use commands::*;

use crate::types::LogLevel;
use clap::Parser;

#[derive(Parser)]
#[command(name = "tasktrack")]
#[command(about = "Track tasks in the terminal: add, complete, review", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory for config and logs [env: TASKTRACK_PATH]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Log level (overrides the config file; TASKTRACK_LOG overrides both)
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
