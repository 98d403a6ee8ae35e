use crate::types::OutputFormat;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the interactive task list (default)")]
    Run,

    #[command(about = "Play a scripted session without a terminal UI")]
    Demo {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Inspect or create the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Write the default configuration file")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    #[command(about = "Print the config file path")]
    Path,
}
