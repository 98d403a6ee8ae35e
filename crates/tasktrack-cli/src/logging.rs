//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI, so log lines go to a file in the data
//! directory instead of stderr.

use crate::config::LogConfig;
use crate::types::LogLevel;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "TASKTRACK_LOG";

/// Pick the filter directive: TASKTRACK_LOG, then the CLI flag, then config.
pub fn filter_for(cli_level: Option<LogLevel>, config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = cli_level
            .map(|l| l.to_string())
            .unwrap_or_else(|| config.level.clone());
        EnvFilter::new(level)
    })
}

/// Install the global subscriber. Returns the log file path.
pub fn init(data_dir: &Path, config: &LogConfig, cli_level: Option<LogLevel>) -> Result<PathBuf> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    let path = data_dir.join(&config.file);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(filter_for(cli_level, config))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(path)
}
