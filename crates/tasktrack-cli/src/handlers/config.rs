use anyhow::{Result, bail};
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::presentation::ConsoleRenderer;
use crate::presentation::view_models::ConfigViewModel;
use crate::presentation::views::console::ConfigView;
use crate::types::OutputFormat;

pub fn show(data_dir: &Path, config: &Config, format: OutputFormat) -> Result<()> {
    let path = Config::path_in(data_dir);
    let model = ConfigViewModel {
        exists: path.exists(),
        path,
        config: config.clone(),
    };

    ConsoleRenderer::new(format).render(&model, |enable_color| ConfigView {
        model: &model,
        enable_color,
    })
}

pub fn init(data_dir: &Path, force: bool) -> Result<()> {
    let path = Config::path_in(data_dir);
    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    info!(path = %path.display(), "wrote default config");
    println!("Wrote default config to {}", path.display());
    Ok(())
}

pub fn path(data_dir: &Path) -> Result<()> {
    println!("{}", Config::path_in(data_dir).display());
    Ok(())
}
