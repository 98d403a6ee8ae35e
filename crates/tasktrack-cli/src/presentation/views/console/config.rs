use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::ConfigViewModel;

pub struct ConfigView<'a> {
    pub model: &'a ConfigViewModel,
    pub enable_color: bool,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.model.exists {
            "loaded"
        } else {
            "not found, using defaults"
        };
        let path = self.model.path.display().to_string();

        if self.enable_color {
            writeln!(f, "# {} ({})", path.cyan(), status.dimmed())?;
        } else {
            writeln!(f, "# {} ({})", path, status)?;
        }

        match toml::to_string_pretty(&self.model.config) {
            Ok(body) => write!(f, "{}", body),
            Err(_) => Err(fmt::Error),
        }
    }
}
