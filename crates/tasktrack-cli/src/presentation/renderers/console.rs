use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;
use std::fmt::Display;

use crate::types::OutputFormat;

/// Prints command results either as pretty JSON or through a `Display` view.
pub struct ConsoleRenderer {
    format: OutputFormat,
    enable_color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            enable_color: std::io::stdout().is_terminal(),
        }
    }

    /// Render `model` as JSON, or build a text view with `view` and print it.
    pub fn render<T, V, F>(&self, model: &T, view: F) -> Result<()>
    where
        T: Serialize,
        V: Display,
        F: FnOnce(bool) -> V,
    {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(model)?);
            }
            OutputFormat::Plain => {
                print!("{}", view(self.enable_color));
            }
        }
        Ok(())
    }
}
