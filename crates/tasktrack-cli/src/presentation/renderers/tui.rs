//! TUI Renderer
//!
//! Owns the terminal for the lifetime of the interactive session:
//! - sets up raw mode and the alternate screen, and always restores them
//! - polls key events, maps them to `Action`s and dispatches them to `App`
//! - redraws the screen from a fresh view model after every event

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::app::{App, map_key};
use crate::config::UiConfig;
use crate::presentation::presenters::build_screen_view_model;
use crate::presentation::views::tui::{ScreenView, cursor_position};

pub struct TuiRenderer {
    app: App,
    config: UiConfig,
}

impl TuiRenderer {
    pub fn new(app: App, config: UiConfig) -> Self {
        Self { app, config }
    }

    /// Run until the user quits. Returns the app so the caller can report
    /// on the final state.
    ///
    /// Once raw mode is on, the terminal is restored on every exit path,
    /// including setup failures.
    pub fn run(mut self) -> Result<App> {
        enable_raw_mode()?;
        let result = self.session();
        let restored = restore_terminal(&mut io::stdout());
        result?;
        restored?;
        Ok(self.app)
    }

    fn session(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Ctrl+C normally arrives as a key event in raw mode; this covers
        // signals sent from outside the terminal.
        ctrlc::set_handler(move || {
            let _ = restore_terminal(&mut io::stdout());
            std::process::exit(0);
        })?;

        info!("terminal UI started");
        let result = self.event_loop(&mut terminal);
        info!("terminal UI stopped");
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.tick_rate_ms.max(1));

        while !self.app.should_quit() {
            self.draw(terminal)?;

            if !event::poll(tick_rate)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                let ui = self.app.ui();
                let action = map_key(key, self.app.screen(), ui.focus, ui.alert.is_some());
                if let Some(action) = action {
                    let outcome = self.app.dispatch(action.clone());
                    debug!(?action, ?outcome, "dispatched");
                }
            }
        }

        Ok(())
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let model = build_screen_view_model(
            self.app.store(),
            self.app.navigator(),
            self.app.ui(),
            &self.config,
        );

        terminal.draw(|f| {
            let area = f.area();
            f.render_widget(ScreenView::new(&model), area);
            if let Some(position) = cursor_position(&model, area) {
                f.set_cursor_position(position);
            }
        })?;

        Ok(())
    }
}

/// Leave raw mode and the alternate screen and show the cursor. Safe to call
/// when setup only got partway.
fn restore_terminal<W: Write>(out: &mut W) -> Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, Show)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_without_setup_is_harmless() {
        let mut out = Vec::new();
        restore_terminal(&mut out).unwrap();
        restore_terminal(&mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }
}
