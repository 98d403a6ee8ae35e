//! TUI View Components
//!
//! Ratatui `Widget` implementations. Each view is a thin wrapper around a
//! view model reference:
//! - no store access, no state changes
//! - only mapping view model data to widgets and styles

pub mod action_bar;
pub mod alert;
pub mod completed_list;
pub mod header;
pub mod input;
pub mod screen;
pub mod status_bar;
pub mod task_list;

pub use action_bar::ActionBarView;
pub use alert::AlertView;
pub use completed_list::CompletedListView;
pub use header::HeaderView;
pub use input::InputView;
pub use screen::{ScreenView, cursor_position};
pub use status_bar::StatusBarView;
pub use task_list::TaskListView;

use ratatui::style::{Color, Modifier, Style};

pub(crate) fn focused_border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub(crate) fn key_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub(crate) fn highlight_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}
