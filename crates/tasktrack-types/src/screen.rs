use serde::{Deserialize, Serialize};
use std::fmt;

/// The two navigable screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Tasks,
    CompletedTasks,
}

impl Screen {
    /// Stable route name, used in logs and JSON output.
    pub fn route_name(&self) -> &'static str {
        match self {
            Screen::Tasks => "Tasks",
            Screen::CompletedTasks => "CompletedTasks",
        }
    }

    /// Human-readable header title.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Tasks => "Tasks",
            Screen::CompletedTasks => "Completed Tasks",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.route_name())
    }
}
