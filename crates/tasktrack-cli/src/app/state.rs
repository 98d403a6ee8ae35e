use serde::Serialize;
use tasktrack_types::Error;

/// Which widget of the Tasks screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    Input,
    List,
}

/// A blocking modal dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn from_error(err: &Error) -> Self {
        Self {
            title: "Error".to_string(),
            message: err.to_string(),
        }
    }
}

/// Transient UI state. None of this is business state: dropping it loses
/// nothing but the half-typed input and the highlighted rows.
#[derive(Debug, Clone, Serialize)]
pub struct UiState {
    pub input: String,
    pub focus: Focus,
    pub pending_selected: usize,
    pub completed_selected: usize,
    pub alert: Option<Alert>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            input: String::new(),
            focus: Focus::Input,
            pending_selected: 0,
            completed_selected: 0,
            alert: None,
        }
    }
}

impl UiState {
    pub fn clamp_selection(&mut self, pending_len: usize, completed_len: usize) {
        self.pending_selected = self.pending_selected.min(pending_len.saturating_sub(1));
        self.completed_selected = self.completed_selected.min(completed_len.saturating_sub(1));
    }
}
