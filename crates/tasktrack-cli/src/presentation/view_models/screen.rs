use serde::Serialize;
use tasktrack_types::Screen;

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenViewModel {
    pub screen: Screen,
    pub header: HeaderViewModel,
    pub body: ScreenBody,
    pub status_bar: StatusBarViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<AlertViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeaderViewModel {
    pub title: String,
    pub can_go_back: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScreenBody {
    Tasks(TaskListViewModel),
    Completed(CompletedListViewModel),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskItemViewModel {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskListViewModel {
    pub items: Vec<TaskItemViewModel>,
    pub selected: Option<usize>,
    pub list_focused: bool,
    pub empty_message: String,
    pub input: InputViewModel,
    pub actions: Vec<ActionButtonViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputViewModel {
    pub value: String,
    pub placeholder: String,
    pub focused: bool,
}

/// A labelled action, drawn like a button with its key binding.
#[derive(Debug, Clone, Serialize)]
pub struct ActionButtonViewModel {
    pub label: String,
    pub key: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletedListViewModel {
    pub items: Vec<TaskItemViewModel>,
    pub selected: Option<usize>,
    pub strikethrough: bool,
    pub empty_message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub pending_count: usize,
    pub completed_count: usize,
    pub hints: Vec<KeyHint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyHint {
    pub key: String,
    pub label: String,
}

impl KeyHint {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertViewModel {
    pub title: String,
    pub message: String,
    pub dismiss_label: String,
}
