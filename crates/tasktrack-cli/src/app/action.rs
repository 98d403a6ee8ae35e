use tasktrack_types::TaskId;

/// A user intent, independent of the key that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a character to the new-task input
    TypeChar(char),
    /// Delete the last character of the input
    Backspace,
    /// "Add Task"
    Submit,
    FocusInput,
    FocusList,
    SelectNext,
    SelectPrevious,
    /// Complete the highlighted pending task
    CompleteSelected,
    /// Complete a task by id ("tap" on a row)
    Complete(TaskId),
    /// "View Completed Tasks"
    ViewCompleted,
    Back,
    DismissAlert,
    Quit,
}

impl Action {
    /// Expand `text` into one `TypeChar` per character.
    pub fn type_text(text: &str) -> Vec<Action> {
        text.chars().map(Action::TypeChar).collect()
    }
}
