use tasktrack_core::{Navigator, Screen, Task, TaskStore};

use crate::app::{Focus, UiState};
use crate::config::UiConfig;
use crate::presentation::view_models::{
    ActionButtonViewModel, AlertViewModel, CompletedListViewModel, HeaderViewModel,
    InputViewModel, KeyHint, ScreenBody, ScreenViewModel, StatusBarViewModel, TaskItemViewModel,
    TaskListViewModel,
};

pub const ADD_TASK_LABEL: &str = "Add Task";
pub const VIEW_COMPLETED_LABEL: &str = "View Completed Tasks";

/// Build the frame for whichever screen is on top of the navigator.
///
/// The store is passed in explicitly; the presenter only reads it.
pub fn build_screen_view_model(
    store: &TaskStore,
    navigator: &Navigator,
    ui: &UiState,
    config: &UiConfig,
) -> ScreenViewModel {
    let screen = navigator.current();

    let body = match screen {
        Screen::Tasks => ScreenBody::Tasks(build_task_list(store, ui, config)),
        Screen::CompletedTasks => ScreenBody::Completed(build_completed_list(store, ui, config)),
    };

    ScreenViewModel {
        screen,
        header: HeaderViewModel {
            title: screen.title().to_string(),
            can_go_back: navigator.can_go_back(),
        },
        body,
        status_bar: StatusBarViewModel {
            pending_count: store.pending_len(),
            completed_count: store.completed_len(),
            hints: if config.show_help {
                key_hints(screen, ui)
            } else {
                Vec::new()
            },
        },
        alert: ui.alert.as_ref().map(|alert| AlertViewModel {
            title: alert.title.clone(),
            message: alert.message.clone(),
            dismiss_label: "OK".to_string(),
        }),
    }
}

fn items(tasks: &[Task]) -> Vec<TaskItemViewModel> {
    tasks
        .iter()
        .map(|task| TaskItemViewModel {
            id: task.id.to_string(),
            text: task.text.clone(),
        })
        .collect()
}

fn selection(selected: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| selected.min(len - 1))
}

fn build_task_list(store: &TaskStore, ui: &UiState, config: &UiConfig) -> TaskListViewModel {
    let list_focused = ui.focus == Focus::List;

    TaskListViewModel {
        items: items(store.pending()),
        selected: if list_focused {
            selection(ui.pending_selected, store.pending_len())
        } else {
            None
        },
        list_focused,
        empty_message: "No pending tasks".to_string(),
        input: InputViewModel {
            value: ui.input.clone(),
            placeholder: config.input_placeholder.clone(),
            focused: ui.focus == Focus::Input,
        },
        actions: vec![
            ActionButtonViewModel {
                label: ADD_TASK_LABEL.to_string(),
                key: "Enter".to_string(),
            },
            ActionButtonViewModel {
                label: VIEW_COMPLETED_LABEL.to_string(),
                key: "F2".to_string(),
            },
        ],
    }
}

fn build_completed_list(
    store: &TaskStore,
    ui: &UiState,
    config: &UiConfig,
) -> CompletedListViewModel {
    CompletedListViewModel {
        items: items(store.completed()),
        selected: selection(ui.completed_selected, store.completed_len()),
        strikethrough: config.strikethrough_completed,
        empty_message: "No completed tasks".to_string(),
    }
}

fn key_hints(screen: Screen, ui: &UiState) -> Vec<KeyHint> {
    if ui.alert.is_some() {
        return vec![KeyHint::new("Enter", "dismiss")];
    }

    match (screen, ui.focus) {
        (Screen::Tasks, Focus::Input) => vec![
            KeyHint::new("Enter", "add"),
            KeyHint::new("Tab", "list"),
            KeyHint::new("F2", "completed"),
            KeyHint::new("Esc", "quit"),
        ],
        (Screen::Tasks, Focus::List) => vec![
            KeyHint::new("j/k", "select"),
            KeyHint::new("Enter", "complete"),
            KeyHint::new("v", "completed"),
            KeyHint::new("Tab", "input"),
            KeyHint::new("q", "quit"),
        ],
        (Screen::CompletedTasks, _) => vec![
            KeyHint::new("j/k", "scroll"),
            KeyHint::new("Esc", "back"),
            KeyHint::new("q", "quit"),
        ],
    }
}
