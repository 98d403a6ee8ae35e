//! UI-independent application state machine.
//!
//! `App` owns the task store handed to it by the composition root, the
//! navigator and the transient UI state. Every user intent arrives as an
//! `Action` and is applied synchronously by `dispatch`.

mod action;
mod keymap;
mod state;

pub use action::Action;
pub use keymap::map_key;
pub use state::{Alert, Focus, UiState};

use tasktrack_core::{Navigator, Screen, Task, TaskId, TaskStore, validate_task_text};
use tasktrack_types::Error;
use tracing::{debug, info, warn};

/// What a dispatched action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(Task),
    Completed(Task),
    /// Submit with blank input; the alert is now open
    Rejected(Error),
    Navigated(Screen),
    AlertDismissed,
    InputChanged,
    FocusChanged(Focus),
    SelectionChanged,
    Quit,
    /// Nothing changed (no binding in this state, unknown id, root back, ...)
    Ignored,
}

pub struct App {
    store: TaskStore,
    navigator: Navigator,
    ui: UiState,
    should_quit: bool,
}

impl App {
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            navigator: Navigator::new(),
            ui: UiState::default(),
            should_quit: false,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn screen(&self) -> Screen {
        self.navigator.current()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply a single action.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        if action == Action::Quit {
            info!("quit requested");
            self.should_quit = true;
            return Outcome::Quit;
        }

        if self.ui.alert.is_some() {
            return match action {
                Action::DismissAlert => {
                    self.ui.alert = None;
                    Outcome::AlertDismissed
                }
                _ => Outcome::Ignored,
            };
        }

        match self.screen() {
            Screen::Tasks => self.dispatch_tasks(action),
            Screen::CompletedTasks => self.dispatch_completed(action),
        }
    }

    /// Apply actions in order, collecting each outcome.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> Vec<Outcome> {
        actions.into_iter().map(|a| self.dispatch(a)).collect()
    }

    fn dispatch_tasks(&mut self, action: Action) -> Outcome {
        match action {
            Action::TypeChar(c) => {
                self.ui.input.push(c);
                Outcome::InputChanged
            }
            Action::Backspace => match self.ui.input.pop() {
                Some(_) => Outcome::InputChanged,
                None => Outcome::Ignored,
            },
            Action::Submit => self.submit(),
            Action::FocusInput => self.set_focus(Focus::Input),
            Action::FocusList => self.set_focus(Focus::List),
            Action::SelectNext => {
                let len = self.store.pending_len();
                step_selection(&mut self.ui.pending_selected, len, 1)
            }
            Action::SelectPrevious => {
                let len = self.store.pending_len();
                step_selection(&mut self.ui.pending_selected, len, -1)
            }
            Action::CompleteSelected => {
                if self.ui.focus != Focus::List {
                    return Outcome::Ignored;
                }
                let Some(id) = self
                    .store
                    .pending()
                    .get(self.ui.pending_selected)
                    .map(|t| t.id)
                else {
                    return Outcome::Ignored;
                };
                self.complete(&id)
            }
            Action::Complete(id) => self.complete(&id),
            Action::ViewCompleted => {
                self.navigator.navigate(Screen::CompletedTasks);
                self.ui.completed_selected = 0;
                Outcome::Navigated(Screen::CompletedTasks)
            }
            Action::Back => self.back(),
            Action::DismissAlert | Action::Quit => Outcome::Ignored,
        }
    }

    fn dispatch_completed(&mut self, action: Action) -> Outcome {
        match action {
            Action::SelectNext => {
                let len = self.store.completed_len();
                step_selection(&mut self.ui.completed_selected, len, 1)
            }
            Action::SelectPrevious => {
                let len = self.store.completed_len();
                step_selection(&mut self.ui.completed_selected, len, -1)
            }
            Action::Back => self.back(),
            _ => Outcome::Ignored,
        }
    }

    fn submit(&mut self) -> Outcome {
        if let Err(err) = validate_task_text(&self.ui.input) {
            warn!(error = %err, "rejected task input");
            self.ui.alert = Some(Alert::from_error(&err));
            return Outcome::Rejected(err);
        }

        let text = std::mem::take(&mut self.ui.input);
        match self.store.add(text) {
            Ok(task) => Outcome::Added(task),
            Err(err) => {
                self.ui.alert = Some(Alert::from_error(&err));
                Outcome::Rejected(err)
            }
        }
    }

    fn complete(&mut self, id: &TaskId) -> Outcome {
        let outcome = match self.store.complete(id) {
            Some(task) => Outcome::Completed(task),
            None => Outcome::Ignored,
        };
        self.ui
            .clamp_selection(self.store.pending_len(), self.store.completed_len());
        if self.store.pending_len() == 0 && self.ui.focus == Focus::List {
            self.ui.focus = Focus::Input;
        }
        outcome
    }

    fn back(&mut self) -> Outcome {
        if self.navigator.back() {
            Outcome::Navigated(self.screen())
        } else {
            Outcome::Ignored
        }
    }

    fn set_focus(&mut self, focus: Focus) -> Outcome {
        if self.ui.focus == focus {
            return Outcome::Ignored;
        }
        debug!(?focus, "focus changed");
        self.ui.focus = focus;
        Outcome::FocusChanged(focus)
    }
}

fn step_selection(selected: &mut usize, len: usize, delta: isize) -> Outcome {
    if len == 0 {
        return Outcome::Ignored;
    }
    let next = selected
        .saturating_add_signed(delta)
        .min(len - 1);
    if next == *selected {
        return Outcome::Ignored;
    }
    *selected = next;
    Outcome::SelectionChanged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(TaskStore::new())
    }

    fn add(app: &mut App, text: &str) -> Task {
        app.dispatch_all(Action::type_text(text));
        match app.dispatch(Action::Submit) {
            Outcome::Added(task) => task,
            other => panic!("expected Added, got {:?}", other),
        }
    }

    fn pending(app: &App) -> Vec<&str> {
        app.store().pending().iter().map(|t| t.text.as_str()).collect()
    }

    fn completed(app: &App) -> Vec<&str> {
        app.store().completed().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_submit_adds_and_clears_input() {
        let mut app = app();
        let task = add(&mut app, "Buy milk");

        assert_eq!(task.text, "Buy milk");
        assert_eq!(pending(&app), vec!["Buy milk"]);
        assert!(app.ui().input.is_empty());
    }

    #[test]
    fn test_blank_submit_opens_alert() {
        let mut app = app();
        app.dispatch_all(Action::type_text("   "));

        let outcome = app.dispatch(Action::Submit);

        assert_eq!(outcome, Outcome::Rejected(Error::EmptyTaskText));
        assert!(app.store().is_empty());
        let alert = app.ui().alert.as_ref().unwrap();
        assert_eq!(alert.title, "Error");
        assert_eq!(alert.message, "Task cannot be empty");
        assert_eq!(app.ui().input, "   ");
    }

    #[test]
    fn test_alert_blocks_until_dismissed() {
        let mut app = app();
        app.dispatch(Action::Submit);

        assert_eq!(app.dispatch(Action::TypeChar('a')), Outcome::Ignored);
        assert_eq!(app.dispatch(Action::ViewCompleted), Outcome::Ignored);
        assert_eq!(app.screen(), Screen::Tasks);

        assert_eq!(app.dispatch(Action::DismissAlert), Outcome::AlertDismissed);
        assert!(app.ui().alert.is_none());
        assert_eq!(app.dispatch(Action::TypeChar('a')), Outcome::InputChanged);
    }

    #[test]
    fn test_complete_selected_moves_task() {
        let mut app = app();
        add(&mut app, "A");
        add(&mut app, "B");

        app.dispatch(Action::FocusList);
        let outcome = app.dispatch(Action::CompleteSelected);

        assert!(matches!(outcome, Outcome::Completed(ref t) if t.text == "A"));
        assert_eq!(pending(&app), vec!["B"]);
        assert_eq!(completed(&app), vec!["A"]);
    }

    #[test]
    fn test_complete_selected_requires_list_focus() {
        let mut app = app();
        add(&mut app, "A");
        assert_eq!(app.dispatch(Action::CompleteSelected), Outcome::Ignored);
        assert_eq!(pending(&app), vec!["A"]);
    }

    #[test]
    fn test_selection_clamped_after_completing_last_row() {
        let mut app = app();
        add(&mut app, "A");
        add(&mut app, "B");
        app.dispatch(Action::FocusList);
        app.dispatch(Action::SelectNext);
        assert_eq!(app.ui().pending_selected, 1);

        app.dispatch(Action::CompleteSelected);

        assert_eq!(completed(&app), vec!["B"]);
        assert_eq!(app.ui().pending_selected, 0);
    }

    #[test]
    fn test_completing_everything_returns_focus_to_input() {
        let mut app = app();
        add(&mut app, "A");
        app.dispatch(Action::FocusList);
        app.dispatch(Action::CompleteSelected);
        assert_eq!(app.ui().focus, Focus::Input);
    }

    #[test]
    fn test_complete_by_id_unknown_is_ignored() {
        let mut app = app();
        add(&mut app, "A");
        assert_eq!(app.dispatch(Action::Complete(TaskId::new())), Outcome::Ignored);
        assert_eq!(pending(&app), vec!["A"]);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = app();
        assert_eq!(app.dispatch(Action::SelectNext), Outcome::Ignored);

        add(&mut app, "A");
        add(&mut app, "B");
        assert_eq!(app.dispatch(Action::SelectPrevious), Outcome::Ignored);
        assert_eq!(app.dispatch(Action::SelectNext), Outcome::SelectionChanged);
        assert_eq!(app.dispatch(Action::SelectNext), Outcome::Ignored);
        assert_eq!(app.ui().pending_selected, 1);
    }

    #[test]
    fn test_navigation_round_trip() {
        let mut app = app();
        add(&mut app, "A");

        assert_eq!(
            app.dispatch(Action::ViewCompleted),
            Outcome::Navigated(Screen::CompletedTasks)
        );
        // The completed screen is read-only.
        assert_eq!(app.dispatch(Action::TypeChar('x')), Outcome::Ignored);
        assert_eq!(app.dispatch(Action::Submit), Outcome::Ignored);

        assert_eq!(app.dispatch(Action::Back), Outcome::Navigated(Screen::Tasks));
        assert_eq!(app.dispatch(Action::Back), Outcome::Ignored);
        assert_eq!(pending(&app), vec!["A"]);
    }

    #[test]
    fn test_quit_works_with_alert_open() {
        let mut app = app();
        app.dispatch(Action::Submit);
        assert_eq!(app.dispatch(Action::Quit), Outcome::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_backspace_on_empty_input() {
        let mut app = app();
        assert_eq!(app.dispatch(Action::Backspace), Outcome::Ignored);
        app.dispatch(Action::TypeChar('a'));
        assert_eq!(app.dispatch(Action::Backspace), Outcome::InputChanged);
        assert!(app.ui().input.is_empty());
    }
}
