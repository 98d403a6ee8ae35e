use tasktrack_core::TaskStore;

use crate::app::{App, Focus, Outcome};
use crate::presentation::view_models::{DemoStepViewModel, StoreSnapshotViewModel};

pub fn present_store_snapshot(store: &TaskStore) -> StoreSnapshotViewModel {
    StoreSnapshotViewModel {
        pending: store.pending().iter().map(|t| t.text.clone()).collect(),
        completed: store.completed().iter().map(|t| t.text.clone()).collect(),
    }
}

/// One-line description of what an action did.
pub fn describe_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Added(task) => format!("added \"{}\"", task.text),
        Outcome::Completed(task) => format!("completed \"{}\"", task.text),
        Outcome::Rejected(err) => format!("rejected: {}", err),
        Outcome::Navigated(screen) => format!("navigated to {}", screen),
        Outcome::AlertDismissed => "alert dismissed".to_string(),
        Outcome::InputChanged => "input changed".to_string(),
        Outcome::FocusChanged(Focus::Input) => "focused input".to_string(),
        Outcome::FocusChanged(Focus::List) => "focused list".to_string(),
        Outcome::SelectionChanged => "selection changed".to_string(),
        Outcome::Quit => "quit".to_string(),
        Outcome::Ignored => "no change".to_string(),
    }
}

/// Snapshot the app after a scripted step.
///
/// `outcome` is the last outcome of the step that changed something, so a
/// step that types a whole word reports "input changed" once.
pub fn present_demo_step(
    index: usize,
    label: &str,
    outcome: &Outcome,
    app: &App,
) -> DemoStepViewModel {
    DemoStepViewModel {
        index,
        label: label.to_string(),
        outcome: describe_outcome(outcome),
        screen: app.screen(),
        alert: app.ui().alert.as_ref().map(|a| a.message.clone()),
        state: present_store_snapshot(app.store()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasktrack_core::{Screen, Task};
    use tasktrack_types::Error;

    #[test]
    fn test_describe_outcome() {
        let task = Task::new("Buy milk");
        assert_eq!(
            describe_outcome(&Outcome::Added(task.clone())),
            "added \"Buy milk\""
        );
        assert_eq!(
            describe_outcome(&Outcome::Completed(task)),
            "completed \"Buy milk\""
        );
        assert_eq!(
            describe_outcome(&Outcome::Rejected(Error::EmptyTaskText)),
            "rejected: Task cannot be empty"
        );
        assert_eq!(
            describe_outcome(&Outcome::Navigated(Screen::CompletedTasks)),
            "navigated to CompletedTasks"
        );
    }

    #[test]
    fn test_snapshot_texts() {
        let mut store = TaskStore::new();
        let a = store.add("A").unwrap();
        store.add("B").unwrap();
        store.complete(&a.id);

        let snapshot = present_store_snapshot(&store);
        assert_eq!(snapshot.pending, vec!["B"]);
        assert_eq!(snapshot.completed, vec!["A"]);
    }
}
