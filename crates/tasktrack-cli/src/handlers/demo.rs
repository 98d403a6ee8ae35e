use anyhow::Result;
use tasktrack_core::TaskStore;
use tracing::info;

use crate::app::{Action, App, Outcome};
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::{present_demo_step, present_store_snapshot};
use crate::presentation::view_models::DemoTranscriptViewModel;
use crate::presentation::views::console::DemoTranscriptView;
use crate::types::OutputFormat;

/// A labelled group of actions, reported as one transcript line.
pub struct DemoStep {
    pub label: &'static str,
    pub actions: Vec<Action>,
}

impl DemoStep {
    fn new(label: &'static str, actions: Vec<Action>) -> Self {
        Self { label, actions }
    }

    fn typed(label: &'static str, text: &str) -> Self {
        let mut actions = Action::type_text(text);
        actions.push(Action::Submit);
        Self::new(label, actions)
    }
}

pub fn scenario() -> Vec<DemoStep> {
    vec![
        DemoStep::typed("Add \"Buy milk\"", "Buy milk"),
        DemoStep::typed("Add \"Walk the dog\"", "Walk the dog"),
        DemoStep::new("Submit empty input", vec![Action::Submit]),
        DemoStep::new("Dismiss alert", vec![Action::DismissAlert]),
        DemoStep::new(
            "Complete the first task",
            vec![Action::FocusList, Action::CompleteSelected],
        ),
        DemoStep::new("View completed tasks", vec![Action::ViewCompleted]),
        DemoStep::new("Go back", vec![Action::Back]),
    ]
}

/// Play `steps` against a fresh store.
pub fn run_scenario(steps: Vec<DemoStep>) -> DemoTranscriptViewModel {
    let mut app = App::new(TaskStore::new());
    let mut transcript = Vec::with_capacity(steps.len());

    for (i, step) in steps.into_iter().enumerate() {
        let outcome = app
            .dispatch_all(step.actions)
            .into_iter()
            .rfind(|o| *o != Outcome::Ignored)
            .unwrap_or(Outcome::Ignored);
        info!(step = step.label, ?outcome, "demo step");
        transcript.push(present_demo_step(i + 1, step.label, &outcome, &app));
    }

    DemoTranscriptViewModel {
        steps: transcript,
        final_state: present_store_snapshot(app.store()),
    }
}

pub fn handle(format: OutputFormat) -> Result<()> {
    let transcript = run_scenario(scenario());

    ConsoleRenderer::new(format).render(&transcript, |enable_color| DemoTranscriptView {
        model: &transcript,
        enable_color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasktrack_core::Screen;

    #[test]
    fn test_scenario_final_state() {
        let transcript = run_scenario(scenario());

        assert_eq!(transcript.final_state.pending, vec!["Walk the dog"]);
        assert_eq!(transcript.final_state.completed, vec!["Buy milk"]);
    }

    #[test]
    fn test_scenario_steps() {
        let transcript = run_scenario(scenario());
        let outcomes: Vec<&str> = transcript.steps.iter().map(|s| s.outcome.as_str()).collect();

        assert_eq!(
            outcomes,
            vec![
                "added \"Buy milk\"",
                "added \"Walk the dog\"",
                "rejected: Task cannot be empty",
                "alert dismissed",
                "completed \"Buy milk\"",
                "navigated to CompletedTasks",
                "navigated to Tasks",
            ]
        );
        assert_eq!(
            transcript.steps[2].alert.as_deref(),
            Some("Task cannot be empty")
        );
        assert_eq!(transcript.steps[2].state.pending.len(), 2);
        assert_eq!(transcript.steps[5].screen, Screen::CompletedTasks);
    }
}
