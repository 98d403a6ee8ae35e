use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{DemoTranscriptViewModel, StoreSnapshotViewModel};

pub struct StoreSnapshotView<'a> {
    pub model: &'a StoreSnapshotViewModel,
    pub enable_color: bool,
    pub indent: &'a str,
}

impl<'a> fmt::Display for StoreSnapshotView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = self.indent;

        writeln!(f, "{}Pending ({}):", indent, self.model.pending.len())?;
        for text in &self.model.pending {
            writeln!(f, "{}  • {}", indent, text)?;
        }

        writeln!(f, "{}Completed ({}):", indent, self.model.completed.len())?;
        for text in &self.model.completed {
            if self.enable_color {
                writeln!(f, "{}  ✓ {}", indent, text.strikethrough().dimmed())?;
            } else {
                writeln!(f, "{}  ✓ {}", indent, text)?;
            }
        }

        Ok(())
    }
}

pub struct DemoTranscriptView<'a> {
    pub model: &'a DemoTranscriptViewModel,
    pub enable_color: bool,
}

impl<'a> fmt::Display for DemoTranscriptView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.model.steps {
            let header = format!("[{}] {}", step.index, step.label);
            if self.enable_color {
                writeln!(f, "{}", header.bold())?;
            } else {
                writeln!(f, "{}", header)?;
            }

            let outcome = format!("→ {} (screen: {})", step.outcome, step.screen);
            if self.enable_color {
                writeln!(f, "  {}", outcome.cyan())?;
            } else {
                writeln!(f, "  {}", outcome)?;
            }

            if let Some(alert) = &step.alert {
                if self.enable_color {
                    writeln!(f, "  {} {}", "Alert:".red().bold(), alert)?;
                } else {
                    writeln!(f, "  Alert: {}", alert)?;
                }
            }
        }

        writeln!(f)?;
        if self.enable_color {
            writeln!(f, "{}", "Final state".bold())?;
        } else {
            writeln!(f, "Final state")?;
        }
        write!(
            f,
            "{}",
            StoreSnapshotView {
                model: &self.model.final_state,
                enable_color: self.enable_color,
                indent: "  ",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::DemoStepViewModel;
    use tasktrack_types::Screen;

    #[test]
    fn test_plain_transcript() {
        let snapshot = StoreSnapshotViewModel {
            pending: vec!["Walk the dog".to_string()],
            completed: vec!["Buy milk".to_string()],
        };
        let model = DemoTranscriptViewModel {
            steps: vec![DemoStepViewModel {
                index: 1,
                label: "Submit empty input".to_string(),
                outcome: "rejected: Task cannot be empty".to_string(),
                screen: Screen::Tasks,
                alert: Some("Task cannot be empty".to_string()),
                state: snapshot.clone(),
            }],
            final_state: snapshot,
        };

        let out = DemoTranscriptView {
            model: &model,
            enable_color: false,
        }
        .to_string();

        insta::assert_snapshot!(out, @r"
        [1] Submit empty input
          → rejected: Task cannot be empty (screen: Tasks)
          Alert: Task cannot be empty

        Final state
          Pending (1):
            • Walk the dog
          Completed (1):
            ✓ Buy milk
        ");
    }
}
