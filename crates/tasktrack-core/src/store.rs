use serde::Serialize;
use tasktrack_types::{Error, Result, Task, TaskId};
use tracing::debug;

/// Reject empty and whitespace-only task text.
pub fn validate_task_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::EmptyTaskText);
    }
    Ok(())
}

/// Owns the pending and completed task sequences.
///
/// A task lives in exactly one of the two sequences. Both keep insertion
/// order; completing a task appends it to the end of `completed`.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TaskStore {
    pending: Vec<Task>,
    completed: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new pending task.
    ///
    /// The text is stored exactly as given. Blank text is rejected and
    /// leaves the store untouched.
    pub fn add(&mut self, text: impl Into<String>) -> Result<Task> {
        let text = text.into();
        validate_task_text(&text)?;

        let task = Task::new(text);
        debug!(id = %task.id.short(), pending = self.pending.len() + 1, "task added");
        self.pending.push(task.clone());
        Ok(task)
    }

    /// Move a pending task to the end of `completed`.
    ///
    /// Returns the moved task, or `None` when `id` is not pending (unknown
    /// or already completed). A miss changes nothing.
    pub fn complete(&mut self, id: &TaskId) -> Option<Task> {
        let Some(index) = self.pending.iter().position(|task| &task.id == id) else {
            debug!(id = %id.short(), "complete ignored: task is not pending");
            return None;
        };

        let task = self.pending.remove(index);
        debug!(
            id = %task.id.short(),
            pending = self.pending.len(),
            completed = self.completed.len() + 1,
            "task completed"
        );
        self.completed.push(task.clone());
        Some(task)
    }

    pub fn pending(&self) -> &[Task] {
        &self.pending
    }

    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn completed_len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.completed.is_empty()
    }

    pub fn is_pending(&self, id: &TaskId) -> bool {
        self.pending.iter().any(|task| &task.id == id)
    }

    pub fn is_completed(&self, id: &TaskId) -> bool {
        self.completed.iter().any(|task| &task.id == id)
    }

    /// Look up a task in either sequence.
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.pending
            .iter()
            .chain(self.completed.iter())
            .find(|task| &task.id == id)
    }
}
