use serde::Serialize;
use tasktrack_types::Screen;
use tracing::debug;

/// Stack-based navigation over the app's screens.
///
/// The stack is never empty: `Screen::Tasks` is the root and cannot be
/// popped.
#[derive(Debug, Clone, Serialize)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Tasks],
        }
    }

    pub fn current(&self) -> Screen {
        // The root is never popped, so the stack always has a top.
        self.stack.last().copied().unwrap_or(Screen::Tasks)
    }

    pub fn stack(&self) -> &[Screen] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Show `screen`.
    ///
    /// No-op when it is already on top; pops back to it when it is deeper
    /// in the stack; pushes it otherwise.
    pub fn navigate(&mut self, screen: Screen) {
        if self.current() == screen {
            return;
        }

        if let Some(index) = self.stack.iter().position(|s| *s == screen) {
            self.stack.truncate(index + 1);
            debug!(screen = %screen, depth = self.stack.len(), "navigated back to screen");
        } else {
            self.stack.push(screen);
            debug!(screen = %screen, depth = self.stack.len(), "pushed screen");
        }
    }

    /// Pop the top screen. Returns `false` at the root.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        let popped = self.stack.pop();
        debug!(from = ?popped, to = %self.current(), "back");
        true
    }
}
