use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::key_style;
use crate::presentation::view_models::ActionButtonViewModel;

/// Row of button-like actions: `[Enter] Add Task  [F2] View Completed Tasks`.
pub struct ActionBarView<'a> {
    actions: &'a [ActionButtonViewModel],
}

impl<'a> ActionBarView<'a> {
    pub fn new(actions: &'a [ActionButtonViewModel]) -> Self {
        Self { actions }
    }
}

impl<'a> Widget for ActionBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, action) in self.actions.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("[{}]", action.key), key_style()));
            spans.push(Span::raw(format!(" {}", action.label)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
