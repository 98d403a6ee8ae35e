//! Status Bar View Component
//!
//! Renders task counts on the left and key hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::key_style;
use crate::presentation::view_models::StatusBarViewModel;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Length(28), Constraint::Min(0)]).split(inner);

        let counts = Line::from(vec![
            Span::raw(format!("Pending: {} ", self.model.pending_count)),
            Span::raw("| "),
            Span::styled(
                format!("Done: {}", self.model.completed_count),
                Style::default().fg(Color::Green),
            ),
        ]);
        Paragraph::new(counts).render(chunks[0], buf);

        let mut spans = Vec::new();
        for hint in &self.model.hints {
            spans.push(Span::styled(format!("[{}]", hint.key), key_style()));
            spans.push(Span::raw(format!("{} ", hint.label)));
        }
        Paragraph::new(Line::from(spans)).render(chunks[1], buf);
    }
}
