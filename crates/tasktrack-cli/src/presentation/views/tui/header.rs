use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::key_style;
use crate::presentation::view_models::HeaderViewModel;

pub struct HeaderView<'a> {
    model: &'a HeaderViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a HeaderViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        if self.model.can_go_back {
            spans.push(Span::styled("[Esc]", key_style()));
            spans.push(Span::raw(" ‹ back  "));
        }
        spans.push(Span::styled(
            self.model.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ));

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}
