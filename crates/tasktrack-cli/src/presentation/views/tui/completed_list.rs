use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::presentation::view_models::CompletedListViewModel;

/// Read-only list of completed tasks, struck through and dimmed.
pub struct CompletedListView<'a> {
    model: &'a CompletedListViewModel,
}

impl<'a> CompletedListView<'a> {
    pub fn new(model: &'a CompletedListViewModel) -> Self {
        Self { model }
    }

    fn item_style(&self) -> Style {
        let style = Style::default().fg(Color::Gray);
        if self.model.strikethrough {
            style.add_modifier(Modifier::CROSSED_OUT)
        } else {
            style
        }
    }
}

impl<'a> Widget for CompletedListView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Completed ({}) ", self.model.items.len()));

        if self.model.items.is_empty() {
            Paragraph::new(Line::styled(
                self.model.empty_message.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let style = self.item_style();
        let items: Vec<ListItem> = self
            .model
            .items
            .iter()
            .map(|item| ListItem::new(Line::styled(item.text.as_str(), style)))
            .collect();

        // Selection only drives scrolling here; rows are not actionable.
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));
        let mut state = ListState::default().with_selected(self.model.selected);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
