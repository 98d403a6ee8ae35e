use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::{focused_border_style, highlight_style};
use crate::presentation::view_models::TaskListViewModel;

/// Pending tasks. The highlighted row is the one Enter completes.
pub struct TaskListView<'a> {
    model: &'a TaskListViewModel,
}

impl<'a> TaskListView<'a> {
    pub fn new(model: &'a TaskListViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for TaskListView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(focused_border_style(self.model.list_focused))
            .title(format!(" Pending ({}) ", self.model.items.len()));

        if self.model.items.is_empty() {
            Paragraph::new(Line::styled(
                self.model.empty_message.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .model
            .items
            .iter()
            .map(|item| ListItem::new(Line::from(item.text.as_str())))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(highlight_style())
            .highlight_symbol("› ");

        let mut state = ListState::default().with_selected(self.model.selected);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
