use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::key_style;
use crate::presentation::view_models::AlertViewModel;

const ALERT_WIDTH: u16 = 40;
const ALERT_HEIGHT: u16 = 6;

/// Modal dialog drawn centered over the screen.
pub struct AlertView<'a> {
    model: &'a AlertViewModel,
}

impl<'a> AlertView<'a> {
    pub fn new(model: &'a AlertViewModel) -> Self {
        Self { model }
    }
}

/// Center a `width` x `height` box inside `area`, shrinking to fit.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl<'a> Widget for AlertView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(area, ALERT_WIDTH, ALERT_HEIGHT);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(Span::styled(
                format!(" {} ", self.model.title),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));

        let text = vec![
            Line::from(self.model.message.as_str()),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter]", key_style()),
                Span::raw(format!(" {}", self.model.dismiss_label)),
            ]),
        ];

        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}
