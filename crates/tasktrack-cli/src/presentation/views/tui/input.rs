use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::focused_border_style;
use crate::presentation::view_models::InputViewModel;

/// Single-line text field with a placeholder.
///
/// Long values scroll: only the tail that fits is drawn, leaving one column
/// for the cursor.
pub struct InputView<'a> {
    model: &'a InputViewModel,
}

impl<'a> InputView<'a> {
    pub fn new(model: &'a InputViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for InputView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(focused_border_style(self.model.focused));

        let line = if self.model.value.is_empty() {
            Line::styled(
                self.model.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Line::from(visible_tail(&self.model.value, text_width(area)))
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}

/// Columns available for typed text inside a bordered field of `area`.
pub(crate) fn text_width(area: Rect) -> usize {
    usize::from(area.width.saturating_sub(3))
}

/// Longest suffix of `value` whose display width fits in `width` columns.
pub(crate) fn visible_tail(value: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = value.len();
    for (idx, ch) in value.char_indices().rev() {
        let w = Span::raw(&value[idx..idx + ch.len_utf8()]).width();
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &value[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_visible_tail_fits_width() {
        assert_eq!(visible_tail("abc", 10), "abc");
        assert_eq!(visible_tail("abcdef", 3), "def");
        assert_eq!(visible_tail("abc", 0), "");
        // wide characters take two columns
        assert_eq!(visible_tail("a日本", 4), "日本");
        assert_eq!(visible_tail("a日本", 3), "本");
    }

    #[test]
    fn test_long_value_shows_its_end() {
        let model = InputViewModel {
            value: format!("{}END", "x".repeat(200)),
            placeholder: "New Task".to_string(),
            focused: true,
        };
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal
            .draw(|f| f.render_widget(InputView::new(&model), f.area()))
            .unwrap();

        let line = row(&terminal, 1);
        assert!(line.contains("xEND"), "row was {:?}", line);
        // one blank column stays free for the cursor
        assert!(line.ends_with("END │"), "row was {:?}", line);
    }
}
