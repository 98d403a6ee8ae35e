//! Whole-frame view: header, body, status bar and an optional alert.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    text::Line,
    widgets::Widget,
};

use super::input::{text_width, visible_tail};
use super::{
    ActionBarView, AlertView, CompletedListView, HeaderView, InputView, StatusBarView,
    TaskListView,
};
use crate::presentation::view_models::{ScreenBody, ScreenViewModel};

const HEADER_HEIGHT: u16 = 2;
const INPUT_HEIGHT: u16 = 3;
const ACTIONS_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 2;

struct ScreenAreas {
    header: Rect,
    body: Rect,
    input: Option<Rect>,
    actions: Option<Rect>,
    status: Rect,
}

fn split(area: Rect, body: &ScreenBody) -> ScreenAreas {
    match body {
        ScreenBody::Tasks(_) => {
            let chunks = Layout::vertical([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(ACTIONS_HEIGHT),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);
            ScreenAreas {
                header: chunks[0],
                body: chunks[1],
                input: Some(chunks[2]),
                actions: Some(chunks[3]),
                status: chunks[4],
            }
        }
        ScreenBody::Completed(_) => {
            let chunks = Layout::vertical([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);
            ScreenAreas {
                header: chunks[0],
                body: chunks[1],
                input: None,
                actions: None,
                status: chunks[2],
            }
        }
    }
}

pub struct ScreenView<'a> {
    model: &'a ScreenViewModel,
}

impl<'a> ScreenView<'a> {
    pub fn new(model: &'a ScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ScreenView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = split(area, &self.model.body);

        HeaderView::new(&self.model.header).render(areas.header, buf);

        match &self.model.body {
            ScreenBody::Tasks(list) => {
                TaskListView::new(list).render(areas.body, buf);
                if let Some(input_area) = areas.input {
                    InputView::new(&list.input).render(input_area, buf);
                }
                if let Some(actions_area) = areas.actions {
                    ActionBarView::new(&list.actions).render(actions_area, buf);
                }
            }
            ScreenBody::Completed(list) => {
                CompletedListView::new(list).render(areas.body, buf);
            }
        }

        StatusBarView::new(&self.model.status_bar).render(areas.status, buf);

        if let Some(alert) = &self.model.alert {
            AlertView::new(alert).render(area, buf);
        }
    }
}

/// Where the terminal cursor belongs: the end of the focused input, or
/// nowhere when no text field is focused.
pub fn cursor_position(model: &ScreenViewModel, area: Rect) -> Option<Position> {
    if model.alert.is_some() {
        return None;
    }
    let ScreenBody::Tasks(list) = &model.body else {
        return None;
    };
    if !list.input.focused {
        return None;
    }

    let input_area = split(area, &model.body).input?;
    let max_x = input_area.right().saturating_sub(2);
    let tail = visible_tail(&list.input.value, text_width(input_area));
    let typed = u16::try_from(Line::from(tail).width()).unwrap_or(u16::MAX);
    Some(Position::new(
        input_area.x.saturating_add(1).saturating_add(typed).min(max_x),
        input_area.y.saturating_add(1),
    ))
}
