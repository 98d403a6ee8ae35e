use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tasktrack_types::Screen;

use super::{Action, Focus};

/// Translate a key press into an `Action` for the current screen.
///
/// Returns `None` for keys with no binding. Release and repeat events are
/// ignored.
pub fn map_key(key: KeyEvent, screen: Screen, focus: Focus, alert_open: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    if alert_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissAlert),
            _ => None,
        };
    }

    match screen {
        Screen::Tasks => match focus {
            Focus::Input => map_input_key(key),
            Focus::List => map_list_key(key),
        },
        Screen::CompletedTasks => map_completed_key(key),
    }
}

fn map_input_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusList),
        KeyCode::F(2) => Some(Action::ViewCompleted),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Action::TypeChar(c))
        }
        _ => None,
    }
}

fn map_list_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('x') => Some(Action::CompleteSelected),
        KeyCode::Char('v') | KeyCode::F(2) => Some(Action::ViewCompleted),
        KeyCode::Tab | KeyCode::Char('i') => Some(Action::FocusInput),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

fn map_completed_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            Some(Action::Back)
        }
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}
