//! End-to-end flows driven through the keymap, the way the terminal UI
//! drives them, without a terminal.

use crossterm::event::{KeyCode, KeyEvent};
use tasktrack::{App, Outcome, map_key};
use tasktrack_core::{Screen, TaskStore};
use tasktrack_testing::assertions::{assert_completed, assert_pending};
use tasktrack_testing::fixtures::{self, BLANK_INPUTS, BUY_MILK, SAMPLE_TASKS, key, submit_text};

fn press(app: &mut App, keys: impl IntoIterator<Item = KeyEvent>) -> Vec<Outcome> {
    let mut outcomes = Vec::new();
    for k in keys {
        let ui = app.ui();
        if let Some(action) = map_key(k, app.screen(), ui.focus, ui.alert.is_some()) {
            outcomes.push(app.dispatch(action));
        }
    }
    outcomes
}

#[test]
fn test_add_then_complete_buy_milk() {
    let mut app = App::new(TaskStore::new());

    press(&mut app, submit_text(BUY_MILK));
    assert_pending(app.store(), &[BUY_MILK]);
    assert_completed(app.store(), &[]);

    press(&mut app, [key(KeyCode::Tab), key(KeyCode::Enter)]);
    assert_pending(app.store(), &[]);
    assert_completed(app.store(), &[BUY_MILK]);
}

#[test]
fn test_blank_submissions_raise_alert() {
    for blank in BLANK_INPUTS {
        let mut app = App::new(TaskStore::new());

        let outcomes = press(&mut app, submit_text(blank));

        assert!(matches!(outcomes.last(), Some(Outcome::Rejected(_))));
        assert!(app.store().is_empty());
        assert!(app.ui().alert.is_some());

        // Typing is blocked until the alert is dismissed.
        press(&mut app, fixtures::type_text("zzz"));
        assert_eq!(app.ui().input, *blank);

        press(&mut app, [key(KeyCode::Enter)]);
        assert!(app.ui().alert.is_none());
    }
}

#[test]
fn test_completing_first_keeps_order() {
    let mut app = App::new(TaskStore::new());
    press(&mut app, submit_text("A"));
    press(&mut app, submit_text("B"));

    press(&mut app, [key(KeyCode::Tab), key(KeyCode::Char('x'))]);

    assert_pending(app.store(), &["B"]);
    assert_completed(app.store(), &["A"]);
}

#[test]
fn test_completed_view_round_trip() {
    let mut app = App::new(TaskStore::new());
    for text in SAMPLE_TASKS {
        press(&mut app, submit_text(text));
    }
    // Complete the second task.
    press(
        &mut app,
        [key(KeyCode::Tab), key(KeyCode::Char('j')), key(KeyCode::Enter)],
    );
    assert_completed(app.store(), &["Walk the dog"]);

    press(&mut app, [key(KeyCode::Char('v'))]);
    assert_eq!(app.screen(), Screen::CompletedTasks);

    // Nothing on this screen mutates the store.
    press(&mut app, [key(KeyCode::Enter), key(KeyCode::Char('x'))]);
    assert_completed(app.store(), &["Walk the dog"]);

    press(&mut app, [key(KeyCode::Esc)]);
    assert_eq!(app.screen(), Screen::Tasks);
    assert_pending(app.store(), &["Buy milk", "Water the plants"]);
}

#[test]
fn test_f2_opens_completed_from_input() {
    let mut app = App::new(TaskStore::new());
    press(&mut app, fixtures::type_text("draft"));
    press(&mut app, [key(KeyCode::F(2))]);

    assert_eq!(app.screen(), Screen::CompletedTasks);

    press(&mut app, [key(KeyCode::Backspace)]);
    assert_eq!(app.screen(), Screen::Tasks);
    // The half-typed input survives navigation.
    assert_eq!(app.ui().input, "draft");
}

#[test]
fn test_ctrl_q_quits() {
    let mut app = App::new(TaskStore::new());
    let outcomes = press(&mut app, [fixtures::ctrl('q')]);
    assert_eq!(outcomes, vec![Outcome::Quit]);
    assert!(app.should_quit());
}

#[test]
fn test_identical_texts_get_distinct_ids() {
    let mut app = App::new(TaskStore::new());
    press(&mut app, submit_text("same"));
    press(&mut app, submit_text("same"));

    let pending = app.store().pending();
    assert_eq!(pending.len(), 2);
    assert_ne!(pending[0].id, pending[1].id);
}
