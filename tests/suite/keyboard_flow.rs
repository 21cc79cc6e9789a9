//! End-to-end key handling: terminal events in, task state out.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use ticklist_engine::{App, InputMode, Priority};
use ticklist_tui::apply_event;

use crate::common::{key, press_keys, visible_texts};

#[test]
fn add_three_tasks_with_priorities_and_filter() {
    let mut app = App::default();
    // High, then Low, then Medium via digit keys in normal mode.
    press_keys(&mut app, "1iA\n\x1b3iB\n\x1b2iC\n\x1b");

    let priorities: Vec<Priority> = app.rows().iter().map(|row| row.priority).collect();
    assert_eq!(priorities, vec![Priority::High, Priority::Low, Priority::Medium]);

    press_keys(&mut app, "l");
    assert_eq!(visible_texts(&app), vec!["B"]);
    press_keys(&mut app, "a");
    assert_eq!(visible_texts(&app), vec!["A", "B", "C"]);
}

#[test]
fn enter_keeps_insert_mode_for_rapid_entry() {
    let mut app = App::default();
    press_keys(&mut app, "ione\ntwo\nthree\n");
    assert_eq!(app.input_mode(), InputMode::Insert);
    assert_eq!(visible_texts(&app), vec!["one", "two", "three"]);
}

#[test]
fn tab_cycles_priority_between_tasks() {
    let mut app = App::default();
    press_keys(&mut app, "i\tlow one\n\thigh one\n\x1b");
    let priorities: Vec<Priority> = app.rows().iter().map(|row| row.priority).collect();
    assert_eq!(priorities, vec![Priority::Low, Priority::High]);
}

#[test]
fn navigate_toggle_and_remove() {
    let mut app = App::default();
    press_keys(&mut app, "ia\nb\nc\n\x1b");

    press_keys(&mut app, "gj ");
    let completed: Vec<bool> = app.rows().iter().map(|row| row.completed).collect();
    assert_eq!(completed, vec![false, true, false]);

    press_keys(&mut app, "Gd");
    app.advance(Duration::from_millis(500));
    assert_eq!(visible_texts(&app), vec!["a", "b"]);

    // Selection clamps onto the new last row.
    press_keys(&mut app, "x");
    let completed: Vec<bool> = app.rows().iter().map(|row| row.completed).collect();
    assert_eq!(completed, vec![false, false]);
}

#[test]
fn arrow_keys_edit_in_the_middle() {
    let mut app = App::default();
    press_keys(&mut app, "iBy milk");
    for _ in 0..6 {
        apply_event(&mut app, key(KeyCode::Left));
    }
    press_keys(&mut app, "u");
    apply_event(&mut app, key(KeyCode::End));
    press_keys(&mut app, "!\n");
    assert_eq!(visible_texts(&app), vec!["Buy milk!"]);
}

#[test]
fn multi_line_paste_becomes_one_task() {
    let mut app = App::default();
    press_keys(&mut app, "i");
    apply_event(&mut app, Event::Paste("pick up\r\nparcel".to_string()));
    press_keys(&mut app, "\n");
    assert_eq!(visible_texts(&app), vec!["pick up parcel"]);
}

#[test]
fn ctrl_c_quits_from_any_mode() {
    let mut app = App::default();
    press_keys(&mut app, "i");
    let quit = apply_event(
        &mut app,
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
    );
    assert!(quit);
    assert!(app.should_quit());
}

#[test]
fn escape_discards_nothing() {
    let mut app = App::default();
    press_keys(&mut app, "ihalf typed\x1b");
    assert_eq!(app.input_mode(), InputMode::Normal);
    assert_eq!(app.store().draft_text(), "half typed");

    press_keys(&mut app, "i\n");
    assert_eq!(visible_texts(&app), vec!["half typed"]);
}
