//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::path::PathBuf;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

use ticklist_engine::{App, Intent, Priority, TaskId};
use ticklist_tui::apply_event;

/// Add a task through intents and return its id.
pub fn add_task(app: &mut App, text: &str, priority: Priority) -> TaskId {
    app.dispatch(Intent::SetDraftText(text.to_string()));
    app.dispatch(Intent::SetDraftPriority(priority));
    app.dispatch(Intent::AddTask);
    app.store()
        .tasks()
        .last()
        .map(|task| task.id())
        .expect("task was added")
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Feed a sequence of plain keys. `\n` becomes Enter and `\x1b` becomes Esc.
pub fn press_keys(app: &mut App, keys: &str) {
    for c in keys.chars() {
        let code = match c {
            '\n' => KeyCode::Enter,
            '\x1b' => KeyCode::Esc,
            '\t' => KeyCode::Tab,
            other => KeyCode::Char(other),
        };
        apply_event(app, key(code));
    }
}

/// Visible task texts in display order.
pub fn visible_texts(app: &App) -> Vec<String> {
    app.rows().into_iter().map(|row| row.text).collect()
}

/// Write `contents` to a fresh `config.toml` in a temp dir.
pub fn config_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).expect("write config");
    (dir, path)
}
