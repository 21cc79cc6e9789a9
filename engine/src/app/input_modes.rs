//! Insert-mode guard for draft editing.
//!
//! Every edit goes through the guard, which pushes the resulting text into
//! the store as a draft-text update.

use ticklist_types::sanitize_task_text;
use ticklist_types::ui::{DraftInput, InputMode};

use super::App;
use crate::intent::Intent;

pub struct InsertMode<'a> {
    pub(crate) app: &'a mut App,
}

pub enum InsertModeAccess<'a> {
    InInsert(InsertMode<'a>),
    NotInsert,
}

impl App {
    /// Borrow-scoped access to Insert-mode operations.
    ///
    /// The returned guard holds `&mut App`, so the input mode cannot be
    /// changed while the guard exists.
    pub fn insert_mode_mut(&mut self) -> InsertModeAccess<'_> {
        match self.mode {
            InputMode::Insert => InsertModeAccess::InInsert(InsertMode { app: self }),
            InputMode::Normal => InsertModeAccess::NotInsert,
        }
    }
}

impl InsertMode<'_> {
    fn edit(&mut self, f: impl FnOnce(&mut DraftInput)) {
        f(&mut self.app.draft);
        self.app.commit_draft_edit();
    }

    pub fn move_cursor_left(&mut self) {
        self.app.draft.move_cursor_left();
    }

    pub fn move_cursor_right(&mut self) {
        self.app.draft.move_cursor_right();
    }

    pub fn move_cursor_start(&mut self) {
        self.app.draft.move_cursor_start();
    }

    pub fn move_cursor_end(&mut self) {
        self.app.draft.move_cursor_end();
    }

    pub fn enter_char(&mut self, new_char: char) {
        self.edit(|draft| draft.enter_char(new_char));
    }

    /// Insert pasted text. Line breaks become single spaces and escape
    /// sequences are dropped before the draft sees them.
    pub fn enter_text(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n");
        let text = sanitize_task_text(&text);
        self.edit(|draft| draft.enter_text(&text));
    }

    pub fn delete_char(&mut self) {
        self.edit(DraftInput::delete_char);
    }

    pub fn delete_char_forward(&mut self) {
        self.edit(DraftInput::delete_char_forward);
    }

    pub fn delete_word_backwards(&mut self) {
        self.edit(DraftInput::delete_word_backwards);
    }

    pub fn clear_line(&mut self) {
        self.edit(DraftInput::clear);
    }

    pub fn cycle_priority(&mut self) {
        self.app.cycle_draft_priority();
    }

    /// Submit the draft. An empty draft is left as-is and nothing is added.
    pub fn submit(&mut self) {
        self.app.dispatch(Intent::AddTask);
    }
}
