//! Application state machine for Ticklist.
//!
//! The [`App`] owns the [`TaskStore`], the removal fade arena, the draft
//! editor and list selection. The TUI layer (`ticklist_tui`) reads snapshots
//! from `App` and forwards user input back as [`Intent`]s or mode-guarded edits.
//! No rendering logic lives in this crate.
//!
//! # Frame model
//!
//! Everything runs on one loop. Each frame the caller drains input (which
//! dispatches intents synchronously), then calls [`App::tick`], which advances
//! in-flight fades and performs the removals whose fades finished.

mod input_modes;

pub use input_modes::{InsertMode, InsertModeAccess};

use std::time::{Duration, Instant};

use tracing::{debug, info};

use ticklist_types::ui::{DraftInput, InputMode, UiOptions};
use ticklist_types::{Priority, PriorityFilter, TaskId, cycle_filter};

use crate::config::AppSettings;
use crate::intent::Intent;
use crate::removal::{RemovalFades, RemovalPhase};
use crate::rows::RowDescriptor;
use crate::store::{TaskCounts, TaskStore};

/// Cursor over the visible rows. Follows the task id when the list changes.
#[derive(Debug, Clone, Copy, Default)]
struct Selection {
    id: Option<TaskId>,
    index: usize,
}

#[derive(Debug)]
pub struct App {
    store: TaskStore,
    fades: RemovalFades,
    /// Editable mirror of the store's draft text, with a cursor.
    draft: DraftInput,
    mode: InputMode,
    selection: Selection,
    settings: AppSettings,
    should_quit: bool,
    /// Timestamp of last frame (for animation timing).
    last_frame: Instant,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppSettings::default())
    }
}

impl App {
    #[must_use]
    pub fn new(settings: AppSettings) -> Self {
        Self::with_store(TaskStore::new(), settings)
    }

    /// Build around an existing store (e.g. one with a custom id generator).
    #[must_use]
    pub fn with_store(mut store: TaskStore, settings: AppSettings) -> Self {
        store.set_draft_priority(settings.default_priority);
        info!(
            fade_ms = settings.effective_fade().as_millis(),
            default_priority = %settings.default_priority,
            "Ticklist state initialized"
        );
        let mut draft = DraftInput::default();
        draft.set_text(store.draft_text().to_string());
        Self {
            store,
            fades: RemovalFades::new(settings.effective_fade()),
            draft,
            mode: InputMode::Normal,
            selection: Selection::default(),
            settings,
            should_quit: false,
            last_frame: Instant::now(),
        }
    }

    // ------------------------------------------------------------------
    // Intents
    // ------------------------------------------------------------------

    /// Apply one user intent. Runs to completion before returning.
    pub fn dispatch(&mut self, intent: Intent) {
        debug!(?intent, "dispatch");
        match intent {
            Intent::SetDraftText(text) => {
                self.store.set_draft_text(text);
                self.sync_draft_from_store();
            }
            Intent::AddTask => {
                if let Some(id) = self.store.add_task() {
                    self.sync_draft_from_store();
                    // Keep the new task under the cursor if it is visible.
                    self.selection.id = Some(id);
                }
            }
            Intent::SetDraftPriority(priority) => self.store.set_draft_priority(priority),
            Intent::SetFilter(filter) => self.store.set_filter(filter),
            Intent::ToggleComplete(id) => {
                self.store.toggle_complete(id);
            }
            Intent::BeginRemoval(id) => {
                if self.store.contains(id) {
                    self.fades.begin(id);
                }
            }
        }
        self.reconcile_selection();
    }

    // ------------------------------------------------------------------
    // Frame timing
    // ------------------------------------------------------------------

    /// Advance animations by wall-clock time since the previous frame.
    pub fn tick(&mut self) -> Vec<TaskId> {
        let elapsed = self.frame_elapsed();
        self.advance(elapsed)
    }

    /// Advance every in-flight fade by `delta` and remove the tasks whose
    /// fade finished. Returns the removed ids in fade start order.
    pub fn advance(&mut self, delta: Duration) -> Vec<TaskId> {
        if self.fades.is_empty() {
            return Vec::new();
        }
        let finished = self.fades.advance(delta);
        for id in &finished {
            // Unconditional on the completed flag; absent ids are a no-op.
            self.store.remove_task(*id);
        }
        if !finished.is_empty() {
            self.reconcile_selection();
        }
        finished
    }

    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.fades.is_empty()
    }

    // ------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------

    #[must_use]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Visible rows with priority, completion and current opacity.
    #[must_use]
    pub fn rows(&self) -> Vec<RowDescriptor> {
        self.store
            .visible_tasks()
            .into_iter()
            .map(|task| {
                let selected = self.selection.id == Some(task.id());
                RowDescriptor::from_task(task, &self.fades, selected)
            })
            .collect()
    }

    #[must_use]
    pub fn removal_phase(&self, id: TaskId) -> RemovalPhase {
        self.fades.phase(id)
    }

    #[must_use]
    pub fn draft(&self) -> &DraftInput {
        &self.draft
    }

    #[must_use]
    pub fn draft_priority(&self) -> Priority {
        self.store.draft_priority()
    }

    #[must_use]
    pub fn filter(&self) -> PriorityFilter {
        self.store.filter()
    }

    #[must_use]
    pub fn counts(&self) -> TaskCounts {
        self.store.counts()
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.settings.ui_options
    }

    #[must_use]
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    #[must_use]
    pub fn selected_id(&self) -> Option<TaskId> {
        self.selection.id
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.id.map(|_| self.selection.index)
    }

    pub fn select_next(&mut self) {
        self.move_selection(|index, len| (index + 1).min(len - 1));
    }

    pub fn select_prev(&mut self) {
        self.move_selection(|index, _| index.saturating_sub(1));
    }

    pub fn select_first(&mut self) {
        self.move_selection(|_, _| 0);
    }

    pub fn select_last(&mut self) {
        self.move_selection(|_, len| len - 1);
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selection.id {
            self.dispatch(Intent::ToggleComplete(id));
        }
    }

    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selection.id {
            self.dispatch(Intent::BeginRemoval(id));
        }
    }

    pub fn cycle_filter(&mut self) {
        self.dispatch(Intent::SetFilter(cycle_filter(self.store.filter())));
    }

    pub fn cycle_draft_priority(&mut self) {
        self.dispatch(Intent::SetDraftPriority(self.store.draft_priority().next()));
    }

    /// `step` receives the current index and a non-zero row count.
    fn move_selection(&mut self, step: impl FnOnce(usize, usize) -> usize) {
        let visible: Vec<TaskId> = self.store.visible_tasks().iter().map(|t| t.id()).collect();
        if visible.is_empty() {
            self.selection = Selection::default();
            return;
        }
        let current = if self.selection.id.is_some() {
            self.selection.index
        } else {
            0
        };
        let index = step(current.min(visible.len() - 1), visible.len());
        self.selection = Selection {
            id: Some(visible[index]),
            index,
        };
    }

    fn reconcile_selection(&mut self) {
        let visible: Vec<TaskId> = self.store.visible_tasks().iter().map(|t| t.id()).collect();
        if visible.is_empty() {
            self.selection = Selection::default();
            return;
        }
        if let Some(index) = self
            .selection
            .id
            .and_then(|id| visible.iter().position(|v| *v == id))
        {
            self.selection.index = index;
            return;
        }
        let index = self.selection.index.min(visible.len() - 1);
        self.selection = Selection {
            id: Some(visible[index]),
            index,
        };
    }

    // ------------------------------------------------------------------
    // Input modes
    // ------------------------------------------------------------------

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.mode
    }

    pub fn enter_insert_mode(&mut self) {
        self.draft.move_cursor_end();
        self.mode = InputMode::Insert;
    }

    pub fn enter_normal_mode(&mut self) {
        self.mode = InputMode::Normal;
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Push the edited draft into the store.
    fn commit_draft_edit(&mut self) {
        self.store.set_draft_text(self.draft.text());
    }

    fn sync_draft_from_store(&mut self) {
        if self.draft.text() != self.store.draft_text() {
            self.draft.set_text(self.store.draft_text().to_string());
        }
    }
}
