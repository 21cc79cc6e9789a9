//! User intents: the only way the UI changes task state.

use ticklist_types::{Priority, PriorityFilter, TaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SetDraftText(String),
    AddTask,
    SetDraftPriority(Priority),
    SetFilter(PriorityFilter),
    ToggleComplete(TaskId),
    /// Start the fade-out; the task is removed once the fade finishes.
    BeginRemoval(TaskId),
}
