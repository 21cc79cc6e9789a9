//! Row descriptors: what the renderer needs to draw one task.

use ticklist_types::{Priority, Task, TaskId};

use crate::removal::RemovalFades;

#[derive(Debug, Clone, PartialEq)]
pub struct RowDescriptor {
    pub id: TaskId,
    pub text: String,
    pub priority: Priority,
    pub completed: bool,
    /// Render alpha in `[0.0, 1.0]`.
    pub opacity: f32,
    pub fading: bool,
    pub selected: bool,
}

impl RowDescriptor {
    pub(crate) fn from_task(task: &Task, fades: &RemovalFades, selected: bool) -> Self {
        Self {
            id: task.id(),
            text: task.text().to_string(),
            priority: task.priority(),
            completed: task.completed(),
            opacity: fades.opacity(task.id()),
            fading: fades.is_fading(task.id()),
            selected,
        }
    }
}
