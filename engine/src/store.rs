//! Authoritative task list plus draft and filter selection.
//!
//! Every operation is total: empty drafts and unknown ids are silent no-ops.

use tracing::debug;

use ticklist_types::{
    Priority, PriorityFilter, Task, TaskId, TaskText, filter_matches, sanitize_task_text,
};

/// Source of fresh task ids.
pub trait IdGenerator {
    /// Must never return the same id twice for the lifetime of the generator.
    fn next_id(&mut self) -> TaskId;
}

/// Monotonic counter starting at 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next);
        self.next = self
            .next
            .checked_add(1)
            .expect("task id space exhausted");
        id
    }
}

/// Summary counts for the status bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl TaskCounts {
    #[must_use]
    pub fn for_priority(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}

pub struct TaskStore {
    tasks: Vec<Task>,
    draft_text: String,
    draft_priority: Priority,
    filter: PriorityFilter,
    ids: Box<dyn IdGenerator + Send>,
    revision: u64,
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("draft_text", &self.draft_text)
            .field("draft_priority", &self.draft_priority)
            .field("filter", &self.filter)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_id_generator(SequentialIds::new())
    }

    #[must_use]
    pub fn with_id_generator(ids: impl IdGenerator + Send + 'static) -> Self {
        Self {
            tasks: Vec::new(),
            draft_text: String::new(),
            draft_priority: Priority::default(),
            filter: None,
            ids: Box::new(ids),
            revision: 0,
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.task(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    #[must_use]
    pub fn draft_priority(&self) -> Priority {
        self.draft_priority
    }

    #[must_use]
    pub fn filter(&self) -> PriorityFilter {
        self.filter
    }

    /// Bumped on every effective state change; no-ops leave it alone.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Tasks passing the active filter, in insertion order.
    ///
    /// Recomputed on every call.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| filter_matches(self.filter, task.priority()))
            .collect()
    }

    #[must_use]
    pub fn counts(&self) -> TaskCounts {
        self.tasks
            .iter()
            .fold(TaskCounts::default(), |mut counts, task| {
                counts.total += 1;
                if task.completed() {
                    counts.completed += 1;
                }
                match task.priority() {
                    Priority::High => counts.high += 1,
                    Priority::Medium => counts.medium += 1,
                    Priority::Low => counts.low += 1,
                }
                counts
            })
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.draft_text {
            self.draft_text = text;
            self.bump();
        }
    }

    pub fn set_draft_priority(&mut self, priority: Priority) {
        if priority != self.draft_priority {
            self.draft_priority = priority;
            self.bump();
        }
    }

    pub fn set_filter(&mut self, filter: PriorityFilter) {
        if filter != self.filter {
            self.filter = filter;
            self.bump();
        }
    }

    /// Commit the draft as a new task.
    ///
    /// Returns `None` without generating an id when the trimmed draft is empty.
    pub fn add_task(&mut self) -> Option<TaskId> {
        let sanitized = sanitize_task_text(&self.draft_text);
        let Ok(text) = TaskText::new(sanitized) else {
            return None;
        };

        let id = self.ids.next_id();
        debug_assert!(!self.contains(id), "id generator reused {id}");
        let task = Task::new(id, text, self.draft_priority);
        debug!(%id, priority = %task.priority(), "task added");
        self.tasks.push(task);
        self.draft_text.clear();
        self.bump();
        Some(id)
    }

    /// Flip completion on the task with `id`. Returns `false` if no such task.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        let Some(slot) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            return false;
        };
        *slot = slot.toggled();
        debug!(%id, completed = slot.completed(), "task toggled");
        self.bump();
        true
    }

    /// Remove the task with `id` if present. Idempotent.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id() == id)?;
        let removed = self.tasks.remove(index);
        debug!(%id, "task removed");
        self.bump();
        Some(removed)
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
