//! The task record.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Priority, TaskId};

/// Display text of a task: trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskText(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("task text must not be empty")]
pub struct EmptyTaskText;

impl TaskText {
    /// Trim surrounding whitespace and reject what is left if empty.
    pub fn new(value: impl AsRef<str>) -> Result<Self, EmptyTaskText> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            Err(EmptyTaskText)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskText {
    type Error = EmptyTaskText;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskText> for String {
    fn from(value: TaskText) -> Self {
        value.0
    }
}

impl std::ops::Deref for TaskText {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for TaskText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// One to-do item.
///
/// Identity, text and priority are fixed at creation. The only mutation is
/// [`Task::toggled`], which produces a replacement record with `completed`
/// flipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    text: TaskText,
    completed: bool,
    priority: Priority,
}

impl Task {
    #[must_use]
    pub fn new(id: TaskId, text: TaskText, priority: Priority) -> Self {
        Self {
            id,
            text,
            completed: false,
            priority,
        }
    }

    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}
