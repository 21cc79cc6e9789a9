//! Core engine for Ticklist - task state and removal sequencing.
//!
//! This crate contains the [`App`] state machine without TUI dependencies.
//! Task state lives in [`TaskStore`]; the UI changes it only through
//! [`Intent`]s and the insert-mode guard.

mod app;
mod config;
mod intent;
mod removal;
mod rows;
mod store;

pub use app::{App, InsertMode, InsertModeAccess};
pub use config::{AppConfig, AppSettings, ConfigError, DEFAULT_FADE, TasksConfig, TicklistConfig};
pub use intent::Intent;
pub use removal::{RemovalFades, RemovalPhase};
pub use rows::RowDescriptor;
pub use store::{IdGenerator, SequentialIds, TaskCounts, TaskStore};

pub use ticklist_types::ui::{DraftInput, InputMode, UiOptions};
pub use ticklist_types::{Priority, PriorityFilter, PriorityParseError, Task, TaskId};
