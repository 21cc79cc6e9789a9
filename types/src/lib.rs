//! Core domain types for Ticklist.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod ids;
mod priority;
mod sanitize;
mod task;
pub mod ui;

pub use ids::TaskId;
pub use priority::{Priority, PriorityFilter, PriorityParseError, cycle_filter, filter_matches};
pub use sanitize::sanitize_task_text;
pub use task::{EmptyTaskText, Task, TaskText};
