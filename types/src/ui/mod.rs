//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod fade;
mod input;
mod view_state;

pub use animation::AnimPhase;
pub use fade::FadeOut;
pub use input::{DraftInput, InputMode};
pub use view_state::UiOptions;
