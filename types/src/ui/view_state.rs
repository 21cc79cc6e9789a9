//! Display options shared by the engine and the renderer.

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Removals skip the fade and complete on the next frame.
    pub reduced_motion: bool,
}
