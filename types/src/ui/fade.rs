//! Fade-out effect for rows leaving the list.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

/// Linear opacity ramp from 1.0 down to 0.0.
#[derive(Debug, Clone)]
pub struct FadeOut {
    timer: EffectTimer,
}

impl FadeOut {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    /// Current render alpha. Never increases as the effect advances.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        1.0 - self.timer.progress()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}
