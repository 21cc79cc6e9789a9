//! In-flight removal fades, one independent progress value per task.
//!
//! A removal moves through `Idle -> FadingOut -> Removed`. Only a finished fade
//! produces a removal, and a started fade can neither be restarted nor
//! cancelled.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use ticklist_types::TaskId;
use ticklist_types::ui::FadeOut;

/// Where a row stands in its removal sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemovalPhase {
    Idle,
    FadingOut { opacity: f32 },
}

#[derive(Debug, Clone)]
pub struct RemovalFades {
    duration: Duration,
    fades: HashMap<TaskId, FadeOut>,
    /// Start order, so completions are reported first-started first.
    order: Vec<TaskId>,
}

impl RemovalFades {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            fades: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Begin fading `id`. Returns `false` if it is already fading.
    pub fn begin(&mut self, id: TaskId) -> bool {
        if self.fades.contains_key(&id) {
            return false;
        }
        debug!(%id, duration_ms = self.duration.as_millis(), "fade-out started");
        self.fades.insert(id, FadeOut::new(self.duration));
        self.order.push(id);
        true
    }

    #[must_use]
    pub fn phase(&self, id: TaskId) -> RemovalPhase {
        match self.fades.get(&id) {
            Some(fade) => RemovalPhase::FadingOut {
                opacity: fade.opacity(),
            },
            None => RemovalPhase::Idle,
        }
    }

    /// Render alpha for `id`: 1.0 unless it is fading.
    #[must_use]
    pub fn opacity(&self, id: TaskId) -> f32 {
        self.fades.get(&id).map_or(1.0, FadeOut::opacity)
    }

    #[must_use]
    pub fn is_fading(&self, id: TaskId) -> bool {
        self.fades.contains_key(&id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fades.is_empty()
    }

    /// Advance every fade by `delta` and drain the ones that finished.
    ///
    /// Each returned id is returned exactly once, in start order.
    pub fn advance(&mut self, delta: Duration) -> Vec<TaskId> {
        for fade in self.fades.values_mut() {
            fade.advance(delta);
        }

        let mut finished = Vec::new();
        let fades = &mut self.fades;
        self.order.retain(|id| {
            let done = fades.get(id).is_none_or(FadeOut::is_finished);
            if done {
                fades.remove(id);
                finished.push(*id);
            }
            !done
        });
        finished
    }
}
