//! Generated marketing copy and its per-mount lifecycle.
//!
//! Copy generation is asynchronous and a shopper can switch themes while a
//! request is in flight. [`CopySlot`] guards against the stale result: each
//! mount bumps a generation counter, and a result carrying an old
//! generation's token is dropped instead of overwriting newer state.

use serde::{Deserialize, Serialize};

/// AI-generated headline and body for a brand layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCopy {
    pub headline: String,
    pub body: String,
}

/// Token identifying one generation attempt, issued by [`CopySlot::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyToken(u64);

/// Lifecycle of the copy shown by the current layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CopyPhase {
    /// No result yet; the layout shows its placeholder copy.
    #[default]
    Loading,
    /// Copy arrived and is being displayed.
    Ready(GeneratedCopy),
}

/// Holder for the copy belonging to the currently mounted layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CopySlot {
    generation: u64,
    phase: CopyPhase,
}

impl CopySlot {
    /// Start a new generation attempt, invalidating any in-flight one.
    ///
    /// Called once per layout mount. The returned token must accompany the
    /// eventual [`resolve`](Self::resolve).
    pub fn begin(&mut self) -> CopyToken {
        self.generation += 1;
        self.phase = CopyPhase::Loading;
        CopyToken(self.generation)
    }

    /// Apply a finished generation attempt.
    ///
    /// Returns `true` if the token was current and the copy was stored, or
    /// `false` if a newer mount superseded the attempt and the result was
    /// dropped.
    pub fn resolve(&mut self, token: CopyToken, copy: GeneratedCopy) -> bool {
        if token == CopyToken(self.generation) {
            self.phase = CopyPhase::Ready(copy);
            true
        } else {
            false
        }
    }

    /// Discard any in-flight attempt without starting a new one.
    ///
    /// Used on unmount, when no layout is waiting for the result.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.phase = CopyPhase::Loading;
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> &CopyPhase {
        &self.phase
    }

    /// The copy to display, if ready.
    #[must_use]
    pub fn ready(&self) -> Option<&GeneratedCopy> {
        match &self.phase {
            CopyPhase::Ready(copy) => Some(copy),
            CopyPhase::Loading => None,
        }
    }
}
