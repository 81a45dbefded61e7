// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How long edits must settle before the profile is persisted, in
/// milliseconds.
pub const SAVE_DEBOUNCE_MS: u64 = 600;

/// Clock-driven debounce for profile persistence.
///
/// Rapid edits (typing a name, dragging the expectancy slider) should not
/// write storage on every keystroke. The debouncer owns no clock and spawns
/// nothing; the host reports edits with [`note_change`](Self::note_change),
/// polls [`due`](Self::due) from its own tick or timer, and acknowledges a
/// completed write with [`flushed`](Self::flushed). Timestamps are
/// milliseconds on any monotonic scale.
#[derive(Clone, Debug)]
pub struct SaveDebouncer {
    delay_ms: u64,
    dirty_since: Option<u64>,
}

impl SaveDebouncer {
    /// Creates a debouncer with the default settle window of
    /// [`SAVE_DEBOUNCE_MS`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(SAVE_DEBOUNCE_MS)
    }

    /// Creates a debouncer with a custom settle window.
    #[must_use]
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            dirty_since: None,
        }
    }

    /// Records an edit at `now_ms`, restarting the settle window.
    pub fn note_change(&mut self, now_ms: u64) {
        self.dirty_since = Some(now_ms);
    }

    /// Returns whether a save should run at `now_ms`.
    ///
    /// True once the latest edit is at least the settle window old, and stays
    /// true until [`flushed`](Self::flushed) acknowledges the save.
    #[must_use]
    pub fn due(&self, now_ms: u64) -> bool {
        self.dirty_since
            .is_some_and(|at| now_ms.saturating_sub(at) >= self.delay_ms)
    }

    /// Returns whether any edit awaits persistence.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty_since.is_some()
    }

    /// Acknowledges a save that completed at `now_ms`.
    ///
    /// Edits newer than the settle window stay dirty, so a change made while
    /// the save ran is picked up by a later poll instead of being lost.
    pub fn flushed(&mut self, now_ms: u64) {
        if self.due(now_ms) {
            self.dirty_since = None;
        }
    }
}

impl Default for SaveDebouncer {
    fn default() -> Self {
        Self::new()
    }
}
