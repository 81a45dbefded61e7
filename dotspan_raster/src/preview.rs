// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Identifies a single preview render request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderToken(u64);

/// Hands out render tokens and remembers which request is newest.
///
/// Preview rendering is asynchronous at the host level: a settings change can
/// start a new render while an older one is still in flight. The tracker
/// enforces the ordering rule that only the newest request's output may be
/// applied; anything older is dropped on arrival.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewTracker {
    next: u64,
    outstanding: Option<u64>,
}

impl PreviewTracker {
    /// Returns a tracker with no outstanding render.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new render request, superseding all earlier ones.
    pub fn begin(&mut self) -> RenderToken {
        let id = self.next;
        self.next += 1;
        self.outstanding = Some(id);
        RenderToken(id)
    }

    /// Returns true while `token` is the newest request and its output, once
    /// ready, should be applied.
    #[must_use]
    pub fn is_current(&self, token: RenderToken) -> bool {
        self.outstanding == Some(token.0)
    }

    /// Returns true while some render request has not been applied yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.outstanding.is_some()
    }

    /// Reports that `token`'s render finished. Returns true when the output
    /// should be applied; stale and already-applied tokens return false and
    /// leave any newer request outstanding.
    pub fn finish(&mut self, token: RenderToken) -> bool {
        if self.is_current(token) {
            self.outstanding = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PreviewTracker;

    #[test]
    fn newest_token_wins() {
        let mut tracker = PreviewTracker::new();
        let a = tracker.begin();
        let b = tracker.begin();
        assert!(!tracker.is_current(a));
        assert!(tracker.is_current(b));
        assert!(!tracker.finish(a), "superseded renders are dropped");
        assert!(tracker.is_pending());
        assert!(tracker.finish(b));
        assert!(!tracker.is_pending());
    }

    #[test]
    fn outputs_apply_at_most_once() {
        let mut tracker = PreviewTracker::new();
        let a = tracker.begin();
        assert!(tracker.finish(a));
        assert!(!tracker.finish(a), "a finished render cannot reapply");
    }

    #[test]
    fn fresh_tracker_has_nothing_pending() {
        let tracker = PreviewTracker::new();
        assert!(!tracker.is_pending());
    }
}
