// Copyright 2026 the Cairn Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Burst coalescing with a quiet window.

/// Default quiet window for scroll/resize debouncing, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 10;

/// Which edge of a burst a debouncer fired on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebounceEdge {
    /// Fired on the first event of a burst (leading-edge mode).
    Leading,
    /// Fired after the quiet window elapsed (trailing-edge mode).
    Trailing,
}

/// Collapses a burst of events into a single firing.
///
/// In the default trailing mode, every [`record`](Self::record) resets a
/// deadline `wait` milliseconds out; [`poll`](Self::poll) fires once when the
/// deadline passes with no further events. In leading mode the firing happens
/// on the first event of a burst instead, and the deadline only defines when
/// the burst is considered over.
///
/// A later event always supersedes a pending deadline; that reset is the only
/// cancellation this type needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    wait: u64,
    leading: bool,
    deadline: Option<u64>,
}

impl Debouncer {
    /// Creates a trailing-edge debouncer with the given quiet window.
    #[must_use]
    pub const fn new(wait_ms: u64) -> Self {
        Self {
            wait: wait_ms,
            leading: false,
            deadline: None,
        }
    }

    /// Creates a leading-edge debouncer: the first event of a burst fires,
    /// the rest of the burst is swallowed.
    #[must_use]
    pub const fn leading(wait_ms: u64) -> Self {
        Self {
            wait: wait_ms,
            leading: true,
            deadline: None,
        }
    }

    /// Records an event at `now`.
    ///
    /// Returns [`DebounceEdge::Leading`] if this debouncer is in leading mode
    /// and no burst was in progress; otherwise arms (or re-arms) the deadline
    /// and returns `None`.
    pub fn record(&mut self, now: u64) -> Option<DebounceEdge> {
        let fire = self.leading && self.deadline.is_none();
        self.deadline = Some(now.saturating_add(self.wait));
        if fire { Some(DebounceEdge::Leading) } else { None }
    }

    /// Polls at `now`.
    ///
    /// In trailing mode, returns [`DebounceEdge::Trailing`] exactly once when
    /// the quiet window has elapsed. In leading mode the elapsed window only
    /// closes the burst (so the next [`record`](Self::record) fires again).
    pub fn poll(&mut self, now: u64) -> Option<DebounceEdge> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                if self.leading {
                    None
                } else {
                    Some(DebounceEdge::Trailing)
                }
            }
            _ => None,
        }
    }

    /// Returns `true` while a burst is in progress (deadline armed).
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drops any pending deadline without firing.
    pub const fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::{DebounceEdge, Debouncer};

    #[test]
    fn burst_collapses_to_one_trailing_fire() {
        let mut d = Debouncer::new(10);
        let mut fired = 0;
        // Twenty events 1ms apart, polling after each.
        for now in 0..20_u64 {
            d.record(now);
            if d.poll(now).is_some() {
                fired += 1;
            }
        }
        assert_eq!(fired, 0, "no fire while the burst is still running");
        // Quiet window elapses after the last event at t=19.
        assert_eq!(d.poll(28), None);
        assert_eq!(d.poll(29), Some(DebounceEdge::Trailing));
        assert_eq!(d.poll(30), None, "fires exactly once");
    }

    #[test]
    fn separate_bursts_fire_separately() {
        let mut d = Debouncer::new(10);
        d.record(0);
        assert_eq!(d.poll(10), Some(DebounceEdge::Trailing));
        d.record(100);
        assert_eq!(d.poll(110), Some(DebounceEdge::Trailing));
    }

    #[test]
    fn leading_mode_fires_first_event_only() {
        let mut d = Debouncer::leading(10);
        assert_eq!(d.record(0), Some(DebounceEdge::Leading));
        assert_eq!(d.record(2), None);
        assert_eq!(d.record(4), None);
        // The elapsed window closes the burst silently…
        assert_eq!(d.poll(14), None);
        // …so the next event is a fresh leading edge.
        assert_eq!(d.record(20), Some(DebounceEdge::Leading));
    }

    #[test]
    fn cancel_drops_pending_deadline() {
        let mut d = Debouncer::new(10);
        d.record(0);
        assert!(d.is_pending());
        d.cancel();
        assert!(!d.is_pending());
        assert_eq!(d.poll(100), None);
    }

    #[test]
    fn record_resets_the_deadline() {
        let mut d = Debouncer::new(10);
        d.record(0);
        d.record(9);
        // Original deadline (t=10) must not fire; the reset one (t=19) does.
        assert_eq!(d.poll(10), None);
        assert_eq!(d.poll(19), Some(DebounceEdge::Trailing));
    }
}
