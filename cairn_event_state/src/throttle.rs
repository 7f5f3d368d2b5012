// Copyright 2026 the Cairn Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rate limiting: at most one admitted event per interval.

/// Admits at most one event per `limit` milliseconds.
///
/// Unlike [`Debouncer`](crate::Debouncer), a throttle lets the first event of
/// a burst through immediately and then suppresses followers for the
/// interval; use it where periodic progress matters more than settling
/// (e.g. updating a reading-progress indicator during a long scroll).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Throttle {
    limit: u64,
    open_at: u64,
}

impl Throttle {
    /// Creates a throttle admitting one event per `limit_ms`.
    #[must_use]
    pub const fn new(limit_ms: u64) -> Self {
        Self {
            limit: limit_ms,
            open_at: 0,
        }
    }

    /// Returns `true` if an event at `now` should be admitted, and starts the
    /// suppression interval when it is.
    pub fn allow(&mut self, now: u64) -> bool {
        if now >= self.open_at {
            self.open_at = now.saturating_add(self.limit);
            true
        } else {
            false
        }
    }

    /// Reopens the throttle immediately.
    pub const fn reset(&mut self) {
        self.open_at = 0;
    }
}
