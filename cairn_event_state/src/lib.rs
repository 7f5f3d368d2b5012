// Copyright 2026 the Cairn Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-agnostic event coalescing and dismissal state.
//!
//! Scroll and resize streams arrive in bursts; outside-press dismissal needs
//! to know where a press landed relative to an open surface. This crate
//! models both as small state machines fed caller-supplied `u64` millisecond
//! timestamps and hit information. There are no clocks and no timers: the
//! host records events as they happen and polls at whatever cadence it
//! already has (typically its frame callback).
//!
//! # Key types
//!
//! - [`Debouncer`] – collapse a burst of events into one firing after a
//!   quiet window (trailing edge), optionally firing on the leading edge
//!   instead.
//! - [`Throttle`] – admit at most one event per interval.
//! - [`PressZone`] / [`DismissTracker`] – classify a press against an open
//!   surface and decide whether it should dismiss.
//!
//! ## Debouncing a scroll burst
//!
//! ```rust
//! use cairn_event_state::{DebounceEdge, Debouncer};
//!
//! let mut debounce = Debouncer::new(10);
//!
//! // A burst of scroll events, 2ms apart: none fire on their own.
//! assert_eq!(debounce.record(100), None);
//! assert_eq!(debounce.record(102), None);
//! assert_eq!(debounce.record(104), None);
//!
//! // Polling inside the quiet window: still pending.
//! assert_eq!(debounce.poll(110), None);
//! // 10ms after the last event the debouncer fires exactly once.
//! assert_eq!(debounce.poll(114), Some(DebounceEdge::Trailing));
//! assert_eq!(debounce.poll(120), None);
//! ```

#![no_std]

mod debounce;
mod dismiss;
mod throttle;

pub use debounce::{DEFAULT_DEBOUNCE_MS, DebounceEdge, Debouncer};
pub use dismiss::{DismissTracker, PressZone, classify_press};
pub use throttle::Throttle;
