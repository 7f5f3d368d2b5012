// Copyright 2026 the Cairn Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eased scroll animation toward a target offset.
//!
//! [`ScrollAnimation`] is a pure description of an in-flight scroll: sample
//! it with elapsed milliseconds and apply the returned offset however your
//! host scrolls. There are no timers here; the host decides the tick cadence
//! (typically its frame callback) and when to stop sampling.
//!
//! ```rust
//! use cairn_viewport::ScrollAnimation;
//!
//! // Animate from offset 0 to 1000 over 500ms.
//! let anim = ScrollAnimation::new(0.0, 1000.0, 500);
//!
//! assert_eq!(anim.sample(0), 0.0);
//! assert_eq!(anim.sample(250), 500.0); // ease-in-out is symmetric
//! assert_eq!(anim.sample(500), 1000.0);
//! assert!(anim.is_finished(500));
//! ```

/// Default duration for scroll animations, in milliseconds.
pub const DEFAULT_SCROLL_DURATION_MS: u64 = 500;

/// Quadratic ease-in-out over normalized progress `t` in `0..=1`.
///
/// Accelerates through the first half and decelerates through the second.
/// Inputs outside `0..=1` are clamped.
#[must_use]
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = 1.0 - t;
        1.0 - 2.0 * u * u
    }
}

/// Cubic ease-out over normalized progress `t` in `0..=1`.
///
/// Decelerates toward the end: `1 - (1 - t)^3`. Inputs outside `0..=1` are
/// clamped.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    1.0 - u * u * u
}

/// A pure, time-sampled scroll animation between two offsets.
///
/// The animation is immutable once constructed; completion is a function of
/// the elapsed time the caller passes in, so repeated sampling at the same
/// instant is free of side effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    start: f64,
    target: f64,
    duration_ms: u64,
}

impl ScrollAnimation {
    /// Creates an animation from `start` to `target` over `duration_ms`.
    ///
    /// A zero duration snaps: every sample returns `target`.
    #[must_use]
    pub const fn new(start: f64, target: f64, duration_ms: u64) -> Self {
        Self {
            start,
            target,
            duration_ms,
        }
    }

    /// Creates an animation with [`DEFAULT_SCROLL_DURATION_MS`].
    #[must_use]
    pub const fn with_default_duration(start: f64, target: f64) -> Self {
        Self::new(start, target, DEFAULT_SCROLL_DURATION_MS)
    }

    /// The destination offset.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.target
    }

    /// The offset at `elapsed_ms` since the animation started.
    ///
    /// Clamps to the target at or past the duration. A non-finite
    /// intermediate value (degenerate start/target inputs) also snaps to the
    /// target rather than propagating.
    #[must_use]
    pub fn sample(&self, elapsed_ms: u64) -> f64 {
        if elapsed_ms >= self.duration_ms {
            return self.target;
        }
        #[allow(
            clippy::cast_precision_loss,
            reason = "Durations are far below the 2^52 precision horizon"
        )]
        let t = elapsed_ms as f64 / self.duration_ms as f64;
        let value = self.start + (self.target - self.start) * ease_in_out_quad(t);
        if value.is_finite() { value } else { self.target }
    }

    /// Returns `true` once `elapsed_ms` has reached the duration.
    #[must_use]
    pub const fn is_finished(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::{ScrollAnimation, ease_in_out_quad, ease_out_cubic};

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        // Slow start, fast middle.
        assert!(ease_in_out_quad(0.25) < 0.25);
        assert!(ease_in_out_quad(0.75) > 0.75);

        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // Fast start.
        assert!(ease_out_cubic(0.25) > 0.25);
    }

    #[test]
    fn easing_clamps_out_of_range_progress() {
        assert_eq!(ease_in_out_quad(-1.0), 0.0);
        assert_eq!(ease_in_out_quad(2.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn sample_reaches_target_exactly_at_duration() {
        let anim = ScrollAnimation::new(100.0, 700.0, 400);
        assert_eq!(anim.sample(0), 100.0);
        assert_eq!(anim.sample(200), 400.0);
        assert_eq!(anim.sample(400), 700.0);
        // Past the end stays pinned.
        assert_eq!(anim.sample(10_000), 700.0);
        assert!(!anim.is_finished(399));
        assert!(anim.is_finished(400));
    }

    #[test]
    fn zero_duration_snaps_to_target() {
        let anim = ScrollAnimation::new(0.0, 250.0, 0);
        assert_eq!(anim.sample(0), 250.0);
        assert!(anim.is_finished(0));
    }

    #[test]
    fn non_finite_samples_snap_to_target() {
        let anim = ScrollAnimation::new(f64::MAX, -f64::MAX, 100);
        // The interpolation overflows; the sample must still be usable.
        assert_eq!(anim.sample(50), -f64::MAX);
    }

    #[test]
    fn downward_and_upward_scrolls_are_symmetric() {
        let down = ScrollAnimation::new(0.0, 1000.0, 500);
        let up = ScrollAnimation::new(1000.0, 0.0, 500);
        for elapsed in [0_u64, 125, 250, 375, 500] {
            let a = down.sample(elapsed);
            let b = up.sample(elapsed);
            assert!((a + b - 1000.0).abs() < 1e-9, "asymmetric at {elapsed}ms");
        }
    }
}
