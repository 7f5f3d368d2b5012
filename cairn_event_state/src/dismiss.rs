// Copyright 2026 the Cairn Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outside-press classification and dismissal.
//!
//! An expanded surface (dropdown, modal) usually closes when the user
//! presses anywhere else. The host knows *what* was pressed as a containment
//! chain from the pressed element up to the root; [`classify_press`] turns
//! that chain into a [`PressZone`], and [`DismissTracker`] holds the
//! armed/disarmed state across open/close cycles.

/// Where a press landed relative to an open surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressZone {
    /// The press landed on the surface or one of its descendants.
    Inside,
    /// The press landed on an element the surface chose to ignore (e.g. the
    /// toggle button that opened it, so open → press-toggle doesn't
    /// immediately reopen).
    Ignored,
    /// The press landed anywhere else.
    Outside,
}

/// Classifies a press against a surface.
///
/// `hit_path` is the containment chain for the press, from the pressed
/// element up to the root; `surface` is the open surface's key and `ignored`
/// an optional key whose subtree should neither dismiss nor count as inside.
///
/// `Ignored` wins over `Inside` so a toggle living inside the surface still
/// gets its special treatment.
#[must_use]
pub fn classify_press<K: PartialEq>(surface: &K, ignored: Option<&K>, hit_path: &[K]) -> PressZone {
    if let Some(ignored) = ignored
        && hit_path.contains(ignored)
    {
        return PressZone::Ignored;
    }
    if hit_path.contains(surface) {
        PressZone::Inside
    } else {
        PressZone::Outside
    }
}

/// Armed/disarmed dismissal state for one surface.
///
/// Arm it when the surface opens; feed it classified presses; a press in
/// [`PressZone::Outside`] while armed reports a dismissal and disarms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DismissTracker {
    armed: bool,
}

impl DismissTracker {
    /// Creates a disarmed tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self { armed: false }
    }

    /// Arms the tracker (the surface opened).
    pub const fn open(&mut self) {
        self.armed = true;
    }

    /// Disarms the tracker (the surface closed for any other reason).
    pub const fn close(&mut self) {
        self.armed = false;
    }

    /// Returns `true` while the surface is open and watching for presses.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    /// Feeds a classified press. Returns `true` if the surface should be
    /// dismissed (outside press while armed); the tracker disarms itself in
    /// that case.
    pub const fn on_press(&mut self, zone: PressZone) -> bool {
        match zone {
            PressZone::Outside if self.armed => {
                self.armed = false;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DismissTracker, PressZone, classify_press};

    #[test]
    fn classify_against_hit_path() {
        // Chain: pressed item -> dropdown -> page root.
        let path = ["item", "dropdown", "root"];
        assert_eq!(
            classify_press(&"dropdown", None, &path),
            PressZone::Inside
        );
        assert_eq!(classify_press(&"sidebar", None, &path), PressZone::Outside);
        // The toggle is ignored even though it also sits inside the surface.
        let toggle_path = ["toggle", "dropdown", "root"];
        assert_eq!(
            classify_press(&"dropdown", Some(&"toggle"), &toggle_path),
            PressZone::Ignored
        );
    }

    #[test]
    fn outside_press_dismisses_once_while_armed() {
        let mut tracker = DismissTracker::new();
        // Not armed: outside presses are inert.
        assert!(!tracker.on_press(PressZone::Outside));

        tracker.open();
        assert!(!tracker.on_press(PressZone::Inside));
        assert!(!tracker.on_press(PressZone::Ignored));
        assert!(tracker.is_armed());
        assert!(tracker.on_press(PressZone::Outside));
        // Dismissal disarmed it.
        assert!(!tracker.on_press(PressZone::Outside));
    }
}
