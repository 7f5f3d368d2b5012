// Copyright 2026 the Cairn Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypoint registry: scroll-position-driven active-region tracking.
//!
//! A *waypoint* is an observed page region that becomes *active* when it
//! scrolls to the top of the viewport; a page has at most one active waypoint
//! at a time, and it drives things like "which nav item is highlighted".
//! This crate owns the bookkeeping:
//!
//! - [`Waypoint`] – a handle for one observed region, identified by a small
//!   copyable key `K` chosen by the host.
//! - [`WaypointRegistry`] – an explicitly constructed registry of waypoints
//!   with a single active pointer. [`select`](WaypointRegistry::select) is
//!   the pure query; [`evaluate`](WaypointRegistry::evaluate) additionally
//!   emits [`WaypointEvent`]s into a handler closure when the active
//!   waypoint changes.
//! - [`RegionSource`] – how keys resolve to document-space regions at
//!   evaluation time. A key that no longer resolves is treated as detached
//!   and never qualifies; there is no error path for it.
//!
//! Selection rule: among attached waypoints whose region has reached the
//! activation line (top of the viewport, pushed down by `offset` for fixed
//! chrome), the one with the **largest** document top wins — the section the
//! user most recently scrolled past. On an exact tie the latest-registered
//! waypoint wins, so registration order should follow document order.
//!
//! ## Minimal example
//!
//! ```rust
//! use cairn_viewport::Viewport;
//! use cairn_waypoint::{RegionSource, Waypoint, WaypointEvent, WaypointRegistry};
//! use hashbrown::HashMap;
//! use kurbo::Rect;
//!
//! // Three sections stacked down the document.
//! let mut regions: HashMap<u32, Rect> = HashMap::new();
//! regions.insert(1, Rect::new(0.0, 0.0, 800.0, 400.0));
//! regions.insert(2, Rect::new(0.0, 400.0, 800.0, 800.0));
//! regions.insert(3, Rect::new(0.0, 800.0, 800.0, 1200.0));
//!
//! let mut registry = WaypointRegistry::new();
//! for key in [1, 2, 3] {
//!     registry.register(Waypoint::new(key));
//! }
//!
//! // Scrolled 450px down: section 2 has most recently crossed the top.
//! let viewport = Viewport::new(450.0, 800.0, 600.0);
//! let mut events = Vec::new();
//! let active = registry.evaluate(&viewport, 0.0, &regions, |event| events.push(event));
//! assert_eq!(active, Some(2));
//! assert_eq!(events, vec![WaypointEvent::Activated(2)]);
//!
//! // Re-evaluating at the same position is quiet.
//! let mut events = Vec::new();
//! registry.evaluate(&viewport, 0.0, &regions, |event| events.push(event));
//! assert!(events.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::hash::Hash;

use cairn_viewport::{Viewport, is_scrolled_to_top};
use hashbrown::HashMap;
use kurbo::Rect;

/// Resolves waypoint keys to document-space regions.
///
/// Implementations typically wrap whatever the host caches about its page
/// structure. Returning `None` marks a key as *detached* (the underlying
/// element is gone or unmeasured); detached keys silently never qualify for
/// activation. Hosts refresh their cache through an explicit resync of their
/// own, not through this trait.
pub trait RegionSource<K> {
    /// The current document-space region for `key`, or `None` if detached.
    fn region_of(&self, key: &K) -> Option<Rect>;
}

impl<K: Eq + Hash> RegionSource<K> for HashMap<K, Rect> {
    fn region_of(&self, key: &K) -> Option<Rect> {
        self.get(key).copied()
    }
}

/// A handle for one observed page region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Waypoint<K> {
    key: K,
}

impl<K> Waypoint<K> {
    /// Creates a waypoint observing the region identified by `key`.
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self { key }
    }

    /// The key this waypoint observes.
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }
}

/// Emitted by [`WaypointRegistry::evaluate`] when the active waypoint
/// changes.
///
/// On a handoff between two waypoints, `Deactivated(old)` is emitted before
/// `Activated(new)`, so a handler that toggles per-key state can process
/// events in order without remembering the previous activation itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaypointEvent<K> {
    /// `key` stopped being the active waypoint.
    Deactivated(K),
    /// `key` became the active waypoint.
    Activated(K),
}

/// An ordered set of waypoints with a single active pointer.
///
/// The registry is a plain value owned by whoever coordinates the page (in
/// Cairn, the section navigator); nothing here is global. Registration order
/// is meaningful: it breaks exact position ties, latest first.
#[derive(Clone, Debug)]
pub struct WaypointRegistry<K> {
    entries: Vec<Waypoint<K>>,
    slots: HashMap<K, usize>,
    active: Option<K>,
}

impl<K> Default for WaypointRegistry<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            slots: HashMap::new(),
            active: None,
        }
    }
}

impl<K: Copy + Eq + Hash> WaypointRegistry<K> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered waypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no waypoints are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The currently active waypoint key, if any.
    #[must_use]
    pub const fn active(&self) -> Option<K> {
        self.active
    }

    /// Appends a waypoint.
    ///
    /// Duplicate keys are not checked here; callers own key uniqueness. A
    /// duplicate would shadow the earlier entry in the key→slot map while
    /// both stay in the ordered set.
    pub fn register(&mut self, waypoint: Waypoint<K>) {
        self.slots.insert(waypoint.key, self.entries.len());
        self.entries.push(waypoint);
    }

    /// Removes the waypoint for `key`. No-op if absent.
    ///
    /// If the removed waypoint was active, the active pointer is cleared
    /// without emitting events; the next [`evaluate`](Self::evaluate) will
    /// report whatever is active afterwards as a fresh activation.
    pub fn unregister(&mut self, key: &K) {
        let Some(slot) = self.slots.remove(key) else {
            return;
        };
        self.entries.remove(slot);
        // Later entries shifted down by one.
        for entry in &self.entries[slot..] {
            if let Some(s) = self.slots.get_mut(&entry.key) {
                *s -= 1;
            }
        }
        if self.active == Some(*key) {
            self.active = None;
        }
    }

    /// Replaces all registered waypoints with `keys`, in iteration order.
    ///
    /// This is the explicit structural-change hook: hosts call it after the
    /// page's section list changes instead of the registry re-discovering
    /// anything implicitly. The active pointer survives only if its key is
    /// still present.
    pub fn resync(&mut self, keys: impl IntoIterator<Item = K>) {
        let active = self.active;
        self.entries.clear();
        self.slots.clear();
        for key in keys {
            self.register(Waypoint::new(key));
        }
        self.active = active.filter(|key| self.slots.contains_key(key));
    }

    /// Removes all waypoints and clears the active pointer.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.slots.clear();
        self.active = None;
    }

    /// Pure selection: the waypoint that should be active for `viewport`.
    ///
    /// Filters to attached waypoints whose region has reached the activation
    /// line (see [`is_scrolled_to_top`]), then picks the one with the largest
    /// document top; exact ties go to the latest-registered entry. Returns
    /// `None` when nothing qualifies.
    #[must_use]
    pub fn select(
        &self,
        viewport: &Viewport,
        offset: f64,
        regions: &impl RegionSource<K>,
    ) -> Option<K> {
        let mut best: Option<(f64, K)> = None;
        for waypoint in &self.entries {
            let Some(region) = regions.region_of(&waypoint.key) else {
                continue;
            };
            if !is_scrolled_to_top(region, viewport, offset) {
                continue;
            }
            // `>=` so a later-registered waypoint wins an exact tie.
            if best.is_none_or(|(top, _)| region.y0 >= top) {
                best = Some((region.y0, waypoint.key));
            }
        }
        best.map(|(_, key)| key)
    }

    /// Runs selection and emits change events into `handler`.
    ///
    /// Emits nothing when the selection matches the previous active
    /// waypoint; otherwise `Deactivated(old)` (if there was one) followed by
    /// `Activated(new)` (if there is one). Returns the new active key.
    pub fn evaluate(
        &mut self,
        viewport: &Viewport,
        offset: f64,
        regions: &impl RegionSource<K>,
        mut handler: impl FnMut(WaypointEvent<K>),
    ) -> Option<K> {
        let selected = self.select(viewport, offset, regions);
        if selected != self.active {
            if let Some(old) = self.active {
                handler(WaypointEvent::Deactivated(old));
            }
            if let Some(new) = selected {
                handler(WaypointEvent::Activated(new));
            }
            self.active = selected;
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use hashbrown::HashMap;
    use kurbo::Rect;

    use super::{Waypoint, WaypointEvent, WaypointRegistry};
    use cairn_viewport::Viewport;

    fn section(top: f64, bottom: f64) -> Rect {
        Rect::new(0.0, top, 800.0, bottom)
    }

    fn registry_with(tops: &[(u32, f64)]) -> (WaypointRegistry<u32>, HashMap<u32, Rect>) {
        let mut registry = WaypointRegistry::new();
        let mut regions = HashMap::new();
        for &(key, top) in tops {
            registry.register(Waypoint::new(key));
            regions.insert(key, section(top, top + 400.0));
        }
        (registry, regions)
    }

    #[test]
    fn selects_latest_section_past_the_top() {
        // Tops at 0, 400, 800, 1200, 1600; scrolled to 850.
        let (registry, regions) =
            registry_with(&[(1, 0.0), (2, 400.0), (3, 800.0), (4, 1200.0), (5, 1600.0)]);
        let viewport = Viewport::new(850.0, 800.0, 600.0);
        assert_eq!(registry.select(&viewport, 0.0, &regions), Some(3));
    }

    #[test]
    fn header_offset_moves_the_activation_line() {
        let (registry, regions) = registry_with(&[(1, 0.0), (2, 400.0)]);
        // At scroll 340 section 2 (top 400) is 60px below the viewport top…
        let viewport = Viewport::new(340.0, 800.0, 600.0);
        assert_eq!(registry.select(&viewport, 0.0, &regions), Some(1));
        // …but a 60px fixed header means it has already reached the line.
        assert_eq!(registry.select(&viewport, 60.0, &regions), Some(2));
    }

    #[test]
    fn exact_tie_goes_to_latest_registered() {
        let (registry, regions) = registry_with(&[(1, 200.0), (2, 200.0)]);
        let viewport = Viewport::new(300.0, 800.0, 600.0);
        assert_eq!(registry.select(&viewport, 0.0, &regions), Some(2));
    }

    #[test]
    fn detached_waypoints_never_qualify() {
        let (registry, mut regions) = registry_with(&[(1, 0.0), (2, 400.0)]);
        let viewport = Viewport::new(500.0, 800.0, 600.0);
        assert_eq!(registry.select(&viewport, 0.0, &regions), Some(2));
        // Section 2's element disappears: selection falls back silently.
        regions.remove(&2);
        assert_eq!(registry.select(&viewport, 0.0, &regions), Some(1));
    }

    #[test]
    fn handoff_emits_deactivation_then_activation() {
        let (mut registry, regions) = registry_with(&[(1, 0.0), (2, 400.0)]);
        let mut events = Vec::new();

        registry.evaluate(&Viewport::new(0.0, 800.0, 600.0), 0.0, &regions, |e| {
            events.push(e);
        });
        assert_eq!(events, vec![WaypointEvent::Activated(1)]);

        events.clear();
        registry.evaluate(&Viewport::new(450.0, 800.0, 600.0), 0.0, &regions, |e| {
            events.push(e);
        });
        assert_eq!(
            events,
            vec![WaypointEvent::Deactivated(1), WaypointEvent::Activated(2)]
        );
    }

    #[test]
    fn evaluate_is_idempotent_at_unchanged_scroll() {
        let (mut registry, regions) = registry_with(&[(1, 0.0), (2, 400.0)]);
        let viewport = Viewport::new(450.0, 800.0, 600.0);
        let mut count = 0;
        registry.evaluate(&viewport, 0.0, &regions, |_| count += 1);
        registry.evaluate(&viewport, 0.0, &regions, |_| count += 1);
        registry.evaluate(&viewport, 0.0, &regions, |_| count += 1);
        assert_eq!(count, 1, "only the first evaluation may emit");
    }

    #[test]
    fn single_waypoint_page_deactivates_above_its_own_section() {
        // One waypoint with its top at 500.
        let (mut registry, regions) = registry_with(&[(7, 500.0)]);
        let mut events = Vec::new();

        // At the top of the page nothing is active and nothing fires.
        let active = registry.evaluate(&Viewport::new(0.0, 800.0, 600.0), 0.0, &regions, |e| {
            events.push(e);
        });
        assert_eq!(active, None);
        assert!(events.is_empty());

        // Scrolled past it: activates.
        registry.evaluate(&Viewport::new(600.0, 800.0, 600.0), 0.0, &regions, |e| {
            events.push(e);
        });
        assert_eq!(events, vec![WaypointEvent::Activated(7)]);

        // Back above it: the deactivation path fires.
        events.clear();
        registry.evaluate(&Viewport::new(0.0, 800.0, 600.0), 0.0, &regions, |e| {
            events.push(e);
        });
        assert_eq!(events, vec![WaypointEvent::Deactivated(7)]);
        assert_eq!(registry.active(), None);
    }

    #[test]
    fn unregister_is_order_preserving_and_tolerates_absent_keys() {
        let (mut registry, regions) = registry_with(&[(1, 200.0), (2, 200.0), (3, 200.0)]);
        registry.unregister(&9); // absent: no-op
        assert_eq!(registry.len(), 3);

        // Removing the tie-winner hands the tie to the next-latest.
        registry.unregister(&3);
        let viewport = Viewport::new(300.0, 800.0, 600.0);
        assert_eq!(registry.select(&viewport, 0.0, &regions), Some(2));
    }

    #[test]
    fn unregistering_the_active_waypoint_clears_the_pointer() {
        let (mut registry, regions) = registry_with(&[(1, 0.0), (2, 400.0)]);
        let viewport = Viewport::new(450.0, 800.0, 600.0);
        registry.evaluate(&viewport, 0.0, &regions, |_| {});
        assert_eq!(registry.active(), Some(2));

        registry.unregister(&2);
        assert_eq!(registry.active(), None);
        // The survivor is reported as a fresh activation.
        let mut events = Vec::new();
        registry.evaluate(&viewport, 0.0, &regions, |e| events.push(e));
        assert_eq!(events, vec![WaypointEvent::Activated(1)]);
    }

    #[test]
    fn resync_replaces_entries_and_keeps_surviving_active() {
        let (mut registry, regions) = registry_with(&[(1, 0.0), (2, 400.0)]);
        let viewport = Viewport::new(450.0, 800.0, 600.0);
        registry.evaluate(&viewport, 0.0, &regions, |_| {});
        assert_eq!(registry.active(), Some(2));

        // Section 2 survives the structural change; the active pointer does too.
        registry.resync([2, 3]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.active(), Some(2));

        // Dropping it from the page drops the pointer.
        registry.resync([3]);
        assert_eq!(registry.active(), None);
    }
}
