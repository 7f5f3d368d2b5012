// Copyright 2026 the Cairn Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The section navigator: waypoints + sticky bar + responsive dropdown.

use alloc::vec::Vec;
use core::hash::Hash;

use cairn_event_state::{Debouncer, DismissTracker, PressZone};
use cairn_sticky::{StickyChange, StickyElement, StickyMode};
use cairn_viewport::{ScrollAnimation, Viewport};
use cairn_waypoint::{RegionSource, WaypointRegistry};
use hashbrown::HashMap;
use kurbo::Rect;
use smallvec::SmallVec;

use crate::{Breakpoint, NavLayout, Section, Tracer};

/// Configuration for a [`SectionNavigator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavOptions {
    /// Pixels trimmed from the nav extent when computing the activation
    /// offset, so a section scrolled flush under the bar still counts as
    /// reached.
    pub scroll_trim: f64,
    /// Quiet window for scroll/resize coalescing, in milliseconds.
    pub debounce_ms: u64,
    /// Duration of [`NavUpdate::ScrollTo`] animations, in milliseconds.
    pub scroll_duration_ms: u64,
    /// Anchor the bar above the footer while the footer is in view instead
    /// of overlapping it.
    pub absolute_at_footer: bool,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            scroll_trim: 2.0,
            debounce_ms: cairn_event_state::DEFAULT_DEBOUNCE_MS,
            scroll_duration_ms: cairn_viewport::DEFAULT_SCROLL_DURATION_MS,
            absolute_at_footer: false,
        }
    }
}

/// Fixed page furniture the navigator must respect.
///
/// Implemented by the host against whatever it knows about the page. All
/// methods are consulted per evaluation, so a host can return live
/// measurements; a missing footer is simply `None`.
pub trait PageChrome {
    /// Current height of the nav bar itself.
    fn nav_extent(&self) -> f64;

    /// Height of fixed chrome above the nav (e.g. a pinned site header).
    fn header_offset(&self) -> f64 {
        0.0
    }

    /// Document-space footer region, if the page has one.
    fn footer_region(&self) -> Option<Rect> {
        None
    }

    /// Total scrollable document height.
    fn content_extent(&self) -> f64;
}

/// One change the host must apply to its surfaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavUpdate<K> {
    /// Move the highlight to `section` (or clear it).
    Highlight {
        /// Key of the section to highlight; `None` clears the highlight.
        section: Option<K>,
    },
    /// Switch the bar's layout.
    Layout(NavLayout),
    /// Apply a sticky transition to the bar.
    Sticky(StickyChange),
    /// Animate the host's scroll position.
    ///
    /// The animation runs from the scroll position at the time of the
    /// request; the host samples it on its own ticks and clamps to its real
    /// scroll range.
    ScrollTo(ScrollAnimation),
}

/// Batch of updates from one navigator call.
pub type NavUpdates<K> = SmallVec<[NavUpdate<K>; 4]>;

/// Drives a page section navigation bar from scroll state.
///
/// The navigator owns a [`WaypointRegistry`] (one waypoint per section), a
/// [`StickyElement`] for the bar itself, and the responsive row/dropdown
/// policy. Hosts feed it events ([`on_scroll`](Self::on_scroll),
/// [`on_resize`](Self::on_resize), [`toggle`](Self::toggle),
/// [`on_press`](Self::on_press), [`navigate_to`](Self::navigate_to)) and
/// poll it with current snapshots; it answers with [`NavUpdate`] batches.
///
/// A navigator with no sections is *inert*: every method returns an empty
/// batch. This is the degraded mode for misconfigured pages, not an error.
#[derive(Clone, Debug)]
pub struct SectionNavigator<K> {
    options: NavOptions,
    sections: Vec<Section<K>>,
    lookup: HashMap<K, usize>,
    registry: WaypointRegistry<K>,
    sticky: StickyElement,
    dismiss: DismissTracker,
    scroll_debounce: Debouncer,
    resize_debounce: Debouncer,
    pending_width: Option<f64>,
    breakpoint: Breakpoint,
    layout: NavLayout,
    highlighted: Option<usize>,
}

impl<K: Copy + Eq + Hash> SectionNavigator<K> {
    /// Creates an inert navigator; call [`resync`](Self::resync) with the
    /// page's sections and measurements to bring it live.
    #[must_use]
    pub fn new(options: NavOptions) -> Self {
        let sticky = if options.absolute_at_footer {
            StickyElement::new(0.0, 0.0).with_absolute_at_footer()
        } else {
            StickyElement::new(0.0, 0.0)
        };
        Self {
            options,
            sections: Vec::new(),
            lookup: HashMap::new(),
            registry: WaypointRegistry::new(),
            sticky,
            dismiss: DismissTracker::new(),
            scroll_debounce: Debouncer::new(options.debounce_ms),
            resize_debounce: Debouncer::new(options.debounce_ms),
            pending_width: None,
            breakpoint: Breakpoint::Large,
            layout: NavLayout::Row,
            highlighted: None,
        }
    }

    /// Returns `true` when no sections are registered; every operation on an
    /// inert navigator is a no-op.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.sections.is_empty()
    }

    /// The current layout state.
    #[must_use]
    pub const fn layout(&self) -> NavLayout {
        self.layout
    }

    /// The current breakpoint.
    #[must_use]
    pub const fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// The sticky mode of the bar.
    #[must_use]
    pub const fn sticky_mode(&self) -> StickyMode {
        self.sticky.mode()
    }

    /// Key of the currently highlighted section, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<&K> {
        self.highlighted.map(|index| self.sections[index].key())
    }

    /// The registered sections, in document order.
    #[must_use]
    pub fn sections(&self) -> &[Section<K>] {
        &self.sections
    }

    /// Replaces the navigator's picture of the page.
    ///
    /// This is the explicit structural-change hook: it replaces the section
    /// list, re-registers waypoints (keeping the active one where its key
    /// survives), re-measures the bar from `nav_region`, and reclassifies
    /// `width`. Nothing is discovered implicitly between resyncs.
    ///
    /// Follow up with [`on_scroll`](Self::on_scroll) + [`poll`](Self::poll)
    /// to evaluate the initial highlight and sticky state.
    pub fn resync(
        &mut self,
        sections: Vec<Section<K>>,
        nav_region: Rect,
        width: f64,
        tracer: &mut Tracer<'_, K>,
    ) -> NavUpdates<K> {
        let highlighted_key = self.highlighted().copied();
        self.sections = sections;
        self.lookup = self
            .sections
            .iter()
            .enumerate()
            .map(|(index, section)| (*section.key(), index))
            .collect();
        self.registry.resync(self.sections.iter().map(|s| *s.key()));
        self.sticky.resync(nav_region.y0);
        self.sticky.set_extent(nav_region.height());
        self.highlighted = highlighted_key.and_then(|key| self.lookup.get(&key).copied());

        let mut updates = SmallVec::new();
        if self.is_inert() {
            return updates;
        }

        let breakpoint = Breakpoint::classify(width);
        if breakpoint != self.breakpoint {
            self.breakpoint = breakpoint;
            tracer.breakpoint_changed(breakpoint);
        }
        self.apply_layout_policy(&mut updates, tracer);
        updates
    }

    /// Records a scroll event at `now`. Cheap; evaluation happens in
    /// [`poll`](Self::poll) once the burst goes quiet.
    pub fn on_scroll(&mut self, now: u64) {
        if !self.is_inert() {
            self.scroll_debounce.record(now);
        }
    }

    /// Records a resize event at `now` with the new viewport width. The
    /// latest width of a burst wins.
    pub fn on_resize(&mut self, now: u64, width: f64) {
        if !self.is_inert() {
            self.resize_debounce.record(now);
            self.pending_width = Some(width);
        }
    }

    /// Runs any evaluation whose debounce window has elapsed by `now`.
    ///
    /// A due resize is handled first (breakpoint + layout policy, then a
    /// waypoint refresh so the highlight is correct without waiting for the
    /// next scroll); a due scroll evaluates sticky state and the active
    /// waypoint. Polling with nothing due returns an empty batch.
    pub fn poll(
        &mut self,
        now: u64,
        viewport: &Viewport,
        regions: &impl RegionSource<K>,
        chrome: &impl PageChrome,
        tracer: &mut Tracer<'_, K>,
    ) -> NavUpdates<K> {
        let mut updates = SmallVec::new();
        if self.is_inert() {
            return updates;
        }

        let mut evaluate = self.scroll_debounce.poll(now).is_some();
        if self.resize_debounce.poll(now).is_some()
            && let Some(width) = self.pending_width.take()
        {
            let breakpoint = Breakpoint::classify(width);
            if breakpoint != self.breakpoint {
                self.breakpoint = breakpoint;
                tracer.breakpoint_changed(breakpoint);
                self.apply_layout_policy(&mut updates, tracer);
                // Refresh selection so the highlight matches the new
                // breakpoint's exclusions immediately.
                evaluate = true;
            }
        }
        if evaluate {
            self.evaluate(viewport, regions, chrome, &mut updates, tracer);
        }
        updates
    }

    /// User toggle action on the dropdown. No-op in row layout.
    pub fn toggle(&mut self, tracer: &mut Tracer<'_, K>) -> NavUpdates<K> {
        let mut updates = SmallVec::new();
        match self.layout {
            NavLayout::Row => {}
            NavLayout::DropdownCollapsed => {
                self.transition_layout(NavLayout::DropdownExpanded, &mut updates, tracer);
            }
            NavLayout::DropdownExpanded => {
                self.transition_layout(NavLayout::DropdownCollapsed, &mut updates, tracer);
            }
        }
        updates
    }

    /// Feeds a classified press. An outside press while the dropdown is
    /// expanded collapses it; everything else is inert.
    pub fn on_press(&mut self, zone: PressZone, tracer: &mut Tracer<'_, K>) -> NavUpdates<K> {
        let mut updates = SmallVec::new();
        if self.dismiss.on_press(zone) {
            self.transition_layout(NavLayout::DropdownCollapsed, &mut updates, tracer);
        }
        updates
    }

    /// Requests navigation to a section, from a nav-item press or an initial
    /// deep-link anchor.
    ///
    /// Returns a [`NavUpdate::ScrollTo`] animation targeting the section's
    /// top minus the bar's activation offset, collapses an open dropdown,
    /// and moves the highlight immediately (with the usual excluded-section
    /// fallback). Unknown or detached keys return an empty batch.
    pub fn navigate_to(
        &mut self,
        key: &K,
        viewport: &Viewport,
        regions: &impl RegionSource<K>,
        chrome: &impl PageChrome,
        tracer: &mut Tracer<'_, K>,
    ) -> NavUpdates<K> {
        let mut updates = SmallVec::new();
        if self.is_inert() || !self.lookup.contains_key(key) {
            return updates;
        }
        let Some(region) = regions.region_of(key) else {
            return updates;
        };
        if self.layout.is_expanded() {
            self.transition_layout(NavLayout::DropdownCollapsed, &mut updates, tracer);
        }
        let target_index = self.resolve_highlight(key);
        self.set_highlight(target_index, &mut updates, tracer);
        let target = (region.y0 - self.waypoint_offset(chrome)).max(0.0);
        updates.push(NavUpdate::ScrollTo(ScrollAnimation::new(
            viewport.scroll_top(),
            target,
            self.options.scroll_duration_ms,
        )));
        updates
    }

    /// The effective activation offset: the bar covers the top of the
    /// viewport, minus the configured trim.
    fn waypoint_offset(&self, chrome: &impl PageChrome) -> f64 {
        (chrome.nav_extent() - self.options.scroll_trim).max(0.0)
    }

    fn visible_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| !s.is_excluded_at(self.breakpoint))
            .count()
    }

    fn first_visible_index(&self) -> Option<usize> {
        self.sections
            .iter()
            .position(|s| !s.is_excluded_at(self.breakpoint))
    }

    fn last_visible_index(&self) -> Option<usize> {
        self.sections
            .iter()
            .rposition(|s| !s.is_excluded_at(self.breakpoint))
    }

    fn dropdown_eligible(&self) -> bool {
        self.breakpoint.is_small() || self.visible_count() > self.breakpoint.max_row_items()
    }

    /// Reconciles the layout with the current breakpoint and section count.
    ///
    /// Entering eligibility lands in the collapsed dropdown; leaving it
    /// forces the row (and thereby closes an open dropdown). The
    /// expanded/collapsed split is preserved across moves between
    /// dropdown-eligible breakpoints.
    fn apply_layout_policy(&mut self, updates: &mut NavUpdates<K>, tracer: &mut Tracer<'_, K>) {
        let next = if self.dropdown_eligible() {
            if self.layout == NavLayout::Row {
                NavLayout::DropdownCollapsed
            } else {
                self.layout
            }
        } else {
            NavLayout::Row
        };
        self.transition_layout(next, updates, tracer);
        // A collapsed dropdown displays the current section; seed it.
        if self.layout.is_dropdown() && self.highlighted.is_none() {
            self.set_highlight(self.first_visible_index(), updates, tracer);
        }
    }

    fn transition_layout(
        &mut self,
        next: NavLayout,
        updates: &mut NavUpdates<K>,
        tracer: &mut Tracer<'_, K>,
    ) {
        if next == self.layout {
            return;
        }
        self.layout = next;
        if next.is_expanded() {
            self.dismiss.open();
        } else {
            self.dismiss.close();
        }
        tracer.layout_changed(next);
        updates.push(NavUpdate::Layout(next));
    }

    /// Maps an active waypoint key to the section index to highlight,
    /// applying the excluded-section fallback.
    fn resolve_highlight(&self, key: &K) -> Option<usize> {
        let index = *self.lookup.get(key)?;
        if !self.sections[index].is_excluded_at(self.breakpoint) {
            return Some(index);
        }
        self.sections[..index]
            .iter()
            .rposition(|s| !s.is_excluded_at(self.breakpoint))
            .or_else(|| self.first_visible_index())
    }

    fn set_highlight(
        &mut self,
        target: Option<usize>,
        updates: &mut NavUpdates<K>,
        tracer: &mut Tracer<'_, K>,
    ) {
        if target == self.highlighted {
            return;
        }
        let from = self.highlighted.map(|i| *self.sections[i].key());
        let to = target.map(|i| *self.sections[i].key());
        tracer.highlight_changed(from, to);
        self.highlighted = target;
        updates.push(NavUpdate::Highlight { section: to });
    }

    fn evaluate(
        &mut self,
        viewport: &Viewport,
        regions: &impl RegionSource<K>,
        chrome: &impl PageChrome,
        updates: &mut NavUpdates<K>,
        tracer: &mut Tracer<'_, K>,
    ) {
        // Sticky first: its engagement gates the bottom snap below.
        if let Some(change) =
            self.sticky
                .evaluate_in(viewport, chrome.header_offset(), chrome.footer_region())
        {
            tracer.sticky_changed(change.mode);
            updates.push(NavUpdate::Sticky(change));
        }

        let offset = self.waypoint_offset(chrome);
        let active = self
            .registry
            .evaluate(viewport, offset, regions, |event| {
                tracer.waypoint_event(event);
            });
        let mut target = active.and_then(|key| self.resolve_highlight(&key));

        // Bottom snap: at the document end, a final section too short to
        // ever reach the activation line still gets the highlight.
        if self.sticky.mode() != StickyMode::Normal
            && let Some(last) = self.last_visible_index()
        {
            let at_bottom =
                viewport.scroll_top() + viewport.size.height >= chrome.content_extent();
            if at_bottom
                && let Some(region) = regions.region_of(self.sections[last].key())
            {
                let max_scroll = (chrome.content_extent() - viewport.size.height).max(0.0);
                if region.y0 - max_scroll > offset {
                    target = Some(last);
                }
            }
        }

        self.set_highlight(target, updates, tracer);
    }
}
