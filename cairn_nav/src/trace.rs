// Copyright 2026 the Cairn Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for navigator evaluation.
//!
//! [`NavTraceSink`] has per-event methods that the navigator calls as it
//! evaluates; all method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn NavTraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.

#[cfg(not(feature = "trace"))]
use core::marker::PhantomData;

use cairn_sticky::StickyMode;
use cairn_waypoint::WaypointEvent;

use crate::{Breakpoint, NavLayout};

/// Receiver for navigator evaluation events.
pub trait NavTraceSink<K> {
    /// A waypoint activated or deactivated during evaluation.
    fn waypoint_event(&mut self, event: WaypointEvent<K>) {
        let _ = event;
    }

    /// The highlighted nav item changed.
    fn highlight_changed(&mut self, from: Option<K>, to: Option<K>) {
        let _ = (from, to);
    }

    /// The bar switched layout.
    fn layout_changed(&mut self, layout: NavLayout) {
        let _ = layout;
    }

    /// The sticky bar changed mode.
    fn sticky_changed(&mut self, mode: StickyMode) {
        let _ = mode;
    }

    /// The viewport was reclassified.
    fn breakpoint_changed(&mut self, breakpoint: Breakpoint) {
        let _ = breakpoint;
    }
}

/// Cheap, optional dispatch to a [`NavTraceSink`].
pub struct Tracer<'a, K> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn NavTraceSink<K>>,
    #[cfg(not(feature = "trace"))]
    _marker: PhantomData<&'a mut K>,
}

impl<K> Default for Tracer<'_, K> {
    fn default() -> Self {
        Self {
            #[cfg(feature = "trace")]
            sink: None,
            #[cfg(not(feature = "trace"))]
            _marker: PhantomData,
        }
    }
}

impl<K> core::fmt::Debug for Tracer<'_, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a, K> Tracer<'a, K> {
    /// A tracer that drops every event.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// A tracer dispatching to `sink`.
    #[cfg(feature = "trace")]
    #[must_use]
    pub fn new(sink: &'a mut dyn NavTraceSink<K>) -> Self {
        Self { sink: Some(sink) }
    }

    pub(crate) fn waypoint_event(&mut self, event: WaypointEvent<K>) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_mut() {
            sink.waypoint_event(event);
        }
        #[cfg(not(feature = "trace"))]
        let _ = event;
    }

    pub(crate) fn highlight_changed(&mut self, from: Option<K>, to: Option<K>) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_mut() {
            sink.highlight_changed(from, to);
        }
        #[cfg(not(feature = "trace"))]
        let _ = (from, to);
    }

    pub(crate) fn layout_changed(&mut self, layout: NavLayout) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_mut() {
            sink.layout_changed(layout);
        }
        #[cfg(not(feature = "trace"))]
        let _ = layout;
    }

    pub(crate) fn sticky_changed(&mut self, mode: StickyMode) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_mut() {
            sink.sticky_changed(mode);
        }
        #[cfg(not(feature = "trace"))]
        let _ = mode;
    }

    pub(crate) fn breakpoint_changed(&mut self, breakpoint: Breakpoint) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_mut() {
            sink.breakpoint_changed(breakpoint);
        }
        #[cfg(not(feature = "trace"))]
        let _ = breakpoint;
    }
}
