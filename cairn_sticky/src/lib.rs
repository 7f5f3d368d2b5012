// Copyright 2026 the Cairn Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticky element behavior: pin to the viewport top, hand off at the footer.
//!
//! A sticky element sits in normal flow until its natural position scrolls
//! up to the viewport top (minus a fixed-chrome offset), then pins there.
//! Optionally, when the page footer scrolls into view, the element anchors
//! just above the footer instead of covering it, and un-anchors when the
//! footer leaves again.
//!
//! [`StickyElement`] is the mode machine; the host applies the returned
//! [`StickyChange`]s (pin/unpin, placeholder spacing) to its real surface.
//! Because pinning removes the element from normal flow, every change out of
//! [`StickyMode::Normal`] carries a placeholder extent equal to the
//! element's height so surrounding content does not jump; returning to
//! normal clears it.
//!
//! Changes are emitted only on transitions: re-evaluating at an unchanged
//! scroll position returns `None`, so hosts can apply every change
//! unconditionally without redundant style writes.
//!
//! ```rust
//! use cairn_sticky::{StickyElement, StickyMode};
//!
//! // Element naturally 200px down the document, under a 50px fixed header.
//! let mut sticky = StickyElement::new(200.0, 64.0);
//!
//! // Not there yet.
//! assert_eq!(sticky.evaluate(149.0, 50.0, false), None);
//! assert_eq!(sticky.mode(), StickyMode::Normal);
//!
//! // Crossing the threshold pins it and reserves its height.
//! let change = sticky.evaluate(151.0, 50.0, false).unwrap();
//! assert_eq!(change.mode, StickyMode::Sticky);
//! assert_eq!(change.pinned_top, Some(50.0));
//! assert_eq!(change.placeholder, Some(64.0));
//!
//! // Same position again: nothing to do.
//! assert_eq!(sticky.evaluate(151.0, 50.0, false), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use cairn_viewport::{Viewport, is_scrolled_into_view};
use kurbo::Rect;

/// Layout mode of a sticky element.
///
/// `Sticky` and `AbsoluteAtFooter` are mutually exclusive by construction;
/// there is no flag soup that could combine them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StickyMode {
    /// In normal document flow.
    #[default]
    Normal,
    /// Pinned to the viewport top (at the configured offset).
    Sticky,
    /// Anchored just above the footer while the footer is in view.
    AbsoluteAtFooter,
}

/// A transition the host must apply to its surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StickyChange {
    /// The mode just entered.
    pub mode: StickyMode,
    /// Viewport offset to pin at; `Some` exactly in [`StickyMode::Sticky`].
    pub pinned_top: Option<f64>,
    /// Spacing to reserve in normal flow while the element is out of it;
    /// `None` exactly in [`StickyMode::Normal`].
    pub placeholder: Option<f64>,
}

/// Mode machine for one sticky element.
///
/// The element's natural document top is measured once at construction and
/// only changes through [`resync`](Self::resync) — an explicit re-measure
/// after structural page changes, never an implicit re-query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StickyElement {
    natural_top: f64,
    extent: f64,
    absolute_at_footer: bool,
    mode: StickyMode,
    pinned_top: Option<f64>,
}

impl StickyElement {
    /// Creates a sticky element from its measured natural document top and
    /// its own height.
    #[must_use]
    pub const fn new(natural_top: f64, extent: f64) -> Self {
        Self {
            natural_top,
            extent,
            absolute_at_footer: false,
            mode: StickyMode::Normal,
            pinned_top: None,
        }
    }

    /// Enables the footer handoff: anchor above the footer while it is in
    /// view instead of overlapping it.
    #[must_use]
    pub const fn with_absolute_at_footer(mut self) -> Self {
        self.absolute_at_footer = true;
        self
    }

    /// The current mode.
    #[must_use]
    pub const fn mode(&self) -> StickyMode {
        self.mode
    }

    /// The cached natural document top.
    #[must_use]
    pub const fn natural_top(&self) -> f64 {
        self.natural_top
    }

    /// The element height used for placeholder spacing.
    #[must_use]
    pub const fn extent(&self) -> f64 {
        self.extent
    }

    /// Updates the element height (e.g. after its content reflows).
    pub const fn set_extent(&mut self, extent: f64) {
        self.extent = extent;
    }

    /// Re-caches the natural top after a structural page change. The mode is
    /// left alone; the next [`evaluate`](Self::evaluate) reconciles it.
    pub const fn resync(&mut self, natural_top: f64) {
        self.natural_top = natural_top;
    }

    /// Returns `true` if the element's natural position has scrolled to or
    /// past the activation line.
    #[must_use]
    pub fn is_past_threshold(&self, scroll_top: f64, top_offset: f64) -> bool {
        self.natural_top - scroll_top <= top_offset
    }

    /// Advances the mode machine for the given scroll state.
    ///
    /// Returns the transition to apply, or `None` when nothing changed.
    /// `footer_visible` is ignored unless the footer handoff is enabled.
    pub fn evaluate(
        &mut self,
        scroll_top: f64,
        top_offset: f64,
        footer_visible: bool,
    ) -> Option<StickyChange> {
        let mode = if !self.is_past_threshold(scroll_top, top_offset) {
            StickyMode::Normal
        } else if self.absolute_at_footer && footer_visible {
            StickyMode::AbsoluteAtFooter
        } else {
            StickyMode::Sticky
        };

        let pinned_top = match mode {
            StickyMode::Sticky => Some(top_offset),
            StickyMode::Normal | StickyMode::AbsoluteAtFooter => None,
        };

        if mode == self.mode && pinned_top == self.pinned_top {
            return None;
        }
        self.mode = mode;
        self.pinned_top = pinned_top;
        Some(StickyChange {
            mode,
            pinned_top,
            placeholder: match mode {
                StickyMode::Normal => None,
                StickyMode::Sticky | StickyMode::AbsoluteAtFooter => Some(self.extent),
            },
        })
    }

    /// [`evaluate`](Self::evaluate) against a viewport snapshot and an
    /// optional footer region.
    ///
    /// A missing footer (`None`) is treated as never visible, so a page
    /// without one degrades to plain pin/unpin behavior.
    pub fn evaluate_in(
        &mut self,
        viewport: &Viewport,
        top_offset: f64,
        footer: Option<Rect>,
    ) -> Option<StickyChange> {
        let footer_visible = footer.is_some_and(|f| is_scrolled_into_view(f, viewport));
        self.evaluate(viewport.scroll_top(), top_offset, footer_visible)
    }
}
