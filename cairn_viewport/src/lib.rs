// Copyright 2026 the Cairn Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll and viewport metrics.
//!
//! This crate provides the leaf-level vocabulary for the rest of Cairn: a
//! [`Viewport`] snapshot describing what the host is currently showing, and
//! pure predicates answering where a document-space region sits relative to
//! that viewport. It is intentionally decoupled from any particular UI stack;
//! hosts take a snapshot per event and hand it to the higher-level crates.
//!
//! All geometry lives in a single document coordinate space: regions are
//! [`kurbo::Rect`]s measured from the document origin, and the viewport's
//! origin is the current scroll position. Converting a region to
//! viewport-relative coordinates is therefore just a subtraction, which is
//! what the predicates here do.
//!
//! # Key items
//!
//! - [`Viewport`] – scroll origin + size of the visible area.
//! - [`is_scrolled_to_top`] – has a region reached the activation line at the
//!   top of the viewport (minus a fixed-chrome offset)?
//! - [`is_scrolled_into_view`] – does a region overlap the viewport
//!   vertically at all?
//! - [`is_scrolled_into_view_horizontal`] – the horizontal analogue, with
//!   symmetric edge insets.
//! - [`anim`] – eased scroll animation toward a target offset.
//!
//! ## Minimal example
//!
//! ```rust
//! use cairn_viewport::{Viewport, is_scrolled_into_view, is_scrolled_to_top};
//! use kurbo::Rect;
//!
//! // A 1280x720 viewport scrolled 600px down the document.
//! let viewport = Viewport::new(600.0, 1280.0, 720.0);
//!
//! // A section spanning document rows 500..900.
//! let section = Rect::new(0.0, 500.0, 1280.0, 900.0);
//!
//! // Its top is 100px above the viewport top: it has scrolled to the top…
//! assert!(is_scrolled_to_top(section, &viewport, 0.0));
//! // …and it is still (partially) on screen.
//! assert!(is_scrolled_into_view(section, &viewport));
//!
//! // With a 150px fixed header, the activation line moves down and the
//! // section counts as reaching the top even earlier.
//! assert!(is_scrolled_to_top(section, &viewport, 150.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Rect, Size};

pub mod anim;

pub use anim::{DEFAULT_SCROLL_DURATION_MS, ScrollAnimation, ease_in_out_quad, ease_out_cubic};

/// Snapshot of the host's visible area, in document coordinates.
///
/// `origin` is the document position of the viewport's top-left corner (for a
/// window, the scroll offsets), and `size` is the visible extent. Hosts build
/// one of these per event from whatever their environment reports.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Document position of the viewport's top-left corner.
    pub origin: Point,
    /// Size of the visible area.
    pub size: Size,
}

impl Viewport {
    /// Creates a viewport scrolled `scroll_top` down the document, with no
    /// horizontal scroll.
    #[must_use]
    pub const fn new(scroll_top: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(0.0, scroll_top),
            size: Size::new(width, height),
        }
    }

    /// Creates a viewport from an explicit origin and size.
    #[must_use]
    pub const fn with_origin(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// The vertical scroll position (document y of the viewport top).
    #[must_use]
    pub const fn scroll_top(&self) -> f64 {
        self.origin.y
    }

    /// The viewport as a document-space rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Top of `region` relative to the viewport top.
    ///
    /// Negative values mean the region top has scrolled past the viewport
    /// top; this is the quantity the activation predicates reason about.
    #[must_use]
    pub fn relative_top(&self, region: Rect) -> f64 {
        region.y0 - self.origin.y
    }
}

/// Returns `true` if `region` has reached (or scrolled past) the activation
/// line at the top of the viewport.
///
/// `offset` moves the activation line down, typically by the height of fixed
/// chrome (a pinned header or nav bar) that visually covers the top of the
/// viewport. A region exactly on the line counts as having reached it.
#[must_use]
pub fn is_scrolled_to_top(region: Rect, viewport: &Viewport, offset: f64) -> bool {
    viewport.relative_top(region) - offset <= 0.0
}

/// Returns `true` if any part of `region` is vertically inside the viewport.
///
/// A region whose bottom edge sits exactly on the viewport top still counts
/// as in view; one whose top edge sits exactly on the viewport bottom does
/// not. This mirrors the half-open interval the scroll predicates use
/// throughout Cairn.
#[must_use]
pub fn is_scrolled_into_view(region: Rect, viewport: &Viewport) -> bool {
    let top = viewport.relative_top(region);
    let bottom = region.y1 - viewport.origin.y;
    top < viewport.size.height && bottom >= 0.0
}

/// Returns `true` if any part of `region` is horizontally inside the
/// viewport, after shrinking the viewport by `inset` on both edges.
///
/// Used by hosts that scroll content sideways (carousels, horizontal strips)
/// and want items flush against an edge gutter to count as off screen.
#[must_use]
pub fn is_scrolled_into_view_horizontal(region: Rect, viewport: &Viewport, inset: f64) -> bool {
    let left = region.x0 - viewport.origin.x;
    let right = region.x1 - viewport.origin.x;
    left < viewport.size.width - inset && right >= inset
}

#[cfg(test)]
mod tests {
    use super::{
        Viewport, is_scrolled_into_view, is_scrolled_into_view_horizontal, is_scrolled_to_top,
    };
    use kurbo::Rect;

    #[test]
    fn scrolled_to_top_is_inclusive_at_the_line() {
        let viewport = Viewport::new(100.0, 800.0, 600.0);
        let region = Rect::new(0.0, 100.0, 800.0, 400.0);

        // Region top exactly at the viewport top.
        assert!(is_scrolled_to_top(region, &viewport, 0.0));
        // One pixel below the line: not yet.
        let below = Rect::new(0.0, 101.0, 800.0, 400.0);
        assert!(!is_scrolled_to_top(below, &viewport, 0.0));
        // A header offset moves the line down to meet it.
        assert!(is_scrolled_to_top(below, &viewport, 1.0));
    }

    #[test]
    fn into_view_overlap_edges() {
        let viewport = Viewport::new(0.0, 800.0, 600.0);

        // Fully above: bottom edge exactly on the viewport top still counts.
        assert!(is_scrolled_into_view(
            Rect::new(0.0, -50.0, 800.0, 0.0),
            &viewport
        ));
        // Top edge exactly on the viewport bottom does not.
        assert!(!is_scrolled_into_view(
            Rect::new(0.0, 600.0, 800.0, 700.0),
            &viewport
        ));
        // Straddling the bottom edge counts.
        assert!(is_scrolled_into_view(
            Rect::new(0.0, 599.0, 800.0, 700.0),
            &viewport
        ));
    }

    #[test]
    fn horizontal_insets_shrink_the_window() {
        let viewport = Viewport::new(0.0, 800.0, 600.0);
        let item = Rect::new(790.0, 0.0, 900.0, 100.0);

        assert!(is_scrolled_into_view_horizontal(item, &viewport, 0.0));
        // A 20px gutter pushes the item out of the effective window.
        assert!(!is_scrolled_into_view_horizontal(item, &viewport, 20.0));
    }

    #[test]
    fn relative_top_tracks_scroll() {
        let region = Rect::new(0.0, 500.0, 100.0, 600.0);
        assert_eq!(Viewport::new(0.0, 800.0, 600.0).relative_top(region), 500.0);
        assert_eq!(
            Viewport::new(450.0, 800.0, 600.0).relative_top(region),
            50.0
        );
        assert_eq!(
            Viewport::new(600.0, 800.0, 600.0).relative_top(region),
            -100.0
        );
    }
}
