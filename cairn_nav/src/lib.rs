// Copyright 2026 the Cairn Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cairn Nav: a scroll-driven page section navigator.
//!
//! This crate composes the other Cairn primitives into the behavior of a
//! page-level section navigation bar:
//!
//! - a [`WaypointRegistry`](cairn_waypoint::WaypointRegistry) tracks which
//!   section currently owns the top of the viewport and drives the
//!   highlighted nav item,
//! - a [`StickyElement`](cairn_sticky::StickyElement) pins the bar once the
//!   page scrolls past it (with an optional footer handoff),
//! - a [`Breakpoint`] classifier and the row/dropdown policy decide how the
//!   bar presents: all items in a row, or collapsed into a dropdown when
//!   there are too many items for the breakpoint (or on small screens),
//! - scroll/resize bursts are coalesced through
//!   [`Debouncer`](cairn_event_state::Debouncer)s.
//!
//! The navigator never touches a real UI. Hosts record events as they
//! happen, poll with current snapshots ([`Viewport`](cairn_viewport::Viewport),
//! a [`RegionSource`](cairn_waypoint::RegionSource), a [`PageChrome`]), and
//! apply the returned [`NavUpdate`] batches to their own surfaces.
//!
//! ## Minimal example
//!
//! ```rust
//! use cairn_nav::{NavOptions, NavUpdate, PageChrome, Section, SectionNavigator, Tracer};
//! use cairn_viewport::Viewport;
//! use hashbrown::HashMap;
//! use kurbo::Rect;
//!
//! struct Chrome;
//!
//! impl PageChrome for Chrome {
//!     fn nav_extent(&self) -> f64 {
//!         50.0
//!     }
//!     fn content_extent(&self) -> f64 {
//!         2400.0
//!     }
//! }
//!
//! // Three sections stacked down the document, nav bar at y=200.
//! let mut regions: HashMap<u32, Rect> = HashMap::new();
//! regions.insert(1, Rect::new(0.0, 250.0, 1280.0, 1000.0));
//! regions.insert(2, Rect::new(0.0, 1000.0, 1280.0, 1700.0));
//! regions.insert(3, Rect::new(0.0, 1700.0, 1280.0, 2400.0));
//!
//! let mut nav = SectionNavigator::new(NavOptions::default());
//! let mut tracer = Tracer::disabled();
//! nav.resync(
//!     vec![Section::new(1), Section::new(2), Section::new(3)],
//!     Rect::new(0.0, 200.0, 1280.0, 250.0),
//!     1280.0,
//!     &mut tracer,
//! );
//!
//! // The user scrolls to 1100px; the burst settles and we poll.
//! nav.on_scroll(1000);
//! let viewport = Viewport::new(1100.0, 1280.0, 720.0);
//! let updates = nav.poll(1010, &viewport, &regions, &Chrome, &mut tracer);
//!
//! // The bar pinned (we are past y=200) and section 2 is highlighted.
//! assert!(updates
//!     .iter()
//!     .any(|u| matches!(u, NavUpdate::Sticky(_))));
//! assert!(updates
//!     .iter()
//!     .any(|u| matches!(u, NavUpdate::Highlight { section: Some(2) })));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod breakpoint;
mod layout;
mod navigator;
mod section;
mod trace;

pub use breakpoint::{Breakpoint, MAX_ROW_ITEMS_LARGE, MAX_ROW_ITEMS_XLARGE};
pub use layout::NavLayout;
pub use navigator::{NavOptions, NavUpdate, NavUpdates, PageChrome, SectionNavigator};
pub use section::{Section, SectionFlags};
pub use trace::{NavTraceSink, Tracer};
