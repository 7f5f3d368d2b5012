// Copyright 2026 the Cairn Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A synthetic page driving the full navigator stack.
//!
//! This example plays the host: it owns a fake page (section regions, a nav
//! bar, a footer), feeds scroll/resize/press events into a
//! `SectionNavigator`, and prints every update and trace event the
//! navigator hands back.
//!
//! Run:
//! - `cargo run -p cairn_demos --example section_nav`

use cairn_event_state::{PressZone, classify_press};
use cairn_nav::{
    NavLayout, NavOptions, NavTraceSink, NavUpdate, PageChrome, Section, SectionNavigator, Tracer,
};
use cairn_sticky::StickyMode;
use cairn_viewport::Viewport;
use cairn_waypoint::WaypointEvent;
use hashbrown::HashMap;
use kurbo::Rect;

/// Key type for this page: section ids.
type SectionId = u32;

/// The fixed furniture of the fake page.
struct Page {
    nav_region: Rect,
    footer: Rect,
    content_height: f64,
}

impl PageChrome for Page {
    fn nav_extent(&self) -> f64 {
        self.nav_region.height()
    }

    fn footer_region(&self) -> Option<Rect> {
        Some(self.footer)
    }

    fn content_extent(&self) -> f64 {
        self.content_height
    }
}

/// Prints navigator internals as they change.
struct PrintSink;

impl NavTraceSink<SectionId> for PrintSink {
    fn waypoint_event(&mut self, event: WaypointEvent<SectionId>) {
        println!("    trace: waypoint {event:?}");
    }

    fn sticky_changed(&mut self, mode: StickyMode) {
        println!("    trace: sticky -> {mode:?}");
    }

    fn layout_changed(&mut self, layout: NavLayout) {
        println!("    trace: layout -> {layout:?}");
    }
}

fn apply(updates: &[NavUpdate<SectionId>]) {
    for update in updates {
        match update {
            NavUpdate::Highlight { section } => println!("  highlight {section:?}"),
            NavUpdate::Layout(layout) => println!("  layout {layout:?}"),
            NavUpdate::Sticky(change) => println!(
                "  sticky {:?} (pin {:?}, placeholder {:?})",
                change.mode, change.pinned_top, change.placeholder
            ),
            NavUpdate::ScrollTo(animation) => {
                // A real host would sample this per frame; show a few ticks.
                print!("  scroll-to {}:", animation.target());
                for elapsed in [0_u64, 125, 250, 375, 500] {
                    print!(" {:.0}", animation.sample(elapsed));
                }
                println!();
            }
        }
    }
}

fn main() {
    // Nine sections stacked down a 7000px document; section 5 is hidden
    // from the nav on wide screens.
    let mut sections: Vec<Section<SectionId>> = (1..=9).map(Section::new).collect();
    sections[4] = sections[4].excluded_on_large();

    let mut regions: HashMap<SectionId, Rect> = HashMap::new();
    for id in 1..=9_u32 {
        let top = 250.0 + f64::from(id - 1) * 700.0;
        regions.insert(id, Rect::new(0.0, top, 1280.0, top + 700.0));
    }

    let page = Page {
        nav_region: Rect::new(0.0, 200.0, 1280.0, 250.0),
        footer: Rect::new(0.0, 6550.0, 1280.0, 7000.0),
        content_height: 7000.0,
    };

    let mut sink = PrintSink;
    let mut tracer = Tracer::new(&mut sink);
    let mut nav = SectionNavigator::new(NavOptions {
        absolute_at_footer: true,
        ..NavOptions::default()
    });

    println!("mount (desktop, 1280px wide)");
    let updates = nav.resync(sections, page.nav_region, 1280.0, &mut tracer);
    apply(&updates);

    // Scroll down the page in bursts; each burst settles before the poll.
    let mut now = 0_u64;
    for scroll_top in [0.0, 400.0, 1500.0, 3000.0, 6280.0] {
        println!("scroll to {scroll_top}");
        let viewport = Viewport::new(scroll_top, 1280.0, 720.0);
        for _ in 0..5 {
            now += 2;
            nav.on_scroll(now);
        }
        now += 10;
        let updates = nav.poll(now, &viewport, &regions, &page, &mut tracer);
        apply(&updates);
    }

    // Rotate to a phone-sized viewport: the bar becomes a dropdown.
    println!("resize to 390px");
    now += 100;
    nav.on_resize(now, 390.0);
    now += 10;
    let viewport = Viewport::new(6280.0, 390.0, 844.0);
    let updates = nav.poll(now, &viewport, &regions, &page, &mut tracer);
    apply(&updates);

    // Open the dropdown, then press outside of it.
    println!("toggle the dropdown");
    apply(&nav.toggle(&mut tracer));

    println!("press on the page body");
    let zone = classify_press(&"dropdown", Some(&"toggle"), &["article", "main", "root"]);
    assert_eq!(zone, PressZone::Outside);
    apply(&nav.on_press(zone, &mut tracer));

    // Follow a nav item back to the second section.
    println!("navigate to section 2");
    let updates = nav.navigate_to(&2, &viewport, &regions, &page, &mut tracer);
    apply(&updates);
}
