// Copyright 2026 the Cairn Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigable page sections and their display flags.

use crate::Breakpoint;

bitflags::bitflags! {
    /// Per-section display flags.
    ///
    /// Exclusion hides a section's nav item at particular breakpoints while
    /// its waypoint stays registered, so the highlight logic has to resolve
    /// an active-but-hidden section to a visible neighbor.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SectionFlags: u8 {
        /// Hidden from the nav on Large and XLarge breakpoints.
        const EXCLUDED_LARGE = 0b0000_0001;
        /// Hidden from the nav on the Small breakpoint.
        const EXCLUDED_SMALL = 0b0000_0010;
    }
}

impl SectionFlags {
    /// Returns `true` if a section with these flags is hidden from the nav
    /// at `breakpoint`.
    #[must_use]
    pub const fn is_excluded_at(self, breakpoint: Breakpoint) -> bool {
        match breakpoint {
            Breakpoint::Small => self.contains(Self::EXCLUDED_SMALL),
            Breakpoint::Large | Breakpoint::XLarge => self.contains(Self::EXCLUDED_LARGE),
        }
    }
}

/// One navigable section of a page.
///
/// `key` doubles as the waypoint key and the nav-item identity the host uses
/// to apply [`NavUpdate::Highlight`](crate::NavUpdate::Highlight)s. Section
/// order must follow document order; the navigator relies on it for
/// tie-breaking and for the excluded-section fallback walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section<K> {
    key: K,
    flags: SectionFlags,
}

impl<K> Section<K> {
    /// Creates a section shown at every breakpoint.
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self {
            key,
            flags: SectionFlags::empty(),
        }
    }

    /// Replaces the section's flags.
    #[must_use]
    pub const fn with_flags(mut self, flags: SectionFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Marks the section hidden on Large/XLarge (the common exclusion).
    #[must_use]
    pub const fn excluded_on_large(self) -> Self {
        self.with_flags(SectionFlags::EXCLUDED_LARGE)
    }

    /// The section's key.
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// The section's display flags.
    #[must_use]
    pub const fn flags(&self) -> SectionFlags {
        self.flags
    }

    /// Returns `true` if this section's nav item is hidden at `breakpoint`.
    #[must_use]
    pub const fn is_excluded_at(&self, breakpoint: Breakpoint) -> bool {
        self.flags.is_excluded_at(breakpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::{Section, SectionFlags};
    use crate::Breakpoint;

    #[test]
    fn exclusion_is_breakpoint_scoped() {
        let section = Section::new(1_u32).excluded_on_large();
        assert!(section.is_excluded_at(Breakpoint::Large));
        assert!(section.is_excluded_at(Breakpoint::XLarge));
        // Hide-on-wide-screens leaves Small alone.
        assert!(!section.is_excluded_at(Breakpoint::Small));

        let mobile_hidden = Section::new(2_u32).with_flags(SectionFlags::EXCLUDED_SMALL);
        assert!(mobile_hidden.is_excluded_at(Breakpoint::Small));
        assert!(!mobile_hidden.is_excluded_at(Breakpoint::Large));
    }
}
