// Copyright 2026 the Cairn Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row vs dropdown layout state.

/// Layout state of the section nav bar.
///
/// `Row` shows every visible item side by side. When there are too many
/// items for the breakpoint (or the breakpoint is Small), the bar collapses
/// into a dropdown whose expanded/collapsed split is user-driven.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavLayout {
    /// All visible items in a row.
    #[default]
    Row,
    /// Dropdown, closed.
    DropdownCollapsed,
    /// Dropdown, open.
    DropdownExpanded,
}

impl NavLayout {
    /// Returns `true` in either dropdown state.
    #[must_use]
    pub const fn is_dropdown(self) -> bool {
        matches!(self, Self::DropdownCollapsed | Self::DropdownExpanded)
    }

    /// Returns `true` only when the dropdown is open.
    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::DropdownExpanded)
    }
}
