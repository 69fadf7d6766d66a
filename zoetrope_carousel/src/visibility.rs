// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The monotonic log of items that have been scrolled into view.

use alloc::vec::Vec;

use zoetrope_track::ContentProvider;

/// Records which item indices have ever been visible.
///
/// Hosts use this for progressive-rendering decisions such as lazy image
/// loading; the carousel itself makes no loading decisions. The log only
/// grows: an item that was visible once stays recorded even after it scrolls
/// back out of view.
///
/// Indices are kept sorted and deduplicated in a compact `Vec`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityLog {
    shown: Vec<usize>,
}

impl VisibilityLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct items ever shown.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shown.len()
    }

    /// Returns `true` if nothing has been shown yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    /// Returns `true` if `index` has ever been visible.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.shown.binary_search(&index).is_ok()
    }

    /// The shown indices, sorted ascending.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.shown
    }

    /// Records every item whose offset lies within the visible window
    /// `[0, scroll_position + viewport_width)`.
    pub fn record<C: ContentProvider + ?Sized>(
        &mut self,
        content: &mut C,
        scroll_position: f64,
        viewport_width: f64,
    ) {
        let limit = scroll_position + viewport_width;
        for index in 0..content.len() {
            if content.offset_of(index) < limit {
                if let Err(slot) = self.shown.binary_search(&index) {
                    self.shown.insert(slot, index);
                }
            }
        }
    }
}
