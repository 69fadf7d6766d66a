// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paging-dot synchronization.
//!
//! Indicators are derived state: one control per item, active exactly when
//! its index equals the current index. They are destroyed and rebuilt, never
//! incrementally patched, whenever item count or the `show_dots` setting
//! changes; only the active flag is updated in place between rebuilds.

use crate::surface::RenderSurface;

/// Mirrors the current index onto the surface's indicator controls.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct IndicatorSync {
    count: usize,
    visible: bool,
}

impl IndicatorSync {
    /// Destroys all indicator controls and, when `visible`, creates one per
    /// item with the active flag derived from `active`.
    pub(crate) fn rebuild<S: RenderSurface>(
        &mut self,
        surface: &mut S,
        count: usize,
        active: usize,
        visible: bool,
    ) {
        surface.clear_indicators();
        self.visible = visible;
        self.count = if visible { count } else { 0 };
        for index in 0..self.count {
            surface.create_indicator(index, index == active);
        }
    }

    /// Re-derives every indicator's active flag from `active`.
    pub(crate) fn refresh<S: RenderSurface>(&mut self, surface: &mut S, active: usize) {
        if !self.visible {
            return;
        }
        for index in 0..self.count {
            surface.set_indicator_active(index, index == active);
        }
    }

    /// Number of mounted indicator controls.
    pub(crate) fn count(&self) -> usize {
        self.count
    }
}
