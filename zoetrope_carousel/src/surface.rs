// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render-surface capability contract.

/// Visual parameters the surface applies to the scrolling strip.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TrackStyle<'a> {
    /// Transform transition duration in milliseconds.
    pub transition_duration_ms: u32,
    /// Inter-item spacing as a length string (e.g. `"0"`, `"1rem"`).
    pub gap: &'a str,
}

/// Applies carousel output to a concrete rendering stack.
///
/// The carousel core is headless: it computes offsets and indicator state
/// and hands them to this trait. A DOM host would translate `set_offset`
/// into a `translateX(-offset)` transform on the strip and mount indicator
/// buttons in a dots row; a test harness can simply record the calls.
///
/// Calls arrive synchronously from within event handling. `set_offset` is
/// invoked both for settled positions and, during a drag, for every move
/// with the live unclamped offset; hosts that animate settling typically
/// suppress their transition while
/// [`Carousel::is_dragging`](crate::Carousel::is_dragging) is `true`.
pub trait RenderSurface {
    /// Positions the strip `offset` layout units past its origin.
    fn set_offset(&mut self, offset: f64);

    /// Applies strip-wide style (transition duration, gap).
    fn apply_track_style(&mut self, style: TrackStyle<'_>);

    /// Removes every mounted indicator control.
    fn clear_indicators(&mut self);

    /// Mounts the indicator control for `index`, with its initial active
    /// state. Indicators are created in index order, one per item.
    fn create_indicator(&mut self, index: usize, active: bool);

    /// Updates the active state of an existing indicator (in a DOM host this
    /// also mirrors the state into `aria-current`).
    fn set_indicator_active(&mut self, index: usize, active: bool);
}
