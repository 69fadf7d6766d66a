// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index clamping and scroll-position resolution.

use crate::content::ContentProvider;
use crate::metrics::TrackMetrics;

/// Outcome of resolving a target index against the current layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedPosition {
    /// Offset to apply to the strip, in layout units.
    pub position: f64,
    /// Whether the unclamped target sits at or past the end stop.
    ///
    /// This is reported independently of the fill clamp; fill only affects
    /// whether `position` itself was pulled back to the end stop.
    pub reached_end: bool,
}

/// Clamps a requested index into `[0, len - 1]`.
///
/// Returns `None` when the strip is empty; requests against empty content
/// have no valid index and callers short-circuit to a safe no-op.
#[must_use]
pub fn clamp_index(requested: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let max = i64::try_from(len - 1).unwrap_or(i64::MAX);
    let clamped = requested.clamp(0, max);
    Some(usize::try_from(clamped).unwrap_or(len - 1))
}

/// Computes the scroll position for the item at `index`.
///
/// The raw target is the item's left offset. When `fill` is set and the
/// target would overshoot [`TrackMetrics::end_stop`], the position is clamped
/// to exactly the end stop so the last item's trailing edge lines up with the
/// viewport edge instead of exposing empty space.
///
/// An out-of-range `index` (including any index against empty content)
/// resolves to the strip origin.
pub fn resolve_position<C: ContentProvider + ?Sized>(
    content: &mut C,
    metrics: &TrackMetrics,
    index: usize,
    fill: bool,
) -> ResolvedPosition {
    if index >= content.len() {
        return ResolvedPosition {
            position: 0.0,
            reached_end: false,
        };
    }
    let target = content.offset_of(index);
    let end = metrics.end_stop();
    let reached_end = target >= end;
    let position = if fill && reached_end { end } else { target };
    ResolvedPosition {
        position,
        reached_end,
    }
}
