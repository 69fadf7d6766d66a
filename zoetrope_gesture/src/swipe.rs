// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe tracking: live drag offsets and the threshold commit decision.

use kurbo::Point;

/// Direction a committed swipe moves through the strip.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwipeDirection {
    /// Toward higher indices (the pointer traveled left).
    Forward,
    /// Toward lower indices (the pointer traveled right).
    Backward,
}

/// Decision reported when a swipe is released.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwipeOutcome {
    /// Travel stayed within the threshold; the strip settles back onto the
    /// item it started from.
    Settle,
    /// Travel crossed the threshold; the strip advances one item in the
    /// given direction (subject to content bounds).
    Commit(SwipeDirection),
}

#[derive(Clone, Copy, Debug)]
struct ActiveSwipe {
    /// Pointer X at the down event.
    start_x: f64,
    /// Strip offset the drag builds on.
    base_offset: f64,
    /// `start_x - current_x`; positive when the pointer traveled left.
    delta: f64,
}

/// Tracks a single-pointer horizontal swipe with a commit threshold.
///
/// Exactly one drag pointer and one scroll axis: a second `begin` while
/// dragging restarts the gesture from the new position, matching the
/// behavior of pointer-capture hosts that only deliver one active pointer.
#[derive(Clone, Copy, Debug)]
pub struct SwipeTracker {
    threshold: f64,
    active: Option<ActiveSwipe>,
}

impl SwipeTracker {
    /// Creates an idle tracker with the given commit threshold.
    ///
    /// The threshold is the minimum pointer travel, in the strip's layout
    /// units, for a release to count as next/previous rather than snap back.
    /// Non-finite or negative thresholds are treated as `0.0`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: sanitize(threshold),
            active: None,
        }
    }

    /// The commit threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Changes the commit threshold; takes effect immediately, including for
    /// a drag already in progress.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = sanitize(threshold);
    }

    /// Returns `true` while a swipe is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Starts tracking from `pos`, building on `base_offset` (the strip's
    /// settled scroll position at the down event).
    ///
    /// Only `pos.x` participates; the Y coordinate is ignored.
    pub fn begin(&mut self, pos: Point, base_offset: f64) {
        self.active = Some(ActiveSwipe {
            start_x: pos.x,
            base_offset,
            delta: 0.0,
        });
    }

    /// Advances the drag to `pos`, returning the live strip offset.
    ///
    /// The offset is `base_offset + (start_x - pos.x)`, unclamped: the strip
    /// follows the pointer 1:1 even past content bounds, and only the commit
    /// decision at release pulls it back in range. Returns `None` while idle
    /// so that stray move events are no-ops.
    pub fn update(&mut self, pos: Point) -> Option<f64> {
        let active = self.active.as_mut()?;
        active.delta = active.start_x - pos.x;
        Some(active.base_offset + active.delta)
    }

    /// Travel accumulated since the down event, or `None` while idle.
    #[must_use]
    pub fn delta(&self) -> Option<f64> {
        self.active.map(|active| active.delta)
    }

    /// Returns `true` when the accumulated travel exceeds the threshold.
    #[must_use]
    pub fn passed_threshold(&self) -> bool {
        match self.active {
            Some(active) => active.delta.abs() > self.threshold,
            None => false,
        }
    }

    /// Ends the swipe and reports the commit decision.
    ///
    /// Returns `None` while idle so that stray release events are no-ops.
    /// Otherwise the tracker resets to idle and reports
    /// [`SwipeOutcome::Commit`] when the travel exceeded the threshold, with
    /// the direction taken from the travel's sign, or
    /// [`SwipeOutcome::Settle`] when it did not.
    pub fn release(&mut self) -> Option<SwipeOutcome> {
        let active = self.active.take()?;
        if active.delta.abs() > self.threshold {
            let direction = if active.delta > 0.0 {
                SwipeDirection::Forward
            } else {
                SwipeDirection::Backward
            };
            Some(SwipeOutcome::Commit(direction))
        } else {
            Some(SwipeOutcome::Settle)
        }
    }

    /// Drops any in-progress swipe without producing an outcome.
    ///
    /// Used on teardown so a torn-down instance cannot commit a stale drag.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}

fn sanitize(threshold: f64) -> f64 {
    if threshold.is_finite() && threshold > 0.0 {
        threshold
    } else {
        0.0
    }
}
