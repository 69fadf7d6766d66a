// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track measurements fed by asynchronous resize reports.

/// Receives width reports from the host's resize observation facility.
///
/// Reports are event-driven callbacks with no ordering guarantee relative to
/// gesture or click handling; consumers read the stored widths at the moment
/// of use rather than caching derived layout across event boundaries.
pub trait LayoutObserver {
    /// The scrollable content box resized to `width`.
    fn content_resized(&mut self, width: f64);

    /// The visible viewport box resized to `width`.
    fn viewport_resized(&mut self, width: f64);
}

/// The two scalar measurements that bound scrolling.
///
/// `content_width` is the total width of the scrollable strip and
/// `viewport_width` the width of the visible window onto it. Both start at
/// zero and are updated through [`LayoutObserver`]; non-finite or negative
/// reports are stored as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackMetrics {
    content_width: f64,
    viewport_width: f64,
}

impl TrackMetrics {
    /// Creates metrics with both widths at zero (not yet laid out).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total width of the scrollable strip.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    /// Width of the visible viewport.
    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Sets the content width, sanitizing out-of-range reports.
    pub fn set_content_width(&mut self, width: f64) {
        let width = sanitize(width);
        if self.content_width == width {
            return;
        }
        self.content_width = width;
    }

    /// Sets the viewport width, sanitizing out-of-range reports.
    pub fn set_viewport_width(&mut self, width: f64) {
        let width = sanitize(width);
        if self.viewport_width == width {
            return;
        }
        self.viewport_width = width;
    }

    /// The scroll position at which the end of the content is flush with the
    /// viewport edge.
    ///
    /// Zero when the content fits entirely inside the viewport.
    #[must_use]
    pub fn end_stop(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }
}

impl LayoutObserver for TrackMetrics {
    fn content_resized(&mut self, width: f64) {
        self.set_content_width(width);
    }

    fn viewport_resized(&mut self, width: f64) {
        self.set_viewport_width(width);
    }
}

fn sanitize(width: f64) -> f64 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}
