// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller: one instance per mounted component.

use zoetrope_gesture::{SwipeDirection, SwipeOutcome, SwipeTracker};
use zoetrope_track::{
    ContentProvider, LayoutObserver, TrackMetrics, clamp_index, resolve_position,
};

use crate::config::{CarouselConfig, presence};
use crate::events::{InputEvent, NavKey};
use crate::indicator::IndicatorSync;
use crate::surface::RenderSurface;
use crate::visibility::VisibilityLog;

/// A headless, horizontally swipeable carousel.
///
/// The carousel owns the gesture-and-layout state machine and nothing else:
/// item content is read through a [`ContentProvider`], visuals are applied
/// through a [`RenderSurface`], and resize reports arrive through
/// [`LayoutObserver`]. All mutation happens synchronously inside
/// [`Self::handle_event`], [`Self::set_index`], the resize reports, and the
/// lifecycle calls; there is no background work.
///
/// Input events are ignored until [`Self::mount`] and again after
/// [`Self::unmount`], so a torn-down instance never reacts to a listener the
/// host has not detached yet.
#[derive(Clone, Debug)]
pub struct Carousel<C, S> {
    content: C,
    surface: S,
    config: CarouselConfig,
    metrics: TrackMetrics,
    swipe: SwipeTracker,
    current_index: usize,
    scroll_position: f64,
    reached_end: bool,
    shown: VisibilityLog,
    indicators: IndicatorSync,
    mounted: bool,
}

/// Snapshot of carousel state for debugging and inspection.
#[derive(Clone, Debug)]
pub struct CarouselDebugInfo {
    /// Resolved item index.
    pub current_index: usize,
    /// Settled scroll position, in layout units.
    pub scroll_position: f64,
    /// Whether the last settle reached the end stop.
    pub reached_end: bool,
    /// Whether a drag is in progress.
    pub dragging: bool,
    /// Item count at the time of the snapshot.
    pub item_count: usize,
    /// Total content width.
    pub content_width: f64,
    /// Visible viewport width.
    pub viewport_width: f64,
    /// Number of distinct items ever shown.
    pub shown_count: usize,
    /// Number of mounted indicator controls.
    pub indicator_count: usize,
    /// Whether the instance is mounted.
    pub mounted: bool,
}

impl<C: ContentProvider, S: RenderSurface> Carousel<C, S> {
    /// Creates an unmounted carousel over `content` and `surface`.
    #[must_use]
    pub fn new(content: C, surface: S, config: CarouselConfig) -> Self {
        let swipe = SwipeTracker::new(config.threshold);
        Self {
            content,
            surface,
            config,
            metrics: TrackMetrics::new(),
            swipe,
            current_index: 0,
            scroll_position: 0.0,
            reached_end: false,
            shown: VisibilityLog::new(),
            indicators: IndicatorSync::default(),
            mounted: false,
        }
    }

    /// Attach-time initialization.
    ///
    /// Applies the track style, settles on the current index, and builds the
    /// indicator row. The host attaches the listeners in
    /// [`bindings`](crate::bindings) alongside this call.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.surface.apply_track_style(self.config.track_style());
        self.settle_on(self.current_index);
        self.rebuild_indicators();
    }

    /// Detach-time teardown, mirroring [`Self::mount`].
    ///
    /// Drops any in-progress drag; the host detaches the same listener table
    /// it attached. Further input events are ignored until remounted.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.swipe.cancel();
    }

    /// Returns `true` while mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Resolved item index.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Settled scroll position, in layout units.
    ///
    /// During a drag the surface is fed live offsets that may differ from
    /// this value; it updates when the drag settles.
    #[must_use]
    pub fn scroll_position(&self) -> f64 {
        self.scroll_position
    }

    /// Whether the last settle reached the end stop.
    #[must_use]
    pub fn reached_end(&self) -> bool {
        self.reached_end
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.swipe.is_dragging()
    }

    /// The log of items that have ever been visible.
    #[must_use]
    pub fn shown(&self) -> &VisibilityLog {
        &self.shown
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The current track measurements.
    #[must_use]
    pub fn metrics(&self) -> TrackMetrics {
        self.metrics
    }

    /// Shared access to the content model.
    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Mutable access to the content model.
    ///
    /// After mutating the strip, call [`Self::content_changed`] so bounds and
    /// indicators are re-derived.
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Shared access to the render surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the render surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Moves to `index`, clamped into content bounds.
    ///
    /// A request that resolves to the current index is a strict no-op: no
    /// state changes and nothing is re-applied to the surface, so no
    /// re-animation triggers. Requests against empty content are ignored.
    pub fn set_index(&mut self, index: i64) {
        let Some(clamped) = clamp_index(index, self.content.len()) else {
            return;
        };
        if clamped == self.current_index {
            return;
        }
        self.current_index = clamped;
        self.settle_on(clamped);
        self.indicators.refresh(&mut self.surface, clamped);
    }

    /// Replaces the configuration and re-derives dependent visual state.
    ///
    /// The gesture threshold takes effect immediately. When mounted, the
    /// track style is re-applied, and a `show_dots` change tears down and
    /// rebuilds the indicator row (a runtime toggle rebuilds rather than
    /// hides).
    pub fn apply_configuration(&mut self, config: CarouselConfig) {
        let dots_toggled = config.show_dots != self.config.show_dots;
        self.swipe.set_threshold(config.threshold);
        self.config = config;
        if !self.mounted {
            return;
        }
        self.surface.apply_track_style(self.config.track_style());
        if dots_toggled {
            self.rebuild_indicators();
        }
    }

    /// Applies a markup attribute change.
    ///
    /// Only the attributes in [`observed_attributes`](crate::observed_attributes)
    /// are meaningful; `"showdots"` uses presence semantics. Anything else is
    /// ignored.
    pub fn attribute_changed(&mut self, name: &str, value: Option<&str>) {
        if name != "showdots" {
            return;
        }
        let show_dots = presence(value);
        if show_dots == self.config.show_dots {
            return;
        }
        let mut config = self.config.clone();
        config.show_dots = show_dots;
        self.apply_configuration(config);
    }

    /// Re-derives bounds after the slotted content changed.
    ///
    /// Clamps the current index into the new bounds, settles on it, and
    /// rebuilds the indicator row to match the new item count.
    pub fn content_changed(&mut self) {
        if !self.mounted {
            return;
        }
        let len = self.content.len();
        self.current_index = match clamp_index(index_to_i64(self.current_index), len) {
            Some(clamped) => clamped,
            None => 0,
        };
        self.settle_on(self.current_index);
        self.rebuild_indicators();
    }

    /// Feeds one translated host event through the state machine.
    ///
    /// Ignored while unmounted. Out-of-sequence gesture events (a move or
    /// release with no preceding press, a press outside the strip) are
    /// silently dropped.
    pub fn handle_event(&mut self, event: InputEvent) {
        if !self.mounted {
            return;
        }
        match event {
            InputEvent::PointerDown { position, in_track } => {
                if !in_track {
                    return;
                }
                self.swipe.begin(position, self.scroll_position);
            }
            InputEvent::PointerMove { position } => {
                // The strip follows the pointer 1:1, unclamped; bounds apply
                // only when the release settles.
                if let Some(offset) = self.swipe.update(position) {
                    self.surface.set_offset(offset);
                }
            }
            InputEvent::PointerUp => match self.swipe.release() {
                None => {}
                Some(SwipeOutcome::Commit(direction)) => self.adjust_position(Some(direction)),
                Some(SwipeOutcome::Settle) => self.adjust_position(None),
            },
            InputEvent::KeyDown { key, in_track } => {
                if !in_track {
                    return;
                }
                let step = match key {
                    NavKey::ArrowLeft => -1,
                    NavKey::ArrowRight => 1,
                };
                self.set_index(index_to_i64(self.current_index) + step);
            }
            InputEvent::IndexChange { change } => {
                let Some(change) = change else {
                    return;
                };
                if !change.is_finite() {
                    return;
                }
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "external payloads may be fractional; truncation toward zero is intended and the result is clamped"
                )]
                let requested = change as i64;
                self.set_index(requested);
            }
            InputEvent::IndicatorPress { index } => {
                // A dot press jumps straight to the index, bypassing the
                // drag threshold.
                self.set_index(index_to_i64(index));
            }
            InputEvent::ContentChange => self.content_changed(),
        }
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CarouselDebugInfo {
        CarouselDebugInfo {
            current_index: self.current_index,
            scroll_position: self.scroll_position,
            reached_end: self.reached_end,
            dragging: self.swipe.is_dragging(),
            item_count: self.content.len(),
            content_width: self.metrics.content_width(),
            viewport_width: self.metrics.viewport_width(),
            shown_count: self.shown.len(),
            indicator_count: self.indicators.count(),
            mounted: self.mounted,
        }
    }

    /// Settles after a release: re-reads the strip, optionally steps the
    /// index one item in the drag direction, clamps, and applies.
    fn adjust_position(&mut self, direction: Option<SwipeDirection>) {
        let len = self.content.len();
        let Some(mut target) = clamp_index(index_to_i64(self.current_index), len) else {
            return;
        };
        if let Some(direction) = direction {
            let step = match direction {
                SwipeDirection::Forward => 1,
                SwipeDirection::Backward => -1,
            };
            if let Some(stepped) = clamp_index(index_to_i64(target) + step, len) {
                target = stepped;
            }
        }
        self.current_index = target;
        self.settle_on(target);
        self.indicators.refresh(&mut self.surface, target);
    }

    /// Resolves `index` against the current layout and applies the result.
    fn settle_on(&mut self, index: usize) {
        let resolved = resolve_position(&mut self.content, &self.metrics, index, self.config.fill);
        self.scroll_position = resolved.position;
        self.reached_end = resolved.reached_end;
        self.surface.set_offset(resolved.position);
        self.shown.record(
            &mut self.content,
            self.scroll_position,
            self.metrics.viewport_width(),
        );
    }

    fn rebuild_indicators(&mut self) {
        self.indicators.rebuild(
            &mut self.surface,
            self.content.len(),
            self.current_index,
            self.config.show_dots,
        );
    }
}

impl<C: ContentProvider, S: RenderSurface> LayoutObserver for Carousel<C, S> {
    fn content_resized(&mut self, width: f64) {
        self.metrics.content_resized(width);
    }

    fn viewport_resized(&mut self, width: f64) {
        self.metrics.viewport_resized(width);
    }
}

fn index_to_i64(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}
