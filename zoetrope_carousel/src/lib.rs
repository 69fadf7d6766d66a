// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoetrope_carousel --heading-base-level=0

//! Zoetrope Carousel: a headless, horizontally swipeable carousel controller.
//!
//! This crate ties the Zoetrope building blocks together into one component
//! instance: the [`SwipeTracker`] gesture machine from `zoetrope_gesture`,
//! the layout resolution from `zoetrope_track`, paging-dot synchronization,
//! and a monotonic visibility log for lazy-loading hosts.
//!
//! The controller is renderer-agnostic. It depends on three capability
//! contracts instead of any concrete UI stack:
//!
//! - [`ContentProvider`] reports the ordered item strip and each item's
//!   horizontal offset (re-read at every resolution, so content may change
//!   at any time).
//! - [`RenderSurface`] applies computed offsets, track style, and indicator
//!   controls to whatever actually renders.
//! - [`LayoutObserver`] receives the host's asynchronous width reports for
//!   the content strip and the viewport.
//!
//! Hosts attach the listeners named by [`bindings`] on
//! [`Carousel::mount`], translate their platform events into
//! [`InputEvent`]s, and detach the same table on [`Carousel::unmount`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use zoetrope_carousel::{
//!     Carousel, CarouselConfig, FixedPitchContent, InputEvent, LayoutObserver, RenderSurface,
//!     TrackStyle,
//! };
//!
//! // A surface that just remembers the last applied offset.
//! #[derive(Default)]
//! struct Recorder {
//!     offset: f64,
//! }
//!
//! impl RenderSurface for Recorder {
//!     fn set_offset(&mut self, offset: f64) {
//!         self.offset = offset;
//!     }
//!     fn apply_track_style(&mut self, _style: TrackStyle<'_>) {}
//!     fn clear_indicators(&mut self) {}
//!     fn create_indicator(&mut self, _index: usize, _active: bool) {}
//!     fn set_indicator_active(&mut self, _index: usize, _active: bool) {}
//! }
//!
//! // Five 100px items in a 260px viewport.
//! let content = FixedPitchContent::new(5, 100.0);
//! let mut carousel = Carousel::new(content, Recorder::default(), CarouselConfig::new());
//! carousel.mount();
//! carousel.content_resized(500.0);
//! carousel.viewport_resized(260.0);
//!
//! // Drag 50px to the left: past the 30px threshold, so the release
//! // commits to the next item.
//! carousel.handle_event(InputEvent::PointerDown {
//!     position: Point::new(200.0, 20.0),
//!     in_track: true,
//! });
//! carousel.handle_event(InputEvent::PointerMove {
//!     position: Point::new(150.0, 20.0),
//! });
//! carousel.handle_event(InputEvent::PointerUp);
//!
//! assert_eq!(carousel.current_index(), 1);
//! assert_eq!(carousel.surface().offset, 100.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod config;
mod events;
mod indicator;
mod registry;
mod surface;
mod visibility;

pub use carousel::{Carousel, CarouselDebugInfo};
pub use config::{
    CarouselConfig, DEFAULT_COMMIT_THRESHOLD, DEFAULT_GAP, DEFAULT_TRANSITION_MS,
    observed_attributes, presence,
};
pub use events::{BindTarget, EventBinding, EventKind, InputEvent, NavKey, bindings};
pub use registry::{ComponentRegistry, DuplicateDefinition};
pub use surface::{RenderSurface, TrackStyle};
pub use visibility::VisibilityLog;

pub use zoetrope_gesture::{SwipeDirection, SwipeOutcome, SwipeTracker};
pub use zoetrope_track::{
    ContentProvider, FixedPitchContent, LayoutObserver, ResolvedPosition, TrackMetrics,
    clamp_index, resolve_position,
};
