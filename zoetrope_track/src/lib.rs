// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoetrope_track --heading-base-level=0

//! Zoetrope Track: strip layout and index resolution for a swipe carousel.
//!
//! This crate provides the renderer-agnostic layout core for a horizontally
//! scrolling strip of items indexed `0..len`. It knows nothing about widgets,
//! pointers, or any particular UI stack; hosts feed it measured geometry and
//! it answers "where should the strip sit for item `i`?".
//!
//! The core concepts are:
//!
//! - [`ContentProvider`]: a trait describing the ordered item strip with
//!   per-item left offsets. The items themselves are externally owned; the
//!   carousel only reads their count and horizontal offsets, and re-reads
//!   both at every resolution so content may change at any time.
//! - [`TrackMetrics`]: the two scalar measurements that bound scrolling, the
//!   total content width and the visible viewport width, updated by
//!   asynchronous resize reports through [`LayoutObserver`].
//! - [`clamp_index`] and [`resolve_position`]: pure resolution helpers that
//!   clamp a requested index into content bounds and compute the pixel offset
//!   for it, applying the end-of-content fill clamp.
//!
//! ## Minimal example
//!
//! ```rust
//! use zoetrope_track::{
//!     ContentProvider, FixedPitchContent, TrackMetrics, clamp_index, resolve_position,
//! };
//!
//! // Five items, each 100 logical pixels wide.
//! let mut content = FixedPitchContent::new(5, 100.0);
//!
//! let mut metrics = TrackMetrics::new();
//! metrics.set_content_width(500.0);
//! metrics.set_viewport_width(260.0);
//!
//! // Requests are clamped into content bounds.
//! let index = clamp_index(9, content.len()).unwrap();
//! assert_eq!(index, 4);
//!
//! // With the fill clamp, the last item sits flush against the viewport edge
//! // instead of leaving blank space after it.
//! let resolved = resolve_position(&mut content, &metrics, index, true);
//! assert_eq!(resolved.position, 240.0);
//! assert!(resolved.reached_end);
//! ```
//!
//! All offsets and widths live in a caller-chosen 1D coordinate space
//! (typically logical pixels) and are expected to be finite and non-negative;
//! out-of-range width reports are sanitized to zero. This crate is `no_std`
//! and uses `alloc`.

#![no_std]

extern crate alloc;

mod content;
mod metrics;
mod position;

pub use content::{ContentProvider, FixedPitchContent};
pub use metrics::{LayoutObserver, TrackMetrics};
pub use position::{ResolvedPosition, clamp_index, resolve_position};
