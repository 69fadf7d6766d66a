// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration and markup-attribute parsing.

use alloc::string::String;

use crate::surface::TrackStyle;

/// Default inter-item spacing.
pub const DEFAULT_GAP: &str = "0";

/// Default transform transition duration, in milliseconds.
pub const DEFAULT_TRANSITION_MS: u32 = 300;

/// Default commit threshold, in layout units.
pub const DEFAULT_COMMIT_THRESHOLD: f64 = 30.0;

/// Configuration for a [`Carousel`](crate::Carousel).
///
/// Applied as a whole through
/// [`Carousel::apply_configuration`](crate::Carousel::apply_configuration),
/// which re-derives the dependent visual state (track style, gesture
/// threshold, indicator row) on the render surface.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Inter-item spacing, as a length string passed through to the surface.
    pub gap: String,
    /// Transform transition duration in milliseconds.
    pub transition_duration_ms: u32,
    /// Minimum pointer travel, in layout units, before a release commits to
    /// the adjacent item instead of snapping back.
    pub threshold: f64,
    /// Clamp the final item flush against the viewport edge instead of
    /// leaving empty space after it.
    pub fill: bool,
    /// Render the paging-dot indicator row.
    pub show_dots: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            gap: String::from(DEFAULT_GAP),
            transition_duration_ms: DEFAULT_TRANSITION_MS,
            threshold: DEFAULT_COMMIT_THRESHOLD,
            fill: true,
            show_dots: false,
        }
    }
}

impl CarouselConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The track style this configuration asks the surface to apply.
    #[must_use]
    pub fn track_style(&self) -> TrackStyle<'_> {
        TrackStyle {
            transition_duration_ms: self.transition_duration_ms,
            gap: &self.gap,
        }
    }
}

/// Markup attributes the host should observe and forward to
/// [`Carousel::attribute_changed`](crate::Carousel::attribute_changed).
#[must_use]
pub const fn observed_attributes() -> &'static [&'static str] {
    &["showdots"]
}

/// Presence-style boolean attribute parsing.
///
/// The attribute being present means `true` regardless of its value
/// (including the empty string); absent means `false`.
#[must_use]
pub fn presence(value: Option<&str>) -> bool {
    value.is_some()
}
