// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `zoetrope_carousel` crate.
//!
//! These drive a full `Carousel` against a recording surface and a
//! fixed-pitch content model, with a focus on how gestures, index
//! resolution, indicators, and the visibility log interact.

use kurbo::Point;
use zoetrope_carousel::{
    Carousel, CarouselConfig, FixedPitchContent, InputEvent, LayoutObserver, NavKey,
    RenderSurface, TrackStyle, bindings,
};

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Offset(f64),
    Style { transition_ms: u32, gap: String },
    ClearIndicators,
    CreateIndicator { index: usize, active: bool },
    SetIndicatorActive { index: usize, active: bool },
}

/// Records every surface call and mirrors the mounted dot row.
#[derive(Debug, Default)]
struct RecordingSurface {
    ops: Vec<Op>,
    dots: Vec<bool>,
}

impl RenderSurface for RecordingSurface {
    fn set_offset(&mut self, offset: f64) {
        self.ops.push(Op::Offset(offset));
    }

    fn apply_track_style(&mut self, style: TrackStyle<'_>) {
        self.ops.push(Op::Style {
            transition_ms: style.transition_duration_ms,
            gap: style.gap.to_string(),
        });
    }

    fn clear_indicators(&mut self) {
        self.dots.clear();
        self.ops.push(Op::ClearIndicators);
    }

    fn create_indicator(&mut self, index: usize, active: bool) {
        assert_eq!(index, self.dots.len(), "dots are created in index order");
        self.dots.push(active);
        self.ops.push(Op::CreateIndicator { index, active });
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        self.dots[index] = active;
        self.ops.push(Op::SetIndicatorActive { index, active });
    }
}

impl RecordingSurface {
    fn last_offset(&self) -> Option<f64> {
        self.ops.iter().rev().find_map(|op| match op {
            Op::Offset(offset) => Some(*offset),
            _ => None,
        })
    }

    fn active_dots(&self) -> Vec<usize> {
        self.dots
            .iter()
            .enumerate()
            .filter_map(|(index, &active)| active.then_some(index))
            .collect()
    }
}

/// A mounted 5-item carousel: 100px pitch, 500px content, 260px viewport.
fn mounted(config: CarouselConfig) -> Carousel<FixedPitchContent, RecordingSurface> {
    let mut carousel = Carousel::new(
        FixedPitchContent::new(5, 100.0),
        RecordingSurface::default(),
        config,
    );
    carousel.content_resized(500.0);
    carousel.viewport_resized(260.0);
    carousel.mount();
    carousel
}

fn drag(carousel: &mut Carousel<FixedPitchContent, RecordingSurface>, from_x: f64, to_x: f64) {
    carousel.handle_event(InputEvent::PointerDown {
        position: Point::new(from_x, 20.0),
        in_track: true,
    });
    carousel.handle_event(InputEvent::PointerMove {
        position: Point::new(to_x, 20.0),
    });
    carousel.handle_event(InputEvent::PointerUp);
}

#[test]
fn mount_applies_style_and_settles_at_the_origin() {
    let carousel = mounted(CarouselConfig::new());
    assert!(carousel.is_mounted());
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.scroll_position(), 0.0);

    let surface = carousel.surface();
    assert!(surface.ops.contains(&Op::Style {
        transition_ms: 300,
        gap: "0".to_string(),
    }));
    assert_eq!(surface.last_offset(), Some(0.0));
    // Dots are off by default.
    assert!(surface.dots.is_empty());
}

#[test]
fn set_index_clamps_every_request_into_bounds() {
    let mut carousel = mounted(CarouselConfig::new());

    let requests: [(i64, usize); 6] = [
        (3, 3),
        (-2, 0),
        (99, 4),
        (1, 1),
        (i64::MIN, 0),
        (i64::MAX, 4),
    ];
    for (requested, resolved) in requests {
        carousel.set_index(requested);
        assert_eq!(carousel.current_index(), resolved, "set_index({requested})");
    }
}

#[test]
fn set_index_to_the_current_index_is_a_strict_no_op() {
    let mut carousel = mounted(CarouselConfig::new());
    carousel.set_index(2);

    carousel.surface_mut().ops.clear();
    carousel.set_index(2);
    assert!(
        carousel.surface().ops.is_empty(),
        "no surface traffic, so nothing re-animates"
    );
}

#[test]
fn a_drag_within_the_threshold_snaps_back() {
    let mut carousel = mounted(CarouselConfig::new());
    carousel.set_index(1);

    // 10px of travel against a 30px threshold.
    drag(&mut carousel, 200.0, 190.0);
    assert_eq!(carousel.current_index(), 1);
    // The strip is put back at the resting position of the same index.
    assert_eq!(carousel.surface().last_offset(), Some(100.0));
    assert!(!carousel.is_dragging());
}

#[test]
fn a_drag_past_the_threshold_advances_one_item() {
    let mut carousel = mounted(CarouselConfig::new());

    // 50px leftward travel: commit forward.
    drag(&mut carousel, 200.0, 150.0);
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.scroll_position(), 100.0);

    // 50px rightward travel: commit backward.
    drag(&mut carousel, 150.0, 200.0);
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.scroll_position(), 0.0);
}

#[test]
fn a_committed_drag_is_clamped_at_the_strip_bounds() {
    let mut carousel = mounted(CarouselConfig::new());

    // Backward from index 0 stays at 0.
    drag(&mut carousel, 100.0, 200.0);
    assert_eq!(carousel.current_index(), 0);

    // Forward from the last index stays on the last index.
    carousel.set_index(4);
    drag(&mut carousel, 200.0, 100.0);
    assert_eq!(carousel.current_index(), 4);
}

#[test]
fn the_strip_follows_the_pointer_unclamped_during_a_drag() {
    let mut carousel = mounted(CarouselConfig::new());
    carousel.set_index(4);
    let resting = carousel.scroll_position();

    carousel.handle_event(InputEvent::PointerDown {
        position: Point::new(300.0, 20.0),
        in_track: true,
    });
    carousel.handle_event(InputEvent::PointerMove {
        position: Point::new(100.0, 20.0),
    });

    // 200px past the last resting position: no clamp until release.
    assert_eq!(carousel.surface().last_offset(), Some(resting + 200.0));
    assert!(carousel.is_dragging());

    carousel.handle_event(InputEvent::PointerUp);
    assert_eq!(carousel.surface().last_offset(), Some(resting));
}

#[test]
fn fill_lands_the_last_item_flush_with_the_viewport_edge() {
    let mut carousel = mounted(CarouselConfig::new());

    carousel.set_index(4);
    // End stop = 500 - 260.
    assert_eq!(carousel.scroll_position(), 240.0);
    assert!(carousel.reached_end());
}

#[test]
fn without_fill_the_last_item_keeps_its_raw_offset() {
    let mut config = CarouselConfig::new();
    config.fill = false;
    let mut carousel = mounted(config);

    carousel.set_index(4);
    assert_eq!(carousel.scroll_position(), 400.0);
    // The end was still reached; fill only affects the applied value.
    assert!(carousel.reached_end());
}

#[test]
fn the_shown_log_never_shrinks() {
    let mut carousel = mounted(CarouselConfig::new());
    // The initial settle shows items within [0, 260).
    assert_eq!(carousel.shown().as_slice(), &[0, 1, 2]);

    carousel.set_index(4);
    assert_eq!(carousel.shown().as_slice(), &[0, 1, 2, 3, 4]);

    carousel.set_index(0);
    assert_eq!(carousel.shown().as_slice(), &[0, 1, 2, 3, 4]);
}

#[test]
fn dots_mirror_item_count_and_the_current_index() {
    let mut config = CarouselConfig::new();
    config.show_dots = true;
    let mut carousel = mounted(config);

    assert_eq!(carousel.surface().dots.len(), 5);
    assert_eq!(carousel.surface().active_dots(), vec![0]);

    carousel.set_index(3);
    assert_eq!(carousel.surface().active_dots(), vec![3]);
}

#[test]
fn a_dot_press_jumps_without_a_threshold() {
    let mut config = CarouselConfig::new();
    config.show_dots = true;
    let mut carousel = mounted(config);

    carousel.handle_event(InputEvent::IndicatorPress { index: 4 });
    assert_eq!(carousel.current_index(), 4);
    assert_eq!(carousel.surface().active_dots(), vec![4]);

    // Out-of-range presses clamp like any index request.
    carousel.handle_event(InputEvent::IndicatorPress { index: 17 });
    assert_eq!(carousel.current_index(), 4);
}

#[test]
fn toggling_show_dots_at_runtime_rebuilds_the_row() {
    let mut carousel = mounted(CarouselConfig::new());
    carousel.set_index(2);
    assert!(carousel.surface().dots.is_empty());

    // Presence-style attribute: present means true.
    carousel.attribute_changed("showdots", Some(""));
    assert!(carousel.config().show_dots);
    assert_eq!(carousel.surface().dots.len(), 5);
    assert_eq!(carousel.surface().active_dots(), vec![2]);

    carousel.attribute_changed("showdots", None);
    assert!(!carousel.config().show_dots);
    assert!(carousel.surface().dots.is_empty());
}

#[test]
fn unobserved_attributes_are_ignored() {
    let mut carousel = mounted(CarouselConfig::new());
    carousel.attribute_changed("gap", Some("1rem"));
    assert_eq!(carousel.config().gap, "0");
}

#[test]
fn a_change_index_event_drives_the_carousel_externally() {
    let mut carousel = mounted(CarouselConfig::new());

    carousel.handle_event(InputEvent::IndexChange { change: Some(3.0) });
    assert_eq!(carousel.current_index(), 3);
}

#[test]
fn malformed_change_index_payloads_are_ignored() {
    let mut carousel = mounted(CarouselConfig::new());
    carousel.set_index(2);

    carousel.handle_event(InputEvent::IndexChange { change: None });
    carousel.handle_event(InputEvent::IndexChange {
        change: Some(f64::NAN),
    });
    carousel.handle_event(InputEvent::IndexChange {
        change: Some(f64::INFINITY),
    });
    assert_eq!(carousel.current_index(), 2);

    // Fractional payloads truncate toward zero, then clamp.
    carousel.handle_event(InputEvent::IndexChange { change: Some(3.9) });
    assert_eq!(carousel.current_index(), 3);
    carousel.handle_event(InputEvent::IndexChange { change: Some(-2.5) });
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn keyboard_navigation_steps_and_clamps() {
    let mut carousel = mounted(CarouselConfig::new());

    carousel.handle_event(InputEvent::KeyDown {
        key: NavKey::ArrowRight,
        in_track: true,
    });
    assert_eq!(carousel.current_index(), 1);

    carousel.handle_event(InputEvent::KeyDown {
        key: NavKey::ArrowLeft,
        in_track: true,
    });
    carousel.handle_event(InputEvent::KeyDown {
        key: NavKey::ArrowLeft,
        in_track: true,
    });
    assert_eq!(carousel.current_index(), 0, "left edge clamps");
}

#[test]
fn keyboard_input_outside_the_strip_is_ignored() {
    let mut carousel = mounted(CarouselConfig::new());
    carousel.handle_event(InputEvent::KeyDown {
        key: NavKey::ArrowRight,
        in_track: false,
    });
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn presses_outside_the_strip_never_start_a_drag() {
    let mut carousel = mounted(CarouselConfig::new());

    carousel.handle_event(InputEvent::PointerDown {
        position: Point::new(200.0, 20.0),
        in_track: false,
    });
    assert!(!carousel.is_dragging());

    // The follow-up move and release are out-of-sequence no-ops.
    carousel.surface_mut().ops.clear();
    carousel.handle_event(InputEvent::PointerMove {
        position: Point::new(120.0, 20.0),
    });
    carousel.handle_event(InputEvent::PointerUp);
    assert!(carousel.surface().ops.is_empty());
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn empty_content_is_safe_to_drive() {
    let mut carousel = Carousel::new(
        FixedPitchContent::new(0, 100.0),
        RecordingSurface::default(),
        CarouselConfig::new(),
    );
    carousel.mount();

    carousel.set_index(5);
    assert_eq!(carousel.current_index(), 0);

    drag(&mut carousel, 200.0, 100.0);
    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.shown().is_empty());
}

#[test]
fn shrinking_content_reclamps_the_index_and_rebuilds_dots() {
    let mut config = CarouselConfig::new();
    config.show_dots = true;
    let mut carousel = mounted(config);
    carousel.set_index(4);

    carousel.content_mut().set_len(2);
    carousel.handle_event(InputEvent::ContentChange);

    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.surface().dots.len(), 2);
    assert_eq!(carousel.surface().active_dots(), vec![1]);
}

#[test]
fn events_are_ignored_while_unmounted() {
    let mut carousel = mounted(CarouselConfig::new());

    // Unmount mid-drag: the gesture is dropped without committing.
    carousel.handle_event(InputEvent::PointerDown {
        position: Point::new(200.0, 20.0),
        in_track: true,
    });
    carousel.unmount();
    assert!(!carousel.is_dragging());

    carousel.surface_mut().ops.clear();
    carousel.handle_event(InputEvent::PointerUp);
    carousel.handle_event(InputEvent::IndexChange { change: Some(3.0) });
    assert!(carousel.surface().ops.is_empty());
    assert_eq!(carousel.current_index(), 0);

    // Remounting restores the settled state.
    carousel.mount();
    assert_eq!(carousel.surface().last_offset(), Some(0.0));
}

#[test]
fn applying_configuration_restyles_the_track() {
    let mut carousel = mounted(CarouselConfig::new());
    let mut config = carousel.config().clone();
    config.gap = "1rem".to_string();
    config.transition_duration_ms = 150;

    carousel.surface_mut().ops.clear();
    carousel.apply_configuration(config);
    assert_eq!(
        carousel.surface().ops,
        vec![Op::Style {
            transition_ms: 150,
            gap: "1rem".to_string(),
        }]
    );
}

#[test]
fn a_lowered_threshold_applies_to_the_next_release() {
    let mut carousel = mounted(CarouselConfig::new());

    // 20px of travel: under the default 30px threshold.
    drag(&mut carousel, 200.0, 180.0);
    assert_eq!(carousel.current_index(), 0);

    let mut config = carousel.config().clone();
    config.threshold = 10.0;
    carousel.apply_configuration(config);

    drag(&mut carousel, 200.0, 180.0);
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn resize_reports_feed_the_end_clamp_at_the_next_settle() {
    let mut carousel = mounted(CarouselConfig::new());
    carousel.set_index(4);
    assert_eq!(carousel.scroll_position(), 240.0);

    // A wider viewport moves the end stop; the next settle picks it up.
    carousel.viewport_resized(400.0);
    carousel.set_index(3);
    assert_eq!(carousel.scroll_position(), 100.0);
    assert!(carousel.reached_end());
}

#[test]
fn the_binding_table_is_stable_across_mount_cycles() {
    // Hosts attach and detach the same table; it does not depend on state.
    let before = bindings();
    let mut carousel = mounted(CarouselConfig::new());
    carousel.unmount();
    assert_eq!(before, bindings());
    assert!(!before.is_empty());
}

#[test]
fn debug_info_snapshots_the_state() {
    let mut config = CarouselConfig::new();
    config.show_dots = true;
    let mut carousel = mounted(config);
    carousel.set_index(2);

    let info = carousel.debug_info();
    assert_eq!(info.current_index, 2);
    assert_eq!(info.scroll_position, 200.0);
    assert_eq!(info.item_count, 5);
    assert_eq!(info.content_width, 500.0);
    assert_eq!(info.viewport_width, 260.0);
    assert_eq!(info.indicator_count, 5);
    assert!(info.mounted);
    assert!(!info.dragging);
}
