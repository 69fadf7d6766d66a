// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoetrope_gesture --heading-base-level=0

//! Zoetrope Gesture: a single-pointer horizontal swipe state machine.
//!
//! This crate tracks one drag pointer along one scroll axis and decides, on
//! release, whether the accumulated travel commits to the adjacent item or
//! settles back. It does not assume any particular UI framework or event
//! system: hosts feed it raw pointer positions (down, move, up) and interpret
//! the resulting offsets and outcomes.
//!
//! The state machine is deliberately small:
//!
//! - Idle → dragging on [`SwipeTracker::begin`], which records the pointer's
//!   start position and the strip offset the drag builds on.
//! - While dragging, [`SwipeTracker::update`] returns the live strip offset.
//!   The offset tracks the pointer 1:1 and is intentionally unclamped;
//!   clamping against content bounds happens only when the release settles.
//! - Dragging → idle on [`SwipeTracker::release`], which reports whether the
//!   travel crossed the commit threshold and in which direction.
//!
//! Move and release events while idle return `None`, which makes spurious or
//! duplicated host events harmless.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use zoetrope_gesture::{SwipeDirection, SwipeOutcome, SwipeTracker};
//!
//! let mut swipe = SwipeTracker::new(30.0);
//!
//! // Press at x = 200 while the strip sits at offset 0.
//! swipe.begin(Point::new(200.0, 40.0), 0.0);
//!
//! // Drag 50px to the left: the strip follows the pointer.
//! let offset = swipe.update(Point::new(150.0, 40.0)).unwrap();
//! assert_eq!(offset, 50.0);
//!
//! // 50px exceeds the 30px threshold, so release commits forward.
//! let outcome = swipe.release().unwrap();
//! assert_eq!(outcome, SwipeOutcome::Commit(SwipeDirection::Forward));
//! assert!(!swipe.is_dragging());
//! ```
//!
//! Only the pointer's X coordinate participates; the Y coordinate of the
//! supplied [`kurbo::Point`]s is ignored. This crate is `no_std`.

#![no_std]

mod swipe;

pub use swipe::{SwipeDirection, SwipeOutcome, SwipeTracker};
