// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input vocabulary and the listener binding table.
//!
//! The carousel does not register listeners itself. Instead it publishes
//! [`bindings`], a static table of `{event kind, target}` pairs; on
//! [`mount`](crate::Carousel::mount) the host attaches exactly these
//! listeners, and on [`unmount`](crate::Carousel::unmount) it detaches the
//! same table. Attach and detach are symmetric by construction, so no
//! listener can outlive the instance it feeds.
//!
//! Host events are translated into [`InputEvent`]s and handed to
//! [`Carousel::handle_event`](crate::Carousel::handle_event). Mouse and
//! touch rows both map onto the pointer variants; the table keeps them
//! separate so hosts attach the concrete listeners their platform needs.

use kurbo::Point;

/// Kind of host event a binding listens for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EventKind {
    /// Mouse button press.
    MouseDown,
    /// Mouse button release.
    MouseUp,
    /// Mouse movement.
    MouseMove,
    /// Touch contact start.
    TouchStart,
    /// Touch contact end.
    TouchEnd,
    /// Touch movement.
    TouchMove,
    /// Keyboard key press.
    KeyDown,
    /// The host-dispatched external index-change request.
    IndexChange,
    /// The slotted item content changed.
    ContentChange,
}

/// Where a binding's listener is attached.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BindTarget {
    /// The scrollable strip region.
    Track,
    /// The document (or platform-global keyboard source).
    Document,
    /// The component host element.
    Host,
}

/// One row of the listener table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EventBinding {
    /// What to listen for.
    pub kind: EventKind,
    /// Where to attach the listener.
    pub target: BindTarget,
    /// Whether the host should suppress the platform default action
    /// (native scroll/selection) when the event path includes the strip.
    pub prevent_default: bool,
}

const BINDINGS: &[EventBinding] = &[
    EventBinding {
        kind: EventKind::MouseDown,
        target: BindTarget::Track,
        prevent_default: true,
    },
    EventBinding {
        kind: EventKind::MouseUp,
        target: BindTarget::Track,
        prevent_default: false,
    },
    EventBinding {
        kind: EventKind::MouseMove,
        target: BindTarget::Track,
        prevent_default: false,
    },
    EventBinding {
        kind: EventKind::TouchStart,
        target: BindTarget::Track,
        prevent_default: true,
    },
    EventBinding {
        kind: EventKind::TouchEnd,
        target: BindTarget::Track,
        prevent_default: false,
    },
    EventBinding {
        kind: EventKind::TouchMove,
        target: BindTarget::Track,
        prevent_default: false,
    },
    EventBinding {
        kind: EventKind::KeyDown,
        target: BindTarget::Document,
        prevent_default: false,
    },
    EventBinding {
        kind: EventKind::IndexChange,
        target: BindTarget::Host,
        prevent_default: false,
    },
    EventBinding {
        kind: EventKind::ContentChange,
        target: BindTarget::Host,
        prevent_default: false,
    },
];

/// The full listener table: attach on mount, detach on unmount.
#[must_use]
pub const fn bindings() -> &'static [EventBinding] {
    BINDINGS
}

/// Arrow keys that drive keyboard navigation.
///
/// Hosts forward only these; every other key is outside the carousel's
/// vocabulary and is dropped at translation time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavKey {
    /// Step to the previous item.
    ArrowLeft,
    /// Step to the next item.
    ArrowRight,
}

/// A host event translated into the carousel's input vocabulary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer or touch press.
    PointerDown {
        /// Pointer position; only the X coordinate participates.
        position: Point,
        /// Whether the event path includes the scrollable strip. Presses
        /// outside it (including bubbled indicator presses) never start a
        /// drag.
        in_track: bool,
    },
    /// Pointer or touch movement.
    PointerMove {
        /// Pointer position; only the X coordinate participates.
        position: Point,
    },
    /// Pointer or touch release.
    PointerUp,
    /// Arrow-key press.
    KeyDown {
        /// Which arrow was pressed.
        key: NavKey,
        /// Whether keyboard focus currently sits inside the strip.
        in_track: bool,
    },
    /// External index-change request (the `change-index` custom event).
    ///
    /// `change` mirrors the event's loosely typed payload: `None` when the
    /// payload was missing, and non-finite values are ignored as the typed
    /// analog of a non-numeric `detail.change`.
    IndexChange {
        /// Requested index, if the payload carried one.
        change: Option<f64>,
    },
    /// An indicator control for `index` was activated.
    IndicatorPress {
        /// Index of the pressed indicator.
        index: usize,
    },
    /// The slotted item content changed.
    ContentChange,
}
