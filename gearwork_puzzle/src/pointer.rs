// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer state: fold a stream of pointer events into one sample per frame.
//!
//! The board consumes pointer input once per frame as a [`PointerFrame`]: the
//! live pointer position plus at most one button edge, which carries the point
//! where it happened. Hosts that receive discrete events feed them into a
//! [`PointerTracker`] and take one frame from it per tick.
//!
//! ## Usage
//!
//! 1) Forward each pointer event to [`PointerTracker::handle`].
//! 2) Once per tick, call [`PointerTracker::frame`] and pass the result to the board.
//!
//! Edges are queued in arrival order. When several arrive between two ticks,
//! each one is reported on its own frame with its own point, so a fast click
//! is hit-tested where the button went down and where it came up.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use gearwork_puzzle::pointer::{PointerEdge, PointerEvent, PointerTracker};
//!
//! let mut pointer = PointerTracker::default();
//!
//! pointer.handle(PointerEvent::Down(Point::new(10.0, 20.0)));
//! pointer.handle(PointerEvent::Up(Point::new(40.0, 20.0)));
//!
//! let frame = pointer.frame();
//! assert_eq!(frame.edge, Some(PointerEdge::Pressed(Point::new(10.0, 20.0))));
//!
//! let frame = pointer.frame();
//! assert_eq!(frame.edge, Some(PointerEdge::Released(Point::new(40.0, 20.0))));
//! assert_eq!(frame.position, Point::new(40.0, 20.0));
//!
//! assert_eq!(pointer.frame().edge, None);
//! ```

use kurbo::Point;
use smallvec::SmallVec;

/// A raw pointer event in panel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// The button went down at this point.
    Down(Point),
    /// The pointer moved to this point.
    Move(Point),
    /// The button went up at this point.
    Up(Point),
}

/// A button transition and the panel point where it happened.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEdge {
    /// The button went down.
    Pressed(Point),
    /// The button went up.
    Released(Point),
}

impl PointerEdge {
    /// Where the edge happened.
    #[must_use]
    pub const fn position(self) -> Point {
        match self {
            Self::Pressed(pt) | Self::Released(pt) => pt,
        }
    }
}

/// Pointer input for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerFrame {
    /// Pointer position in panel coordinates at the end of this frame.
    pub position: Point,
    /// The button edge reported on this frame, if any.
    pub edge: Option<PointerEdge>,
}

impl PointerFrame {
    /// A frame with no button edge.
    #[must_use]
    pub const fn idle(position: Point) -> Self {
        Self {
            position,
            edge: None,
        }
    }

    /// A frame where the button went down at `position`.
    #[must_use]
    pub const fn press(position: Point) -> Self {
        Self {
            position,
            edge: Some(PointerEdge::Pressed(position)),
        }
    }

    /// A frame where the button went up at `position`.
    #[must_use]
    pub const fn release(position: Point) -> Self {
        Self {
            position,
            edge: Some(PointerEdge::Released(position)),
        }
    }
}

/// Folds [`PointerEvent`]s into [`PointerFrame`]s.
///
/// A frame carries at most one edge. Edges that arrive between two frames are
/// reported one per frame, oldest first. While further edges are still queued,
/// a frame's position is its edge's point; the last one takes the live position.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    position: Point,
    pending: SmallVec<[PointerEdge; 4]>,
}

impl PointerTracker {
    /// Records one event.
    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(pt) => {
                self.position = pt;
                self.pending.push(PointerEdge::Pressed(pt));
            }
            PointerEvent::Move(pt) => self.position = pt,
            PointerEvent::Up(pt) => {
                self.position = pt;
                self.pending.push(PointerEdge::Released(pt));
            }
        }
    }

    /// Takes the next frame: the oldest queued edge, if any.
    pub fn frame(&mut self) -> PointerFrame {
        if self.pending.is_empty() {
            return PointerFrame::idle(self.position);
        }
        let edge = self.pending.remove(0);
        let position = if self.pending.is_empty() {
            self.position
        } else {
            edge.position()
        };
        PointerFrame {
            position,
            edge: Some(edge),
        }
    }
}
