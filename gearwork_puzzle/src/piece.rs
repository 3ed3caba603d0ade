// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-piece state.
//!
//! A [`Piece`] knows where it rests ([`Piece::origin`]), where it is heading
//! ([`Piece::destination`]), which transitions it takes part in, and the
//! [`Pose`] its two representations should be drawn with. Pieces live in an
//! arena owned by the board and are addressed by [`PieceId`]; they never start
//! timers themselves.

use core::f64::consts::TAU;
use core::fmt;

use gearwork_sites::{SiteId, SiteKind};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `rem_euclid`
use kurbo::{Point, Size};

/// Stable index of a piece in its board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    /// Creates an id for the piece at `index`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the piece in the board's arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "piece {}", self.0)
    }
}

/// One of the two visual representations of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Drawn in the scene, in world coordinates.
    World,
    /// Drawn over the scene, in panel coordinates.
    Panel,
}

/// Where and how a piece's representations should be drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Centre of the world representation.
    pub world_position: Point,
    /// Rotation of the world representation, in radians.
    pub world_rotation: f64,
    /// Centre of the panel representation.
    pub panel_position: Point,
    /// Size of the panel representation.
    pub panel_size: Size,
    /// The representation currently visible; the other one is hidden.
    pub shown: Representation,
    /// Drawn in front of resting pieces.
    pub raised: bool,
}

/// Values captured when a transition starts; interpolation runs from these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchors {
    /// World position at the start of the current move.
    pub world_position: Point,
    /// World rotation at the start of the current revert.
    pub rotation: f64,
    /// Panel size at the start of the current scale.
    pub panel_size: Size,
}

/// A puzzle piece.
#[derive(Clone, Debug)]
pub struct Piece {
    pub(crate) origin: SiteId,
    pub(crate) destination: Option<SiteId>,
    pub(crate) moving: bool,
    pub(crate) scaling: Option<SiteKind>,
    pub(crate) anchors: Anchors,
    pub(crate) pose: Pose,
}

impl Piece {
    /// Creates a piece resting on `origin` with the given pose.
    pub(crate) fn new(origin: SiteId, pose: Pose) -> Self {
        Self {
            origin,
            destination: None,
            moving: false,
            scaling: None,
            anchors: Anchors {
                world_position: pose.world_position,
                rotation: pose.world_rotation,
                panel_size: pose.panel_size,
            },
            pose,
        }
    }

    /// The site the piece occupies.
    ///
    /// This only changes when a move settles; a piece being dragged or moving
    /// still owns its origin.
    #[must_use]
    pub fn origin(&self) -> SiteId {
        self.origin
    }

    /// The site the piece is moving toward, if any.
    #[must_use]
    pub fn destination(&self) -> Option<SiteId> {
        self.destination
    }

    /// Returns `true` while a move transition is in progress.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// The sizing a scale transition is heading toward, if one is in progress.
    #[must_use]
    pub fn scaling_target(&self) -> Option<SiteKind> {
        self.scaling
    }

    /// The pose to draw.
    #[must_use]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// The values the running transitions interpolate from.
    #[must_use]
    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    /// Raises the piece and captures its position, ready to be dragged.
    pub(crate) fn lift(&mut self) {
        self.pose.raised = true;
        self.anchors.world_position = self.pose.world_position;
    }

    /// Starts a move from the current position toward the destination.
    pub(crate) fn begin_move(&mut self) {
        self.lift();
        self.moving = true;
    }

    /// Starts a scale from the current panel size toward `target` sizing.
    pub(crate) fn begin_scale(&mut self, target: SiteKind) {
        self.anchors.panel_size = self.pose.panel_size;
        self.scaling = Some(target);
    }

    /// Captures the current rotation, wrapped into `[0, 2π)`, for a revert.
    pub(crate) fn snapshot_rotation(&mut self) {
        self.anchors.rotation = self.pose.world_rotation.rem_euclid(TAU);
    }

    pub(crate) fn show(&mut self, representation: Representation) {
        self.pose.shown = representation;
    }

    /// Makes `site` the new origin with both representations placed on it.
    pub(crate) fn arrive(&mut self, site: SiteId, world_position: Point, panel_position: Point) {
        self.origin = site;
        self.destination = None;
        self.moving = false;
        self.pose.world_position = world_position;
        self.pose.panel_position = panel_position;
        self.pose.raised = false;
        self.pose.shown = if site.is_slot() {
            Representation::Panel
        } else {
            Representation::World
        };
        self.anchors.world_position = world_position;
        self.anchors.panel_size = self.pose.panel_size;
    }
}
