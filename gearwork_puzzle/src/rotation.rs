// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Completion detection and the celebratory spin.
//!
//! The board cycles through three rotation modes:
//!
//! ```text
//! Idle --(every piece placed)--> Completed --(a piece leaves)--> Reverting --(timer)--> Idle
//! ```
//!
//! While [`Completed`](RotationMode::Completed), every world piece spins at the
//! configured speed, neighbouring placements turning opposite ways so the gears
//! appear to mesh. Once the arrangement is broken, every piece eases back to the
//! rest angle over the rotation duration.

use rand::Rng;
use tracing::{debug, info};

use crate::board::{Banner, Board};
use crate::space::SpaceMap;
use crate::timer::{Step, lerp};

/// Global rotation state of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RotationMode {
    /// No rotation is applied.
    #[default]
    Idle,
    /// Every piece is placed and spinning.
    Completed,
    /// Pieces are easing back to the rest angle.
    Reverting,
}

impl<M: SpaceMap, R: Rng> Board<M, R> {
    /// Returns `true` if no piece is held and every piece rests, unmoving, on a placement.
    ///
    /// This is a pure query; see [`is_completed`](Self::is_completed) for the mode.
    #[must_use]
    pub fn all_placed(&self) -> bool {
        self.held.is_none()
            && self
                .pieces
                .iter()
                .all(|piece| piece.origin.is_placement() && !piece.moving)
    }

    /// Enters [`RotationMode::Completed`] if the board is idle and every piece is placed.
    pub(crate) fn detect_completion(&mut self) -> bool {
        if self.rotation != RotationMode::Idle || !self.all_placed() {
            return false;
        }
        self.rotation = RotationMode::Completed;
        self.banner = Banner::Completed;
        info!("puzzle completed");
        true
    }

    /// Captures every piece's rotation and starts easing back to rest.
    pub(crate) fn begin_revert(&mut self) {
        for piece in &mut self.pieces {
            piece.snapshot_rotation();
        }
        self.rotation = RotationMode::Reverting;
        self.timers.rotation.start();
        debug!("reverting rotation");
    }

    pub(crate) fn step_rotation(&mut self, dt: f64) {
        match self.rotation {
            RotationMode::Idle => {}
            RotationMode::Completed => {
                if !self.all_placed() {
                    self.begin_revert();
                    return;
                }
                let speed = self.config.spin_speed_radians();
                for piece in &mut self.pieces {
                    // Even placements turn clockwise, odd ones counter-clockwise.
                    let direction = if piece.origin.index % 2 == 0 { -1.0 } else { 1.0 };
                    piece.pose.world_rotation += direction * speed * dt;
                }
            }
            RotationMode::Reverting => {
                let rest = self.config.rest_angle_radians();
                match self.timers.rotation.advance(dt) {
                    Step::Running(t) => {
                        for piece in &mut self.pieces {
                            piece.pose.world_rotation = lerp(piece.anchors.rotation, rest, t);
                        }
                    }
                    Step::Finished | Step::Idle => {
                        for piece in &mut self.pieces {
                            piece.pose.world_rotation = rest;
                        }
                        self.rotation = RotationMode::Idle;
                        debug!("rotation back at rest");
                        // A reset holds the lock across its revert and must not re-complete.
                        if !self.locked {
                            self.detect_completion();
                        }
                    }
                }
            }
        }
    }
}
