// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer handling: pick up, drag, and drop pieces.
//!
//! A press over an occupied site picks that piece up. While held, the piece
//! follows the pointer directly and shows whichever representation matches the
//! region under the pointer. On release the piece is sent to the site under
//! the pointer; if that site is occupied, the occupant is sent the other way,
//! and if there is no site the piece returns to where it came from. Both
//! destinations are assigned in the same call, so no two pieces ever head for
//! the same site.

use gearwork_sites::SiteKind;
use kurbo::Point;
use rand::Rng;
use tracing::debug;

use crate::board::{Banner, Board};
use crate::piece::{PieceId, Representation};
use crate::pointer::{PointerEdge, PointerFrame};
use crate::space::SpaceMap;

impl<M: SpaceMap, R: Rng> Board<M, R> {
    /// Applies one frame of pointer input.
    ///
    /// Without a held piece, only a press matters and it is hit-tested where
    /// the button went down. With one, the piece follows the pointer and a
    /// release drops it where the button came up.
    pub(crate) fn handle_pointer(&mut self, frame: PointerFrame) {
        match (self.held, frame.edge) {
            (None, Some(PointerEdge::Pressed(at))) => {
                self.pointer_down(at);
            }
            (None, _) => {}
            (Some(_), Some(PointerEdge::Released(at))) => {
                self.pointer_move(at);
                self.pointer_up(at);
            }
            (Some(_), _) => self.pointer_move(frame.position),
        }
    }

    /// Picks up the piece resting on the site under `position`.
    ///
    /// Ignored while locked or while a piece is already held. Returns the piece
    /// that was picked up.
    pub fn pointer_down(&mut self, position: Point) -> Option<PieceId> {
        if self.locked || self.held.is_some() {
            return None;
        }
        let world = self.spaces.panel_to_world(position);
        let site = self.registry.hit(world, position)?;
        let id = self.occupant(site)?;
        let piece = self.pieces.get_mut(id.0)?;
        piece.lift();
        // Dragged pieces always render at world size.
        piece.begin_scale(SiteKind::Placement);
        self.timers.scaling.start();
        self.held = Some(id);
        self.banner = Banner::Default;
        debug!(%id, %site, "picked up");
        Some(id)
    }

    /// Moves the held piece to follow the pointer.
    pub fn pointer_move(&mut self, position: Point) {
        if self.locked {
            return;
        }
        let Some(id) = self.held else {
            return;
        };
        let world = self.spaces.panel_to_world(position);
        let over_panel = self.registry.panel_contains(position);
        let Some(piece) = self.pieces.get_mut(id.0) else {
            return;
        };
        piece.pose.world_position = world;
        piece.pose.panel_position = position;
        piece.show(if over_panel {
            Representation::Panel
        } else {
            Representation::World
        });
    }

    /// Drops the held piece at `position`, swapping with any occupant.
    ///
    /// Locks pointer input until the resulting moves settle. Ignored while
    /// locked or when nothing is held.
    pub fn pointer_up(&mut self, position: Point) {
        if self.locked {
            return;
        }
        let Some(id) = self.held.take() else {
            return;
        };
        let Some(origin) = self.piece(id).map(|piece| piece.origin) else {
            return;
        };
        let world = self.spaces.panel_to_world(position);
        let destination = match self.registry.hit(world, position) {
            None => {
                debug!(%id, "dropped outside any site");
                origin
            }
            Some(site) => {
                if let Some(other) = self.occupant(site).filter(|&other| other != id) {
                    debug!(%id, other = %other, "swapping");
                    self.send_to(other, origin);
                }
                site
            }
        };
        self.send_to(id, destination);
        self.locked = true;
    }
}
