// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The narrow rendering seam.
//!
//! The board computes poses; an adapter implementing [`Renderable`] pushes them
//! into whatever scene graph or UI toolkit the host uses. See
//! [`Board::present`](crate::Board::present).

use kurbo::{Point, Size};

use crate::piece::{PieceId, Representation};

/// Receives the derived state of each piece.
pub trait Renderable {
    /// Shows or hides one representation of a piece.
    fn set_visible(&mut self, piece: PieceId, representation: Representation, visible: bool);

    /// Moves a piece in front of resting pieces, or back among them.
    fn set_raised(&mut self, piece: PieceId, raised: bool);

    /// Places the world representation. `rotation` is in radians.
    fn set_world_transform(&mut self, piece: PieceId, position: Point, rotation: f64);

    /// Places and sizes the panel representation.
    fn set_panel_transform(&mut self, piece: PieceId, position: Point, size: Size);
}

impl<T: Renderable + ?Sized> Renderable for &mut T {
    fn set_visible(&mut self, piece: PieceId, representation: Representation, visible: bool) {
        (**self).set_visible(piece, representation, visible);
    }

    fn set_raised(&mut self, piece: PieceId, raised: bool) {
        (**self).set_raised(piece, raised);
    }

    fn set_world_transform(&mut self, piece: PieceId, position: Point, rotation: f64) {
        (**self).set_world_transform(piece, position, rotation);
    }

    fn set_panel_transform(&mut self, piece: PieceId, position: Point, size: Size) {
        (**self).set_panel_transform(piece, position, size);
    }
}
