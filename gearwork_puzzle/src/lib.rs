// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gearwork Puzzle: a headless state machine for a gear-matching puzzle.
//!
//! A fixed set of pieces must be dragged between world-space placements and
//! the slots of a panel drawn over the scene. Every piece has two
//! representations, one per space, and the board keeps them in step. When
//! every piece rests on a placement the gears spin, neighbours turning in
//! opposite directions; taking any piece away eases them back to rest. A reset
//! scatters every placed piece into a random free slot.
//!
//! The crate does no rendering, input sampling, or layout. Hosts supply:
//!
//! - a [`SiteRegistry`] describing the placements, slots, and panel region,
//! - a [`SpaceMap`] converting between world and panel coordinates,
//! - a random source implementing [`rand::Rng`],
//! - the elapsed time and pointer state of each frame, via [`Board::tick`],
//!
//! and read poses back through [`Board::pieces`] or push them into a
//! [`Renderable`] with [`Board::present`].
//!
//! ## Minimal example
//!
//! ```rust
//! use gearwork_puzzle::{
//!     AffineSpaceMap, Board, PieceId, PointerFrame, PuzzleConfig, RotationMode, SiteId,
//! };
//! use gearwork_sites::{Placement, SiteRegistry};
//! use kurbo::{Point, Rect};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let registry = SiteRegistry::new(
//!     vec![
//!         Placement::new(Point::new(-1.0, 1.0), 0.8),
//!         Placement::new(Point::new(1.0, 1.0), 0.8),
//!     ],
//!     vec![
//!         Rect::new(300.0, 500.0, 380.0, 580.0),
//!         Rect::new(420.0, 500.0, 500.0, 580.0),
//!     ],
//!     Rect::new(0.0, 480.0, 800.0, 600.0),
//! );
//! let spaces = AffineSpaceMap::orthographic(Point::ZERO, Point::new(400.0, 300.0), 100.0);
//! let mut board = Board::new(
//!     registry,
//!     spaces,
//!     StdRng::seed_from_u64(7),
//!     PuzzleConfig::default(),
//!     2,
//! )
//! .unwrap();
//!
//! // Both pieces start on their placements, so the gears are spinning.
//! assert_eq!(board.rotation_mode(), RotationMode::Completed);
//!
//! // Drag piece 0 from its placement into slot 1.
//! board.tick(0.016, PointerFrame::press(Point::new(300.0, 200.0)));
//! board.tick(0.016, PointerFrame::release(Point::new(460.0, 540.0)));
//! for _ in 0..60 {
//!     board.tick(0.016, PointerFrame::idle(Point::new(460.0, 540.0)));
//! }
//!
//! assert_eq!(board.piece(PieceId::new(0)).unwrap().origin(), SiteId::slot(1));
//! assert_eq!(board.rotation_mode(), RotationMode::Idle);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable either the default `std`
//! feature or `libm` for float math.

#![no_std]

extern crate alloc;

mod board;
mod config;
mod error;
mod interaction;
mod motion;
mod piece;
pub mod pointer;
mod render;
mod reset;
mod rotation;
mod space;
pub mod timer;

#[cfg(test)]
mod test_util;

pub use board::{Banner, Board};
pub use config::{BannerTexts, ConfigError, PuzzleConfig, TimerDurations};
pub use error::BoardError;
pub use gearwork_sites::{Placement, Site, SiteAnchor, SiteId, SiteKind, SiteRegistry};
pub use piece::{Anchors, Piece, PieceId, Pose, Representation};
pub use pointer::{PointerEdge, PointerEvent, PointerFrame, PointerTracker};
pub use render::Renderable;
pub use reset::ResetPhase;
pub use rotation::RotationMode;
pub use space::{AffineSpaceMap, SingularTransform, SpaceMap};
