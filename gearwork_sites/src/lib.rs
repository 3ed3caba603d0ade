// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gearwork Sites: the fixed places a puzzle piece can rest.
//!
//! A Gearwork board has two kinds of sites:
//!
//! - **Placements** live in world space. Each one is a circular target a piece
//!   can be dropped onto; the puzzle is complete when every piece rests on one.
//! - **Slots** live in panel space (the flat inventory strip drawn over the
//!   scene). Each one is a rectangle a piece can be parked in.
//!
//! Sites never move and are never destroyed once a [`SiteRegistry`] has been
//! built. Every site has a stable [`SiteId`] (its kind plus an index that is
//! unique per kind) and an anchor point that pieces animate toward.
//!
//! The registry also answers the two hit-test questions the puzzle needs:
//! "which site is under this pointer?" and "is this pointer over the panel?".
//! It does not know how world space maps onto panel space; callers convert the
//! pointer into both spaces and pass both points in.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use gearwork_sites::{Placement, SiteId, SiteKind, SiteRegistry};
//!
//! let registry = SiteRegistry::new(
//!     vec![
//!         Placement::new(Point::new(0.0, 0.0), 1.0),
//!         Placement::new(Point::new(3.0, 0.0), 1.0),
//!     ],
//!     vec![
//!         Rect::new(0.0, 500.0, 50.0, 550.0),
//!         Rect::new(60.0, 500.0, 110.0, 550.0),
//!     ],
//!     Rect::new(0.0, 490.0, 800.0, 600.0),
//! );
//!
//! // The pointer is over the second placement in world space.
//! let hit = registry.hit(Point::new(3.2, 0.1), Point::new(400.0, 100.0));
//! assert_eq!(hit, Some(SiteId::placement(1)));
//!
//! // The pointer is over the first slot in panel space.
//! let hit = registry.hit(Point::new(-40.0, -40.0), Point::new(25.0, 525.0));
//! assert_eq!(hit.map(|id| id.kind), Some(SiteKind::Slot));
//! assert!(registry.panel_contains(Point::new(25.0, 525.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod registry;
mod site;

pub use registry::{Placement, SiteRegistry};
pub use site::{Site, SiteAnchor, SiteId, SiteKind};
