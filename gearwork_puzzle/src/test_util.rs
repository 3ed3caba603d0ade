// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for unit tests.

use gearwork_sites::{Placement, SiteId, SiteRegistry};
use kurbo::{Point, Rect};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::{Board, site_points};
use crate::config::PuzzleConfig;
use crate::pointer::PointerFrame;
use crate::rotation::RotationMode;
use crate::space::AffineSpaceMap;

pub(crate) type TestBoard = Board<AffineSpaceMap, StdRng>;

/// Five placements in a row above five slots in a panel strip.
pub(crate) fn registry() -> SiteRegistry {
    let placements = (0..5_u32)
        .map(|i| Placement::new(Point::new(-4.0 + 2.0 * f64::from(i), 1.0), 0.8))
        .collect();
    let slots = (0..5_u32)
        .map(|i| {
            let x = 40.0 + 150.0 * f64::from(i);
            Rect::new(x, 500.0, x + 80.0, 580.0)
        })
        .collect();
    SiteRegistry::new(placements, slots, Rect::new(0.0, 480.0, 800.0, 600.0))
}

pub(crate) fn spaces() -> AffineSpaceMap {
    AffineSpaceMap::orthographic(Point::ZERO, Point::new(400.0, 300.0), 100.0)
}

pub(crate) fn board() -> TestBoard {
    board_with(PuzzleConfig::default(), 5)
}

pub(crate) fn board_with(config: PuzzleConfig, pieces: usize) -> TestBoard {
    Board::new(registry(), spaces(), StdRng::seed_from_u64(42), config, pieces)
        .expect("fixture board is valid")
}

/// Panel-space point over the anchor of `site`.
pub(crate) fn panel_point(board: &TestBoard, site: SiteId) -> Point {
    site_points(&board.registry, &board.spaces, site)
        .map(|(_, panel)| panel)
        .expect("fixture site exists")
}

/// A frame with no button edge, far from every site.
pub(crate) fn idle() -> PointerFrame {
    PointerFrame::idle(Point::new(-1000.0, -1000.0))
}

/// Ticks idle frames until nothing is moving, reverting, or waiting to reset.
pub(crate) fn settle(board: &mut TestBoard) {
    for _ in 0..1000 {
        let busy = board.is_locked()
            || board.is_resetting()
            || board.timers.movement.is_running()
            || board.timers.scaling.is_running()
            || board.rotation_mode() == RotationMode::Reverting;
        if !busy {
            return;
        }
        board.tick(0.05, idle());
    }
    panic!("board did not settle");
}
