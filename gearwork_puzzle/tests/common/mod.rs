// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixtures shared by the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use gearwork_puzzle::{
    AffineSpaceMap, Board, Placement, PointerFrame, PuzzleConfig, RotationMode, SiteId,
    SiteKind, SiteRegistry, SpaceMap,
};
use kurbo::{Point, Rect};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub type TestBoard = Board<AffineSpaceMap, StdRng>;

pub const FRAME: f64 = 1.0 / 60.0;

/// Five placements in a row above five slots in a panel strip along the bottom.
pub fn registry() -> SiteRegistry {
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

pub fn board(seed: u64) -> TestBoard {
    Board::new(
        registry(),
        AffineSpaceMap::orthographic(Point::ZERO, Point::new(400.0, 300.0), 100.0),
        StdRng::seed_from_u64(seed),
        PuzzleConfig::default(),
        5,
    )
    .expect("fixture board is valid")
}

/// Panel-space point over `site`.
pub fn point_of(board: &TestBoard, site: SiteId) -> Point {
    match site.kind {
        SiteKind::Placement => {
            let center = board.registry().placement(site.index).expect("placement").center;
            board.spaces().world_to_panel(center)
        }
        SiteKind::Slot => board.registry().slot(site.index).expect("slot").center(),
    }
}

pub fn idle() -> PointerFrame {
    PointerFrame::idle(Point::new(-1000.0, -1000.0))
}

/// Ticks idle frames until nothing is moving, reverting, or waiting to reset.
pub fn settle(board: &mut TestBoard) {
    for _ in 0..10_000 {
        let busy = board.is_locked()
            || board.is_resetting()
            || board.timers().movement.is_running()
            || board.timers().scaling.is_running()
            || board.rotation_mode() == RotationMode::Reverting;
        if !busy {
            return;
        }
        board.tick(FRAME, idle());
    }
    panic!("board did not settle");
}

/// Presses on `from`, drags across a few frames, releases on `to`, and settles.
pub fn drag(board: &mut TestBoard, from: SiteId, to: Point) {
    let start = point_of(board, from);
    board.tick(FRAME, PointerFrame::press(start));
    for step in 1..=4 {
        let t = f64::from(step) / 4.0;
        board.tick(FRAME, PointerFrame::idle(start.lerp(to, t)));
    }
    board.tick(FRAME, PointerFrame::release(to));
    settle(board);
}

/// Drags the piece on `from` onto `to`.
pub fn drag_to(board: &mut TestBoard, from: SiteId, to: SiteId) {
    let target = point_of(board, to);
    drag(board, from, target);
}
