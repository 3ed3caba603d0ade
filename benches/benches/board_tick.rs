// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use gearwork_puzzle::{
    AffineSpaceMap, Board, PointerFrame, PuzzleConfig, SiteId, SiteRegistry, SpaceMap,
};
use gearwork_sites::Placement;
use kurbo::{Point, Rect};
use rand::SeedableRng;
use rand::rngs::StdRng;

const FRAME: f64 = 1.0 / 60.0;

/// `n` placements in a grid above a strip of `n` slots.
fn registry(n: usize) -> SiteRegistry {
    let columns = 16;
    let placements = (0..n)
        .map(|i| {
            let (row, col) = (i / columns, i % columns);
            Placement::new(Point::new(col as f64 * 2.0 - 16.0, row as f64 * 2.0 + 1.0), 0.8)
        })
        .collect();
    let slots = (0..n)
        .map(|i| {
            let x = i as f64 * 20.0;
            Rect::new(x, 900.0, x + 16.0, 916.0)
        })
        .collect();
    SiteRegistry::new(placements, slots, Rect::new(0.0, 880.0, n as f64 * 20.0, 940.0))
}

fn board(n: usize) -> Board<AffineSpaceMap, StdRng> {
    Board::new(
        registry(n),
        AffineSpaceMap::orthographic(Point::ZERO, Point::new(640.0, 400.0), 40.0),
        StdRng::seed_from_u64(0x6EA2_0000_0000_0001),
        PuzzleConfig::default(),
        n,
    )
    .expect("bench board is valid")
}

fn idle() -> PointerFrame {
    PointerFrame::idle(Point::new(-1.0, -1.0))
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("gearwork_board");

    for &n in &[5_usize, 64, 512] {
        group.bench_function(format!("spin_tick(n={n})"), |b| {
            let mut board = board(n);
            b.iter(|| {
                board.tick(black_box(FRAME), idle());
            });
        });

        group.bench_function(format!("reset_to_settled(n={n})"), |b| {
            b.iter_batched(
                || board(n),
                |mut board| {
                    board.request_reset();
                    while board.is_resetting() || board.is_locked() {
                        board.tick(FRAME, idle());
                    }
                    black_box(board);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("drag_gesture(n={n})"), |b| {
            b.iter_batched(
                || board(n),
                |mut board| {
                    let from = board
                        .spaces()
                        .world_to_panel(board.registry().placement(0).expect("placement").center);
                    let to = board.registry().slot(n - 1).expect("slot").center();
                    board.tick(FRAME, PointerFrame::press(from));
                    for step in 1..=8 {
                        board.tick(FRAME, PointerFrame::idle(from.lerp(to, f64::from(step) / 8.0)));
                    }
                    board.tick(FRAME, PointerFrame::release(to));
                    black_box(board.occupant(SiteId::slot(n - 1)));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
