// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted session.
//!
//! Drive a five-gear board headlessly: pull two gears into the panel, swap one
//! back, put everything in place to watch the gears spin, then reset.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p gearwork_demos --example scripted_session`

use gearwork_demos::{Layout, LogRenderer, Script, Step, init_logging};
use gearwork_puzzle::{SiteId, SiteKind, SpaceMap};
use kurbo::Point;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let layout = Layout::five_gears();
    let mut board = layout.build(StdRng::seed_from_u64(2025))?;

    let at = |site: SiteId| -> Point {
        match site.kind {
            SiteKind::Placement => board
                .registry()
                .placement(site.index)
                .map(|p| board.spaces().world_to_panel(p.center))
                .unwrap_or_default(),
            SiteKind::Slot => board
                .registry()
                .slot(site.index)
                .map(|r| r.center())
                .unwrap_or_default(),
        }
    };
    let drag = |from: SiteId, to: SiteId| {
        let (a, b) = (at(from), at(to));
        [
            Step::Down { x: a.x, y: a.y },
            Step::Move { x: b.x, y: b.y },
            Step::Up { x: b.x, y: b.y },
            Step::Wait { seconds: 0.6 },
        ]
    };

    let mut steps = Vec::new();
    steps.extend(drag(SiteId::placement(0), SiteId::slot(2)));
    steps.extend(drag(SiteId::placement(3), SiteId::slot(0)));
    steps.extend(drag(SiteId::slot(2), SiteId::placement(3)));
    steps.extend(drag(SiteId::slot(0), SiteId::placement(0)));
    steps.push(Step::Wait { seconds: 1.0 });
    steps.push(Step::Reset);
    steps.push(Step::Wait { seconds: 2.0 });
    let script = Script {
        frame: 1.0 / 60.0,
        steps,
    };

    let mut out = LogRenderer::default();
    let frames = script.run(&mut board, &mut out);

    println!("Ran {frames} frames; banner: {}", board.banner_text());
    for (id, piece) in board.pieces() {
        println!("{id}: {}", piece.origin());
    }
    Ok(())
}
