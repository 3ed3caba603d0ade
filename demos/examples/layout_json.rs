// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout files.
//!
//! Print the built-in layout as JSON, or load a layout (and optionally a
//! pointer script) from disk and replay it.
//!
//! Run:
//! - `cargo run -p gearwork_demos --example layout_json`
//! - `cargo run -p gearwork_demos --example layout_json -- layout.json script.json`

use gearwork_demos::{Layout, LogRenderer, Script, init_logging};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let Some(layout_path) = args.next() else {
        println!("{}", Layout::five_gears().to_json()?);
        return Ok(());
    };

    let layout = Layout::load(&layout_path)?;
    println!(
        "{layout_path}: {} pieces, {} placements, {} slots",
        layout.pieces,
        layout.sites.placement_count(),
        layout.sites.slot_count()
    );
    let mut board = layout.build(StdRng::seed_from_u64(0))?;

    if let Some(script_path) = args.next() {
        let script = Script::from_json(&std::fs::read_to_string(script_path)?)?;
        let frames = script.run(&mut board, &mut LogRenderer::default());
        println!("Replayed {frames} frames");
    }
    for (id, piece) in board.pieces() {
        println!("{id}: {}", piece.origin());
    }
    println!("{}", board.banner_text());
    Ok(())
}
