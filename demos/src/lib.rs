// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Gearwork demos.
//!
//! - [`Layout`]: a board description that round-trips through JSON.
//! - [`Script`]: a recorded pointer session replayed frame by frame.
//! - [`LogRenderer`]: a [`Renderable`] that logs pose changes instead of drawing.

use std::fmt;
use std::path::Path;

use gearwork_puzzle::{
    AffineSpaceMap, Board, BoardError, PieceId, PointerEvent, PointerTracker, PuzzleConfig,
    Renderable, Representation, SingularTransform, SpaceMap,
};
use gearwork_sites::{Placement, SiteRegistry};
use kurbo::{Point, Rect, Size};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Errors from loading a layout or script.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The contents were not valid JSON for the expected type.
    Json(serde_json::Error),
    /// The camera projection cannot be inverted.
    Camera(SingularTransform),
    /// The layout describes a board that cannot be built.
    Board(BoardError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read file: {err}"),
            Self::Json(err) => write!(f, "invalid JSON: {err}"),
            Self::Camera(err) => write!(f, "invalid camera: {err}"),
            Self::Board(err) => write!(f, "invalid board: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Camera(err) => Some(err),
            Self::Board(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<SingularTransform> for LoadError {
    fn from(err: SingularTransform) -> Self {
        Self::Camera(err)
    }
}

impl From<BoardError> for LoadError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

/// Camera parameters for an orthographic world-to-panel projection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World point at the centre of the panel.
    pub world_center: Point,
    /// Panel point the world centre lands on.
    pub panel_center: Point,
    /// Panel pixels per world unit.
    pub pixels_per_unit: f64,
}

impl Camera {
    /// The space map for this camera.
    ///
    /// Fails when `pixels_per_unit` is zero or not finite.
    pub fn space_map(&self) -> Result<AffineSpaceMap, SingularTransform> {
        AffineSpaceMap::try_orthographic(self.world_center, self.panel_center, self.pixels_per_unit)
    }
}

/// Everything needed to build a board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Layout {
    /// Number of pieces; piece `i` starts on placement `i`.
    pub pieces: usize,
    /// Placements, slots, and the panel region.
    pub sites: SiteRegistry,
    /// Projection between world and panel space.
    pub camera: Camera,
    /// Tunables. Missing fields take their defaults.
    #[serde(default)]
    pub config: PuzzleConfig,
}

impl Layout {
    /// Five gears in a row over a panel of five slots on an 800×600 screen.
    pub fn five_gears() -> Self {
        let placements = (0..5_u32)
            .map(|i| Placement::new(Point::new(-4.0 + 2.0 * f64::from(i), 1.0), 0.8))
            .collect();
        let slots = (0..5_u32)
            .map(|i| {
                let x = 40.0 + 150.0 * f64::from(i);
                Rect::new(x, 500.0, x + 80.0, 580.0)
            })
            .collect();
        let mut config = PuzzleConfig::default();
        config.panel_size = Size::new(72.0, 72.0);
        config.world_size = Size::new(160.0, 160.0);
        Self {
            pieces: 5,
            sites: SiteRegistry::new(placements, slots, Rect::new(0.0, 480.0, 800.0, 600.0)),
            camera: Camera {
                world_center: Point::ZERO,
                panel_center: Point::new(400.0, 300.0),
                pixels_per_unit: 100.0,
            },
            config,
        }
    }

    /// Parses a layout from JSON.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a layout file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes the layout as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds a board from this layout.
    pub fn build<R: Rng>(self, rng: R) -> Result<Board<AffineSpaceMap, R>, LoadError> {
        let spaces = self.camera.space_map()?;
        Ok(Board::new(self.sites, spaces, rng, self.config, self.pieces)?)
    }
}

/// One step of a recorded session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Button down at a panel point.
    Down {
        /// Panel x.
        x: f64,
        /// Panel y.
        y: f64,
    },
    /// Pointer moved to a panel point.
    Move {
        /// Panel x.
        x: f64,
        /// Panel y.
        y: f64,
    },
    /// Button up at a panel point.
    Up {
        /// Panel x.
        x: f64,
        /// Panel y.
        y: f64,
    },
    /// Let frames pass without input.
    Wait {
        /// Seconds to wait.
        seconds: f64,
    },
    /// Request a reset.
    Reset,
}

/// A recorded pointer session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Seconds per frame.
    pub frame: f64,
    /// Steps in order. Each pointer step is followed by one frame.
    pub steps: Vec<Step>,
}

impl Script {
    /// Parses a script from JSON.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replays the script against `board`, presenting into `out` after every frame.
    ///
    /// Returns the number of frames ticked.
    pub fn run<M: SpaceMap, R: Rng>(
        &self,
        board: &mut Board<M, R>,
        out: &mut impl Renderable,
    ) -> usize {
        let frame = if self.frame > 0.0 { self.frame } else { 1.0 / 60.0 };
        let mut pointer = PointerTracker::default();
        let mut frames = 0;
        let mut tick = |board: &mut Board<M, R>, pointer: &mut PointerTracker| {
            board.tick(frame, pointer.frame());
            board.present(out);
            frames += 1;
        };
        for step in &self.steps {
            match *step {
                Step::Down { x, y } => pointer.handle(PointerEvent::Down(Point::new(x, y))),
                Step::Move { x, y } => pointer.handle(PointerEvent::Move(Point::new(x, y))),
                Step::Up { x, y } => pointer.handle(PointerEvent::Up(Point::new(x, y))),
                Step::Wait { seconds } => {
                    let mut left = seconds;
                    while left > 0.0 {
                        tick(board, &mut pointer);
                        left -= frame;
                    }
                    continue;
                }
                Step::Reset => {
                    info!("script requested reset");
                    board.request_reset();
                    continue;
                }
            }
            tick(board, &mut pointer);
        }
        frames
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Shown {
    representation: Representation,
    raised: bool,
}

/// A [`Renderable`] that logs visibility and raise changes at `debug`.
///
/// Transforms are kept but not logged; read them back with [`LogRenderer::world`]
/// and [`LogRenderer::panel`].
#[derive(Clone, Debug, Default)]
pub struct LogRenderer {
    shown: Vec<Option<Shown>>,
    world: Vec<(Point, f64)>,
    panel: Vec<(Point, Size)>,
}

impl LogRenderer {
    fn entry(&mut self, piece: PieceId) -> usize {
        let index = piece.index();
        if self.shown.len() <= index {
            self.shown.resize(index + 1, None);
            self.world.resize(index + 1, (Point::ZERO, 0.0));
            self.panel.resize(index + 1, (Point::ZERO, Size::ZERO));
        }
        index
    }

    /// Last world position and rotation pushed for `piece`.
    pub fn world(&self, piece: PieceId) -> Option<(Point, f64)> {
        self.world.get(piece.index()).copied()
    }

    /// Last panel position and size pushed for `piece`.
    pub fn panel(&self, piece: PieceId) -> Option<(Point, Size)> {
        self.panel.get(piece.index()).copied()
    }
}

impl Renderable for LogRenderer {
    fn set_visible(&mut self, piece: PieceId, representation: Representation, visible: bool) {
        if !visible {
            return;
        }
        let index = self.entry(piece);
        let raised = self.shown[index].is_some_and(|shown| shown.raised);
        let next = Shown {
            representation,
            raised,
        };
        if self.shown[index] != Some(next) {
            debug!(%piece, ?representation, "shown");
            self.shown[index] = Some(next);
        }
    }

    fn set_raised(&mut self, piece: PieceId, raised: bool) {
        let index = self.entry(piece);
        if let Some(shown) = &mut self.shown[index]
            && shown.raised != raised
        {
            debug!(%piece, raised, "raised");
            shown.raised = raised;
        }
    }

    fn set_world_transform(&mut self, piece: PieceId, position: Point, rotation: f64) {
        let index = self.entry(piece);
        self.world[index] = (position, rotation);
    }

    fn set_panel_transform(&mut self, piece: PieceId, position: Point, size: Size) {
        let index = self.entry(piece);
        self.panel[index] = (position, size);
    }
}

#[cfg(test)]
mod tests {
    use gearwork_puzzle::SiteId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn layout_round_trips_through_json() {
        let layout = Layout::five_gears();
        let json = layout.to_json().unwrap();
        let back = Layout::from_json(&json).unwrap();
        assert_eq!(back.pieces, 5);
        assert_eq!(back.sites.slot_count(), 5);
        assert_eq!(back.config, layout.config);
        assert_eq!(back.camera, layout.camera);
    }

    #[test]
    fn missing_config_takes_defaults() {
        let mut value = serde_json::to_value(Layout::five_gears()).unwrap();
        value.as_object_mut().unwrap().remove("config");
        let layout: Layout = serde_json::from_value(value).unwrap();
        assert_eq!(layout.config, PuzzleConfig::default());
    }

    #[test]
    fn too_many_pieces_is_a_board_error() {
        let mut layout = Layout::five_gears();
        layout.pieces = 6;
        let err = layout.build(StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, LoadError::Board(_)));
    }

    #[test]
    fn flat_camera_is_rejected() {
        let mut layout = Layout::five_gears();
        layout.camera.pixels_per_unit = 0.0;
        let err = layout.build(StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, LoadError::Camera(_)));
    }

    #[test]
    fn script_drags_a_piece_into_a_slot() {
        let layout = Layout::five_gears();
        let from = layout.camera.space_map().unwrap().world_to_panel(Point::new(-4.0, 1.0));
        let to = layout.sites.slot(2).unwrap().center();
        let mut board = layout.build(StdRng::seed_from_u64(1)).unwrap();

        let script = Script {
            frame: 1.0 / 60.0,
            steps: vec![
                Step::Down { x: from.x, y: from.y },
                Step::Move { x: to.x, y: to.y },
                Step::Up { x: to.x, y: to.y },
                Step::Wait { seconds: 1.0 },
            ],
        };
        let mut out = LogRenderer::default();
        let frames = script.run(&mut board, &mut out);

        assert!(frames > 60);
        assert_eq!(board.piece(PieceId::new(0)).unwrap().origin(), SiteId::slot(2));
        assert_eq!(out.panel(PieceId::new(0)).unwrap().0, to);
    }

    #[test]
    fn script_parses_tagged_steps() {
        let script = Script::from_json(
            r#"{ "frame": 0.02, "steps": [
                { "op": "down", "x": 1.0, "y": 2.0 },
                { "op": "wait", "seconds": 0.5 },
                { "op": "reset" }
            ] }"#,
        )
        .unwrap();
        assert_eq!(script.steps.len(), 3);
        assert_eq!(script.steps[2], Step::Reset);
    }
}
