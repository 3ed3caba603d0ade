// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use gearwork_sites::{SiteAnchor, SiteId, SiteRegistry};
use kurbo::Point;
use rand::Rng;
use tracing::debug;

use crate::config::PuzzleConfig;
use crate::error::BoardError;
use crate::piece::{Piece, PieceId, Pose, Representation};
use crate::pointer::PointerFrame;
use crate::render::Renderable;
use crate::reset::ResetSequence;
use crate::rotation::RotationMode;
use crate::space::SpaceMap;
use crate::timer::TimerSet;

/// Which of the two configured texts the board displays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Banner {
    /// The puzzle is unsolved.
    #[default]
    Default,
    /// Every piece rests on a placement.
    Completed,
}

/// The puzzle: pieces, sites, timers, and the global interaction state.
///
/// A board is driven by calling [`tick`](Self::tick) once per frame. Each tick
/// runs, in order: the rotation state machine, the scaling and movement
/// transitions (settling finished moves and re-checking completion), one step
/// of pointer input (skipped while locked), and any pending resets.
///
/// `M` converts between world and panel space; `R` is the random source used
/// when a reset scatters pieces into slots.
#[derive(Debug)]
pub struct Board<M, R> {
    pub(crate) registry: SiteRegistry,
    pub(crate) spaces: M,
    pub(crate) rng: R,
    pub(crate) config: PuzzleConfig,
    pub(crate) pieces: Vec<Piece>,
    pub(crate) timers: TimerSet,
    pub(crate) rotation: RotationMode,
    pub(crate) held: Option<PieceId>,
    pub(crate) locked: bool,
    pub(crate) banner: Banner,
    pub(crate) resets: Vec<ResetSequence>,
}

impl<M: SpaceMap, R: Rng> Board<M, R> {
    /// Creates a board with `piece_count` pieces, piece `i` resting on placement `i`.
    ///
    /// Starting with every piece placed means the board starts completed.
    pub fn new(
        registry: SiteRegistry,
        spaces: M,
        rng: R,
        config: PuzzleConfig,
        piece_count: usize,
    ) -> Result<Self, BoardError> {
        config.validate()?;
        if piece_count == 0 {
            return Err(BoardError::NoPieces);
        }
        if registry.placement_count() < piece_count {
            return Err(BoardError::TooFewPlacements {
                pieces: piece_count,
                placements: registry.placement_count(),
            });
        }
        if registry.slot_count() < piece_count {
            return Err(BoardError::TooFewSlots {
                pieces: piece_count,
                slots: registry.slot_count(),
            });
        }

        let rest = config.rest_angle_radians();
        let pieces = (0..piece_count)
            .filter_map(|index| {
                let center = registry.placement(index)?.center;
                Some(Piece::new(
                    SiteId::placement(index),
                    Pose {
                        world_position: center,
                        world_rotation: rest,
                        panel_position: spaces.world_to_panel(center),
                        panel_size: config.world_size,
                        shown: Representation::World,
                        raised: false,
                    },
                ))
            })
            .collect();

        let mut board = Self {
            timers: TimerSet::new(&config.durations),
            registry,
            spaces,
            rng,
            config,
            pieces,
            rotation: RotationMode::Idle,
            held: None,
            locked: false,
            banner: Banner::Default,
            resets: Vec::new(),
        };
        board.detect_completion();
        Ok(board)
    }

    /// Advances the simulation by `dt` seconds with this frame's pointer input.
    pub fn tick(&mut self, dt: f64, pointer: PointerFrame) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.step_rotation(dt);
        self.step_scaling(dt);
        self.step_movement(dt);
        if !self.locked {
            self.handle_pointer(pointer);
        }
        self.step_resets(dt);
    }

    /// Pushes every piece's pose into `out`.
    pub fn present(&self, out: &mut impl Renderable) {
        for (id, piece) in self.pieces() {
            let pose = piece.pose();
            out.set_visible(id, Representation::World, pose.shown == Representation::World);
            out.set_visible(id, Representation::Panel, pose.shown == Representation::Panel);
            out.set_raised(id, pose.raised);
            out.set_world_transform(id, pose.world_position, pose.world_rotation);
            out.set_panel_transform(id, pose.panel_position, pose.panel_size);
        }
    }

    /// Sends a piece toward `site`, starting its move and scale transitions.
    pub(crate) fn send_to(&mut self, id: PieceId, site: SiteId) {
        let Some(piece) = self.pieces.get_mut(id.0) else {
            return;
        };
        piece.destination = Some(site);
        piece.begin_move();
        piece.begin_scale(site.kind);
        if site.is_slot() {
            piece.show(Representation::Panel);
        }
        self.timers.movement.start();
        self.timers.scaling.start();
        debug!(%id, from = %piece.origin, to = %site, "piece sent");
    }
}

impl<M, R> Board<M, R> {
    /// The site registry.
    #[must_use]
    pub fn registry(&self) -> &SiteRegistry {
        &self.registry
    }

    /// The world/panel space map.
    #[must_use]
    pub fn spaces(&self) -> &M {
        &self.spaces
    }

    /// The configuration the board was built with.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Number of pieces.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Returns the piece with `id`, if any.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    /// Iterates every piece with its id.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .map(|(index, piece)| (PieceId(index), piece))
    }

    /// The piece whose origin is `site`, if any.
    #[must_use]
    pub fn occupant(&self, site: SiteId) -> Option<PieceId> {
        self.pieces
            .iter()
            .position(|piece| piece.origin == site)
            .map(PieceId)
    }

    /// The piece being dragged, if any.
    #[must_use]
    pub fn held(&self) -> Option<PieceId> {
        self.held
    }

    /// Returns `true` while pointer input is suppressed by a move or reset.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The transition countdowns.
    #[must_use]
    pub fn timers(&self) -> &TimerSet {
        &self.timers
    }

    /// The global rotation state.
    #[must_use]
    pub fn rotation_mode(&self) -> RotationMode {
        self.rotation
    }

    /// Which text is displayed.
    #[must_use]
    pub fn banner(&self) -> Banner {
        self.banner
    }

    /// The displayed text.
    #[must_use]
    pub fn banner_text(&self) -> &str {
        match self.banner {
            Banner::Default => &self.config.banner.default,
            Banner::Completed => &self.config.banner.completed,
        }
    }

    /// Returns `true` while in [`RotationMode::Completed`].
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.rotation == RotationMode::Completed
    }

    /// Returns `true` while a reset has been requested and not yet finished.
    #[must_use]
    pub fn is_resetting(&self) -> bool {
        !self.resets.is_empty()
    }
}

/// World and panel points of a site's anchor.
pub(crate) fn site_points(
    registry: &SiteRegistry,
    spaces: &impl SpaceMap,
    id: SiteId,
) -> Option<(Point, Point)> {
    match registry.site(id)?.anchor {
        SiteAnchor::World(world) => Some((world, spaces.world_to_panel(world))),
        SiteAnchor::Panel(panel) => Some((spaces.panel_to_world(panel), panel)),
    }
}
