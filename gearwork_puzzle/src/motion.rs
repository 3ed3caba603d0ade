// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timed movement and scaling.
//!
//! Moves interpolate the world position only; the panel position is always
//! derived from it through the [`SpaceMap`], so the two representations never
//! drift apart. Scales interpolate the panel representation's size toward the
//! sizing of the site kind the piece is heading for.

use gearwork_sites::SiteKind;
use kurbo::Size;
use rand::Rng;
use tracing::{debug, trace};

use crate::board::{Board, site_points};
use crate::space::SpaceMap;
use crate::timer::{Step, lerp};

fn lerp_size(from: Size, to: Size, t: f64) -> Size {
    Size::new(lerp(from.width, to.width, t), lerp(from.height, to.height, t))
}

impl<M: SpaceMap, R: Rng> Board<M, R> {
    /// Panel-representation size for pieces sized as `kind`.
    pub(crate) fn size_for(&self, kind: SiteKind) -> Size {
        match kind {
            SiteKind::Placement => self.config.world_size,
            SiteKind::Slot => self.config.panel_size,
        }
    }

    pub(crate) fn step_scaling(&mut self, dt: f64) {
        let step = self.timers.scaling.advance(dt);
        if step == Step::Idle {
            return;
        }
        let world_size = self.size_for(SiteKind::Placement);
        let panel_size = self.size_for(SiteKind::Slot);
        for piece in &mut self.pieces {
            let Some(kind) = piece.scaling else {
                continue;
            };
            let target = match kind {
                SiteKind::Placement => world_size,
                SiteKind::Slot => panel_size,
            };
            match step {
                Step::Running(t) => {
                    piece.pose.panel_size = lerp_size(piece.anchors.panel_size, target, t);
                }
                Step::Finished => {
                    piece.pose.panel_size = target;
                    piece.scaling = None;
                }
                Step::Idle => {}
            }
        }
    }

    pub(crate) fn step_movement(&mut self, dt: f64) {
        match self.timers.movement.advance(dt) {
            Step::Idle => {}
            Step::Running(t) => {
                trace!(progress = t, "moving");
                for piece in &mut self.pieces {
                    if !piece.moving {
                        continue;
                    }
                    let site = piece.destination.unwrap_or(piece.origin);
                    let Some((target, _)) = site_points(&self.registry, &self.spaces, site) else {
                        continue;
                    };
                    let world = piece.anchors.world_position.lerp(target, t);
                    piece.pose.world_position = world;
                    piece.pose.panel_position = self.spaces.world_to_panel(world);
                }
            }
            Step::Finished => {
                self.settle_moving();
                self.locked = false;
                self.detect_completion();
            }
        }
    }

    /// Snaps every moving piece onto its destination and makes it the origin.
    fn settle_moving(&mut self) {
        let rest = self.config.rest_angle_radians();
        let world_size = self.config.world_size;
        for piece in &mut self.pieces {
            if !piece.moving {
                continue;
            }
            let site = piece.destination.unwrap_or(piece.origin);
            let Some((world, panel)) = site_points(&self.registry, &self.spaces, site) else {
                piece.moving = false;
                piece.destination = None;
                continue;
            };
            match site.kind {
                SiteKind::Slot => piece.pose.world_rotation = rest,
                SiteKind::Placement => piece.pose.panel_size = world_size,
            }
            piece.arrive(site, world, panel);
            debug!(%site, "piece settled");
        }
    }
}

#[cfg(test)]
mod tests {
    use gearwork_sites::SiteId;
    use kurbo::Size;

    use crate::board::site_points;
    use crate::piece::{PieceId, Representation};
    use crate::test_util::board;

    #[test]
    fn move_interpolates_world_and_derives_panel() {
        let mut b = board();
        let id = PieceId::new(0);
        let (target, _) = site_points(&b.registry, &b.spaces, SiteId::placement(1)).unwrap();
        let start = b.piece(id).unwrap().pose().world_position;
        b.pieces[0].destination = Some(SiteId::placement(1));
        b.pieces[0].begin_move();
        b.timers.movement.start();

        let half = b.timers.movement.duration() / 2.0;
        b.step_movement(half);

        let pose = *b.piece(id).unwrap().pose();
        let expected = start.lerp(target, 0.5);
        assert!((pose.world_position - expected).hypot() < 1e-9);
        let panel = b.spaces.world_to_panel_transform() * pose.world_position;
        assert!((pose.panel_position - panel).hypot() < 1e-9);
    }

    #[test]
    fn settle_into_slot_resets_rotation_and_unlocks() {
        let mut b = board();
        b.locked = true;
        b.pieces[3].pose.world_rotation = 2.0;
        b.pieces[3].destination = Some(SiteId::slot(1));
        b.pieces[3].begin_move();
        b.timers.movement.start();

        b.step_movement(10.0);

        let piece = b.piece(PieceId::new(3)).unwrap();
        assert_eq!(piece.origin(), SiteId::slot(1));
        assert_eq!(piece.destination(), None);
        assert!(!piece.is_moving());
        assert_eq!(piece.pose().shown, Representation::Panel);
        assert_eq!(piece.pose().world_rotation, b.config().rest_angle.to_radians());
        let slot_center = b.registry().slot(1).unwrap().center();
        assert_eq!(piece.pose().panel_position, slot_center);
        assert!(!b.is_locked());
    }

    #[test]
    fn settle_onto_placement_uses_world_size() {
        let mut b = board();
        b.pieces[2].pose.panel_size = Size::new(1.0, 1.0);
        b.pieces[2].destination = Some(SiteId::placement(2));
        b.pieces[2].begin_move();
        b.timers.movement.start();
        b.step_movement(10.0);

        let piece = b.piece(PieceId::new(2)).unwrap();
        assert_eq!(piece.pose().panel_size, b.config().world_size);
        assert_eq!(piece.pose().shown, Representation::World);
        assert_eq!(
            piece.pose().world_position,
            b.registry().placement(2).unwrap().center
        );
    }

    #[test]
    fn scale_runs_toward_slot_size_then_clears() {
        let mut b = board();
        let from = b.config().world_size;
        let to = b.config().panel_size;
        b.pieces[0].begin_scale(gearwork_sites::SiteKind::Slot);
        b.timers.scaling.start();

        let half = b.timers.scaling.duration() / 2.0;
        b.step_scaling(half);
        let mid = b.piece(PieceId::new(0)).unwrap().pose().panel_size;
        assert!((mid.width - (from.width + to.width) / 2.0).abs() < 1e-9);

        b.step_scaling(half * 4.0);
        let piece = b.piece(PieceId::new(0)).unwrap();
        assert_eq!(piece.pose().panel_size, to);
        assert_eq!(piece.scaling_target(), None);
        // Pieces that were not scaling keep their size.
        assert_eq!(b.piece(PieceId::new(1)).unwrap().pose().panel_size, from);
    }

    #[test]
    fn settled_timer_is_idempotent() {
        let mut b = board();
        b.pieces[1].destination = Some(SiteId::slot(4));
        b.pieces[1].begin_move();
        b.pieces[1].begin_scale(gearwork_sites::SiteKind::Slot);
        b.timers.movement.start();
        b.timers.scaling.start();
        b.step_scaling(10.0);
        b.step_movement(10.0);

        let before = *b.piece(PieceId::new(1)).unwrap().pose();
        for _ in 0..5 {
            b.step_scaling(0.1);
            b.step_movement(0.1);
        }
        assert_eq!(*b.piece(PieceId::new(1)).unwrap().pose(), before);
    }
}
