// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sending every placed piece back to a random free slot.
//!
//! A reset is a small state machine advanced once per tick after input has
//! been handled. Each phase either finishes immediately and falls through to
//! the next one, or suspends until its condition holds on a later tick:
//!
//! 1. [`WaitingForUnlock`](ResetPhase::WaitingForUnlock): wait until nothing
//!    is moving and no piece is held. If no piece rests on a placement the
//!    reset ends here; otherwise it takes the lock.
//! 2. [`Reverting`](ResetPhase::Reverting): if the pieces were spinning, revert
//!    them and wait for the rotation to come to rest.
//! 3. [`Delaying`](ResetPhase::Delaying): pause for the configured reset delay.
//! 4. [`Assigning`](ResetPhase::Assigning): pair placed pieces with free slots at
//!    random and send them there.
//!
//! There is no way to cancel a reset once requested. Requests made while
//! another reset is running queue behind it; by the time they take the lock
//! there is usually nothing left to reset.

use gearwork_sites::SiteId;
use rand::Rng;
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::board::{Banner, Board};
use crate::piece::PieceId;
use crate::rotation::RotationMode;
use crate::space::SpaceMap;

/// Where a reset is in its sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResetPhase {
    /// Waiting for the lock to be released and the pointer to let go.
    WaitingForUnlock,
    /// Waiting for the revert-to-rest rotation to finish.
    Reverting,
    /// Pausing before the pieces leave.
    Delaying {
        /// Seconds left in the pause.
        remaining: f64,
    },
    /// About to send pieces to slots.
    Assigning,
    /// Finished.
    Done,
}

/// One requested reset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ResetSequence {
    pub(crate) phase: ResetPhase,
}

impl ResetSequence {
    pub(crate) const fn new() -> Self {
        Self {
            phase: ResetPhase::WaitingForUnlock,
        }
    }
}

impl<M: SpaceMap, R: Rng> Board<M, R> {
    /// Requests a reset. It starts running on the next tick.
    pub fn request_reset(&mut self) {
        debug!(queued = self.resets.len(), "reset requested");
        self.resets.push(ResetSequence::new());
    }

    /// Phase of the oldest unfinished reset, if any.
    #[must_use]
    pub fn reset_phase(&self) -> Option<ResetPhase> {
        self.resets.first().map(|seq| seq.phase)
    }

    pub(crate) fn step_resets(&mut self, dt: f64) {
        if self.resets.is_empty() {
            return;
        }
        let mut resets = core::mem::take(&mut self.resets);
        for seq in &mut resets {
            self.advance_reset(seq, dt);
        }
        resets.retain(|seq| seq.phase != ResetPhase::Done);
        self.resets = resets;
    }

    fn advance_reset(&mut self, seq: &mut ResetSequence, dt: f64) {
        loop {
            match seq.phase {
                ResetPhase::WaitingForUnlock => {
                    if self.locked || self.held.is_some() {
                        return;
                    }
                    if !self.pieces.iter().any(|piece| piece.origin.is_placement()) {
                        debug!("nothing to reset");
                        seq.phase = ResetPhase::Done;
                        return;
                    }
                    info!("reset started");
                    self.locked = true;
                    if self.rotation == RotationMode::Idle {
                        seq.phase = ResetPhase::Assigning;
                    } else {
                        self.begin_revert();
                        seq.phase = ResetPhase::Reverting;
                    }
                }
                ResetPhase::Reverting => {
                    if self.rotation != RotationMode::Idle {
                        return;
                    }
                    // The pause starts counting on the next tick.
                    seq.phase = ResetPhase::Delaying {
                        remaining: self.config.reset_delay,
                    };
                    return;
                }
                ResetPhase::Delaying { remaining } => {
                    let remaining = remaining - dt;
                    if remaining > 0.0 {
                        seq.phase = ResetPhase::Delaying { remaining };
                        return;
                    }
                    seq.phase = ResetPhase::Assigning;
                }
                ResetPhase::Assigning => {
                    self.scatter_into_slots();
                    seq.phase = ResetPhase::Done;
                    return;
                }
                ResetPhase::Done => return,
            }
        }
    }

    /// Pairs placed pieces with free slots uniformly at random.
    fn scatter_into_slots(&mut self) {
        let mut free: SmallVec<[usize; 8]> = self
            .registry
            .slot_indices()
            .filter(|&index| self.occupant(SiteId::slot(index)).is_none())
            .collect();
        let mut placed: SmallVec<[PieceId; 8]> = self
            .pieces()
            .filter(|(_, piece)| !piece.origin.is_slot())
            .map(|(id, _)| id)
            .collect();

        let mut sent = 0_usize;
        while !free.is_empty() && !placed.is_empty() {
            let id = placed.swap_remove(self.rng.random_range(0..placed.len()));
            let slot = free.swap_remove(self.rng.random_range(0..free.len()));
            self.send_to(id, SiteId::slot(slot));
            sent += 1;
        }
        if sent == 0 {
            self.locked = false;
        }
        self.banner = Banner::Default;
        info!(sent, "reset scattered pieces");
    }
}
