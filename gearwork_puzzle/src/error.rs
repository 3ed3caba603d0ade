// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::config::ConfigError;

/// Error returned when a [`Board`](crate::Board) cannot be built.
///
/// Once built, a board never fails: unusable input degrades to a no-op.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoardError {
    /// The configuration was rejected.
    Config(ConfigError),
    /// A board needs at least one piece.
    NoPieces,
    /// Piece `i` starts on placement `i`, so every piece needs a placement.
    TooFewPlacements {
        /// Requested piece count.
        pieces: usize,
        /// Placements in the registry.
        placements: usize,
    },
    /// A reset parks every piece in a slot, so every piece needs a slot.
    TooFewSlots {
        /// Requested piece count.
        pieces: usize,
        /// Slots in the registry.
        slots: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::NoPieces => f.write_str("a board needs at least one piece"),
            Self::TooFewPlacements { pieces, placements } => write!(
                f,
                "{pieces} pieces need as many placements, registry has {placements}"
            ),
            Self::TooFewSlots { pieces, slots } => {
                write!(f, "{pieces} pieces need as many slots, registry has {slots}")
            }
        }
    }
}

impl core::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for BoardError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
