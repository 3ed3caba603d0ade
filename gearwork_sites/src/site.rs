// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;

/// The two families of sites a piece can rest on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SiteKind {
    /// A world-space placement on the board.
    Placement,
    /// A panel-space slot in the inventory strip.
    Slot,
}

/// Stable identity of a site: its kind plus an index unique within that kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiteId {
    /// Which family the site belongs to.
    pub kind: SiteKind,
    /// Index within the family.
    pub index: usize,
}

impl SiteId {
    /// Identity of the placement at `index`.
    #[must_use]
    pub const fn placement(index: usize) -> Self {
        Self {
            kind: SiteKind::Placement,
            index,
        }
    }

    /// Identity of the slot at `index`.
    #[must_use]
    pub const fn slot(index: usize) -> Self {
        Self {
            kind: SiteKind::Slot,
            index,
        }
    }

    /// Returns `true` for world-space placements.
    #[must_use]
    pub const fn is_placement(self) -> bool {
        matches!(self.kind, SiteKind::Placement)
    }

    /// Returns `true` for panel slots.
    #[must_use]
    pub const fn is_slot(self) -> bool {
        matches!(self.kind, SiteKind::Slot)
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SiteKind::Placement => write!(f, "placement {}", self.index),
            SiteKind::Slot => write!(f, "slot {}", self.index),
        }
    }
}

/// Where a site sits, expressed in the space that owns it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SiteAnchor {
    /// Centre of a placement, in world coordinates.
    World(Point),
    /// Centre of a slot, in panel coordinates.
    Panel(Point),
}

/// A resolved site: identity plus anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Site {
    /// The site's identity.
    pub id: SiteId,
    /// The point pieces settle onto.
    pub anchor: SiteAnchor,
}
