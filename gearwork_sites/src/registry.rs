// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use kurbo::{Point, Rect};

use crate::site::{Site, SiteAnchor, SiteId, SiteKind};

/// A circular placement target in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Centre of the target; pieces settle exactly here.
    pub center: Point,
    /// Radius of the circular collider.
    pub radius: f64,
}

impl Placement {
    /// Creates a placement centred on `center`.
    #[must_use]
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns `true` if `pt` lies inside or on the collider.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        (pt - self.center).hypot2() <= self.radius * self.radius
    }
}

/// The immutable set of placements, slots, and the panel region.
///
/// Site indices are positions in the vectors handed to [`SiteRegistry::new`].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiteRegistry {
    placements: Vec<Placement>,
    slots: Vec<Rect>,
    panel: Rect,
}

impl SiteRegistry {
    /// Creates a registry from world-space placements, panel-space slot
    /// rectangles, and the panel region that hosts the slots.
    #[must_use]
    pub fn new(placements: Vec<Placement>, slots: Vec<Rect>, panel: Rect) -> Self {
        Self {
            placements,
            slots,
            panel,
        }
    }

    /// Number of placements.
    #[must_use]
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Number of slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Indices of every slot.
    #[must_use]
    pub fn slot_indices(&self) -> Range<usize> {
        0..self.slots.len()
    }

    /// The panel region in panel coordinates.
    #[must_use]
    pub fn panel(&self) -> Rect {
        self.panel
    }

    /// Returns the placement at `index`, if any.
    #[must_use]
    pub fn placement(&self, index: usize) -> Option<&Placement> {
        self.placements.get(index)
    }

    /// Returns the slot rectangle at `index`, if any.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<Rect> {
        self.slots.get(index).copied()
    }

    /// Resolves `id` into a [`Site`], or `None` if the index is out of range.
    #[must_use]
    pub fn site(&self, id: SiteId) -> Option<Site> {
        let anchor = match id.kind {
            SiteKind::Placement => SiteAnchor::World(self.placements.get(id.index)?.center),
            SiteKind::Slot => SiteAnchor::Panel(self.slots.get(id.index)?.center()),
        };
        Some(Site { id, anchor })
    }

    /// Returns `true` if `id` names a site in this registry.
    #[must_use]
    pub fn contains(&self, id: SiteId) -> bool {
        match id.kind {
            SiteKind::Placement => id.index < self.placements.len(),
            SiteKind::Slot => id.index < self.slots.len(),
        }
    }

    /// Iterates every site: placements first, then slots.
    pub fn sites(&self) -> impl Iterator<Item = Site> + '_ {
        let placements = self.placements.iter().enumerate().map(|(index, p)| Site {
            id: SiteId::placement(index),
            anchor: SiteAnchor::World(p.center),
        });
        let slots = self.slots.iter().enumerate().map(|(index, r)| Site {
            id: SiteId::slot(index),
            anchor: SiteAnchor::Panel(r.center()),
        });
        placements.chain(slots)
    }

    /// Finds the site under a pointer.
    ///
    /// `world` and `panel` are the same pointer expressed in both spaces.
    /// Sites are tested by ascending index, and for each index the placement is
    /// tested before the slot; the first hit wins.
    #[must_use]
    pub fn hit(&self, world: Point, panel: Point) -> Option<SiteId> {
        let count = self.placements.len().max(self.slots.len());
        (0..count).find_map(|index| {
            if self.placements.get(index).is_some_and(|p| p.contains(world)) {
                Some(SiteId::placement(index))
            } else if self.slots.get(index).is_some_and(|r| r.contains(panel)) {
                Some(SiteId::slot(index))
            } else {
                None
            }
        })
    }

    /// Returns `true` if the panel-space point lies over the panel region.
    #[must_use]
    pub fn panel_contains(&self, panel: Point) -> bool {
        self.panel.contains(panel)
    }
}
