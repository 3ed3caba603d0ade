// Copyright 2025 the Gearwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion between world space and panel space.
//!
//! Every piece has a world representation (drawn in the scene) and a panel
//! representation (drawn over the scene, in the same coordinates as the
//! pointer). The board never assumes how the two relate; it asks a
//! [`SpaceMap`]. [`AffineSpaceMap`] covers the common case of an orthographic
//! camera, where the mapping is a single affine transform.

use core::fmt;

use kurbo::{Affine, Point};

/// Converts points between world space and panel space.
pub trait SpaceMap {
    /// Maps a world-space point into panel space.
    fn world_to_panel(&self, world: Point) -> Point;

    /// Maps a panel-space point into world space.
    fn panel_to_world(&self, panel: Point) -> Point;
}

/// A [`SpaceMap`] defined by one invertible affine transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineSpaceMap {
    world_to_panel: Affine,
    panel_to_world: Affine,
}

/// Error returned when a world-to-panel transform has no finite inverse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SingularTransform {
    /// Determinant of the rejected transform.
    pub determinant: f64,
}

impl fmt::Display for SingularTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "world-to-panel transform is not invertible (determinant {})",
            self.determinant
        )
    }
}

impl core::error::Error for SingularTransform {}

impl AffineSpaceMap {
    /// Creates a map from a world-to-panel transform.
    ///
    /// The transform must be invertible; a singular one maps panel points to
    /// NaN. Use [`try_new`](Self::try_new) for transforms built from input.
    #[must_use]
    pub fn new(world_to_panel: Affine) -> Self {
        Self {
            world_to_panel,
            panel_to_world: world_to_panel.inverse(),
        }
    }

    /// Creates a map from a world-to-panel transform, rejecting one that is
    /// not finite or has no finite inverse.
    pub fn try_new(world_to_panel: Affine) -> Result<Self, SingularTransform> {
        let panel_to_world = world_to_panel.inverse();
        if !world_to_panel.is_finite() || !panel_to_world.is_finite() {
            return Err(SingularTransform {
                determinant: world_to_panel.determinant(),
            });
        }
        Ok(Self {
            world_to_panel,
            panel_to_world,
        })
    }

    /// An orthographic camera: world point `world_center` lands on panel point
    /// `panel_center`, one world unit spans `pixels_per_unit` panel units, and
    /// panel y grows downward while world y grows upward.
    #[must_use]
    pub fn orthographic(world_center: Point, panel_center: Point, pixels_per_unit: f64) -> Self {
        Self::new(orthographic_transform(
            world_center,
            panel_center,
            pixels_per_unit,
        ))
    }

    /// Like [`orthographic`](Self::orthographic), but rejects a zero or
    /// non-finite scale.
    pub fn try_orthographic(
        world_center: Point,
        panel_center: Point,
        pixels_per_unit: f64,
    ) -> Result<Self, SingularTransform> {
        Self::try_new(orthographic_transform(
            world_center,
            panel_center,
            pixels_per_unit,
        ))
    }

    /// The world-to-panel transform.
    #[must_use]
    pub fn world_to_panel_transform(&self) -> Affine {
        self.world_to_panel
    }
}

fn orthographic_transform(world_center: Point, panel_center: Point, pixels_per_unit: f64) -> Affine {
    Affine::translate(panel_center.to_vec2())
        * Affine::scale_non_uniform(pixels_per_unit, -pixels_per_unit)
        * Affine::translate(-world_center.to_vec2())
}

impl Default for AffineSpaceMap {
    fn default() -> Self {
        Self::new(Affine::IDENTITY)
    }
}

impl SpaceMap for AffineSpaceMap {
    fn world_to_panel(&self, world: Point) -> Point {
        self.world_to_panel * world
    }

    fn panel_to_world(&self, panel: Point) -> Point {
        self.panel_to_world * panel
    }
}

impl<T: SpaceMap + ?Sized> SpaceMap for &T {
    fn world_to_panel(&self, world: Point) -> Point {
        (**self).world_to_panel(world)
    }

    fn panel_to_world(&self, panel: Point) -> Point {
        (**self).panel_to_world(panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orthographic_maps_centers_and_flips_y() {
        let map = AffineSpaceMap::orthographic(Point::ZERO, Point::new(400.0, 300.0), 100.0);
        assert_eq!(map.world_to_panel(Point::ZERO), Point::new(400.0, 300.0));
        assert_eq!(map.world_to_panel(Point::new(1.0, 1.0)), Point::new(500.0, 200.0));
        let world = map.panel_to_world(Point::new(300.0, 400.0));
        assert!((world - Point::new(-1.0, -1.0)).hypot() < 1e-9);
    }

    #[test]
    fn round_trip_through_both_spaces() {
        let map = AffineSpaceMap::orthographic(Point::new(2.0, -1.0), Point::new(64.0, 32.0), 8.0);
        let world = Point::new(3.5, 0.25);
        let back = map.panel_to_world(map.world_to_panel(world));
        assert!((back - world).hypot() < 1e-9);
    }

    #[test]
    fn zero_scale_is_rejected() {
        let err = AffineSpaceMap::try_orthographic(Point::ZERO, Point::new(400.0, 300.0), 0.0)
            .unwrap_err();
        assert_eq!(err.determinant, 0.0);
    }

    #[test]
    fn non_finite_scale_is_rejected() {
        assert!(
            AffineSpaceMap::try_orthographic(Point::ZERO, Point::ZERO, f64::NAN).is_err()
        );
        assert!(
            AffineSpaceMap::try_orthographic(Point::ZERO, Point::ZERO, f64::INFINITY).is_err()
        );
    }

    #[test]
    fn collapsed_axis_is_rejected() {
        let squash = Affine::scale_non_uniform(10.0, 0.0);
        assert!(AffineSpaceMap::try_new(squash).is_err());
    }

    #[test]
    fn invertible_transform_is_accepted() {
        let map = AffineSpaceMap::try_orthographic(Point::ZERO, Point::new(400.0, 300.0), 100.0)
            .unwrap();
        assert_eq!(
            map,
            AffineSpaceMap::orthographic(Point::ZERO, Point::new(400.0, 300.0), 100.0)
        );
    }
}
