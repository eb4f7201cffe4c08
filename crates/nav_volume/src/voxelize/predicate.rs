//! Conservative inside tests for each primitive kind.
//!
//! Every predicate is inflated by half a voxel so that a voxel whose cube
//! touches the shape is reported as occupied. The test is evaluated at voxel
//! centers only, so it over-covers near the boundary but never misses.

use glam::DVec3;

use crate::geometry::{Plane, Primitive};
use crate::grid::VoxelGrid;

/// Precomputed inflated predicate for one primitive, in primitive-local space.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeTest<'a> {
  /// `|p|² <= (radius + half)²`
  Sphere { radius_sq: f64 },
  /// `|p.axis| <= size.axis / 2 + half` on every axis
  Box { half_extents: DVec3 },
  /// Distance to the Z segment `[-half_length, half_length]` within the
  /// inflated radius. The segment itself is not inflated: the radius already
  /// is.
  Capsule { radius_sq: f64, half_length: f64 },
  /// A sphere of radius `margin` at `p` intersects the hull.
  Convex { planes: &'a [Plane], margin: f64 },
}

impl<'a> ShapeTest<'a> {
  /// Build the inflated predicate for a primitive.
  pub fn new(primitive: &'a Primitive, grid: &VoxelGrid) -> Self {
    let half = grid.half_voxel_size() as f64;

    match primitive {
      Primitive::Sphere(sphere) => ShapeTest::Sphere {
        radius_sq: (sphere.radius + half).powi(2),
      },
      Primitive::Box(cuboid) => ShapeTest::Box {
        half_extents: cuboid.size * 0.5 + DVec3::splat(half),
      },
      Primitive::Capsule(capsule) => ShapeTest::Capsule {
        radius_sq: (capsule.radius + half).powi(2),
        half_length: (capsule.length * 0.5).max(0.0),
      },
      Primitive::Convex(hull) => ShapeTest::Convex {
        planes: hull.planes(),
        margin: half,
      },
    }
  }

  /// Test a point given in primitive-local space.
  #[inline]
  pub fn is_inside(&self, local: DVec3) -> bool {
    match self {
      ShapeTest::Sphere { radius_sq } => local.length_squared() <= *radius_sq,
      ShapeTest::Box { half_extents } => local.abs().cmple(*half_extents).all(),
      ShapeTest::Capsule {
        radius_sq,
        half_length,
      } => {
        let closest = DVec3::new(0.0, 0.0, local.z.clamp(-*half_length, *half_length));
        (local - closest).length_squared() <= *radius_sq
      }
      ShapeTest::Convex { planes, margin } => planes
        .iter()
        .all(|plane| plane.signed_distance(local) <= *margin),
    }
  }
}

#[cfg(test)]
#[path = "predicate_test.rs"]
mod predicate_test;
