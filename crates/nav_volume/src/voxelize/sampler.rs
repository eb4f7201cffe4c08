//! Bounded grid sampling of primitives.
//!
//! World-space grid points inside the (expanded, snapped) bounds are mapped
//! into primitive-local space with the inverse of
//! `world_transform * primitive.local_transform()` and tested against the
//! inflated predicate. Cost is `O(volume / voxel_size³)` per primitive: keep
//! bounds tight.

use glam::{DAffine3, I64Vec3, IVec3};

use super::ShapeTest;
use crate::geometry::{DAabb3, GeometrySet, Primitive};
use crate::grid::VoxelGrid;
use crate::morton::{encode_point, MortonCode};

/// Upper bound on the capacity reserved up front for one geometry set.
const MAX_RESERVED_CODES: usize = 1 << 16;

/// Inverse of a local-to-world transform, `None` if it cannot be inverted.
fn invert(local_to_world: &DAffine3) -> Option<DAffine3> {
  let det = local_to_world.matrix3.determinant();
  if det == 0.0 || !det.is_finite() {
    return None;
  }
  let inverse = local_to_world.inverse();
  inverse.is_finite().then_some(inverse)
}

/// Snapped inclusive sampling range: `bounds` grown by half a voxel.
pub fn sample_range(world_bounds: &DAabb3, grid: &VoxelGrid) -> (IVec3, IVec3) {
  let expanded = world_bounds.expanded(grid.half_voxel_size() as f64);
  (grid.snap_to_grid(expanded.min), grid.snap_to_grid(expanded.max))
}

/// Voxelize one primitive, calling `emit` with the world position of every
/// occupied grid point.
///
/// Points are visited X-major, then Y, then Z, endpoints inclusive. Returns
/// the number of emitted points. A degenerate transform emits nothing.
pub fn voxelize<F: FnMut(IVec3)>(
  primitive: &Primitive,
  world_transform: &DAffine3,
  world_bounds: &DAabb3,
  grid: &VoxelGrid,
  mut emit: F,
) -> usize {
  let predicate = ShapeTest::new(primitive, grid);

  // General inverse: non-uniform scale must survive the round trip
  let local_to_world = *world_transform * primitive.local_transform();
  let Some(world_to_local) = invert(&local_to_world) else {
    #[cfg(feature = "tracing")]
    tracing::warn!(kind = ?primitive.kind(), "skipping primitive with singular transform");
    return 0;
  };

  let (min, max) = sample_range(world_bounds, grid);
  let step = grid.voxel_size() as usize;
  let mut emitted = 0;

  for x in (min.x..=max.x).step_by(step) {
    for y in (min.y..=max.y).step_by(step) {
      for z in (min.z..=max.z).step_by(step) {
        let world = IVec3::new(x, y, z);
        let local = world_to_local.transform_point3(world.as_dvec3());

        if predicate.is_inside(local) {
          emit(world);
          emitted += 1;
        }
      }
    }
  }

  emitted
}

/// Voxelize several primitives sharing a transform and bounds.
pub fn voxelize_all<'a, F: FnMut(IVec3)>(
  primitives: impl IntoIterator<Item = &'a Primitive>,
  world_transform: &DAffine3,
  world_bounds: &DAabb3,
  grid: &VoxelGrid,
  mut emit: F,
) -> usize {
  primitives
    .into_iter()
    .map(|primitive| voxelize(primitive, world_transform, world_bounds, grid, &mut emit))
    .sum()
}

/// Encode every occupied voxel of a geometry set as a Morton code.
///
/// This is the body of one voxelization unit. Primitives are processed in
/// [`PrimitiveKind::ORDER`](crate::geometry::PrimitiveKind::ORDER), so a set
/// always yields the same (unsorted, possibly duplicated) list.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "voxelize::encode_geometry_set"))]
pub fn encode_geometry_set(set: &GeometrySet, grid: &VoxelGrid) -> Vec<MortonCode> {
  if set.is_empty() {
    return Vec::new();
  }

  let (min, max) = sample_range(&set.bounds, grid);
  // Widened: the world-space span can exceed i32 at large voxel sizes
  let per_axis = (max.as_i64vec3() - min.as_i64vec3()) / grid.voxel_size() as i64 + I64Vec3::ONE;
  let estimate = (per_axis.x.max(0) as usize)
    .saturating_mul(per_axis.y.max(0) as usize)
    .saturating_mul(per_axis.z.max(0) as usize);
  let mut codes = Vec::with_capacity(estimate.min(MAX_RESERVED_CODES));

  voxelize_all(set.primitives(), &set.transform, &set.bounds, grid, |world| {
    codes.push(encode_point(grid.quantize(world.as_dvec3())));
  });

  #[cfg(feature = "tracing")]
  tracing::debug!(
    primitives = set.primitive_count(),
    codes = codes.len(),
    "geometry set voxelized"
  );

  codes
}

#[cfg(test)]
#[path = "sampler_test.rs"]
mod sampler_test;
