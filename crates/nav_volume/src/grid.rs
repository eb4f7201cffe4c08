//! VoxelGrid - mapping between world units and voxel grid units.
//!
//! World position of a voxel = grid coordinate * `voxel_size`. Voxels are
//! centered on their grid point, so voxel `(0, 0, 0)` covers
//! `[-half, half]` on every axis.

use glam::{DVec3, IVec3};

use crate::constants::DEFAULT_VOXEL_SIZE;
use crate::error::{NavVolumeError, Result};
use crate::geometry::DAabb3;

/// Voxel grid configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
  voxel_size: i32,
}

impl VoxelGrid {
  /// Create a grid with the given voxel edge length.
  ///
  /// The size must be positive and even so the half size stays integral.
  pub fn new(voxel_size: i32) -> Result<Self> {
    if voxel_size <= 0 || voxel_size % 2 != 0 {
      return Err(NavVolumeError::InvalidVoxelSize(voxel_size));
    }
    Ok(Self { voxel_size })
  }

  #[inline]
  pub fn voxel_size(&self) -> i32 {
    self.voxel_size
  }

  #[inline]
  pub fn half_voxel_size(&self) -> i32 {
    self.voxel_size / 2
  }

  #[inline]
  pub fn inv_voxel_size(&self) -> f64 {
    1.0 / self.voxel_size as f64
  }

  /// Reduce a world position so each axis increment equals one voxel.
  ///
  /// Rounds half away from zero.
  #[inline]
  pub fn quantize(&self, world: DVec3) -> IVec3 {
    (world / self.voxel_size as f64).round().as_ivec3()
  }

  /// Expand a grid coordinate to its world position.
  #[inline]
  pub fn dequantize(&self, grid: IVec3) -> IVec3 {
    grid * self.voxel_size
  }

  /// Snap a world point to the nearest grid point, in world units.
  #[inline]
  pub fn snap_to_grid(&self, point: DVec3) -> IVec3 {
    self.quantize(point) * self.voxel_size
  }

  /// World-space center of a voxel.
  #[inline]
  pub fn voxel_center(&self, grid: IVec3) -> DVec3 {
    self.dequantize(grid).as_dvec3()
  }

  /// World-space cube covered by a voxel.
  pub fn voxel_bounds(&self, grid: IVec3) -> DAabb3 {
    DAabb3::from_center_half_extents(
      self.voxel_center(grid),
      DVec3::splat(self.half_voxel_size() as f64),
    )
  }
}

impl Default for VoxelGrid {
  fn default() -> Self {
    Self {
      voxel_size: DEFAULT_VOXEL_SIZE,
    }
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
