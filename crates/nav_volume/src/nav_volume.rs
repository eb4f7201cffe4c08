//! NavVolume - builds the occupancy octree for one world region.
//!
//! ```text
//! GeometrySource::overlapping(bounds)
//!        │  (once, before any unit starts)
//!        ▼
//! relevant, non-empty sets ──► AsyncVoxelizer::enqueue (1 unit each)
//!                                     │
//!                              AsyncVoxelizer::run (join, sort, dedup)
//!                                     │
//!                                     ▼
//!                            SparseVoxelOctree::new
//! ```

use std::sync::Arc;

use crate::constants::DEFAULT_VOXEL_SIZE;
use crate::error::{NavVolumeError, Result};
use crate::geometry::{DAabb3, GeometrySet};
use crate::grid::VoxelGrid;
use crate::octree::SparseVoxelOctree;
use crate::pipeline::{AsyncVoxelizer, VoxelizationOutput};
use crate::threading::TaskExecutor;

/// Geometry found overlapping a region.
#[derive(Clone, Debug)]
pub struct NavRelevantGeometry {
  pub geometry: GeometrySet,
  /// Entries with `false` are ignored by the volume.
  pub navigation_relevant: bool,
}

impl NavRelevantGeometry {
  /// Navigation-relevant geometry.
  pub fn relevant(geometry: GeometrySet) -> Self {
    Self {
      geometry,
      navigation_relevant: true,
    }
  }

  /// Geometry that blocks physics but not navigation.
  pub fn irrelevant(geometry: GeometrySet) -> Self {
    Self {
      geometry,
      navigation_relevant: false,
    }
  }
}

/// Enumerates static geometry overlapping a world region.
///
/// This is the seam to the host's physics scene. It is queried once per
/// build, before voxelization starts, and is only read.
pub trait GeometrySource {
  fn overlapping(&self, region: &DAabb3) -> Vec<NavRelevantGeometry>;
}

/// In-memory source: every entry whose navigation bounds overlap the region.
impl GeometrySource for [NavRelevantGeometry] {
  fn overlapping(&self, region: &DAabb3) -> Vec<NavRelevantGeometry> {
    self
      .iter()
      .filter(|entry| entry.geometry.bounds.overlaps(region))
      .cloned()
      .collect()
  }
}

/// Build settings for a navigation volume.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavVolumeConfig {
  /// Voxel edge length in world units (positive, even).
  pub voxel_size: i32,
  /// Size of a dedicated worker pool. `None` uses rayon's global pool.
  pub worker_threads: Option<usize>,
}

impl Default for NavVolumeConfig {
  fn default() -> Self {
    Self {
      voxel_size: DEFAULT_VOXEL_SIZE,
      worker_threads: None,
    }
  }
}

impl NavVolumeConfig {
  pub fn with_voxel_size(mut self, voxel_size: i32) -> Self {
    self.voxel_size = voxel_size;
    self
  }

  pub fn with_worker_threads(mut self, threads: usize) -> Self {
    self.worker_threads = Some(threads);
    self
  }

  /// Validated grid for `voxel_size`.
  pub fn grid(&self) -> Result<VoxelGrid> {
    VoxelGrid::new(self.voxel_size)
  }

  /// Executor for voxelization units.
  pub fn executor(&self) -> Result<TaskExecutor> {
    let Some(threads) = self.worker_threads else {
      return Ok(TaskExecutor::new());
    };

    let pool = rayon::ThreadPoolBuilder::new()
      .num_threads(threads)
      .thread_name(|index| format!("nav-volume-{index}"))
      .build()
      .map_err(|err| NavVolumeError::ThreadPool(err.to_string()))?;

    Ok(TaskExecutor::with_pool(Arc::new(pool)))
  }
}

/// A world region to be indexed for navigation.
#[derive(Debug)]
pub struct NavVolume {
  grid: VoxelGrid,
  bounds: DAabb3,
  executor: TaskExecutor,
}

impl NavVolume {
  /// Volume on the default grid and rayon's global pool.
  pub fn new(bounds: DAabb3) -> Self {
    Self {
      grid: VoxelGrid::default(),
      bounds,
      executor: TaskExecutor::new(),
    }
  }

  pub fn from_config(bounds: DAabb3, config: &NavVolumeConfig) -> Result<Self> {
    Ok(Self {
      grid: config.grid()?,
      bounds,
      executor: config.executor()?,
    })
  }

  pub fn with_grid(mut self, grid: VoxelGrid) -> Self {
    self.grid = grid;
    self
  }

  pub fn with_executor(mut self, executor: TaskExecutor) -> Self {
    self.executor = executor;
    self
  }

  pub fn grid(&self) -> &VoxelGrid {
    &self.grid
  }

  pub fn bounds(&self) -> &DAabb3 {
    &self.bounds
  }

  /// Voxelize every relevant geometry set overlapping the volume.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "nav_volume::voxelize"))]
  pub fn voxelize<S>(&self, source: &S) -> Result<VoxelizationOutput>
  where
    S: GeometrySource + ?Sized,
  {
    let candidates = source.overlapping(&self.bounds);
    #[cfg(feature = "tracing")]
    let candidate_count = candidates.len();

    let mut voxelizer = AsyncVoxelizer::with_executor(self.grid, self.executor.clone());
    for entry in candidates {
      if entry.navigation_relevant && !entry.geometry.is_empty() {
        voxelizer.enqueue(entry.geometry);
      }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
      candidates = candidate_count,
      units = voxelizer.pending_count(),
      skipped = candidate_count - voxelizer.pending_count(),
      "nav volume units launched"
    );

    voxelizer.run()
  }

  /// Voxelize the volume and build its octree.
  pub fn build<S>(&self, source: &S) -> Result<SparseVoxelOctree>
  where
    S: GeometrySource + ?Sized,
  {
    let output = self.voxelize(source)?;
    Ok(SparseVoxelOctree::new(output.into_codes(), self.grid))
  }
}

#[cfg(test)]
#[path = "nav_volume_test.rs"]
mod nav_volume_test;
