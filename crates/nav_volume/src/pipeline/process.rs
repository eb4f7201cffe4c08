//! Synchronous voxelization entry points and the shared merge barrier.
//!
//! # Usage
//!
//! ```ignore
//! let output = voxelize_sets(&geometry_sets, &grid);
//! let octree = SparseVoxelOctree::new(output.codes, grid);
//! ```

use rayon::prelude::*;
use web_time::Instant;

use super::types::{VoxelizationOutput, VoxelizationStats};
use crate::geometry::GeometrySet;
use crate::grid::VoxelGrid;
use crate::morton::MortonCode;
use crate::voxelize::encode_geometry_set;

/// Concatenate per-unit lists, sort ascending and drop duplicates.
///
/// The result does not depend on the order of `lists`.
pub fn merge_codes(lists: impl IntoIterator<Item = Vec<MortonCode>>) -> Vec<MortonCode> {
  let mut codes: Vec<MortonCode> = Vec::new();
  for list in lists {
    if codes.is_empty() {
      codes = list;
    } else {
      codes.extend(list);
    }
  }

  codes.sort_unstable();
  codes.dedup();
  codes
}

/// Merge unit lists and fill in stats.
pub(crate) fn finish(lists: Vec<Vec<MortonCode>>, start: Instant) -> VoxelizationOutput {
  let unit_count = lists.len();
  let raw_code_count = lists.iter().map(Vec::len).sum();
  let codes = merge_codes(lists);

  let stats = VoxelizationStats {
    unit_count,
    raw_code_count,
    unique_code_count: codes.len(),
    total_us: start.elapsed().as_micros() as u64,
  };

  #[cfg(feature = "tracing")]
  tracing::debug!(
    units = stats.unit_count,
    raw = stats.raw_code_count,
    unique = stats.unique_code_count,
    total_us = stats.total_us,
    "voxelization merged"
  );

  VoxelizationOutput { codes, stats }
}

/// Voxelize every geometry set in parallel and merge the results.
///
/// Uses rayon internally; blocks until all sets are done.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "pipeline::voxelize_sets"))]
pub fn voxelize_sets(sets: &[GeometrySet], grid: &VoxelGrid) -> VoxelizationOutput {
  let start = Instant::now();
  let lists: Vec<_> = sets
    .par_iter()
    .map(|set| encode_geometry_set(set, grid))
    .collect();

  finish(lists, start)
}

/// Single-threaded reference for [`voxelize_sets`].
pub fn voxelize_sets_sequential(sets: &[GeometrySet], grid: &VoxelGrid) -> VoxelizationOutput {
  let start = Instant::now();
  let lists: Vec<_> = sets
    .iter()
    .map(|set| encode_geometry_set(set, grid))
    .collect();

  finish(lists, start)
}
