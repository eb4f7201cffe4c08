//! Pipeline output types.

use crate::morton::MortonCode;

/// Statistics from one voxelization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoxelizationStats {
  /// Number of concurrent units (one per geometry set).
  pub unit_count: usize,
  /// Codes emitted by all units before the merge.
  pub raw_code_count: usize,
  /// Codes left after sort + dedup.
  pub unique_code_count: usize,
  /// Wall time from launch to merged output, in microseconds.
  pub total_us: u64,
}

impl VoxelizationStats {
  /// Codes removed by the merge because several units or primitives covered
  /// the same voxel.
  pub fn duplicate_count(&self) -> usize {
    self.raw_code_count - self.unique_code_count
  }
}

/// Canonical code list produced by the pipeline join.
///
/// `codes` is strictly ascending with no duplicates, ready to be moved into
/// a [`SparseVoxelOctree`](crate::octree::SparseVoxelOctree).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoxelizationOutput {
  pub codes: Vec<MortonCode>,
  pub stats: VoxelizationStats,
}

impl VoxelizationOutput {
  pub fn is_empty(&self) -> bool {
    self.codes.is_empty()
  }

  /// Move the code list out.
  pub fn into_codes(self) -> Vec<MortonCode> {
    self.codes
  }
}
