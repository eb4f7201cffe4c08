//! SparseVoxelOctree - arena octree over sorted Morton codes.
//!
//! Levels are flat arrays of [`OctreeNode`], finest first. A node at level
//! `L` groups the codes sharing the prefix `code >> 3·(L+1)`; its children
//! live in level `L-1`, or in the leaf array when `L == 0`. There are no
//! pointers and no per-node coordinates.

use glam::{DVec3, IVec3};

use super::levels::build_levels;
use super::OctreeNode;
use crate::geometry::DAabb3;
use crate::grid::VoxelGrid;
use crate::morton::{self, MortonCode};

/// Immutable sparse voxel octree.
///
/// Built once from the merged output of the voxelization pipeline and only
/// read afterwards, so it can be shared freely between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseVoxelOctree {
  grid: VoxelGrid,
  leaves: Vec<MortonCode>,
  levels: Vec<Vec<OctreeNode>>,
}

impl SparseVoxelOctree {
  /// Build from strictly ascending, unique codes.
  ///
  /// The code list is taken by move and becomes the leaf array.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::build"))]
  pub fn new(codes: Vec<MortonCode>, grid: VoxelGrid) -> Self {
    debug_assert!(
      codes.windows(2).all(|w| w[0] < w[1]),
      "octree codes must be strictly ascending"
    );

    let levels = build_levels(&codes);
    let octree = Self {
      grid,
      leaves: codes,
      levels,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
      leaves = octree.leaves.len(),
      levels = octree.levels.len(),
      nodes = octree.node_count(),
      "octree built"
    );

    octree
  }

  /// Build from codes in any order, with duplicates.
  pub fn from_unsorted(mut codes: Vec<MortonCode>, grid: VoxelGrid) -> Self {
    codes.sort_unstable();
    codes.dedup();
    Self::new(codes, grid)
  }

  #[inline]
  pub fn grid(&self) -> &VoxelGrid {
    &self.grid
  }

  #[inline]
  pub fn num_levels(&self) -> usize {
    self.levels.len()
  }

  /// Occupied voxel codes, strictly ascending.
  #[inline]
  pub fn leaves(&self) -> &[MortonCode] {
    &self.leaves
  }

  #[inline]
  pub fn leaf_count(&self) -> usize {
    self.leaves.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.leaves.is_empty()
  }

  /// Nodes of one level, in ascending code order.
  ///
  /// # Panics
  ///
  /// If `level >= num_levels()`.
  pub fn level(&self, level: usize) -> &[OctreeNode] {
    self.assert_level(level);
    &self.levels[level]
  }

  /// Total node count over all levels.
  pub fn node_count(&self) -> usize {
    self.levels.iter().map(Vec::len).sum()
  }

  /// The single node of the coarsest level, if it has exactly one.
  ///
  /// `None` for an empty tree, and for trees whose codes still differ above
  /// the level cap (codes outside the coordinate domain).
  pub fn root(&self) -> Option<OctreeNode> {
    match self.levels.last().map(Vec::as_slice) {
      Some([root]) => Some(*root),
      _ => None,
    }
  }

  /// Morton code of a node: the code of its first leaf with the bits below
  /// `3·(level+1)` cleared.
  pub fn morton_code(&self, node: OctreeNode, level: usize) -> MortonCode {
    self.assert_level(level);

    let mut index = node.first_child as usize;
    for finer in self.levels[..level].iter().rev() {
      index = finer[index].first_child as usize;
    }

    self.leaves[index] & (!0u64 << (3 * (level + 1)))
  }

  /// World-space center of a node.
  pub fn position(&self, node: OctreeNode, level: usize) -> IVec3 {
    let corner = self.grid.dequantize(morton::decode(self.morton_code(node, level)));
    corner + IVec3::splat(self.half_size(level) - self.grid.half_voxel_size())
  }

  /// Half edge length of a node at `level`: a level covers `2^(level+1)`
  /// voxels per axis.
  ///
  /// # Panics
  ///
  /// If `level` is out of range.
  #[inline]
  pub fn half_size(&self, level: usize) -> i32 {
    self.assert_level(level);
    self.grid.half_voxel_size() << (level + 1)
  }

  /// Child node in `octant` of a node at `level` (> 0).
  ///
  /// # Panics
  ///
  /// If `level` is 0 (children are leaves, see [`leaf_code`](Self::leaf_code))
  /// or out of range, or `octant >= 8`.
  pub fn child(&self, node: OctreeNode, level: usize, octant: u8) -> Option<OctreeNode> {
    assert!(level > 0, "level 0 children are leaf codes");
    self.assert_level(level);
    node
      .has_child(octant)
      .then(|| self.levels[level - 1][node.child_index(octant)])
  }

  /// Leaf code in `octant` of a level 0 node.
  pub fn leaf_code(&self, node: OctreeNode, octant: u8) -> Option<MortonCode> {
    node
      .has_child(octant)
      .then(|| self.leaves[node.child_index(octant)])
  }

  /// Check whether a voxel code is occupied.
  ///
  /// Descends from the root one octant digit per level. Falls back to a
  /// binary search over the leaves when there is no single root.
  pub fn contains(&self, code: MortonCode) -> bool {
    let Some(root) = self.root() else {
      return self.leaves.binary_search(&code).is_ok();
    };

    let top = self.num_levels() - 1;
    let shift = 3 * (top + 1);
    if self.morton_code(root, top) >> shift != code >> shift {
      return false;
    }

    let mut node = root;
    for level in (1..=top).rev() {
      let octant = ((code >> (3 * level)) & 7) as u8;
      match self.child(node, level, octant) {
        Some(child) => node = child,
        None => return false,
      }
    }

    self.leaf_code(node, (code & 7) as u8) == Some(code)
  }

  /// Check whether the voxel containing a world point is occupied.
  pub fn contains_point(&self, world: DVec3) -> bool {
    self.contains(morton::encode_point(self.grid.quantize(world)))
  }

  /// World-space cube of every leaf voxel, in code order.
  pub fn leaf_boxes(&self) -> impl Iterator<Item = DAabb3> + '_ {
    self
      .leaves
      .iter()
      .map(move |&code| self.grid.voxel_bounds(morton::decode(code)))
  }

  /// World-space cube of every node of a level.
  pub fn level_boxes(&self, level: usize) -> impl Iterator<Item = DAabb3> + '_ {
    self.assert_level(level);
    let half_extents = DVec3::splat(self.half_size(level) as f64);

    self.levels[level].iter().map(move |&node| {
      DAabb3::from_center_half_extents(self.position(node, level).as_dvec3(), half_extents)
    })
  }

  #[inline]
  fn assert_level(&self, level: usize) {
    assert!(
      level < self.levels.len(),
      "level {level} out of range (tree has {} levels)",
      self.levels.len()
    );
  }
}

#[cfg(test)]
#[path = "svo_test.rs"]
mod svo_test;
