//! OctreeNode - one populated cell of a sparse octree level.
//!
//! Nodes carry no coordinates. A node's position is recovered from the
//! Morton code of any leaf below it (see
//! [`SparseVoxelOctree::morton_code`](super::SparseVoxelOctree::morton_code)).

use crate::constants::OCTANT_COUNT;

/// Octree node - index into the next-finer level plus an occupancy mask.
///
/// Octant numbering follows the Morton digit layout:
/// - bit 0: X offset (0 or 1)
/// - bit 1: Y offset (0 or 1)
/// - bit 2: Z offset (0 or 1)
///
/// Populated children are stored contiguously starting at `first_child`, in
/// ascending octant order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct OctreeNode {
  /// Index of the first child in the next-finer level (or in the leaves for
  /// level 0 nodes).
  pub first_child: u32,
  /// Bit `n` set when octant `n` is populated.
  pub child_mask: u8,
}

impl OctreeNode {
  pub fn new(first_child: u32, child_mask: u8) -> Self {
    Self {
      first_child,
      child_mask,
    }
  }

  /// Check whether `octant` (0-7) is populated.
  ///
  /// # Panics
  ///
  /// If `octant >= 8`.
  #[inline]
  pub fn has_child(&self, octant: u8) -> bool {
    assert!(octant < OCTANT_COUNT, "octant {octant} out of range");
    self.child_mask & (1 << octant) != 0
  }

  /// Index of the child in `octant` within the next-finer level.
  ///
  /// The offset is the number of populated octants below `octant`.
  ///
  /// # Panics
  ///
  /// If `octant >= 8` or the octant is not populated.
  #[inline]
  pub fn child_index(&self, octant: u8) -> usize {
    assert!(self.has_child(octant), "octant {octant} is not populated");
    let below = self.child_mask & ((1u8 << octant) - 1);
    self.first_child as usize + below.count_ones() as usize
  }

  /// Number of populated octants.
  #[inline]
  pub fn child_count(&self) -> u32 {
    self.child_mask.count_ones()
  }

  /// Populated octants in ascending order.
  pub fn octants(&self) -> impl Iterator<Item = u8> + '_ {
    (0..OCTANT_COUNT).filter(move |&octant| self.child_mask & (1 << octant) != 0)
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
