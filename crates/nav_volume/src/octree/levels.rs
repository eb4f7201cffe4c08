//! Bottom-up level construction from a sorted code sequence.

use super::OctreeNode;
use crate::constants::MAX_LEVELS;
use crate::morton::MortonCode;

/// Build one level from a strictly ascending child sequence.
///
/// A child's parent is `code >> 3` and its octant is `code & 7`. Equal
/// parents are adjacent in a sorted sequence, so one scan groups them.
/// Returns the level's nodes and the distinct parent codes, which are the
/// child sequence of the next coarser level.
pub fn build_level(children: &[MortonCode]) -> (Vec<OctreeNode>, Vec<MortonCode>) {
  let mut nodes: Vec<OctreeNode> = Vec::new();
  let mut parents: Vec<MortonCode> = Vec::new();

  for (index, &code) in children.iter().enumerate() {
    let parent = code >> 3;
    if parents.last() != Some(&parent) {
      parents.push(parent);
      nodes.push(OctreeNode::new(index as u32, 0));
    }
    if let Some(node) = nodes.last_mut() {
      node.child_mask |= 1 << (code & 7);
    }
  }

  (nodes, parents)
}

/// Build every level, finest first.
///
/// Stops once a level has a single parent (that level's node is the root),
/// or after [`MAX_LEVELS`] levels. An empty input yields one empty level.
pub fn build_levels(leaves: &[MortonCode]) -> Vec<Vec<OctreeNode>> {
  let mut levels = Vec::with_capacity(MAX_LEVELS);

  let (nodes, mut parents) = build_level(leaves);
  levels.push(nodes);

  while parents.len() > 1 && levels.len() < MAX_LEVELS {
    let (nodes, next) = build_level(&parents);
    levels.push(nodes);
    parents = next;
  }

  levels
}
