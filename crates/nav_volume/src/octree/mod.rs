//! Sparse voxel octree over Morton-coded voxels.
//!
//! The tree is built bottom-up from the sorted, unique code list produced by
//! the voxelization pipeline. Only populated cells are stored.
//!
//! # Level Convention
//!
//! Level 0 = finest nodes (parents of leaf voxels), higher = coarser.
//!
//! ```text
//! Node Edge = voxel_size * 2^(level+1)
//! Prefix    = code >> 3 * (level+1)
//! ```
//!
//! # Module Structure
//!
//! - [`node`]: `OctreeNode` - first child index + 8-bit occupancy mask
//! - [`levels`]: bottom-up construction, one sorted scan per level
//! - [`svo`]: `SparseVoxelOctree` - construction, queries and debug boxes

pub mod levels;
pub mod node;
pub mod svo;

// Re-exports
pub use node::OctreeNode;
pub use svo::SparseVoxelOctree;
