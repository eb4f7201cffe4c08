//! nav_volume - Sparse voxel occupancy index for 3D navigation
//!
//! This crate converts static collision geometry inside a world region into a
//! sparse voxel octree keyed by Morton codes. The octree answers "is this
//! voxel occupied" and "where is this node" in O(depth) without pointer
//! chasing, and feeds navigation mesh generation.
//!
//! # Features
//!
//! - **Morton codec**: 21 bits per axis interleaved into a `u64` Z-order key
//! - **Conservative voxelization**: sphere, box, capsule and convex hull
//!   primitives, inflated by half a voxel so boundary voxels are never missed
//! - **Fork-join pipeline**: one rayon unit per geometry set, joined into a
//!   single sorted, deduplicated code list
//! - **Sparse voxel octree**: flat per-level node arrays built bottom-up in
//!   one scan per level
//!
//! # Example
//!
//! ```ignore
//! use nav_volume::{DAabb3, NavRelevantGeometry, NavVolume};
//!
//! let volume = NavVolume::new(region);
//! let octree = volume.build(geometry.as_slice())?;
//!
//! if octree.contains_point(agent_position) {
//!     // blocked
//! }
//! ```

pub mod constants;
pub mod error;
pub mod grid;
pub mod morton;

// Re-export commonly used items
pub use constants::{DEFAULT_VOXEL_SIZE, MAX_COORD, MAX_LEVELS, MIN_COORD};
pub use error::{NavVolumeError, Result};
pub use grid::VoxelGrid;
pub use morton::MortonCode;

// Collision primitive descriptors
pub mod geometry;
pub use geometry::{
  Capsule, ConvexHull, Cuboid, DAabb3, GeometrySet, Plane, Primitive, PrimitiveKind, Sphere,
};

// Conservative shape voxelization
pub mod voxelize;
pub use voxelize::{encode_geometry_set, ShapeTest};

// Cross-platform threading abstraction
pub mod threading;
pub use threading::{TaskExecutor, TaskId};

// Fork-join voxelization of many geometry sets
pub mod pipeline;
pub use pipeline::{AsyncVoxelizer, VoxelizationOutput, VoxelizationStats};

// Sparse voxel octree
pub mod octree;
pub use octree::{OctreeNode, SparseVoxelOctree};

// Region orchestration
pub mod nav_volume;
pub use nav_volume::{GeometrySource, NavRelevantGeometry, NavVolume, NavVolumeConfig};
