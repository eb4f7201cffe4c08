//! Error type for recoverable failures.
//!
//! Octree contract violations (level or octant out of range) are not
//! represented here: they panic.

use thiserror::Error;

/// Errors produced while configuring the grid, describing geometry or joining
/// voxelization units.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavVolumeError {
  /// Voxel edge length must be positive and even.
  #[error("voxel size must be a positive even integer, got {0}")]
  InvalidVoxelSize(i32),

  /// A convex hull needs at least one bounding plane.
  #[error("convex hull has no planes")]
  EmptyConvexHull,

  /// A convex hull plane normal is zero or not finite.
  #[error("convex hull plane {index} has a degenerate normal")]
  DegenerateConvexPlane { index: usize },

  /// A voxelization unit panicked while running.
  #[error("voxelization unit {unit} panicked: {message}")]
  UnitPanicked { unit: usize, message: String },

  /// A voxelization unit dropped its result channel without reporting.
  #[error("voxelization unit {unit} disconnected before producing a result")]
  UnitDisconnected { unit: usize },

  /// A dedicated worker pool could not be created.
  #[error("failed to build worker pool: {0}")]
  ThreadPool(String),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, NavVolumeError>;
