//! Fork-join voxelizer.
//!
//! Every enqueued geometry set is launched immediately as its own unit on the
//! `TaskExecutor`. [`AsyncVoxelizer::run`] is the single join point: it waits
//! for every unit, then sorts and deduplicates the concatenated codes.
//!
//! # Usage
//!
//! ```ignore
//! let mut voxelizer = AsyncVoxelizer::new(grid);
//!
//! for set in geometry_sets {
//!     voxelizer.enqueue(set); // starts work right away
//! }
//!
//! let output = voxelizer.run()?; // blocks until every unit is done
//! ```

use web_time::Instant;

use super::process::finish;
use super::types::VoxelizationOutput;
use crate::error::{NavVolumeError, Result};
use crate::geometry::GeometrySet;
use crate::grid::VoxelGrid;
use crate::morton::MortonCode;
use crate::threading::{TaskExecutor, TaskFailure, TaskHandle};
use crate::voxelize::encode_geometry_set;

/// Launches one voxelization unit per geometry set and joins them.
///
/// Units share no mutable state: each owns the geometry set it was given and
/// its own output list. There is no cancellation; once enqueued a unit runs
/// to completion and is consumed by the next [`run`](Self::run).
#[derive(Debug)]
pub struct AsyncVoxelizer {
  grid: VoxelGrid,
  executor: TaskExecutor,
  handles: Vec<TaskHandle<Vec<MortonCode>>>,
  started: Option<Instant>,
}

impl AsyncVoxelizer {
  /// Voxelizer on rayon's global pool.
  pub fn new(grid: VoxelGrid) -> Self {
    Self::with_executor(grid, TaskExecutor::new())
  }

  /// Create using a shared executor.
  pub fn with_executor(grid: VoxelGrid, executor: TaskExecutor) -> Self {
    Self {
      grid,
      executor,
      handles: Vec::new(),
      started: None,
    }
  }

  pub fn grid(&self) -> &VoxelGrid {
    &self.grid
  }

  /// Launch a unit for `set` (non-blocking). Returns the unit index used in
  /// error reports.
  pub fn enqueue(&mut self, set: GeometrySet) -> usize {
    self.enqueue_unit(move |grid| encode_geometry_set(&set, grid))
  }

  /// Launch an arbitrary unit body on the voxelizer's grid.
  pub(crate) fn enqueue_unit<F>(&mut self, body: F) -> usize
  where
    F: FnOnce(&VoxelGrid) -> Vec<MortonCode> + Send + 'static,
  {
    let grid = self.grid;
    let handle = self.executor.spawn(move || body(&grid));

    self.started.get_or_insert_with(Instant::now);
    self.handles.push(handle);
    self.handles.len() - 1
  }

  /// Launch a unit per set.
  pub fn enqueue_all(&mut self, sets: impl IntoIterator<Item = GeometrySet>) {
    for set in sets {
      self.enqueue(set);
    }
  }

  /// Number of units launched since the last [`run`](Self::run).
  pub fn pending_count(&self) -> usize {
    self.handles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.handles.is_empty()
  }

  /// Join every unit, then merge.
  ///
  /// All units are waited for even if one fails; the first failure (by unit
  /// index) is returned. The voxelizer is empty afterwards and can be reused.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "pipeline::AsyncVoxelizer::run"))]
  pub fn run(&mut self) -> Result<VoxelizationOutput> {
    let start = self.started.take().unwrap_or_else(Instant::now);
    let handles = std::mem::take(&mut self.handles);

    let mut lists = Vec::with_capacity(handles.len());
    let mut first_error = None;

    for (unit, handle) in handles.into_iter().enumerate() {
      match handle.join() {
        Ok(codes) => lists.push(codes),
        Err(failure) => {
          #[cfg(feature = "tracing")]
          tracing::error!(unit, ?failure, "voxelization unit failed");

          let error = match failure {
            TaskFailure::Panicked(message) => NavVolumeError::UnitPanicked { unit, message },
            TaskFailure::Disconnected => NavVolumeError::UnitDisconnected { unit },
          };
          first_error.get_or_insert(error);
        }
      }
    }

    if let Some(error) = first_error {
      return Err(error);
    }

    Ok(finish(lists, start))
  }
}
