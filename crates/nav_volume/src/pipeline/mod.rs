//! Voxelization Pipeline
//!
//! Fans geometry sets out to concurrent units and joins them into one
//! canonical Morton code list.
//!
//! ```text
//! ┌──────────────┐     ┌────────────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │ GeometrySet  ├────►│ Unit (1 per set)   ├────►│ Join barrier├────►│ SparseVoxelOctree│
//! └──────────────┘     └────────────────────┘     └─────────────┘     └──────────────────┘
//!        │                      │                        │                     │
//!   primitives +          Vec<MortonCode>          sort + dedup           built once
//!   transform + bounds    (unsorted, dups)       (ascending, unique)     (read-only)
//! ```
//!
//! # Entry Points
//!
//! - [`voxelize_sets`]: synchronous, rayon `par_iter` over sets
//! - [`voxelize_sets_sequential`]: single-threaded reference
//! - [`AsyncVoxelizer`]: enqueue launches a unit immediately, `run` joins
//!
//! All three share [`merge_codes`], so their outputs are identical.

pub mod async_process;
pub mod process;
pub mod types;


// Re-exports
pub use async_process::AsyncVoxelizer;
pub use process::{merge_codes, voxelize_sets, voxelize_sets_sequential};
pub use types::{VoxelizationOutput, VoxelizationStats};
