//! Conservative voxelization of collision primitives.
//!
//! - [`predicate`]: `ShapeTest` - inflated inside test per primitive kind
//! - [`sampler`]: bounded grid sampling in primitive-local space, and the
//!   per-geometry-set Morton encoding used by pipeline units

pub mod predicate;
pub mod sampler;

// Re-exports
pub use predicate::ShapeTest;
pub use sampler::{encode_geometry_set, sample_range, voxelize, voxelize_all};
