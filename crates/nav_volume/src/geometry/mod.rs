//! Geometry descriptors consumed by the voxelizer.
//!
//! - [`bounds`]: `DAabb3` - double precision axis-aligned box
//! - [`shapes`]: sphere, box, capsule and convex hull primitives
//! - [`set`]: `GeometrySet` - primitives of one component plus its transform
//!   and navigation bounds

pub mod bounds;
pub mod set;
pub mod shapes;

// Re-exports
pub use bounds::DAabb3;
pub use set::GeometrySet;
pub use shapes::{Capsule, ConvexHull, Cuboid, Plane, Primitive, PrimitiveKind, Sphere};
