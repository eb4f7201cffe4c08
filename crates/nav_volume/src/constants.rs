//! Constants shared by the Morton codec, voxel grid and octree.

/// Bits kept per axis when interleaving a coordinate into a Morton code.
pub const COORD_BITS: u32 = 21;

/// Mask selecting the low [`COORD_BITS`] bits of a normalized coordinate.
pub const COORD_MASK: u64 = (1 << COORD_BITS) - 1;

/// Bias added to signed coordinates so zero sits in the middle of the 21-bit
/// unsigned range: `<-3, -2, -1, 0, 1, 2, 3>` stays ordered after the cast.
pub const SIGN_OFFSET: i32 = 1 << (COORD_BITS - 1);

/// Smallest coordinate representable per axis.
pub const MIN_COORD: i32 = -SIGN_OFFSET; // -1_048_576

/// Largest coordinate representable per axis.
pub const MAX_COORD: i32 = SIGN_OFFSET - 1; // 1_048_575

/// Maximum number of octree levels: one per 3-bit group of the code.
pub const MAX_LEVELS: usize = COORD_BITS as usize;

/// Number of children per octree node.
pub const OCTANT_COUNT: u8 = 8;

/// Voxel edge length used by the navigation subsystem when none is configured.
pub const DEFAULT_VOXEL_SIZE: i32 = 32;

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
