//! 64-bit Morton (Z-order) codes over signed 3D integer coordinates.
//!
//! Bits of the three axes are interleaved so that points close together in
//! space tend to sort close together:
//!
//! ```text
//! <1, 2, 3>:  x = 01, y = 10, z = 11
//! interleave: z1 y1 x1 z0 y0 x0 = 1 1 0 1 0 1
//! ```
//!
//! Each axis keeps 21 bits after biasing by `2^20`, so the supported range is
//! `[-1_048_576, 1_048_575]`. Out-of-range input silently wraps.

use glam::IVec3;

use crate::constants::{COORD_MASK, SIGN_OFFSET};

/// Interleaved 3D coordinate.
pub type MortonCode = u64;

/// Inserts two zero bits between each of the low 21 bits.
#[inline(always)]
fn part_by_2(n: u64) -> u64 {
  let mut n = n & COORD_MASK;
  n = (n ^ (n << 32)) & 0x001f_0000_0000_ffff;
  n = (n ^ (n << 16)) & 0x001f_0000_ff00_00ff;
  n = (n ^ (n << 8)) & 0x100f_00f0_0f00_f00f;
  n = (n ^ (n << 4)) & 0x10c3_0c30_c30c_30c3;
  n = (n ^ (n << 2)) & 0x1249_2492_4924_9249;
  n
}

/// Extracts every third bit, undoing [`part_by_2`].
#[inline(always)]
fn compact_by_2(n: u64) -> u64 {
  let mut n = n & 0x1249_2492_4924_9249;
  n = (n ^ (n >> 2)) & 0x10c3_0c30_c30c_30c3;
  n = (n ^ (n >> 4)) & 0x100f_00f0_0f00_f00f;
  n = (n ^ (n >> 8)) & 0x001f_0000_ff00_00ff;
  n = (n ^ (n >> 16)) & 0x001f_0000_0000_ffff;
  n = (n ^ (n >> 32)) & COORD_MASK;
  n
}

#[inline(always)]
fn normalize(n: i32) -> u64 {
  n.wrapping_add(SIGN_OFFSET) as u32 as u64
}

#[inline(always)]
fn denormalize(n: u64) -> i32 {
  n as i32 - SIGN_OFFSET
}

/// Encode a grid coordinate.
#[inline]
pub fn encode(x: i32, y: i32, z: i32) -> MortonCode {
  part_by_2(normalize(x)) | (part_by_2(normalize(y)) << 1) | (part_by_2(normalize(z)) << 2)
}

/// Encode a grid coordinate given as a vector.
#[inline]
pub fn encode_point(point: IVec3) -> MortonCode {
  encode(point.x, point.y, point.z)
}

/// Decode a code back into its grid coordinate.
#[inline]
pub fn decode(code: MortonCode) -> IVec3 {
  IVec3::new(decode_x(code), decode_y(code), decode_z(code))
}

#[inline]
pub fn decode_x(code: MortonCode) -> i32 {
  denormalize(compact_by_2(code))
}

#[inline]
pub fn decode_y(code: MortonCode) -> i32 {
  denormalize(compact_by_2(code >> 1))
}

#[inline]
pub fn decode_z(code: MortonCode) -> i32 {
  denormalize(compact_by_2(code >> 2))
}

#[cfg(test)]
#[path = "morton_test.rs"]
mod morton_test;
