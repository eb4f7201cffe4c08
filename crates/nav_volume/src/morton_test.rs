use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::constants::{MAX_COORD, MIN_COORD};

/// Origin lands on the bias bit of every axis (bit 20 of each, i.e. bits 60-62).
#[test]
fn test_origin_encodes_to_bias_bits() {
  assert_eq!(encode(0, 0, 0), 0x7000_0000_0000_0000);
  assert_eq!(decode(0x7000_0000_0000_0000), IVec3::ZERO);
}

#[test]
fn test_domain_extremes() {
  assert_eq!(encode(MIN_COORD, MIN_COORD, MIN_COORD), 0);
  assert_eq!(encode(MAX_COORD, MAX_COORD, MAX_COORD), (1u64 << 63) - 1);
  assert_eq!(decode(0), IVec3::splat(MIN_COORD));
  assert_eq!(decode((1u64 << 63) - 1), IVec3::splat(MAX_COORD));
}

/// Low bits interleave as z1 y1 x1 z0 y0 x0 for small positive coordinates.
#[test]
fn test_interleave_order() {
  let code = encode(1, 2, 3);
  assert_eq!(code & 0b11_1111, 0b11_0101);

  assert_eq!(encode(1, 0, 0) - encode(0, 0, 0), 0b001);
  assert_eq!(encode(0, 1, 0) - encode(0, 0, 0), 0b010);
  assert_eq!(encode(0, 0, 1) - encode(0, 0, 0), 0b100);
}

#[test]
fn test_negative_sorts_before_positive() {
  assert!(encode(-1, -1, -1) < encode(0, 0, 0));
  assert!(encode(-1, 0, 0) < encode(0, 0, 0));
  assert!(encode(0, 0, 0) < encode(1, 1, 1));
}

#[test]
fn test_roundtrip_small_cube() {
  for x in -4..=4 {
    for y in -4..=4 {
      for z in -4..=4 {
        let code = encode(x, y, z);
        assert_eq!(
          decode(code),
          IVec3::new(x, y, z),
          "Roundtrip failed for ({}, {}, {})",
          x,
          y,
          z
        );
      }
    }
  }
}

#[test]
fn test_roundtrip_random_domain() {
  let mut rng = StdRng::seed_from_u64(0x5eed);

  for _ in 0..10_000 {
    let p = IVec3::new(
      rng.random_range(MIN_COORD..=MAX_COORD),
      rng.random_range(MIN_COORD..=MAX_COORD),
      rng.random_range(MIN_COORD..=MAX_COORD),
    );
    assert_eq!(decode(encode_point(p)), p, "Roundtrip failed for {:?}", p);
  }
}

#[test]
fn test_single_axis_decode_matches_full_decode() {
  let p = IVec3::new(-12_345, 678, 1_000_000);
  let code = encode_point(p);

  assert_eq!(decode_x(code), p.x);
  assert_eq!(decode_y(code), p.y);
  assert_eq!(decode_z(code), p.z);
}

/// Values outside the 21-bit domain alias instead of failing.
#[test]
fn test_out_of_domain_wraps_silently() {
  let wrapped = encode(MAX_COORD + 1, 0, 0);
  assert_eq!(decode(wrapped), IVec3::new(MIN_COORD, 0, 0));
}

/// Codes for adjacent points differ by less than codes for distant points in
/// the vast majority of sampled pairs.
#[test]
fn test_locality_statistics() {
  let mut rng = StdRng::seed_from_u64(42);
  let samples = 2_000;
  let mut near_wins = 0;

  for _ in 0..samples {
    let p = IVec3::new(
      rng.random_range(-100_000..100_000),
      rng.random_range(-100_000..100_000),
      rng.random_range(-100_000..100_000),
    );
    let axis = rng.random_range(0..3);
    let mut near = p;
    near[axis] += 1;
    let far = p
      + IVec3::new(
        rng.random_range(2_000..5_000),
        rng.random_range(2_000..5_000),
        rng.random_range(2_000..5_000),
      );

    let base = encode_point(p);
    let near_diff = base.abs_diff(encode_point(near));
    let far_diff = base.abs_diff(encode_point(far));
    if near_diff < far_diff {
      near_wins += 1;
    }
  }

  let ratio = near_wins as f64 / samples as f64;
  assert!(ratio > 0.9, "Locality ratio too low: {}", ratio);
}
