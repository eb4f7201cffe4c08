//! Axis-aligned bounding box with double precision.

use glam::{BVec3, DAffine3, DVec3};

/// Double-precision axis-aligned bounding box.
///
/// Used for navigation bounds of geometry sets, the region a navigation volume
/// covers, and the debug boxes of octree nodes. Both corners are inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DAabb3 {
  pub min: DVec3,
  pub max: DVec3,
}

impl DAabb3 {
  /// Box between two corners.
  ///
  /// Debug-asserts `min <= max` on every axis.
  pub fn new(min: DVec3, max: DVec3) -> Self {
    debug_assert!(min.cmple(max).all(), "bounds min {min} exceeds max {max}");
    Self { min, max }
  }

  pub fn from_center_half_extents(center: DVec3, half_extents: DVec3) -> Self {
    Self {
      min: center - half_extents,
      max: center + half_extents,
    }
  }

  /// Smallest box containing every point, `None` for an empty iterator.
  pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Option<Self> {
    let mut points = points.into_iter();
    let first = points.next()?;
    Some(points.fold(Self::new(first, first), |acc, p| Self {
      min: acc.min.min(p),
      max: acc.max.max(p),
    }))
  }

  /// Boxes sharing only a face, edge or corner still overlap.
  #[inline]
  pub fn overlaps(&self, other: &DAabb3) -> bool {
    self.min.cmple(other.max).all() && other.min.cmple(self.max).all()
  }

  #[inline]
  pub fn contains_point(&self, point: DVec3) -> bool {
    self.min.cmple(point).all() && point.cmple(self.max).all()
  }

  #[inline]
  pub fn size(&self) -> DVec3 {
    self.max - self.min
  }

  #[inline]
  pub fn center(&self) -> DVec3 {
    (self.min + self.max) * 0.5
  }

  #[inline]
  pub fn half_extents(&self) -> DVec3 {
    self.size() * 0.5
  }

  /// Grow outward by `margin` on every side.
  #[inline]
  pub fn expanded(&self, margin: f64) -> Self {
    let margin = DVec3::splat(margin);
    Self {
      min: self.min - margin,
      max: self.max + margin,
    }
  }

  /// Smallest box containing both.
  #[inline]
  pub fn union(&self, other: &DAabb3) -> Self {
    Self {
      min: self.min.min(other.min),
      max: self.max.max(other.max),
    }
  }

  /// The 8 corners; bit `i` of the index selects max on axis `i`, matching
  /// octant numbering.
  pub fn corners(&self) -> [DVec3; 8] {
    std::array::from_fn(|i| {
      DVec3::select(
        BVec3::new(i & 1 != 0, i & 2 != 0, i & 4 != 0),
        self.max,
        self.min,
      )
    })
  }

  /// Box enclosing this one after an affine transform.
  pub fn transformed(&self, transform: &DAffine3) -> Self {
    let corners = self.corners().map(|corner| transform.transform_point3(corner));
    let first = corners[0];
    corners[1..].iter().fold(Self::new(first, first), |acc, &p| Self {
      min: acc.min.min(p),
      max: acc.max.max(p),
    })
  }
}
