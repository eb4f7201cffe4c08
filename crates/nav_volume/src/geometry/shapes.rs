//! Collision primitive descriptors in component-local space.
//!
//! Each primitive carries its own placement inside the component (center and
//! rotation, or a full affine transform for convex hulls). The component's
//! local-to-world transform is applied on top by the voxelizer.

use glam::{DAffine3, DQuat, DVec3};
use smallvec::SmallVec;

use crate::error::{NavVolumeError, Result};

/// Sphere element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
  pub center: DVec3,
  pub radius: f64,
}

impl Sphere {
  pub fn new(radius: f64) -> Self {
    Self {
      center: DVec3::ZERO,
      radius,
    }
  }

  pub fn with_center(mut self, center: DVec3) -> Self {
    self.center = center;
    self
  }

  pub fn local_transform(&self) -> DAffine3 {
    DAffine3::from_translation(self.center)
  }
}

/// Oriented box element.
///
/// `size` holds the full extents along each local axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cuboid {
  pub center: DVec3,
  pub rotation: DQuat,
  pub size: DVec3,
}

impl Cuboid {
  pub fn new(size: DVec3) -> Self {
    Self {
      center: DVec3::ZERO,
      rotation: DQuat::IDENTITY,
      size,
    }
  }

  /// Box spanning `[-half_extents, half_extents]` around its center.
  pub fn from_half_extents(half_extents: DVec3) -> Self {
    Self::new(half_extents * 2.0)
  }

  pub fn with_center(mut self, center: DVec3) -> Self {
    self.center = center;
    self
  }

  pub fn with_rotation(mut self, rotation: DQuat) -> Self {
    self.rotation = rotation;
    self
  }

  pub fn local_transform(&self) -> DAffine3 {
    DAffine3::from_rotation_translation(self.rotation, self.center)
  }
}

/// Capsule element, aligned with its local Z axis.
///
/// `length` is the distance between the two hemisphere centers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capsule {
  pub center: DVec3,
  pub rotation: DQuat,
  pub radius: f64,
  pub length: f64,
}

impl Capsule {
  pub fn new(radius: f64, length: f64) -> Self {
    Self {
      center: DVec3::ZERO,
      rotation: DQuat::IDENTITY,
      radius,
      length,
    }
  }

  pub fn with_center(mut self, center: DVec3) -> Self {
    self.center = center;
    self
  }

  pub fn with_rotation(mut self, rotation: DQuat) -> Self {
    self.rotation = rotation;
    self
  }

  pub fn local_transform(&self) -> DAffine3 {
    DAffine3::from_rotation_translation(self.rotation, self.center)
  }
}

/// Plane with outward unit normal: `normal · p - distance` is the signed
/// distance of `p`, positive outside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
  pub normal: DVec3,
  pub distance: f64,
}

impl Plane {
  pub fn new(normal: DVec3, distance: f64) -> Self {
    Self { normal, distance }
  }

  /// Plane through `point` facing along `normal`.
  pub fn from_point_normal(point: DVec3, normal: DVec3) -> Self {
    Self {
      normal,
      distance: normal.dot(point),
    }
  }

  #[inline]
  pub fn signed_distance(&self, point: DVec3) -> f64 {
    self.normal.dot(point) - self.distance
  }
}

/// Convex hull element described by its bounding planes.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexHull {
  planes: SmallVec<[Plane; 8]>,
  transform: DAffine3,
}

impl ConvexHull {
  /// Build a hull from outward-facing planes.
  ///
  /// Normals are normalized (distances rescaled to match). Fails on an empty
  /// plane set or a zero/non-finite normal.
  pub fn new(planes: impl IntoIterator<Item = Plane>) -> Result<Self> {
    let planes = planes
      .into_iter()
      .enumerate()
      .map(|(index, plane)| {
        let length = plane.normal.length();
        if !length.is_finite() || length <= f64::EPSILON || !plane.distance.is_finite() {
          return Err(NavVolumeError::DegenerateConvexPlane { index });
        }
        Ok(Plane::new(plane.normal / length, plane.distance / length))
      })
      .collect::<Result<SmallVec<[Plane; 8]>>>()?;

    if planes.is_empty() {
      return Err(NavVolumeError::EmptyConvexHull);
    }

    Ok(Self {
      planes,
      transform: DAffine3::IDENTITY,
    })
  }

  /// Six-plane hull of an axis-aligned box centered at the origin.
  pub fn from_cuboid(half_extents: DVec3) -> Self {
    let planes = [DVec3::X, DVec3::Y, DVec3::Z]
      .into_iter()
      .zip(half_extents.to_array())
      .flat_map(|(axis, half)| [Plane::new(axis, half), Plane::new(-axis, half)])
      .collect();

    Self {
      planes,
      transform: DAffine3::IDENTITY,
    }
  }

  pub fn with_transform(mut self, transform: DAffine3) -> Self {
    self.transform = transform;
    self
  }

  pub fn planes(&self) -> &[Plane] {
    &self.planes
  }

  pub fn local_transform(&self) -> DAffine3 {
    self.transform
  }
}

/// Kinds of primitive the voxelizer knows how to sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
  Box,
  Convex,
  Sphere,
  Capsule,
}

impl PrimitiveKind {
  /// Fixed order in which a geometry set's primitives are voxelized.
  pub const ORDER: [PrimitiveKind; 4] = [
    PrimitiveKind::Box,
    PrimitiveKind::Convex,
    PrimitiveKind::Sphere,
    PrimitiveKind::Capsule,
  ];
}

/// Any supported collision primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
  Box(Cuboid),
  Convex(ConvexHull),
  Sphere(Sphere),
  Capsule(Capsule),
}

impl Primitive {
  pub fn kind(&self) -> PrimitiveKind {
    match self {
      Primitive::Box(_) => PrimitiveKind::Box,
      Primitive::Convex(_) => PrimitiveKind::Convex,
      Primitive::Sphere(_) => PrimitiveKind::Sphere,
      Primitive::Capsule(_) => PrimitiveKind::Capsule,
    }
  }

  /// Placement of the primitive inside its component.
  pub fn local_transform(&self) -> DAffine3 {
    match self {
      Primitive::Box(cuboid) => cuboid.local_transform(),
      Primitive::Convex(hull) => hull.local_transform(),
      Primitive::Sphere(sphere) => sphere.local_transform(),
      Primitive::Capsule(capsule) => capsule.local_transform(),
    }
  }
}

impl From<Cuboid> for Primitive {
  fn from(value: Cuboid) -> Self {
    Primitive::Box(value)
  }
}

impl From<ConvexHull> for Primitive {
  fn from(value: ConvexHull) -> Self {
    Primitive::Convex(value)
  }
}

impl From<Sphere> for Primitive {
  fn from(value: Sphere) -> Self {
    Primitive::Sphere(value)
  }
}

impl From<Capsule> for Primitive {
  fn from(value: Capsule) -> Self {
    Primitive::Capsule(value)
  }
}

#[cfg(test)]
#[path = "shapes_test.rs"]
mod shapes_test;
