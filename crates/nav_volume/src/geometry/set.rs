//! GeometrySet - the primitives of one navigation-relevant component.

use glam::DAffine3;

use super::{Capsule, ConvexHull, Cuboid, DAabb3, Primitive, PrimitiveKind, Sphere};

/// Primitives sharing one local-to-world transform and navigation bounds.
///
/// One geometry set is voxelized by one concurrent unit.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometrySet {
  primitives: Vec<Primitive>,
  /// Component local-to-world transform.
  pub transform: DAffine3,
  /// World-space navigation bounds; sampling never leaves this box (plus half
  /// a voxel).
  pub bounds: DAabb3,
}

impl GeometrySet {
  pub fn new(transform: DAffine3, bounds: DAabb3) -> Self {
    Self {
      primitives: Vec::new(),
      transform,
      bounds,
    }
  }

  pub fn with_primitive(mut self, primitive: impl Into<Primitive>) -> Self {
    self.push(primitive);
    self
  }

  pub fn with_box(self, cuboid: Cuboid) -> Self {
    self.with_primitive(cuboid)
  }

  pub fn with_convex(self, hull: ConvexHull) -> Self {
    self.with_primitive(hull)
  }

  pub fn with_sphere(self, sphere: Sphere) -> Self {
    self.with_primitive(sphere)
  }

  pub fn with_capsule(self, capsule: Capsule) -> Self {
    self.with_primitive(capsule)
  }

  pub fn push(&mut self, primitive: impl Into<Primitive>) {
    self.primitives.push(primitive.into());
  }

  pub fn primitive_count(&self) -> usize {
    self.primitives.len()
  }

  pub fn is_empty(&self) -> bool {
    self.primitives.is_empty()
  }

  /// Primitives of one kind, in insertion order.
  pub fn primitives_of(&self, kind: PrimitiveKind) -> impl Iterator<Item = &Primitive> + '_ {
    self.primitives.iter().filter(move |p| p.kind() == kind)
  }

  /// All primitives, grouped by kind in [`PrimitiveKind::ORDER`].
  ///
  /// Within a kind, insertion order is kept, so iteration is deterministic.
  pub fn primitives(&self) -> impl Iterator<Item = &Primitive> + '_ {
    PrimitiveKind::ORDER
      .into_iter()
      .flat_map(move |kind| self.primitives_of(kind))
  }
}
