use std::sync::Mutex;

use glam::{DAffine3, DVec3};

use super::*;
use crate::geometry::{Cuboid, Sphere};

fn world_bounds() -> DAabb3 {
  DAabb3::from_center_half_extents(DVec3::ZERO, DVec3::splat(1000.0))
}

/// Cube of edge `2 * half` centered at `center`, with matching bounds.
fn box_set(center: DVec3, half: f64) -> GeometrySet {
  let bounds = DAabb3::from_center_half_extents(center, DVec3::splat(half));
  GeometrySet::new(DAffine3::from_translation(center), bounds).with_box(Cuboid::new(DVec3::splat(2.0 * half)))
}

/// Returns fixed entries and records every queried region.
struct RecordingSource {
  entries: Vec<NavRelevantGeometry>,
  queries: Mutex<Vec<DAabb3>>,
}

impl RecordingSource {
  fn new(entries: Vec<NavRelevantGeometry>) -> Self {
    Self {
      entries,
      queries: Mutex::new(Vec::new()),
    }
  }
}

impl GeometrySource for RecordingSource {
  fn overlapping(&self, region: &DAabb3) -> Vec<NavRelevantGeometry> {
    self.queries.lock().unwrap().push(*region);
    self.entries.clone()
  }
}

// =========================================================================
// End to end
// =========================================================================

/// Box spanning [-40, 40]³ at voxel size 32 occupies {-1, 0, 1}³.
#[test]
fn test_box_volume_end_to_end() {
  let entries = vec![NavRelevantGeometry::relevant(box_set(DVec3::ZERO, 40.0))];
  let octree = NavVolume::new(world_bounds()).build(entries.as_slice()).unwrap();

  assert_eq!(octree.leaf_count(), 27);
  assert_eq!(octree.num_levels(), 21);
  assert_eq!(octree.level(20).len(), 1);
  assert!(octree.root().is_some());

  assert!(octree.contains_point(DVec3::ZERO));
  assert!(octree.contains_point(DVec3::new(32.0, 32.0, -32.0)));
  assert!(!octree.contains_point(DVec3::new(64.0, 0.0, 0.0)));
}

/// Box spanning [-50, 50]³: the ±64 voxel layer overlaps the box and is kept.
#[test]
fn test_box_spanning_50_keeps_outer_layer() {
  let entries = vec![NavRelevantGeometry::relevant(box_set(DVec3::ZERO, 50.0))];
  let octree = NavVolume::new(world_bounds()).build(entries.as_slice()).unwrap();

  assert_eq!(octree.leaf_count(), 125);
  assert!(octree.contains_point(DVec3::splat(64.0)));
  assert!(!octree.contains_point(DVec3::splat(96.0)));
}

#[test]
fn test_no_geometry() {
  let octree = NavVolume::new(world_bounds())
    .build(&[] as &[NavRelevantGeometry])
    .unwrap();

  assert!(octree.is_empty());
  assert_eq!(octree.num_levels(), 1);
}

// =========================================================================
// Source handling
// =========================================================================

#[test]
fn test_source_queried_once_with_volume_bounds() {
  let bounds = DAabb3::from_center_half_extents(DVec3::new(100.0, 0.0, 0.0), DVec3::splat(300.0));
  let source = RecordingSource::new(vec![NavRelevantGeometry::relevant(box_set(DVec3::ZERO, 40.0))]);

  NavVolume::new(bounds).build(&source).unwrap();

  assert_eq!(*source.queries.lock().unwrap(), vec![bounds]);
}

#[test]
fn test_irrelevant_and_empty_entries_skipped() {
  let far = DVec3::new(500.0, 0.0, 0.0);
  let sphere_bounds = DAabb3::from_center_half_extents(far, DVec3::splat(100.0));
  let sphere = GeometrySet::new(DAffine3::from_translation(far), sphere_bounds).with_sphere(Sphere::new(100.0));

  let source = RecordingSource::new(vec![
    NavRelevantGeometry::relevant(box_set(DVec3::ZERO, 40.0)),
    NavRelevantGeometry::irrelevant(sphere),
    NavRelevantGeometry::relevant(GeometrySet::new(DAffine3::IDENTITY, world_bounds())),
  ]);

  let output = NavVolume::new(world_bounds()).voxelize(&source).unwrap();

  assert_eq!(output.stats.unit_count, 1);
  assert_eq!(output.codes.len(), 27);
}

#[test]
fn test_slice_source_filters_by_overlap() {
  let volume_bounds = DAabb3::from_center_half_extents(DVec3::ZERO, DVec3::splat(100.0));
  let entries = vec![
    NavRelevantGeometry::relevant(box_set(DVec3::ZERO, 40.0)),
    NavRelevantGeometry::relevant(box_set(DVec3::new(1000.0, 0.0, 0.0), 40.0)),
  ];

  let overlapping = entries.as_slice().overlapping(&volume_bounds);
  assert_eq!(overlapping.len(), 1);

  let octree = NavVolume::new(volume_bounds).build(entries.as_slice()).unwrap();
  assert_eq!(octree.leaf_count(), 27);
  assert!(!octree.contains_point(DVec3::new(1000.0, 0.0, 0.0)));
}

#[test]
fn test_overlapping_units_merge() {
  let source = RecordingSource::new(vec![
    NavRelevantGeometry::relevant(box_set(DVec3::ZERO, 40.0)),
    NavRelevantGeometry::relevant(box_set(DVec3::ZERO, 40.0)),
  ]);

  let output = NavVolume::new(world_bounds()).voxelize(&source).unwrap();

  assert_eq!(output.stats.unit_count, 2);
  assert_eq!(output.stats.raw_code_count, 54);
  assert_eq!(output.stats.unique_code_count, 27);
}

// =========================================================================
// Configuration
// =========================================================================

#[test]
fn test_config_defaults() {
  let config = NavVolumeConfig::default();

  assert_eq!(config.voxel_size, 32);
  assert_eq!(config.worker_threads, None);
  assert_eq!(config.grid().unwrap(), VoxelGrid::default());
}

#[test]
fn test_config_rejects_odd_voxel_size() {
  let config = NavVolumeConfig::default().with_voxel_size(33);
  let err = NavVolume::from_config(world_bounds(), &config).unwrap_err();

  assert_eq!(err, NavVolumeError::InvalidVoxelSize(33));
}

/// Finer grid: the same [-40, 40]³ box covers 7 voxels per axis at size 16.
#[test]
fn test_config_voxel_size_sets_resolution() {
  let config = NavVolumeConfig::default().with_voxel_size(16);
  let volume = NavVolume::from_config(world_bounds(), &config).unwrap();
  let entries = vec![NavRelevantGeometry::relevant(box_set(DVec3::ZERO, 40.0))];

  let octree = volume.build(entries.as_slice()).unwrap();

  assert_eq!(octree.grid().voxel_size(), 16);
  assert_eq!(octree.leaf_count(), 7 * 7 * 7);
  assert!(octree.contains_point(DVec3::splat(48.0)));
}

#[test]
fn test_dedicated_pool_matches_global_pool() {
  let entries: Vec<_> = (0..8)
    .map(|i| NavRelevantGeometry::relevant(box_set(DVec3::new(96.0 * i as f64, 0.0, 0.0), 40.0)))
    .collect();

  let config = NavVolumeConfig::default().with_worker_threads(2);
  let dedicated = NavVolume::from_config(world_bounds(), &config).unwrap();
  assert_eq!(config.executor().unwrap().num_threads(), 2);

  let global = NavVolume::new(world_bounds());

  assert_eq!(
    dedicated.build(entries.as_slice()).unwrap(),
    global.build(entries.as_slice()).unwrap()
  );
}
