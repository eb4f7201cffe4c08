//! Benchmarks for the navigation volume build stages.
//!
//! - **morton**: encoding a 64³ block of coordinates
//! - **voxelize**: one geometry set per primitive kind, and the full pipeline
//!   over many sets (sequential vs rayon vs fork-join)
//! - **octree**: construction and point queries over the merged codes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glam::{DAffine3, DQuat, DVec3};
use nav_volume::{
  encode_geometry_set, morton,
  pipeline::{voxelize_sets, voxelize_sets_sequential},
  AsyncVoxelizer, Capsule, ConvexHull, Cuboid, DAabb3, GeometrySet, SparseVoxelOctree, Sphere,
  VoxelGrid,
};

const BLOCK: i32 = 64;

// =============================================================================
// Scenes
// =============================================================================

/// One set holding a single primitive of radius / half extent 400.
fn single_kind_sets() -> Vec<(&'static str, GeometrySet)> {
  let bounds = DAabb3::from_center_half_extents(DVec3::ZERO, DVec3::splat(400.0));
  let rotated = DAffine3::from_quat(DQuat::from_rotation_y(0.5));

  vec![
    (
      "box",
      GeometrySet::new(rotated, bounds).with_box(Cuboid::new(DVec3::splat(560.0))),
    ),
    (
      "convex",
      GeometrySet::new(rotated, bounds).with_convex(ConvexHull::from_cuboid(DVec3::splat(280.0))),
    ),
    (
      "sphere",
      GeometrySet::new(DAffine3::IDENTITY, bounds).with_sphere(Sphere::new(400.0)),
    ),
    (
      "capsule",
      GeometrySet::new(rotated, bounds).with_capsule(Capsule::new(150.0, 500.0)),
    ),
  ]
}

/// A row of mixed sets, overlapping their neighbours.
fn scene(count: usize) -> Vec<GeometrySet> {
  (0..count)
    .map(|i| {
      let center = DVec3::new(i as f64 * 256.0, 0.0, 0.0);
      let bounds = DAabb3::from_center_half_extents(center, DVec3::splat(200.0));
      GeometrySet::new(DAffine3::from_translation(center), bounds)
        .with_box(Cuboid::new(DVec3::new(400.0, 120.0, 60.0)))
        .with_sphere(Sphere::new(90.0).with_center(DVec3::Z * 60.0))
        .with_capsule(Capsule::new(40.0, 200.0))
    })
    .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_morton(c: &mut Criterion) {
  let mut group = c.benchmark_group("morton");
  group.throughput(Throughput::Elements((BLOCK * BLOCK * BLOCK) as u64));

  group.bench_function("encode_64", |b| {
    b.iter(|| {
      let mut acc = 0u64;
      for x in -BLOCK / 2..BLOCK / 2 {
        for y in -BLOCK / 2..BLOCK / 2 {
          for z in -BLOCK / 2..BLOCK / 2 {
            acc ^= morton::encode(x, y, z);
          }
        }
      }
      black_box(acc)
    })
  });

  let codes: Vec<_> = (0..BLOCK).map(|i| morton::encode(i, -i, i * 3)).collect();
  group.bench_function("decode", |b| {
    b.iter(|| codes.iter().map(|&code| morton::decode(black_box(code))).fold(0, |acc, p| acc ^ p.x))
  });

  group.finish();
}

fn bench_voxelize_kinds(c: &mut Criterion) {
  let grid = VoxelGrid::default();
  let mut group = c.benchmark_group("voxelize_kind");

  for (name, set) in single_kind_sets() {
    group.bench_with_input(BenchmarkId::from_parameter(name), &set, |b, set| {
      b.iter(|| black_box(encode_geometry_set(set, &grid)))
    });
  }

  group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
  let grid = VoxelGrid::default();
  let mut group = c.benchmark_group("pipeline");
  group.sample_size(20);

  for count in [8usize, 64] {
    let sets = scene(count);
    group.throughput(Throughput::Elements(count as u64));

    group.bench_with_input(BenchmarkId::new("sequential", count), &sets, |b, sets| {
      b.iter(|| black_box(voxelize_sets_sequential(sets, &grid)))
    });

    group.bench_with_input(BenchmarkId::new("rayon", count), &sets, |b, sets| {
      b.iter(|| black_box(voxelize_sets(sets, &grid)))
    });

    group.bench_with_input(BenchmarkId::new("fork_join", count), &sets, |b, sets| {
      b.iter(|| {
        let mut voxelizer = AsyncVoxelizer::new(grid);
        voxelizer.enqueue_all(sets.iter().cloned());
        black_box(voxelizer.run())
      })
    });
  }

  group.finish();
}

fn bench_octree(c: &mut Criterion) {
  let grid = VoxelGrid::default();
  let codes = voxelize_sets(&scene(64), &grid).into_codes();

  let mut group = c.benchmark_group("octree");
  group.throughput(Throughput::Elements(codes.len() as u64));

  group.bench_function("build", |b| {
    b.iter(|| black_box(SparseVoxelOctree::new(codes.clone(), grid)))
  });

  let octree = SparseVoxelOctree::new(codes.clone(), grid);
  group.bench_function("contains", |b| {
    b.iter(|| codes.iter().filter(|&&code| octree.contains(black_box(code))).count())
  });

  group.bench_function("contains_point_miss", |b| {
    b.iter(|| octree.contains_point(black_box(DVec3::new(-5000.0, 3000.0, 100.0))))
  });

  group.finish();
}

criterion_group!(benches, bench_morton, bench_voxelize_kinds, bench_pipeline, bench_octree);
criterion_main!(benches);
