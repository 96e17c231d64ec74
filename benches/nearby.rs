use criterion::measurement::WallTime;
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use rand::Rng;

use sapling::{KdTree, Point};

fn rand_point_3d(rng: &mut impl Rng, id: u32) -> Point<f64, u32, 3> {
    Point::new(
        id,
        [
            rng.gen_range(-1000.0..1000.0),
            rng.gen_range(-1000.0..1000.0),
            rng.gen_range(-1000.0..1000.0),
        ],
    )
}

fn build_tree(size: usize) -> KdTree<f64, u32, 3> {
    let mut rng = rand::thread_rng();
    let mut tree = KdTree::new(rand_point_3d(&mut rng, 0));
    for i in 1..size {
        tree.insert(rand_point_3d(&mut rng, i as u32));
    }
    tree
}

fn bench_insert(group: &mut BenchmarkGroup<WallTime>, size: &usize) {
    group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
        b.iter(|| black_box(build_tree(size)));
    });
}

fn bench_nearby(group: &mut BenchmarkGroup<WallTime>, size: &usize, radius: f64) {
    group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
        let mut rng = rand::thread_rng();
        let tree = build_tree(size);
        let query = [
            rng.gen_range(-1000.0..1000.0),
            rng.gen_range(-1000.0..1000.0),
            rng.gen_range(-1000.0..1000.0),
        ];

        b.iter(|| black_box(tree.nearby_ids(&query, radius)));
    });
}

pub fn insert_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [100, 1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        bench_insert(&mut group, size);
    }
}

pub fn nearby_small_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearby(10.0)");
    group.throughput(Throughput::Elements(1));

    for size in [100, 1_000, 10_000, 100_000].iter() {
        bench_nearby(&mut group, size, 10.0);
    }
}

pub fn nearby_large_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearby(100.0)");
    group.throughput(Throughput::Elements(1));

    for size in [100, 1_000, 10_000, 100_000].iter() {
        bench_nearby(&mut group, size, 100.0);
    }
}

criterion_group!(benches, insert_points, nearby_small_radius, nearby_large_radius);
criterion_main!(benches);
