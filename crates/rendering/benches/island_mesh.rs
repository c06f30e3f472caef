//! Benchmarks for the island prism mesh builder.
//!
//! The real coastline is tiny; the dense synthetic ring shows how the
//! builder scales with outline resolution.
//!
//! Run with: cargo bench -p rendering

use bevy::math::Vec2;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use map::config::ISLAND_DEPTH;
use map::outline;
use rendering::island::build_prism_mesh;

/// A circular ring with `points` vertices, roughly island-sized.
fn dense_ring(points: usize) -> Vec<Vec2> {
    (0..points)
        .map(|i| {
            let angle = i as f32 / points as f32 * std::f32::consts::TAU;
            Vec2::new(angle.cos() * 100.0, angle.sin() * 100.0)
        })
        .collect()
}

fn bench_island_mesh(c: &mut Criterion) {
    let coastline = outline::outline_path();
    c.bench_function("island_mesh_coastline", |b| {
        b.iter(|| build_prism_mesh(black_box(&coastline), ISLAND_DEPTH))
    });

    let ring = dense_ring(4096);
    c.bench_function("island_mesh_ring_4096", |b| {
        b.iter(|| build_prism_mesh(black_box(&ring), ISLAND_DEPTH))
    });
}

criterion_group!(benches, bench_island_mesh);
criterion_main!(benches);
