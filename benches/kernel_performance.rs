//! Performance benchmarks for the field and particle kernels
//!
//! # What We're Measuring
//!
//! 1. **Ampère**: one pass over the dual domain, two differences per cell
//! 2. **Faraday**: same stencil, plus the copy into the new field
//! 3. **Boris**: two interpolations of three components per particle, then
//!    the rotation
//! 4. **Full step**: the driver sequence including boundary fills
//!
//! # Expected Scaling
//!
//! - Field kernels: time ∝ cells
//! - Boris: time ∝ particles (independent of cells once the fields fit in
//!   cache)
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all kernel benchmarks
//! cargo bench --bench kernel_performance
//!
//! # Only the pusher
//! cargo bench --bench kernel_performance Boris
//!
//! # Pusher with the rayon path enabled
//! cargo bench --bench kernel_performance --features parallel Boris
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::f64::consts::PI;
use std::hint::black_box;

use hybrid_pic::boundary::{BoundaryCondition, PeriodicBoundary};
use hybrid_pic::numerics::{Ampere, BorisPusher, Faraday, Pusher};
use hybrid_pic::physics::{GridLayout, Particle, VecField, VectorQuantity};
use hybrid_pic::simulation::Simulation;

// =================================================================================================
// Setup helpers
// =================================================================================================

/// Layout of `cells` cells of 0.1 with one ghost cell
fn layout(cells: usize) -> GridLayout<1> {
    GridLayout::new([cells], [0.1], 0.05, 1).unwrap()
}

/// One sine wavelength in every transverse component
fn sine_fields(layout: &GridLayout<1>, cells: usize) -> (VecField<1>, VecField<1>) {
    let k = 2.0 * PI / (cells as f64 * 0.1);
    let e = VecField::from_fns(
        layout,
        VectorQuantity::E,
        |x| 0.01 * (k * x).cos(),
        |x| 0.1 * (k * x).sin(),
        |x| 0.1 * (k * x).cos(),
    );
    let b = VecField::from_fns(
        layout,
        VectorQuantity::B,
        |_| 1.0,
        |x| 0.5 * (k * x).cos(),
        |x| 0.5 * (k * x).sin(),
    );
    (e, b)
}

/// `count` particles spread uniformly over the domain
fn particles(layout_cells: usize, count: usize) -> Vec<Particle<1>> {
    let length = layout_cells as f64 * 0.1;
    (0..count)
        .map(|i| {
            let phase = i as f64 * 0.61;
            Particle::new(
                [length * (i as f64 + 0.5) / count as f64],
                [0.5 * phase.cos(), 0.5 * phase.sin(), 0.1],
                1.0,
                1.0,
            )
        })
        .collect()
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Ampère kernel against the number of cells
fn benchmark_ampere(c: &mut Criterion) {
    let mut group = c.benchmark_group("Ampere");

    for cells in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*cells as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cells), cells, |bencher, &cells| {
            let layout = layout(cells);
            let boundary = PeriodicBoundary::new(&layout).unwrap();
            let (_, mut b) = sine_fields(&layout, cells);
            boundary.fill(&mut b);
            let mut j = VecField::new(&layout, VectorQuantity::J);
            let ampere = Ampere::new(&layout).unwrap();

            bencher.iter(|| ampere.compute(black_box(&b), black_box(&mut j)));
        });
    }

    group.finish();
}

/// Faraday kernel against the number of cells, copy and in-place variants
fn benchmark_faraday(c: &mut Criterion) {
    let mut group = c.benchmark_group("Faraday");

    for cells in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*cells as u64));

        let layout = layout(*cells);
        let boundary = PeriodicBoundary::new(&layout).unwrap();
        let (mut e, b) = sine_fields(&layout, *cells);
        boundary.fill(&mut e);
        let faraday = Faraday::new(&layout).unwrap();

        group.bench_with_input(BenchmarkId::new("advance", cells), cells, |bencher, _| {
            let mut b_new = VecField::new(&layout, VectorQuantity::B);
            bencher.iter(|| faraday.advance(black_box(&e), black_box(&b), black_box(&mut b_new)));
        });

        group.bench_with_input(BenchmarkId::new("in place", cells), cells, |bencher, _| {
            let mut b = b.clone();
            bencher.iter(|| faraday.advance_in_place(black_box(&e), black_box(&mut b)));
        });
    }

    group.finish();
}

/// Boris pusher against the number of particles on a fixed grid
///
/// E is zero so that the speed of every particle is conserved, however many
/// iterations criterion runs. The six interpolations are done all the same.
fn benchmark_boris(c: &mut Criterion) {
    let mut group = c.benchmark_group("Boris");

    let cells = 1_000;
    let layout = layout(cells);
    let boundary = PeriodicBoundary::new(&layout).unwrap();
    let (_, mut b) = sine_fields(&layout, cells);
    boundary.fill(&mut b);
    let e = VecField::new(&layout, VectorQuantity::E);
    let pusher = BorisPusher::new(&layout).unwrap();

    for count in [100, 1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |bencher, &count| {
            let mut population = particles(cells, count);
            bencher.iter(|| {
                pusher
                    .push(black_box(&mut population), black_box(&e), black_box(&b))
                    .unwrap();
                boundary.apply_particles(&mut population);
            });
        });
    }

    group.finish();
}

/// Complete driver step: fills, both field kernels and the pusher
fn benchmark_full_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simulation step");
    group.sample_size(30);

    let configurations = vec![
        (1_000, 1_000, "small"),
        (10_000, 10_000, "medium"),
        (10_000, 100_000, "particle heavy"),
    ];

    for (cells, count, label) in configurations {
        let layout = layout(cells);
        let boundary = PeriodicBoundary::new(&layout).unwrap();
        // Magnetic field only, so that Faraday leaves B unchanged between iterations
        let (_, b) = sine_fields(&layout, cells);
        let e = VecField::new(&layout, VectorQuantity::E);
        let mut simulation =
            Simulation::new(&layout, &boundary, e, b, particles(cells, count)).unwrap();

        group.bench_function(
            format!("{} ({} cells & {} particles)", label, cells, count),
            |bencher| {
                bencher.iter(|| simulation.step().unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_ampere,
    benchmark_faraday,
    benchmark_boris,
    benchmark_full_step
);
criterion_main!(benches);
