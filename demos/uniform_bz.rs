//! Example: Boris test - gyration in a uniform Bz
//!
//! A single particle gyrates in a uniform magnetic field along z. The Boris
//! rotation conserves the speed exactly, and the discrete gyration angle per
//! step is 2·atan(q B Δt / 2m).
//!
//! **Setup**:
//! - 1000 cells of 0.1, Δt = 0.05, periodic boundary
//! - B = (0, 0, 1), E = 0
//! - Particle: x = 50, v = (1, 0, 0), q = m = 1

use hybrid_pic::{
    output::export::{export_trajectory_csv, CsvConfig, CsvMetadata},
    prelude::*,
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Boris Test - Uniform Bz");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Setup ======

    let layout = GridLayout::<1>::new([1000], [0.1], 0.05, 1)?;
    let boundary = PeriodicBoundary::new(&layout)?;

    let e = VecField::new(&layout, VectorQuantity::E);
    let b = VecField::uniform(&layout, VectorQuantity::B, [0.0, 0.0, 1.0]);
    let particles = vec![Particle::new([50.0], [1.0, 0.0, 0.0], 1.0, 1.0)];

    let angle = 2.0 * (0.5 * layout.time_step()).atan();
    let period = 2.0 * std::f64::consts::PI / angle;

    println!("Discrete gyration:");
    println!("  Angle per step : {:.6} rad", angle);
    println!("  Period         : {:.2} steps\n", period);

    // ====== Run ======

    let time_steps = 1000;
    let mut simulation = Simulation::new(&layout, &boundary, e, b, particles)?;

    let current_time = Instant::now();
    let result = simulation.run(&SimulationConfiguration::time_evolution(time_steps))?;
    let elapsed_time = current_time.elapsed().as_secs_f64();

    // ====== Results ======

    let trajectory = result.trajectory(0).ok_or("particle 0 was not recorded")?;
    let speed_error = trajectory
        .iter()
        .map(|particle| (particle.speed() - 1.0).abs())
        .fold(0.0, f64::max);
    let (x_min, x_max) = trajectory
        .iter()
        .map(|particle| particle.position[0])
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| (lo.min(x), hi.max(x)));

    println!("Results ({} steps in {:.3} s):", time_steps, elapsed_time);
    println!("  Max |speed - 1| : {:.3e}", speed_error);
    println!("  x range         : [{:.4}, {:.4}]", x_min, x_max);
    println!("  Energy drift    : {:.3e}\n", result.energy_drift().unwrap_or(0.0));

    // ====== Export ======

    let path = std::env::temp_dir().join("uniform_bz.csv");
    let config = CsvConfig::high_precision().with_metadata(CsvMetadata::from_result(&result));
    export_trajectory_csv(&result, 0, &path.to_string_lossy(), Some(&config))?;

    println!("Wrote {}", path.display());

    Ok(())
}
