//! Example: Boris test - E×B drift
//!
//! A particle released at rest in crossed fields E = (0, Ey, 0) and
//! B = (0, 0, Bz) gyrates around the drift velocity E×B/B² = (Ey/Bz, 0, 0).
//! The velocity history is exported to CSV and plotted.
//!
//! Requires the `visualization` feature:
//!
//! ```bash
//! cargo run --example drift_ey --features visualization
//! ```

use hybrid_pic::{
    output::{export_trajectory_csv, plot_trajectory, CsvConfig, CsvMetadata, PlotConfig},
    prelude::*,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Boris Test - E×B Drift");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Setup ======

    let ey = 0.1;
    let bz = 1.0;

    let layout = GridLayout::<1>::new([1000], [0.1], 0.05, 1)?;
    let boundary = PeriodicBoundary::new(&layout)?;

    let e = VecField::uniform(&layout, VectorQuantity::E, [0.0, ey, 0.0]);
    let b = VecField::uniform(&layout, VectorQuantity::B, [0.0, 0.0, bz]);
    let particles = vec![Particle::new([10.0], [0.0, 0.0, 0.0], 1.0, 1.0)];

    println!("Fields:");
    println!("  Ey             : {}", ey);
    println!("  Bz             : {}", bz);
    println!("  Drift velocity : {}\n", ey / bz);

    // ====== Run ======

    let time_steps = 2000;
    let mut simulation = Simulation::new(&layout, &boundary, e, b, particles)?;
    let result = simulation.run(&SimulationConfiguration::time_evolution(time_steps))?;

    // ====== Results ======

    let trajectory = result.trajectory(0).ok_or("particle 0 was not recorded")?;
    let mean_vx = trajectory.iter().map(|particle| particle.v[0]).sum::<f64>() / trajectory.len() as f64;
    let displacement = trajectory.last().map(|p| p.position[0]).unwrap_or(10.0) - 10.0;

    println!("Results:");
    println!("  Mean vx        : {:.5}", mean_vx);
    println!("  Displacement   : {:.4}", displacement);
    println!("  Expected       : {:.4}\n", ey / bz * simulation.time());

    // ====== Export ======

    let tmp_dir = std::env::temp_dir();
    let csv_path = tmp_dir.join("drift_ey.csv");
    let plot_path = tmp_dir.join("drift_ey.png");

    let config = CsvConfig::default().with_metadata(CsvMetadata::from_result(&result));
    export_trajectory_csv(&result, 0, &csv_path.to_string_lossy(), Some(&config))?;

    let plot_config = PlotConfig::trajectory("E×B drift from rest");
    plot_trajectory(&result, 0, &plot_path.to_string_lossy(), Some(&plot_config))?;

    println!("Wrote:");
    println!("  {}", csv_path.display());
    println!("  {}", plot_path.display());

    Ok(())
}
