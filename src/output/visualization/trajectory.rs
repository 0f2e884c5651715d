//! Particle trajectory plots

use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use super::{plot_series, Series};
use crate::simulation::SimulationResult;

/// Plot the velocity components of one particle against time
///
/// # Example
///
/// ```rust,ignore
/// let result = simulation.run(&config)?;
/// plot_trajectory(&result, 0, "gyration.svg", None)?;
/// ```
pub fn plot_trajectory(
    result: &SimulationResult,
    particle_index: usize,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let trajectory = result
        .trajectory(particle_index)
        .ok_or_else(|| format!("Particle {} is missing from the result", particle_index))?;

    let default_config = PlotConfig::trajectory(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let series: Vec<Series> = ["vx", "vy", "vz"]
        .iter()
        .enumerate()
        .map(|(component, label)| Series {
            label: label.to_string(),
            points: result
                .time_points
                .iter()
                .zip(&trajectory)
                .map(|(t, particle)| (*t, particle.v[component]))
                .collect(),
        })
        .collect();

    plot_series(&series, output_path, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::Particle;

    #[test]
    fn test_plot_trajectory_svg() {
        let mut result = SimulationResult::default();
        for step in 0..20 {
            let angle = 0.1 * step as f64;
            let particle = Particle::new([0.0], [angle.cos(), -angle.sin(), 0.0], 1.0, 1.0);
            result.record(step, 0.1 * step as f64, &[particle], 0.0, 0.5);
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trajectory.svg");

        plot_trajectory(&result, 0, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_trajectory_rejects_missing_data() {
        let mut result = SimulationResult::default();
        assert!(plot_trajectory(&result, 0, "unused.png", None).is_err());

        result.record(0, 0.0, &[Particle::new([0.0], [1.0, 0.0, 0.0], 1.0, 1.0)], 0.0, 0.5);
        let err = plot_trajectory(&result, 1, "unused.png", None).unwrap_err();
        assert!(err.to_string().contains("Particle 1"));
    }
}
