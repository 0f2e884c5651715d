//! Recorded output of a simulation run

use std::collections::HashMap;

use crate::physics::Particle;

/// Snapshots and diagnostics recorded during a run
///
/// Every vector has one entry per recorded step, the initial state first.
#[derive(Clone, Debug, Default)]
pub struct SimulationResult {
    /// Step index of every snapshot
    pub steps: Vec<usize>,

    /// Simulation time of every snapshot
    pub time_points: Vec<f64>,

    /// Particle population at every snapshot
    pub particles: Vec<Vec<Particle<1>>>,

    /// Electric plus magnetic field energy
    pub field_energy: Vec<f64>,

    /// Total particle kinetic energy
    pub kinetic_energy: Vec<f64>,

    /// Free-form run description (pusher, boundary, grid parameters...)
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Create an empty result with room for `capacity` snapshots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
            time_points: Vec::with_capacity(capacity),
            particles: Vec::with_capacity(capacity),
            field_energy: Vec::with_capacity(capacity),
            kinetic_energy: Vec::with_capacity(capacity),
            metadata: HashMap::new(),
        }
    }

    /// Append one snapshot
    pub fn record(
        &mut self,
        step: usize,
        time: f64,
        particles: &[Particle<1>],
        field_energy: f64,
        kinetic_energy: f64,
    ) {
        self.steps.push(step);
        self.time_points.push(time);
        self.particles.push(particles.to_vec());
        self.field_energy.push(field_energy);
        self.kinetic_energy.push(kinetic_energy);
    }

    /// Add a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Number of snapshots
    pub fn len(&self) -> usize {
        self.time_points.len()
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.time_points.is_empty()
    }

    /// Field plus kinetic energy at every snapshot
    pub fn total_energy(&self) -> Vec<f64> {
        self.field_energy
            .iter()
            .zip(&self.kinetic_energy)
            .map(|(field, kinetic)| field + kinetic)
            .collect()
    }

    /// Largest relative deviation of the total energy from its initial value
    ///
    /// Returns `None` when nothing was recorded or the initial energy is zero.
    pub fn energy_drift(&self) -> Option<f64> {
        let total = self.total_energy();
        let initial = *total.first()?;
        if initial == 0.0 {
            return None;
        }
        Some(
            total
                .iter()
                .map(|energy| ((energy - initial) / initial).abs())
                .fold(0.0, f64::max),
        )
    }

    /// History of one particle across all snapshots
    ///
    /// Returns `None` if a snapshot has no particle at `index`.
    pub fn trajectory(&self, index: usize) -> Option<Vec<Particle<1>>> {
        self.particles
            .iter()
            .map(|snapshot| snapshot.get(index).copied())
            .collect()
    }

    /// Particle population of the last snapshot
    pub fn final_particles(&self) -> Option<&[Particle<1>]> {
        self.particles.last().map(Vec::as_slice)
    }
}
