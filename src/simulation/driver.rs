//! Time-stepping driver
//!
//! # One step
//!
//! ```text
//! fill(B) → fill(E) → Faraday (E, B → B_new) → fill(B_new)
//!         → Boris push (E, B_new) on a copy of the particles → particle boundary
//!         → commit: Ampère (B → J) → fill(J) → swap(B, B_new) → swap(particles)
//! ```
//!
//! Nothing but ghost entries changes before the commit, so a step that
//! fails leaves B, J, the particles and the step counter as they were.
//!
//! E is prescribed: the driver never updates it, but callers may change it
//! between steps through [`Simulation::e_mut`].

use crate::boundary::BoundaryCondition;
use crate::numerics::{Ampere, BorisPusher, Faraday, Pusher};
use crate::physics::{total_kinetic_energy, Direction, GridLayout, Particle, VecField, VectorQuantity};
use crate::simulation::{validate_fields, validate_particles, SimulationConfiguration, SimulationResult};

/// 1-D hybrid PIC state and the kernels that advance it
pub struct Simulation<'a> {
    layout: &'a GridLayout<1>,
    boundary: &'a dyn BoundaryCondition<1>,

    ampere: Ampere<'a, 1>,
    faraday: Faraday<'a, 1>,
    pusher: BorisPusher<'a, 1>,

    e: VecField<1>,
    b: VecField<1>,
    b_new: VecField<1>,
    j: VecField<1>,
    particles: Vec<Particle<1>>,
    particles_new: Vec<Particle<1>>,

    step: usize,
}

impl<'a> Simulation<'a> {
    /// Assemble a simulation from its initial state
    ///
    /// Ghosts of E and B are filled and particles are brought into the
    /// domain before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is invalid, or if `e` or `b` hold the
    /// wrong quantity or were not allocated on `layout`.
    pub fn new(
        layout: &'a GridLayout<1>,
        boundary: &'a dyn BoundaryCondition<1>,
        e: VecField<1>,
        b: VecField<1>,
        particles: Vec<Particle<1>>,
    ) -> Result<Self, String> {
        check_vecfield(layout, &e, VectorQuantity::E)?;
        check_vecfield(layout, &b, VectorQuantity::B)?;

        let mut simulation = Self {
            layout,
            boundary,
            ampere: Ampere::new(layout)?,
            faraday: Faraday::new(layout)?,
            pusher: BorisPusher::new(layout)?,
            b_new: b.clone(),
            j: VecField::new(layout, VectorQuantity::J),
            e,
            b,
            particles_new: Vec::with_capacity(particles.len()),
            particles,
            step: 0,
        };

        simulation.boundary.fill(&mut simulation.e);
        simulation.boundary.fill(&mut simulation.b);
        simulation.boundary.apply_particles(&mut simulation.particles);

        log::debug!(
            "Simulation assembled: {} cells, {} particles, {} boundary",
            layout.nbr_cells(Direction::X),
            simulation.particles.len(),
            boundary.name()
        );

        Ok(simulation)
    }

    // ===================================== Accessors =============================================

    pub fn layout(&self) -> &'a GridLayout<1> {
        self.layout
    }

    pub fn e(&self) -> &VecField<1> {
        &self.e
    }

    /// Mutable E, for driven runs; ghosts are refilled on the next step
    pub fn e_mut(&mut self) -> &mut VecField<1> {
        &mut self.e
    }

    pub fn b(&self) -> &VecField<1> {
        &self.b
    }

    /// Current density computed by the last step
    pub fn j(&self) -> &VecField<1> {
        &self.j
    }

    pub fn particles(&self) -> &[Particle<1>] {
        &self.particles
    }

    /// Number of steps taken so far
    pub fn current_step(&self) -> usize {
        self.step
    }

    /// Current simulation time
    pub fn time(&self) -> f64 {
        self.step as f64 * self.layout.time_step()
    }

    /// Electric plus magnetic field energy
    pub fn field_energy(&self) -> f64 {
        self.e.energy(self.layout) + self.b.energy(self.layout)
    }

    /// Total particle kinetic energy
    pub fn kinetic_energy(&self) -> f64 {
        total_kinetic_energy(&self.particles)
    }

    // ===================================== Time stepping =========================================

    /// Advance the whole state by one time step
    ///
    /// # Errors
    ///
    /// Fails if a particle cannot be pushed or if the state becomes
    /// non-finite. The error names the step that failed.
    pub fn step(&mut self) -> Result<(), String> {
        let next = self.step + 1;

        self.boundary.fill(&mut self.b);
        self.boundary.fill(&mut self.e);

        self.faraday.advance(&self.e, &self.b, &mut self.b_new);
        self.boundary.fill(&mut self.b_new);
        validate_fields(&self.b_new, next)?;

        self.particles_new.clone_from(&self.particles);
        self.pusher
            .push(&mut self.particles_new, &self.e, &self.b_new)
            .map_err(|e| format!("Step {}: {}", next, e))?;
        self.boundary.apply_particles(&mut self.particles_new);
        validate_particles(&self.particles_new, next)?;

        self.ampere.compute(&self.b, &mut self.j);
        self.boundary.fill(&mut self.j);
        std::mem::swap(&mut self.b, &mut self.b_new);
        std::mem::swap(&mut self.particles, &mut self.particles_new);

        self.step = next;
        log::trace!("Step {} done (t = {})", self.step, self.time());
        Ok(())
    }

    /// Run `config.time_steps` steps and record snapshots
    pub fn run(&mut self, config: &SimulationConfiguration) -> Result<SimulationResult, String> {
        config.validate()?;

        log::info!(
            "Running {} steps of {} with {} particles ({} boundary)",
            config.time_steps,
            self.pusher.name(),
            self.particles.len(),
            self.boundary.name()
        );

        let mut result = SimulationResult::with_capacity(config.recorded_steps());
        self.record(&mut result);

        for index in 1..=config.time_steps {
            self.step()?;
            if index % config.record_every == 0 || index == config.time_steps {
                self.record(&mut result);
            }
        }

        if let (Some(tolerance), Some(drift)) = (config.energy_tolerance, result.energy_drift()) {
            if drift > tolerance {
                log::warn!(
                    "Total energy drifted by {:.3e} (tolerance {:.3e})",
                    drift,
                    tolerance
                );
            }
        }

        result.add_metadata("pusher", self.pusher.name());
        result.add_metadata("boundary", self.boundary.name());
        result.add_metadata("cells", &self.layout.nbr_cells(Direction::X).to_string());
        result.add_metadata("dx", &self.layout.cell_size(Direction::X).to_string());
        result.add_metadata("dt", &self.layout.time_step().to_string());
        result.add_metadata("time steps", &config.time_steps.to_string());
        result.add_metadata("particles", &self.particles.len().to_string());

        log::info!("Run finished at step {} (t = {})", self.step, self.time());

        Ok(result)
    }

    fn record(&self, result: &mut SimulationResult) {
        result.record(
            self.step,
            self.time(),
            &self.particles,
            self.field_energy(),
            self.kinetic_energy(),
        );
    }
}

fn check_vecfield(
    layout: &GridLayout<1>,
    field: &VecField<1>,
    expected: VectorQuantity,
) -> Result<(), String> {
    if field.quantity() != expected {
        return Err(format!(
            "Expected field {}, got {}",
            expected,
            field.quantity()
        ));
    }
    for direction in Direction::ALL {
        let component = field.component(direction);
        let shape = layout.field_shape(component.quantity());
        if component.shape() != shape {
            return Err(format!(
                "{} has shape {:?}, layout expects {:?}",
                component.quantity(),
                component.shape(),
                shape
            ));
        }
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
