//! Simulation driver
//!
//! The kernels in [`crate::numerics`] are stateless; this module owns the
//! state they advance and sequences them.
//!
//! # Module Organization
//!
//! - **`configuration`**: `SimulationConfiguration`, how long to run and
//!   what to record
//! - **`driver`**: `Simulation`, the fields, the particles and the step loop
//! - **`result`**: `SimulationResult`, recorded snapshots and energy
//!   histories
//!
//! # Quick Start Example
//!
//! ```rust
//! use hybrid_pic::boundary::PeriodicBoundary;
//! use hybrid_pic::physics::{GridLayout, Particle, VecField, VectorQuantity};
//! use hybrid_pic::simulation::{Simulation, SimulationConfiguration};
//!
//! let layout = GridLayout::<1>::new([64], [1.0], 0.1, 1)?;
//! let boundary = PeriodicBoundary::new(&layout)?;
//!
//! let e = VecField::new(&layout, VectorQuantity::E);
//! let b = VecField::uniform(&layout, VectorQuantity::B, [0.0, 0.0, 1.0]);
//! let particles = vec![Particle::new([32.0], [1.0, 0.0, 0.0], 1.0, 1.0)];
//!
//! let mut simulation = Simulation::new(&layout, &boundary, e, b, particles)?;
//! let result = simulation.run(&SimulationConfiguration::time_evolution(100))?;
//!
//! assert_eq!(result.len(), 101);
//! # Ok::<(), String>(())
//! ```
//!
//! # Error Handling
//!
//! Every fallible operation returns `Result<T, String>`. Common errors:
//! - Invalid configuration (zero steps, zero recording stride)
//! - Fields not allocated on the simulation layout
//! - A particle outside the interpolation range of the grid
//! - Numerical instability (NaN or infinite fields or particles)

// =================================================================================================
// Module Declarations
// =================================================================================================

mod configuration;
mod driver;
mod result;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use configuration::SimulationConfiguration;
pub use driver::Simulation;
pub use result::SimulationResult;

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::physics::{Particle, VecField};

/// Check a vector field for NaN and infinite entries
///
/// `step` is only used in the error message.
pub(crate) fn validate_fields(field: &VecField<1>, step: usize) -> Result<(), String> {
    for component in [field.x(), field.y(), field.z()] {
        if component.iter().any(|x| x.is_nan()) {
            return Err(format!(
                "NaN detected in {} at step {}. This indicates numerical instability. \
                 Try reducing the time step.",
                component.quantity(),
                step
            ));
        }

        if component.iter().any(|x| x.is_infinite()) {
            return Err(format!(
                "Infinity detected in {} at step {}. This indicates numerical overflow.",
                component.quantity(),
                step
            ));
        }
    }

    Ok(())
}

/// Check every particle for non-finite position or velocity
pub(crate) fn validate_particles(particles: &[Particle<1>], step: usize) -> Result<(), String> {
    match particles.iter().position(|particle| !particle.is_finite()) {
        Some(index) => {
            log::warn!("Particle {} became non-finite at step {}", index, step);
            Err(format!(
                "Non-finite state detected in particle {} at step {}: {:?}",
                index, step, particles[index]
            ))
        }
        None => Ok(()),
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{GridLayout, VectorQuantity};

    #[test]
    fn test_validate_fields() {
        let layout = GridLayout::new([4], [1.0], 0.1, 1).unwrap();
        let mut b = VecField::new(&layout, VectorQuantity::B);
        assert!(validate_fields(&b, 3).is_ok());

        b.z_mut()[2] = f64::NAN;
        let err = validate_fields(&b, 3).unwrap_err();
        assert!(err.contains("Bz"));
        assert!(err.contains("step 3"));

        b.z_mut()[2] = f64::NEG_INFINITY;
        assert!(validate_fields(&b, 3).unwrap_err().contains("Infinity"));
    }

    #[test]
    fn test_validate_particles() {
        let mut particles = vec![Particle::new([0.5], [1.0, 0.0, 0.0], 1.0, 1.0); 3];
        assert!(validate_particles(&particles, 1).is_ok());

        particles[2].v[1] = f64::NAN;
        let err = validate_particles(&particles, 7).unwrap_err();
        assert!(err.contains("particle 2"));
        assert!(err.contains("step 7"));
    }
}
