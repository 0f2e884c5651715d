//! Boundary conditions
//!
//! A boundary condition populates the ghost entries of fields from their
//! interior values and brings particles that left the domain back into it.
//! Kernels never call it: the driver runs it between kernel stages.
//!
//! # Available conditions
//!
//! | Name         | Type                  | Topology               |
//! |--------------|-----------------------|------------------------|
//! | `"periodic"` | [`PeriodicBoundary`]  | 1-D ring of length `L` |
//!
//! # Example
//!
//! ```rust
//! use hybrid_pic::boundary::{BoundaryCondition, BoundaryConditionFactory};
//! use hybrid_pic::physics::{GridLayout, VecField, VectorQuantity};
//!
//! let layout = GridLayout::<1>::new([10], [1.0], 0.1, 1)?;
//! let boundary = BoundaryConditionFactory::create("periodic", &layout)?;
//!
//! let mut b = VecField::from_fns(&layout, VectorQuantity::B, |_| 0.0, |x| x, |_| 0.0);
//! boundary.fill(&mut b);
//!
//! // the left ghost of a dual field mirrors the last interior cell
//! assert_eq!(b.y()[0], b.y()[10]);
//! # Ok::<(), String>(())
//! ```

mod periodic;

pub use periodic::PeriodicBoundary;

use crate::physics::{Field, GridLayout, Particle, VecField};

// =================================================================================================
// Boundary condition trait
// =================================================================================================

/// Ghost-cell and particle boundary treatment
///
/// # Required Methods
///
/// - `fill_field`: populate the ghost entries of one scalar field
/// - `apply_particles`: move out-of-domain particles back into the domain
/// - `name`: identifier used by the factory and in logs
///
/// `fill` is provided and fills the three components of a vector field.
pub trait BoundaryCondition<const DIM: usize> {
    /// Populate the ghost entries of `field` from its interior
    fn fill_field(&self, field: &mut Field<DIM>);

    /// Populate the ghost entries of every component of `field`
    fn fill(&self, field: &mut VecField<DIM>) {
        for component in field.components_mut() {
            self.fill_field(component);
        }
    }

    /// Apply the particle boundary to every particle
    fn apply_particles(&self, particles: &mut [Particle<DIM>]);

    /// Condition name
    fn name(&self) -> &str;
}

// =================================================================================================
// Factory
// =================================================================================================

/// Build boundary conditions by name
pub struct BoundaryConditionFactory;

impl BoundaryConditionFactory {
    /// Names accepted by [`BoundaryConditionFactory::create`]
    pub fn available() -> &'static [&'static str] {
        &["periodic"]
    }

    /// Create the boundary condition called `name` (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns an error for unknown names, or if the condition rejects the
    /// layout.
    pub fn create<'a>(
        name: &str,
        layout: &'a GridLayout<1>,
    ) -> Result<Box<dyn BoundaryCondition<1> + 'a>, String> {
        match name.trim().to_lowercase().as_str() {
            "periodic" => Ok(Box::new(PeriodicBoundary::new(layout)?)),
            other => Err(format!(
                "Unknown boundary condition '{}' (available: {})",
                other,
                Self::available().join(", ")
            )),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_creates_periodic() {
        let layout = GridLayout::new([8], [1.0], 0.1, 1).unwrap();
        let boundary = BoundaryConditionFactory::create(" Periodic ", &layout).unwrap();
        assert_eq!(boundary.name(), "periodic");
    }

    #[test]
    fn test_factory_rejects_unknown_name() {
        let layout = GridLayout::new([8], [1.0], 0.1, 1).unwrap();
        let err = BoundaryConditionFactory::create("reflective", &layout)
            .err()
            .unwrap();
        assert!(err.contains("reflective"));
        assert!(err.contains("periodic"));
    }
}
