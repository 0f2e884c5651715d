//! Periodic boundary on a 1-D domain
//!
//! With `g` ghosts and `n` cells, the ghost layers copy the opposite end of
//! the interior:
//!
//! ```text
//! dual    f[g-1-k] ← f[g+n-1-k]    f[g+n+k] ← f[g+k]        k = 0 .. g-1
//! primal  f[g-1-k] ← f[g+n-1-k]    f[g+n+k] ← f[g+k]        k = 0 .. g
//! ```
//!
//! For primal fields `k = 0` on the right identifies the last node with the
//! first one. The interior read by the copy is never written by it, so
//! filling twice is the same as filling once.

use crate::boundary::BoundaryCondition;
use crate::physics::{Centering, Direction, Field, GridLayout, Particle};

/// Periodic ghost filling and particle wrapping
#[derive(Debug, Clone, Copy)]
pub struct PeriodicBoundary<'a> {
    layout: &'a GridLayout<1>,
}

impl<'a> PeriodicBoundary<'a> {
    /// Create a periodic boundary on `layout`
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is invalid or has more ghost cells
    /// than interior cells (the ghosts would then copy other ghosts).
    pub fn new(layout: &'a GridLayout<1>) -> Result<Self, String> {
        layout
            .validate()
            .map_err(|e| format!("PeriodicBoundary: invalid grid layout: {}", e))?;

        let cells = layout.nbr_cells(Direction::X);
        let ghosts = layout.nbr_ghosts();
        if ghosts > cells {
            return Err(format!(
                "PeriodicBoundary: {} ghost cells do not fit in {} interior cells",
                ghosts, cells
            ));
        }

        Ok(Self { layout })
    }
}

impl BoundaryCondition<1> for PeriodicBoundary<'_> {
    fn fill_field(&self, field: &mut Field<1>) {
        let g = self.layout.nbr_ghosts();
        let n = self.layout.nbr_cells(Direction::X);

        let right_layers = match field.centering() {
            Centering::Primal => g + 1,
            Centering::Dual => g,
        };

        let data = field.as_mut_slice();
        for k in 0..g {
            data[g - 1 - k] = data[g + n - 1 - k];
        }
        for k in 0..right_layers {
            data[g + n + k] = data[g + k];
        }
    }

    fn apply_particles(&self, particles: &mut [Particle<1>]) {
        let origin = self.layout.origin(Direction::X);
        let length = self.layout.domain_length(Direction::X);

        for particle in particles.iter_mut() {
            let x = particle.position[0];
            if !x.is_finite() {
                continue;
            }

            let mut offset = (x - origin).rem_euclid(length);
            // rem_euclid rounds tiny negative offsets up to `length`
            if offset >= length {
                offset -= length;
            }
            particle.position[0] = origin + offset;
        }
    }

    fn name(&self) -> &str {
        "periodic"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{Quantity, VecField, VectorQuantity};
    use approx::assert_relative_eq;

    #[test]
    fn test_dual_ghosts_wrap() {
        let layout = GridLayout::new([6], [1.0], 0.1, 2).unwrap();
        let boundary = PeriodicBoundary::new(&layout).unwrap();
        let mut field = Field::from_fn(&layout, Quantity::By, |x| x);

        boundary.fill_field(&mut field);

        // interior dual 2..=7 holds 0.5 ..= 5.5
        assert_eq!(field[1], field[7]);
        assert_eq!(field[0], field[6]);
        assert_eq!(field[8], field[2]);
        assert_eq!(field[9], field[3]);
        assert_relative_eq!(field[2], 0.5);
    }

    #[test]
    fn test_primal_last_node_matches_first() {
        let layout = GridLayout::new([6], [1.0], 0.1, 2).unwrap();
        let boundary = PeriodicBoundary::new(&layout).unwrap();
        let mut field = Field::from_fn(&layout, Quantity::Ey, |x| x * x);

        boundary.fill_field(&mut field);

        assert_eq!(field[8], field[2]);
        assert_eq!(field[9], field[3]);
        assert_eq!(field[10], field[4]);
        assert_eq!(field[1], field[7]);
        assert_eq!(field[0], field[6]);
    }

    #[test]
    fn test_fill_is_idempotent() {
        let layout = GridLayout::new([12], [0.5], 0.1, 3).unwrap();
        let boundary = PeriodicBoundary::new(&layout).unwrap();
        let mut e = VecField::from_fns(
            &layout,
            VectorQuantity::E,
            |x| x.sin(),
            |x| x.cos() + x,
            |x| 1.0 - x,
        );

        boundary.fill(&mut e);
        let once = e.clone();
        boundary.fill(&mut e);

        assert_eq!(e, once);
    }

    #[test]
    fn test_particles_wrap_into_domain() {
        let layout = GridLayout::new([10], [1.0], 0.1, 1)
            .unwrap()
            .with_origin([5.0]);
        let boundary = PeriodicBoundary::new(&layout).unwrap();
        let mut particles = vec![
            Particle::new([16.5], [0.0; 3], 1.0, 1.0),
            Particle::new([4.0], [0.0; 3], 1.0, 1.0),
            Particle::new([10.0], [0.0; 3], 1.0, 1.0),
            Particle::new([15.0], [0.0; 3], 1.0, 1.0),
        ];

        boundary.apply_particles(&mut particles);

        assert_relative_eq!(particles[0].position[0], 6.5);
        assert_relative_eq!(particles[1].position[0], 14.0);
        assert_relative_eq!(particles[2].position[0], 10.0);
        assert_relative_eq!(particles[3].position[0], 5.0);
    }

    #[test]
    fn test_too_many_ghosts_rejected() {
        let layout = GridLayout::new([2], [1.0], 0.1, 3).unwrap();
        assert!(PeriodicBoundary::new(&layout).is_err());
    }
}
