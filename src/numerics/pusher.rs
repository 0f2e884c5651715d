//! Particle pushers
//!
//! A pusher advances the position and velocity of every particle by one
//! time step from the electric and magnetic fields sampled at the particle
//! location. Particles do not interact through a pusher, so each one is
//! advanced independently.
//!
//! # Boris scheme
//!
//! With `qmdt2 = q Δt / (2 m)` and E, B interpolated at the half-step
//! position:
//!
//! ```text
//! x  ← x + vx Δt/2
//! v⁻ = v + qmdt2 E
//! t  = qmdt2 B
//! v′ = v⁻ + v⁻ × t
//! s  = 2t / (1 + |t|²)
//! v⁺ = v⁻ + v′ × s
//! v  ← v⁺ + qmdt2 E
//! x  ← x + vx Δt/2
//! ```
//!
//! The magnetic part is an exact rotation of angle `2·atan(|t|)`, so the
//! speed is conserved to round-off in a pure magnetic field whatever Δt.

use nalgebra::Vector3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::numerics::interpolate::{interpolate, locate, stencil_fits, CellLocation};
use crate::physics::{Direction, GridLayout, Particle, VecField, VectorQuantity};

// =================================================================================================
// Pusher trait
// =================================================================================================

/// Particle integration scheme
///
/// # Required Methods
///
/// - `push`: advance every particle by one time step
/// - `name`: scheme name for logs and metadata
///
/// # Errors
///
/// `push` fails when a particle cannot be interpolated (non-finite or
/// outside the ghost-inclusive grid). On failure no particle is modified.
pub trait Pusher<const DIM: usize> {
    /// Advance `particles` in place by one time step
    fn push(
        &self,
        particles: &mut [Particle<DIM>],
        e: &VecField<DIM>,
        b: &VecField<DIM>,
    ) -> Result<(), String>;

    /// Scheme name
    fn name(&self) -> &str;
}

// =================================================================================================
// Boris pusher
// =================================================================================================

/// Non-relativistic Boris pusher with order-1 field interpolation
///
/// # Example
///
/// ```rust
/// use hybrid_pic::numerics::{BorisPusher, Pusher};
/// use hybrid_pic::physics::{GridLayout, Particle, VecField, VectorQuantity};
///
/// let layout = GridLayout::<1>::new([100], [1.0], 0.1, 1)?;
/// let e = VecField::new(&layout, VectorQuantity::E);
/// let b = VecField::uniform(&layout, VectorQuantity::B, [0.0, 0.0, 1.0]);
/// let mut particles = vec![Particle::new([50.0], [1.0, 0.0, 0.0], 1.0, 1.0)];
///
/// let pusher = BorisPusher::new(&layout)?;
/// pusher.push(&mut particles, &e, &b)?;
///
/// assert!((particles[0].speed() - 1.0).abs() < 1e-12);
/// # Ok::<(), String>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BorisPusher<'a, const DIM: usize> {
    layout: &'a GridLayout<DIM>,
}

/// Half-step position and its cell, computed before any particle is moved
#[derive(Debug, Clone, Copy)]
struct HalfStep {
    position: f64,
    location: CellLocation,
}

impl<'a, const DIM: usize> BorisPusher<'a, DIM> {
    /// Create the pusher on a validated layout
    pub fn new(layout: &'a GridLayout<DIM>) -> Result<Self, String> {
        layout
            .validate()
            .map_err(|e| format!("BorisPusher: invalid grid layout: {}", e))?;
        log::debug!("Boris pusher created on a {}-D layout", DIM);
        Ok(Self { layout })
    }

    /// Borrowed layout
    pub fn layout(&self) -> &'a GridLayout<DIM> {
        self.layout
    }
}

impl BorisPusher<'_, 1> {
    /// Locate every particle at its half-step position and check that its
    /// interpolation stencils fit in all six field components
    fn plan(
        &self,
        particles: &[Particle<1>],
        e: &VecField<1>,
        b: &VecField<1>,
    ) -> Result<Vec<HalfStep>, String> {
        let half_dt = 0.5 * self.layout.time_step();
        let origin = self.layout.origin(Direction::X);
        let dx = self.layout.cell_size(Direction::X);
        let start = self.layout.primal_dom_start(Direction::X);

        let components = [e.x(), e.y(), e.z(), b.x(), b.y(), b.z()];

        particles
            .iter()
            .enumerate()
            .map(|(index, particle)| {
                let position = particle.position[0] + particle.v[0] * half_dt;

                let location = locate(position, origin, dx, start).ok_or_else(|| {
                    format!(
                        "Boris: particle {} has invalid half-step position {}",
                        index, position
                    )
                })?;

                if let Some(field) = components.iter().find(|f| !stencil_fits(f, location)) {
                    return Err(format!(
                        "Boris: particle {} at x = {} is outside the interpolation range of {}",
                        index,
                        position,
                        field.quantity()
                    ));
                }

                Ok(HalfStep { position, location })
            })
            .collect()
    }

    /// Boris update of a single particle from its validated half step
    #[inline]
    fn advance(&self, particle: &mut Particle<1>, half: &HalfStep, e: &VecField<1>, b: &VecField<1>) {
        let dt = self.layout.time_step();
        let loc = half.location;

        let e_p = Vector3::new(
            interpolate(e.x(), loc),
            interpolate(e.y(), loc),
            interpolate(e.z(), loc),
        );
        let b_p = Vector3::new(
            interpolate(b.x(), loc),
            interpolate(b.y(), loc),
            interpolate(b.z(), loc),
        );

        let qmdt2 = particle.charge / (2.0 * particle.mass) * dt;

        let v_minus = particle.velocity() + e_p * qmdt2;
        let t = b_p * qmdt2;
        let v_prime = v_minus + v_minus.cross(&t);
        let s = t * (2.0 / (1.0 + t.norm_squared()));
        let v_plus = v_minus + v_prime.cross(&s);
        let v_new = v_plus + e_p * qmdt2;

        particle.v = [v_new.x, v_new.y, v_new.z];
        particle.position[0] = half.position + v_new.x * 0.5 * dt;
    }
}

impl Pusher<1> for BorisPusher<'_, 1> {
    fn push(
        &self,
        particles: &mut [Particle<1>],
        e: &VecField<1>,
        b: &VecField<1>,
    ) -> Result<(), String> {
        debug_assert_eq!(e.quantity(), VectorQuantity::E);
        debug_assert_eq!(b.quantity(), VectorQuantity::B);

        let plan = self.plan(particles, e, b)?;

        #[cfg(feature = "parallel")]
        if particles.len() > crate::numerics::parallel_threshold() {
            particles
                .par_iter_mut()
                .zip(plan.par_iter())
                .for_each(|(particle, half)| self.advance(particle, half, e, b));
            log::trace!("Boris: pushed {} particles in parallel", particles.len());
            return Ok(());
        }

        particles
            .iter_mut()
            .zip(plan.iter())
            .for_each(|(particle, half)| self.advance(particle, half, e, b));

        log::trace!("Boris: pushed {} particles", particles.len());
        Ok(())
    }

    fn name(&self) -> &str {
        "Boris"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::ThresholdGuard;
    use approx::assert_relative_eq;

    fn layout() -> GridLayout<1> {
        GridLayout::new([100], [1.0], 0.1, 1).unwrap()
    }

    fn fields(layout: &GridLayout<1>, e: [f64; 3], b: [f64; 3]) -> (VecField<1>, VecField<1>) {
        (
            VecField::uniform(layout, VectorQuantity::E, e),
            VecField::uniform(layout, VectorQuantity::B, b),
        )
    }

    #[test]
    fn test_pusher_name() {
        let layout = layout();
        assert_eq!(BorisPusher::new(&layout).unwrap().name(), "Boris");
    }

    #[test]
    fn test_zero_field_is_free_streaming() {
        let layout = layout();
        let (e, b) = fields(&layout, [0.0; 3], [0.0; 3]);
        let mut particles = vec![Particle::new([20.3], [1.5, -0.2, 0.7], 1.0, 1.0)];

        BorisPusher::new(&layout).unwrap().push(&mut particles, &e, &b).unwrap();

        assert_eq!(particles[0].v, [1.5, -0.2, 0.7]);
        assert_relative_eq!(particles[0].position[0], 20.3 + 1.5 * 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_speed_conserved_in_pure_magnetic_field() {
        let layout = layout();
        let (e, b) = fields(&layout, [0.0; 3], [0.3, -0.4, 2.0]);
        let pusher = BorisPusher::new(&layout).unwrap();
        let mut particles = vec![Particle::new([50.0], [1.0, 0.5, -0.25], 1.0, 1.0)];
        let initial = particles[0].speed();

        for _ in 0..1000 {
            pusher.push(&mut particles, &e, &b).unwrap();
            assert_relative_eq!(particles[0].speed(), initial, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_gyration_angle() {
        let layout = layout();
        let (e, b) = fields(&layout, [0.0; 3], [0.0, 0.0, 1.0]);
        let pusher = BorisPusher::new(&layout).unwrap();
        let mut particles = vec![Particle::new([50.0], [1.0, 0.0, 0.0], 1.0, 1.0)];

        let steps = 25;
        for _ in 0..steps {
            pusher.push(&mut particles, &e, &b).unwrap();
        }

        // q v × B rotates clockwise by 2·atan(qBΔt/2m) per step
        let angle = steps as f64 * 2.0 * (0.5 * 0.1_f64).atan();
        assert_relative_eq!(particles[0].v[0], angle.cos(), epsilon = 1e-12);
        assert_relative_eq!(particles[0].v[1], -angle.sin(), epsilon = 1e-12);
        assert_relative_eq!(particles[0].v[2], 0.0);
    }

    #[test]
    fn test_electric_field_accelerates() {
        let layout = layout();
        let (e, b) = fields(&layout, [0.0, 2.0, 0.0], [0.0; 3]);
        let mut particles = vec![
            Particle::new([10.0], [0.0; 3], 1.0, 1.0),
            Particle::new([10.0], [0.0; 3], -1.0, 2.0),
        ];

        BorisPusher::new(&layout).unwrap().push(&mut particles, &e, &b).unwrap();

        // Δv = (q/m) E Δt
        assert_relative_eq!(particles[0].v[1], 0.2, epsilon = 1e-14);
        assert_relative_eq!(particles[1].v[1], -0.1, epsilon = 1e-14);
        assert_eq!(particles[0].position[0], 10.0);
    }

    #[test]
    fn test_interpolated_field_drives_particle() {
        let layout = layout();
        // Ey(x) = x on the primal nodes, a particle at rest at x = 30.25
        let e = VecField::from_fns(&layout, VectorQuantity::E, |_| 0.0, |x| x, |_| 0.0);
        let b = VecField::new(&layout, VectorQuantity::B);
        let mut particles = vec![Particle::new([30.25], [0.0; 3], 1.0, 1.0)];

        BorisPusher::new(&layout).unwrap().push(&mut particles, &e, &b).unwrap();

        assert_relative_eq!(particles[0].v[1], 30.25 * 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_range_particle_aborts_without_mutation() {
        let layout = layout();
        let (e, b) = fields(&layout, [0.1, 0.2, 0.3], [0.0, 0.0, 1.0]);
        let mut particles = vec![
            Particle::new([10.0], [1.0, 0.0, 0.0], 1.0, 1.0),
            Particle::new([1.0e6], [1.0, 0.0, 0.0], 1.0, 1.0),
        ];
        let before = particles.clone();

        let err = BorisPusher::new(&layout)
            .unwrap()
            .push(&mut particles, &e, &b)
            .unwrap_err();

        assert!(err.contains("particle 1"));
        assert_eq!(particles, before);
    }

    #[test]
    fn test_non_finite_particle_is_rejected() {
        let layout = layout();
        let (e, b) = fields(&layout, [0.0; 3], [0.0; 3]);
        let mut particles = vec![Particle::new([f64::NAN], [0.0; 3], 1.0, 1.0)];

        let err = BorisPusher::new(&layout)
            .unwrap()
            .push(&mut particles, &e, &b)
            .unwrap_err();

        assert!(err.contains("particle 0"));
        assert!(err.contains("invalid half-step position"));
    }

    #[test]
    fn test_large_population_matches_sequential() {
        let layout = layout();
        let e = VecField::from_fns(&layout, VectorQuantity::E, |x| 0.01 * x, |x| (0.1 * x).sin(), |_| 0.0);
        let b = VecField::from_fns(&layout, VectorQuantity::B, |_| 1.0, |x| (0.2 * x).cos(), |_| 0.5);
        let pusher = BorisPusher::new(&layout).unwrap();

        let population: Vec<Particle<1>> = (0..200)
            .map(|i| Particle::new([10.0 + 0.4 * i as f64], [0.3, -0.1, 0.2], 1.0, 1.0))
            .collect();

        let mut sequential = population.clone();
        pusher.push(&mut sequential, &e, &b).unwrap();

        let mut split = population;
        {
            let _guard = ThresholdGuard::save(10);
            pusher.push(&mut split, &e, &b).unwrap();
        }

        assert_eq!(sequential, split);
    }
}
