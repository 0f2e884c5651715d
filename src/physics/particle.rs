//! Charged macro-particles
//!
//! Position has one coordinate per spatial dimension; velocity always has
//! three components, even in a 1-D simulation, so that gyration around a
//! magnetic field is captured.

use nalgebra::Vector3;

/// Charged particle advanced by a pusher
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle<const DIM: usize> {
    /// Position, one coordinate per spatial dimension
    pub position: [f64; DIM],

    /// Velocity (vx, vy, vz)
    pub v: [f64; 3],

    /// Electric charge
    pub charge: f64,

    /// Mass
    pub mass: f64,
}

impl<const DIM: usize> Particle<DIM> {
    /// Create a particle
    pub fn new(position: [f64; DIM], v: [f64; 3], charge: f64, mass: f64) -> Self {
        Self {
            position,
            v,
            charge,
            mass,
        }
    }

    /// Velocity as an algebraic vector
    pub fn velocity(&self) -> Vector3<f64> {
        Vector3::from(self.v)
    }

    /// Norm of the velocity
    pub fn speed(&self) -> f64 {
        self.velocity().norm()
    }

    /// Kinetic energy `½ m |v|²`
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity().norm_squared()
    }

    /// Check that position and velocity are finite
    pub fn is_finite(&self) -> bool {
        self.position.iter().chain(self.v.iter()).all(|x| x.is_finite())
    }
}

/// Total kinetic energy of a particle population
pub fn total_kinetic_energy<const DIM: usize>(particles: &[Particle<DIM>]) -> f64 {
    particles.iter().map(Particle::kinetic_energy).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_particle_kinematics() {
        let particle = Particle::new([1.0], [3.0, 4.0, 0.0], 1.0, 2.0);
        assert_relative_eq!(particle.speed(), 5.0);
        assert_relative_eq!(particle.kinetic_energy(), 25.0);
        assert!(particle.is_finite());
    }

    #[test]
    fn test_total_kinetic_energy() {
        let particles = vec![
            Particle::new([0.0], [1.0, 0.0, 0.0], 1.0, 1.0),
            Particle::new([0.5], [0.0, 2.0, 0.0], 1.0, 1.0),
        ];
        assert_relative_eq!(total_kinetic_energy(&particles), 2.5);
    }

    #[test]
    fn test_non_finite_particle() {
        let particle = Particle::new([f64::NAN], [0.0; 3], 1.0, 1.0);
        assert!(!particle.is_finite());
    }
}
