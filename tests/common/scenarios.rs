//! Reference scenarios shared by the integration tests
//!
//! The sinusoidal scenario is a single wavelength spanning the whole
//! periodic domain, so the periodic ghosts are consistent with the profile
//! and the discrete derivatives can be compared with the analytic ones.

use std::f64::consts::PI;

use hybrid_pic::physics::{GridLayout, VecField, VectorQuantity};

/// Length of the reference domain (1000 cells of 0.1)
pub const DOMAIN_LENGTH: f64 = 100.0;

/// 1000 cells of 0.1, dt = 0.05, one ghost cell
pub fn sinusoidal_scenario_layout() -> GridLayout<1> {
    GridLayout::new([1000], [0.1], 0.05, 1).unwrap()
}

/// One sine wavelength over the domain: `A sin(2π x / L)`
#[derive(Debug, Clone, Copy)]
pub struct SinusoidalScenario {
    pub amplitude: f64,
}

impl SinusoidalScenario {
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }

    pub fn wavenumber(&self) -> f64 {
        2.0 * PI / DOMAIN_LENGTH
    }

    pub fn profile(&self, x: f64) -> f64 {
        self.amplitude * (self.wavenumber() * x).sin()
    }

    /// Analytic `d/dx` of the profile
    pub fn derivative(&self, x: f64) -> f64 {
        self.amplitude * self.wavenumber() * (self.wavenumber() * x).cos()
    }

    /// B with `Bz` following the profile, other components zero
    pub fn sin_bz(&self, layout: &GridLayout<1>) -> VecField<1> {
        VecField::from_fns(layout, VectorQuantity::B, |_| 0.0, |_| 0.0, |x| self.profile(x))
    }

    /// E with `Ey` following the profile, other components zero
    pub fn sin_ey(&self, layout: &GridLayout<1>) -> VecField<1> {
        VecField::from_fns(layout, VectorQuantity::E, |_| 0.0, |x| self.profile(x), |_| 0.0)
    }
}
