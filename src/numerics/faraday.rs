//! Faraday kernel: explicit advance of the magnetic field
//!
//! # Mathematical Background
//!
//! ```text
//! ∂B/∂t = -∇ × E
//! ```
//!
//! Under 1-D symmetry the x-component of the curl vanishes and one explicit
//! Euler sub-step of size Δt gives, on the dual interior domain,
//!
//! ```text
//! By(i) ← By(i) + Δt · (Ez(i+1) - Ez(i)) / Δx
//! Bz(i) ← Bz(i) - Δt · (Ey(i+1) - Ey(i)) / Δx
//! ```
//!
//! while Bx is carried over unchanged on the primal interior domain.
//!
//! # Usage modes
//!
//! [`Faraday::advance`] writes into a separate destination so that the old
//! B remains readable (leapfrog schemes, advance-and-swap drivers).
//! [`Faraday::advance_in_place`] updates B directly. Both share the same
//! stencil routine and produce bit-identical values.

use crate::physics::{Direction, GridLayout, VecField, VectorQuantity};

/// Discrete Faraday operator advancing B by one time step
///
/// # Example
///
/// ```rust
/// use hybrid_pic::numerics::Faraday;
/// use hybrid_pic::physics::{GridLayout, VecField, VectorQuantity};
///
/// let layout = GridLayout::<1>::new([100], [0.1], 0.05, 1)?;
/// let e = VecField::from_fns(&layout, VectorQuantity::E, |_| 0.0, |x| x, |_| 0.0);
/// let b = VecField::new(&layout, VectorQuantity::B);
/// let mut b_new = VecField::new(&layout, VectorQuantity::B);
///
/// Faraday::new(&layout)?.advance(&e, &b, &mut b_new);
///
/// // dEy/dx = 1 everywhere, so Bz = -Δt
/// assert!((b_new.z()[10] + 0.05).abs() < 1e-12);
/// # Ok::<(), String>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Faraday<'a, const DIM: usize> {
    layout: &'a GridLayout<DIM>,
}

impl<'a, const DIM: usize> Faraday<'a, DIM> {
    /// Create the kernel on a validated layout
    pub fn new(layout: &'a GridLayout<DIM>) -> Result<Self, String> {
        layout
            .validate()
            .map_err(|e| format!("Faraday: invalid grid layout: {}", e))?;
        log::debug!(
            "Faraday kernel created on a {}-D layout (dt = {})",
            DIM,
            layout.time_step()
        );
        Ok(Self { layout })
    }

    /// Borrowed layout
    pub fn layout(&self) -> &'a GridLayout<DIM> {
        self.layout
    }
}

impl Faraday<'_, 1> {
    /// Advance B by one time step into `b_new`
    ///
    /// E ghosts must be filled beforehand. Interior entries of `b_new` are
    /// overwritten: Bx on the primal domain, By and Bz on the dual domain.
    /// Ghost entries of `b_new` are left for the boundary condition.
    pub fn advance(&self, e: &VecField<1>, b: &VecField<1>, b_new: &mut VecField<1>) {
        debug_assert_eq!(b.quantity(), VectorQuantity::B);
        debug_assert_eq!(b_new.quantity(), VectorQuantity::B);

        let start = self.layout.primal_dom_start(Direction::X);
        let end = self.layout.primal_dom_end(Direction::X);
        for ix in start..=end {
            b_new.x_mut()[ix] = b.x()[ix];
        }

        self.curl_update(e, |direction, ix, delta| {
            b_new.component_mut(direction)[ix] = b.component(direction)[ix] + delta;
        });
    }

    /// Advance B by one time step in place
    pub fn advance_in_place(&self, e: &VecField<1>, b: &mut VecField<1>) {
        debug_assert_eq!(b.quantity(), VectorQuantity::B);

        self.curl_update(e, |direction, ix, delta| {
            b.component_mut(direction)[ix] += delta;
        });
    }

    /// Evaluate `-Δt ∇ × E` on the dual domain and hand each increment to `apply`
    fn curl_update<F>(&self, e: &VecField<1>, mut apply: F)
    where
        F: FnMut(Direction, usize, f64),
    {
        debug_assert_eq!(e.quantity(), VectorQuantity::E);

        let dx = self.layout.cell_size(Direction::X);
        let dt = self.layout.time_step();
        let start = self.layout.dual_dom_start(Direction::X);
        let end = self.layout.dual_dom_end(Direction::X);

        let (ey, ez) = (e.y(), e.z());

        for ix in start..=end {
            apply(Direction::Y, ix, (ez[ix + 1] - ez[ix]) / dx * dt);
            apply(Direction::Z, ix, -(ey[ix + 1] - ey[ix]) / dx * dt);
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
