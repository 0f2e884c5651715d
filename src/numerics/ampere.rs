//! Ampère kernel: current density from the curl of B
//!
//! # Mathematical Background
//!
//! In normalized units, and neglecting the displacement current as hybrid
//! codes do, Ampère's law reads
//!
//! ```text
//! μ0 J = ∇ × B
//! ```
//!
//! Under 1-D translational symmetry (∂/∂y = ∂/∂z = 0) only two components of
//! the curl survive:
//!
//! ```text
//! Jx = 0
//! Jy = -∂Bz/∂x / μ0
//! Jz =  ∂By/∂x / μ0
//! ```
//!
//! which the kernel discretizes with a forward difference over neighbouring
//! dual cells of B.

use crate::physics::{Direction, GridLayout, VecField, VectorQuantity};

/// Vacuum permeability in normalized units
pub const MU0: f64 = 1.0;

/// Discrete Ampère operator `J = ∇ × B / μ0`
///
/// The kernel is stateless: it only borrows the grid layout. It can be
/// built for any dimension, but [`Ampere::compute`] exists only for 1-D
/// layouts, so using it in another dimension does not compile:
///
/// ```rust,compile_fail
/// use hybrid_pic::numerics::Ampere;
/// use hybrid_pic::physics::{GridLayout, VecField, VectorQuantity};
///
/// let layout = GridLayout::<2>::new([4, 4], [1.0, 1.0], 0.1, 1).unwrap();
/// let b = VecField::new(&layout, VectorQuantity::B);
/// let mut j = VecField::new(&layout, VectorQuantity::J);
/// Ampere::new(&layout).unwrap().compute(&b, &mut j);
/// ```
///
/// # Example
///
/// ```rust
/// use hybrid_pic::numerics::Ampere;
/// use hybrid_pic::physics::{GridLayout, VecField, VectorQuantity};
///
/// let layout = GridLayout::<1>::new([100], [0.1], 0.01, 1)?;
/// let b = VecField::uniform(&layout, VectorQuantity::B, [1.0, 2.0, 3.0]);
/// let mut j = VecField::new(&layout, VectorQuantity::J);
///
/// Ampere::new(&layout)?.compute(&b, &mut j);
/// assert!(j.y().iter().all(|&v| v == 0.0));
/// # Ok::<(), String>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Ampere<'a, const DIM: usize> {
    layout: &'a GridLayout<DIM>,
}

impl<'a, const DIM: usize> Ampere<'a, DIM> {
    /// Create the kernel on a validated layout
    pub fn new(layout: &'a GridLayout<DIM>) -> Result<Self, String> {
        layout
            .validate()
            .map_err(|e| format!("Ampere: invalid grid layout: {}", e))?;
        log::debug!("Ampere kernel created on a {}-D layout", DIM);
        Ok(Self { layout })
    }

    /// Borrowed layout
    pub fn layout(&self) -> &'a GridLayout<DIM> {
        self.layout
    }
}

impl Ampere<'_, 1> {
    /// Compute `J = ∇ × B / μ0` over the dual interior domain
    ///
    /// B ghosts must be filled beforehand. Every interior dual index of J is
    /// overwritten; ghost entries of J are left for the boundary condition.
    pub fn compute(&self, b: &VecField<1>, j: &mut VecField<1>) {
        debug_assert_eq!(b.quantity(), VectorQuantity::B);
        debug_assert_eq!(j.quantity(), VectorQuantity::J);

        let dx = self.layout.cell_size(Direction::X);
        let start = self.layout.dual_dom_start(Direction::X);
        let end = self.layout.dual_dom_end(Direction::X);

        let [jx, jy, jz] = j.components_mut();
        let (by, bz) = (b.y(), b.z());

        for ix in start..=end {
            // Jx vanishes: both transverse derivatives are zero in 1-D
            jx[ix] = 0.0;
            jy[ix] = -(bz[ix + 1] - bz[ix]) / dx / MU0;
            jz[ix] = (by[ix + 1] - by[ix]) / dx / MU0;
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn layout() -> GridLayout<1> {
        GridLayout::new([20], [0.5], 0.1, 1).unwrap()
    }

    #[test]
    fn test_ampere_creation() {
        let layout = layout();
        let ampere = Ampere::new(&layout).unwrap();
        assert_eq!(ampere.layout().nbr_cells(Direction::X), 20);
    }

    #[test]
    fn test_uniform_b_has_no_current() {
        let layout = layout();
        let b = VecField::uniform(&layout, VectorQuantity::B, [0.3, -1.2, 4.0]);
        let mut j = VecField::uniform(&layout, VectorQuantity::J, [9.0, 9.0, 9.0]);

        Ampere::new(&layout).unwrap().compute(&b, &mut j);

        for ix in layout.dual_dom_start(Direction::X)..=layout.dual_dom_end(Direction::X) {
            assert_eq!(j.x()[ix], 0.0);
            assert_eq!(j.y()[ix], 0.0);
            assert_eq!(j.z()[ix], 0.0);
        }
    }

    #[test]
    fn test_linear_b_gives_constant_current() {
        let layout = layout();
        let b = VecField::from_fns(
            &layout,
            VectorQuantity::B,
            |_| 0.0,
            |x| 2.0 * x,
            |x| -3.0 * x + 1.0,
        );
        let mut j = VecField::new(&layout, VectorQuantity::J);

        Ampere::new(&layout).unwrap().compute(&b, &mut j);

        for ix in layout.dual_dom_start(Direction::X)..=layout.dual_dom_end(Direction::X) {
            assert_relative_eq!(j.y()[ix], 3.0, epsilon = 1e-12);
            assert_relative_eq!(j.z()[ix], 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ghosts_of_j_untouched() {
        let layout = layout();
        let b = VecField::from_fns(&layout, VectorQuantity::B, |_| 0.0, |x| x, |x| x);
        let mut j = VecField::uniform(&layout, VectorQuantity::J, [7.0, 7.0, 7.0]);

        Ampere::new(&layout).unwrap().compute(&b, &mut j);

        assert_eq!(j.y()[0], 7.0);
        let last = j.y().len() - 1;
        assert_eq!(j.y()[last], 7.0);
        assert_eq!(j.z()[last - 1], 7.0);
    }

    #[test]
    fn test_linearity() {
        let layout = layout();
        let (alpha, beta) = (1.5, -0.25);

        let b1 = VecField::from_fns(&layout, VectorQuantity::B, |_| 0.0, |x| x.sin(), |x| x * x);
        let b2 = VecField::from_fns(&layout, VectorQuantity::B, |_| 1.0, |x| x.cos(), |x| x.exp());
        let combined = VecField::from_fns(
            &layout,
            VectorQuantity::B,
            |_| beta,
            |x| alpha * x.sin() + beta * x.cos(),
            |x| alpha * x * x + beta * x.exp(),
        );

        let ampere = Ampere::new(&layout).unwrap();
        let mut j1 = VecField::new(&layout, VectorQuantity::J);
        let mut j2 = VecField::new(&layout, VectorQuantity::J);
        let mut j = VecField::new(&layout, VectorQuantity::J);
        ampere.compute(&b1, &mut j1);
        ampere.compute(&b2, &mut j2);
        ampere.compute(&combined, &mut j);

        for ix in layout.dual_dom_start(Direction::X)..=layout.dual_dom_end(Direction::X) {
            assert_relative_eq!(j.y()[ix], alpha * j1.y()[ix] + beta * j2.y()[ix], epsilon = 1e-9);
            assert_relative_eq!(j.z()[ix], alpha * j1.z()[ix] + beta * j2.z()[ix], epsilon = 1e-9);
        }
    }
}
