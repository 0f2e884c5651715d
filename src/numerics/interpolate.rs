//! Particle-to-grid location and order-1 field interpolation
//!
//! # Cell location
//!
//! A particle at position `x` sits in physical cell `iCell = floor(s)` with
//! `s = (x - origin) / Δx`, at the fractional offset `remainder = s - iCell`
//! (always in `[0, 1)`, in units of Δx). The field index of the primal node at
//! the left edge of that cell is `primal_dom_start + iCell`.
//!
//! # Interpolation
//!
//! Primal quantities live on the nodes, so the particle sits between nodes
//! `i` and `i + 1` at weight `remainder`.
//!
//! Dual quantities live half a cell to the right of their node, so the
//! weight is shifted by half a cell:
//!
//! ```text
//!   remainder < ½ :  blend dual i-1 and i,  weight = remainder + ½
//!   remainder ≥ ½ :  blend dual i   and i+1, weight = remainder - ½
//! ```
//!
//! At `remainder = ½` the particle sits exactly on dual `i`, and both
//! branches return `field[i]`.

use crate::physics::{Centering, Field};

// =================================================================================================
// Cell location
// =================================================================================================

/// Location of a particle relative to the primal nodes of a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLocation {
    /// Field index of the primal node on the left of the particle
    pub index: usize,

    /// Offset from that node, in cell units, in `[0, 1)`
    pub remainder: f64,
}

/// Locate `x` on a 1-D grid
///
/// Returns `None` when `x` is not finite or lies left of the first
/// allocated node.
pub fn locate(x: f64, origin: f64, cell_size: f64, primal_start: usize) -> Option<CellLocation> {
    if !x.is_finite() {
        return None;
    }

    let normalized = (x - origin) / cell_size;
    let i_cell = normalized.floor();
    let remainder = normalized - i_cell;

    let index = primal_start as f64 + i_cell;
    if index < 0.0 {
        return None;
    }

    Some(CellLocation {
        index: index as usize,
        remainder,
    })
}

// =================================================================================================
// Linear stencil
// =================================================================================================

/// Two-point linear stencil: `f[left] · (1 - weight) + f[left + 1] · weight`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stencil {
    pub left: usize,
    pub weight: f64,
}

/// Which pair of dual cells a dual interpolation blends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DualBranch {
    /// Cells `i - 1` and `i`
    Left,
    /// Cells `i` and `i + 1`
    Right,
}

impl DualBranch {
    fn select(remainder: f64) -> Self {
        if remainder < 0.5 {
            DualBranch::Left
        } else {
            DualBranch::Right
        }
    }
}

pub(crate) fn dual_stencil(location: CellLocation, branch: DualBranch) -> Option<Stencil> {
    match branch {
        DualBranch::Left => location.index.checked_sub(1).map(|left| Stencil {
            left,
            weight: location.remainder + 0.5,
        }),
        DualBranch::Right => Some(Stencil {
            left: location.index,
            weight: location.remainder - 0.5,
        }),
    }
}

/// Order-1 stencil for a field with the given centering
///
/// Returns `None` if the stencil would start before index 0.
pub fn linear_stencil(centering: Centering, location: CellLocation) -> Option<Stencil> {
    match centering {
        Centering::Primal => Some(Stencil {
            left: location.index,
            weight: location.remainder,
        }),
        Centering::Dual => dual_stencil(location, DualBranch::select(location.remainder)),
    }
}

/// Check that the stencil of `field` at `location` is inside its storage
pub fn stencil_fits(field: &Field<1>, location: CellLocation) -> bool {
    linear_stencil(field.centering(), location)
        .is_some_and(|stencil| stencil.left < field.len().saturating_sub(1))
}

impl Stencil {
    #[inline]
    fn apply(&self, field: &Field<1>) -> f64 {
        field[self.left] * (1.0 - self.weight) + field[self.left + 1] * self.weight
    }
}

/// Interpolate `field` at `location` with order-1 weights
///
/// # Panics
///
/// Panics if the stencil falls outside the field storage; callers check
/// with [`stencil_fits`] first.
pub fn interpolate(field: &Field<1>, location: CellLocation) -> f64 {
    match linear_stencil(field.centering(), location) {
        Some(stencil) => stencil.apply(field),
        None => panic!(
            "interpolation stencil of {} at index {} starts before the first ghost",
            field.quantity(),
            location.index
        ),
    }
}

// =================================================================================================
// Tests
// =================================================================================================
