//! Numerical kernels
//!
//! This module provides the three kernels that advance a hybrid PIC state by
//! one time step on a 1-D staggered grid:
//!
//! - **`ampere`**: `J = ∇ × B / μ0` over the dual interior domain
//! - **`faraday`**: `B(t + Δt) = B(t) - Δt ∇ × E`
//! - **`pusher`**: Boris integration of the Lorentz force on particles
//! - **`interpolate`**: particle location and order-1 field interpolation
//!   shared by pushers
//!
//! # Core Concepts
//!
//! Kernels are stateless. Each one borrows a [`GridLayout`](crate::physics::GridLayout)
//! for its whole lifetime and reads Δx and Δt from it; fields and particles
//! are borrowed per call and never allocated by a kernel.
//!
//! Every kernel can be constructed for any dimension, but the operations
//! are only implemented for `DIM = 1`. Calling them on a 2-D or 3-D layout
//! is a compile-time error.
//!
//! # Step ordering
//!
//! Kernels never fill ghost cells themselves. The caller runs
//!
//! ```text
//! fill(B), fill(E) → Faraday → fill(B_new) → push → Ampère → fill(J)
//! ```
//!
//! which is what [`Simulation::step`](crate::simulation::Simulation::step) does.
//!
//! # Example
//!
//! ```rust
//! use hybrid_pic::numerics::{Ampere, Faraday};
//! use hybrid_pic::physics::{GridLayout, VecField, VectorQuantity};
//!
//! let layout = GridLayout::<1>::new([1000], [0.1], 0.05, 1)?;
//! let e = VecField::new(&layout, VectorQuantity::E);
//! let b = VecField::uniform(&layout, VectorQuantity::B, [1.0, 0.0, 0.0]);
//! let mut b_new = VecField::new(&layout, VectorQuantity::B);
//! let mut j = VecField::new(&layout, VectorQuantity::J);
//!
//! Ampere::new(&layout)?.compute(&b, &mut j);
//! Faraday::new(&layout)?.advance(&e, &b, &mut b_new);
//! assert_eq!(b_new.x()[500], 1.0);
//! # Ok::<(), String>(())
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod interpolate;
pub mod ampere;
pub mod faraday;
pub mod pusher;

// =================================================================================================
// Particle-count threshold for the rayon path
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Populations up to this size are pushed on the calling thread
const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

// Relaxed loads are enough: the value only selects a code path.
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Largest particle population pushed sequentially
///
/// Above it, and only with the `parallel` feature, the pusher splits the
/// population across the rayon thread pool.
///
/// ```rust
/// use hybrid_pic::numerics::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Change the population size above which pushes go parallel
///
/// The setting is process-wide.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// ```rust
/// use hybrid_pic::numerics::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(50_000);
/// assert_eq!(parallel_threshold(), 50_000);
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// Test-only override of the threshold, undone when dropped
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    pub(crate) fn save(threshold: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(threshold);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use ampere::{Ampere, MU0};
pub use faraday::Faraday;
pub use interpolate::{interpolate, locate, CellLocation};
pub use pusher::{BorisPusher, Pusher};

// =================================================================================================
// Tests
// =================================================================================================
