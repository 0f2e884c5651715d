//! Data model of the simulation
//!
//! This module describes WHAT the kernels operate on:
//!
//! - **Quantities** (`quantity`): type-safe tags for E, B and J components,
//!   with their fixed Yee centering
//! - **Grid layout** (`layout`): cell size, time step, primal/dual index
//!   ranges and index → coordinate mapping
//! - **Fields** (`field`): ghost-inclusive scalar and vector containers
//! - **Particles** (`particle`): position, 3-D velocity, charge, mass
//!
//! The numerical kernels live in [`crate::numerics`]; they borrow these
//! types and never allocate or free them.
//!
//! # Example
//!
//! ```rust
//! use hybrid_pic::physics::{GridLayout, VecField, VectorQuantity, Particle};
//!
//! let layout = GridLayout::<1>::new([64], [1.0], 0.1, 1)?;
//! let e = VecField::new(&layout, VectorQuantity::E);
//! let b = VecField::uniform(&layout, VectorQuantity::B, [0.0, 0.0, 1.0]);
//! let particles = vec![Particle::new([32.0], [1.0, 0.0, 0.0], 1.0, 1.0)];
//!
//! assert_eq!(e.quantity(), VectorQuantity::E);
//! assert_eq!(b.z().quantity().to_string(), "Bz");
//! assert_eq!(particles.len(), 1);
//! # Ok::<(), String>(())
//! ```

pub mod quantity;
pub mod layout;
pub mod field;
pub mod particle;

pub use field::{Field, VecField};
pub use layout::GridLayout;
pub use particle::{total_kinetic_energy, Particle};
pub use quantity::{Centering, Direction, Quantity, VectorQuantity};
