//! hybrid-pic: 1-D hybrid particle-in-cell core
//!
//! Field solvers and a particle pusher for hybrid PIC plasma simulation on a
//! one-dimensional staggered (Yee) grid.
//!
//! # Architecture
//!
//! hybrid-pic is built on two core principles:
//!
//! 1. **Separation of Data and Numerics**
//!    - The data model (layout, fields, particles) defines WHAT is advanced
//!    - Stateless kernels (Ampère, Faraday, Boris) define HOW it is advanced
//!
//! 2. **Type Safety**
//!    - Every field carries the quantity it holds and therefore its centering
//!    - Kernels are only implemented for 1-D layouts: other dimensions do
//!      not compile
//!    - Kernels borrow the layout; they never own simulation state
//!
//! # Quick Start
//!
//! ```rust
//! use hybrid_pic::prelude::*;
//!
//! # fn main() -> Result<(), String> {
//! // 1. Discretization: 1000 cells of 0.1, dt = 0.05, one ghost cell
//! let layout = GridLayout::<1>::new([1000], [0.1], 0.05, 1)?;
//! let boundary = PeriodicBoundary::new(&layout)?;
//!
//! // 2. Initial state
//! let e = VecField::new(&layout, VectorQuantity::E);
//! let b = VecField::uniform(&layout, VectorQuantity::B, [0.0, 0.0, 1.0]);
//! let particles = vec![Particle::new([50.0], [1.0, 0.0, 0.0], 1.0, 1.0)];
//!
//! // 3. Run
//! let mut simulation = Simulation::new(&layout, &boundary, e, b, particles)?;
//! let result = simulation.run(&SimulationConfiguration::time_evolution(200))?;
//!
//! // 4. Gyration conserves the speed
//! let last = &result.final_particles().unwrap()[0];
//! assert!((last.speed() - 1.0).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: grid layout, fields, particles
//! - [`numerics`]: Ampère, Faraday and Boris kernels
//! - [`boundary`]: ghost filling and particle boundaries
//! - [`simulation`]: time-stepping driver and recorded results
//! - [`output`]: CSV export and (with `visualization`) plots
//!
//! # Features
//!
//! - `parallel`: push large particle populations with rayon
//! - `visualization`: PNG/SVG plots with plotters

// Core modules
pub mod physics;
pub mod numerics;

pub mod boundary;
pub mod simulation;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use hybrid_pic::prelude::*;
    //! ```
    pub use crate::physics::{Centering,
                             Direction,
                             Field,
                             GridLayout,
                             Particle,
                             Quantity,
                             VecField,
                             VectorQuantity};
    pub use crate::numerics::{Ampere,
                              BorisPusher,
                              Faraday,
                              Pusher};
    pub use crate::boundary::{BoundaryCondition,
                              BoundaryConditionFactory,
                              PeriodicBoundary};
    pub use crate::simulation::{Simulation,
                                SimulationConfiguration,
                                SimulationResult};
}
