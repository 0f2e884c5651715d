//! Output module for simulation results
//!
//! - **Export**: CSV data for external analysis
//! - **Visualization**: PNG/SVG plots using plotters (`visualization` feature)
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── export/             ← Data export
//! │   ├── mod.rs
//! │   └── csv.rs
//! └── visualization/      ← Plots
//!     ├── mod.rs
//!     ├── config.rs
//!     ├── profile.rs
//!     └── trajectory.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hybrid_pic::output::{export_trajectory_csv, plot_trajectory};
//!
//! let result = simulation.run(&config)?;
//! export_trajectory_csv(&result, 0, "particle.csv", None)?;
//! plot_trajectory(&result, 0, "particle.png", None)?;
//! ```
//!
//! Output never runs inside a kernel: it reads fields and results after the
//! fact.

pub mod export;

#[cfg(feature = "visualization")]
pub mod visualization;

pub use export::{export_field_profile_csv, export_trajectory_csv, CsvConfig, CsvMetadata};

#[cfg(feature = "visualization")]
pub use visualization::{plot_field_profile, plot_trajectory, PlotConfig};
