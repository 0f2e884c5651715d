//! Export of simulation data for external analysis
//!
//! # Available formats
//!
//! | Format | Module    | Content                                  |
//! |--------|-----------|------------------------------------------|
//! | CSV    | [`csv`]   | field profiles, particle trajectories    |

pub mod csv;

pub use csv::{export_field_profile_csv, export_trajectory_csv, CsvConfig, CsvMetadata};
