//! Common utilities for integration tests

#![allow(dead_code, unused_imports)]

pub mod scenarios;
pub mod test_helpers;

// Re-export commonly used items
pub use scenarios::{sinusoidal_scenario_layout, SinusoidalScenario, DOMAIN_LENGTH};
pub use test_helpers::{assert_interior_close, max_interior_error, relative_error};
