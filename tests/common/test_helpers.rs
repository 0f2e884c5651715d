//! Helper functions for integration tests

use hybrid_pic::physics::{Field, GridLayout};

/// Largest `|field - expected(x)|` over the interior of `field`
pub fn max_interior_error<F>(field: &Field<1>, layout: &GridLayout<1>, expected: F) -> f64
where
    F: Fn(f64) -> f64,
{
    field
        .interior_coordinates(layout)
        .into_iter()
        .zip(field.interior(layout))
        .map(|(x, value)| (value - expected(x)).abs())
        .fold(0.0, f64::max)
}

/// Assert that a field matches `expected` everywhere in its interior
pub fn assert_interior_close<F>(
    field: &Field<1>,
    layout: &GridLayout<1>,
    expected: F,
    tolerance: f64,
    message: &str,
) where
    F: Fn(f64) -> f64,
{
    let coordinates = field.interior_coordinates(layout);
    for (x, value) in coordinates.iter().zip(field.interior(layout)) {
        let diff = (value - expected(*x)).abs();
        assert!(
            diff < tolerance,
            "{}: {} at x = {} differs by {} (tolerance {})",
            message,
            field.quantity(),
            x,
            diff,
            tolerance
        );
    }
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
