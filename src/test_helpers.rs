//! Shared test utilities for the mf-equiv test suite.
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let results = Catalog::builtin().compute(80.0);
//! let r = find_result(&results, "6x7");
//! assert_close(r.equivalent_focal_length, 38.61, 1e-2);
//! ```

use crate::types::CalculationResult;

/// Find a result by format id. Panics if not found.
pub fn find_result<'r, 'a>(
    results: &'r [CalculationResult<'a>],
    id: &str,
) -> &'r CalculationResult<'a> {
    results
        .iter()
        .find(|r| r.format.id == id)
        .unwrap_or_else(|| {
            let ids: Vec<&str> = results.iter().map(|r| r.format.id).collect();
            panic!("format '{id}' not found. Available: {ids:?}")
        })
}

/// Assert two floats are within `tolerance` of each other.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
