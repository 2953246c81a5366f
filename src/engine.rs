//! Focal-length equivalence math.
//!
//! All functions here are pure and testable without any I/O. The catalog and
//! reference are always passed in; the engine holds no state of its own.
//!
//! [`ResultCache`] sits in front of the engine for callers that recompute on
//! every input change (the interactive prompt). It is an optimization only:
//! cached and fresh results are identical.

use crate::catalog::Catalog;
use crate::types::{CalculationResult, Dimensions, FormatEntry};
use std::fmt;

/// Diagonal of a rectangular frame, `√(width² + height²)`.
///
/// # Examples
/// ```
/// # use mf_equiv::engine::compute_diagonal;
/// # use mf_equiv::types::Dimensions;
/// let d = compute_diagonal(Dimensions::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
pub fn compute_diagonal(dimensions: Dimensions) -> f64 {
    dimensions.width.hypot(dimensions.height)
}

/// Crop factor of a single `format` relative to `reference`.
///
/// Below 1.0 for formats larger than the reference (all of medium format).
/// Used where one format is shown on its own, such as the `formats` listing;
/// [`compute_results`] computes the reference diagonal once for the whole
/// catalog instead.
pub fn crop_factor(format: Dimensions, reference: Dimensions) -> f64 {
    compute_diagonal(reference) / compute_diagonal(format)
}

/// Compute equivalence numbers for every format, in catalog order.
///
/// `focal_length` must already be validated as finite and non-negative (see
/// [`crate::input`]). Out-of-contract values are not checked here and flow
/// straight through the arithmetic.
///
/// # Arguments
/// * `focal_length` - Physical focal length in millimeters
/// * `formats` - Formats to convert to, in the order results should appear
/// * `reference` - Frame the equivalence is expressed against
///
/// # Examples
/// ```
/// # use mf_equiv::catalog::{Catalog, FULL_FRAME};
/// # use mf_equiv::engine::compute_results;
/// let catalog = Catalog::builtin();
/// let results = compute_results(80.0, catalog.formats(), FULL_FRAME);
/// let six_seven = results.iter().find(|r| r.format.id == "6x7").unwrap();
/// assert_eq!(format!("{:.1}", six_seven.equivalent_focal_length), "38.6");
/// ```
pub fn compute_results(
    focal_length: f64,
    formats: &[FormatEntry],
    reference: Dimensions,
) -> Vec<CalculationResult<'_>> {
    let reference_diagonal = compute_diagonal(reference);

    formats
        .iter()
        .map(|format| {
            let diagonal = compute_diagonal(format.dimensions);
            let crop_factor = reference_diagonal / diagonal;
            CalculationResult {
                format,
                crop_factor,
                equivalent_focal_length: focal_length * crop_factor,
                diagonal_mm: diagonal,
                aspect_ratio: format.dimensions.width / format.dimensions.height,
            }
        })
        .collect()
}

// ============================================================================
// Memoization
// ============================================================================

/// Hit/miss counters for a [`ResultCache`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u32,
    pub misses: u32,
}

impl CacheStats {
    pub fn hit(&mut self) {
        self.hits += 1;
    }

    pub fn miss(&mut self) {
        self.misses += 1;
    }

    pub fn total(&self) -> u32 {
        self.hits + self.misses
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hits > 0 {
            write!(
                f,
                "{} cached, {} recomputed ({} total)",
                self.hits,
                self.misses,
                self.total()
            )
        } else {
            write!(f, "{} recomputed", self.misses)
        }
    }
}

/// Remembers the last result sequence, keyed on the focal length.
///
/// A request with the same focal length (bit-for-bit) returns the previous
/// sequence; any other value recomputes everything and drops the old one.
#[derive(Debug)]
pub struct ResultCache<'a> {
    catalog: &'a Catalog,
    last: Option<(u64, Vec<CalculationResult<'a>>)>,
    stats: CacheStats,
}

impl<'a> ResultCache<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            last: None,
            stats: CacheStats::default(),
        }
    }

    /// Results for `focal_length`, recomputing only if it changed.
    pub fn results(&mut self, focal_length: f64) -> &[CalculationResult<'a>] {
        let key = focal_length.to_bits();
        let hit = matches!(&self.last, Some((cached, _)) if *cached == key);
        if hit {
            self.stats.hit();
            tracing::debug!(focal_length, "result cache hit");
        } else {
            self.stats.miss();
            tracing::debug!(focal_length, "result cache miss, recomputing");
            let catalog: &'a Catalog = self.catalog;
            self.last = Some((key, catalog.compute(focal_length)));
        }
        self.last.as_ref().map(|(_, r)| r.as_slice()).unwrap_or(&[])
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
