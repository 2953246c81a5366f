//! Shared types passed between the catalog, the engine, and presentation.
//!
//! Catalog records borrow `'static` strings: the catalog is compile-time data
//! and lives for the whole process. Results borrow their format entry from
//! whatever catalog produced them.

use serde::Serialize;

/// Physical extent of a sensor or film frame, in millimeters.
///
/// No orientation is implied: `width` and `height` are the two edge lengths
/// as cataloged. Both must be strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both edges are strictly positive finite numbers.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// One medium-format frame size in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatEntry {
    /// Stable identifier, unique within a catalog (e.g. `"6x7"`).
    pub id: &'static str,
    /// Display name (e.g. `"6 x 7"`).
    pub name: &'static str,
    /// Short name photographers use (e.g. `"645"`).
    pub common_name: &'static str,
    pub dimensions: Dimensions,
    pub description: &'static str,
    /// Representative cameras, free text.
    pub examples: &'static str,
}

/// Equivalence numbers for one format at one physical focal length.
///
/// All values are full precision; rounding happens at display time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult<'a> {
    pub format: &'a FormatEntry,
    /// Reference diagonal divided by this format's diagonal.
    pub crop_factor: f64,
    /// Focal length on the reference format giving the same field of view.
    pub equivalent_focal_length: f64,
    pub diagonal_mm: f64,
    /// `width / height` of the format as cataloged.
    pub aspect_ratio: f64,
}
