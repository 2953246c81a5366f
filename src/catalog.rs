//! The medium-format catalog and the full-frame reference.
//!
//! The catalog is static data bundled into a [`Catalog`] value that callers
//! pass to the engine explicitly. Nothing here is global mutable state.
//!
//! ## Formats
//!
//! ```text
//! id     W × H (mm)   orientation
//! 645    41.5 × 56    portrait (as loaded in most 645 bodies)
//! 6x6    56 × 56      square
//! 6x7    70 × 56      landscape
//! 6x8    76 × 56      landscape
//! 6x9    84 × 56      landscape
//! 6x12   112 × 56     panorama
//! 6x17   168 × 56     panorama
//! ```
//!
//! The reference is 135 full frame, 36 × 24 mm (diagonal ≈ 43.27 mm).

use crate::engine;
use crate::types::{CalculationResult, Dimensions, FormatEntry};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("catalog must contain at least one format")]
    Empty,
    #[error("duplicate format id: {0}")]
    DuplicateId(String),
    #[error("format {id} has invalid dimensions {width} × {height} mm")]
    InvalidDimensions { id: String, width: f64, height: f64 },
    #[error("reference format has invalid dimensions {width} × {height} mm")]
    InvalidReference { width: f64, height: f64 },
    #[error("unknown format id '{id}' (known: {known})")]
    UnknownId { id: String, known: String },
}

/// 135 full frame.
pub const FULL_FRAME: Dimensions = Dimensions::new(36.0, 24.0);

/// Built-in medium formats, in display order.
pub static MEDIUM_FORMATS: &[FormatEntry] = &[
    FormatEntry {
        id: "645",
        name: "6 x 4.5",
        common_name: "645",
        dimensions: Dimensions::new(41.5, 56.0),
        description: "The most economical medium format; natively a vertical frame, well suited to portraits.",
        examples: "Pentax 645, Mamiya 645, Contax 645",
    },
    FormatEntry {
        id: "6x6",
        name: "6 x 6 Square",
        common_name: "6x6",
        dimensions: Dimensions::new(56.0, 56.0),
        description: "The classic square frame; no need to turn the camera.",
        examples: "Hasselblad 500C/M, Rolleiflex",
    },
    FormatEntry {
        id: "6x7",
        name: "6 x 7",
        common_name: "6x7",
        dimensions: Dimensions::new(70.0, 56.0),
        description: "The \"ideal format\": the least cropping when enlarging to standard paper sizes.",
        examples: "Pentax 67, Mamiya RB67/RZ67",
    },
    FormatEntry {
        id: "6x8",
        name: "6 x 8",
        common_name: "6x8",
        dimensions: Dimensions::new(76.0, 56.0),
        description: "Sits between 6x7 and 6x9; common on motorized film backs.",
        examples: "Fujifilm GX680",
    },
    FormatEntry {
        id: "6x9",
        name: "6 x 9",
        common_name: "6x9",
        dimensions: Dimensions::new(84.0, 56.0),
        description: "The \"Texas Leica\" frame, a scaled-up version of the 135 proportions.",
        examples: "Fujifilm GSW690, Voigtländer Bessa II",
    },
    FormatEntry {
        id: "6x12",
        name: "6 x 12 Panorama",
        common_name: "6x12",
        dimensions: Dimensions::new(112.0, 56.0),
        description: "The standard panoramic frame, about twice as wide as 6x6.",
        examples: "Horseman 612, Linhof Technorama 612",
    },
    FormatEntry {
        id: "6x17",
        name: "6 x 17 Panorama",
        common_name: "6x17",
        dimensions: Dimensions::new(168.0, 56.0),
        description: "Extreme panoramic frame with a remarkably wide single exposure.",
        examples: "Linhof Technorama 617, Fujifilm GX617",
    },
];

/// An ordered set of formats plus the reference they are compared against.
#[derive(Debug, Clone)]
pub struct Catalog {
    reference: Dimensions,
    formats: Vec<FormatEntry>,
}

impl Catalog {
    /// Build a catalog, checking that it is non-empty, that every format and
    /// the reference have positive finite dimensions, and that ids are unique.
    pub fn new(reference: Dimensions, formats: Vec<FormatEntry>) -> Result<Self, CatalogError> {
        if !reference.is_valid() {
            return Err(CatalogError::InvalidReference {
                width: reference.width,
                height: reference.height,
            });
        }
        if formats.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for format in &formats {
            if !format.dimensions.is_valid() {
                return Err(CatalogError::InvalidDimensions {
                    id: format.id.to_string(),
                    width: format.dimensions.width,
                    height: format.dimensions.height,
                });
            }
            if !seen.insert(format.id) {
                return Err(CatalogError::DuplicateId(format.id.to_string()));
            }
        }
        Ok(Self { reference, formats })
    }

    /// The built-in medium-format catalog against 36 × 24 mm.
    pub fn builtin() -> Self {
        Self {
            reference: FULL_FRAME,
            formats: MEDIUM_FORMATS.to_vec(),
        }
    }

    pub fn reference(&self) -> Dimensions {
        self.reference
    }

    pub fn formats(&self) -> &[FormatEntry] {
        &self.formats
    }

    /// Look up a format by id. The error lists the ids that do exist.
    pub fn get(&self, id: &str) -> Result<&FormatEntry, CatalogError> {
        self.formats
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| CatalogError::UnknownId {
                id: id.to_string(),
                known: self
                    .formats
                    .iter()
                    .map(|f| f.id)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Run the engine over this catalog.
    pub fn compute(&self, focal_length: f64) -> Vec<CalculationResult<'_>> {
        engine::compute_results(focal_length, &self.formats, self.reference)
    }
}
