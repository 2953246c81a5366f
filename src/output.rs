//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every format leads with its positional index and common name, followed by
//! the number the user came for: the equivalent focal length. Physical
//! details are indented context lines beneath it.
//!
//! # Output Format
//!
//! ## Results
//!
//! ```text
//! 80mm on medium format (reference 36 × 24 mm)
//!
//! 001 645    → 49.7mm  x0.62
//!     41.5 × 56 mm, diagonal 69.70 mm, aspect 0.74
//! 002 6x6    → 43.7mm  x0.55
//!     56 × 56 mm, diagonal 79.20 mm, aspect 1.00
//! ```
//!
//! ## Catalog
//!
//! ```text
//! 001 645 (6 x 4.5)
//!     41.5 × 56 mm, crop factor x0.62
//!     The most economical medium format; ...
//!     Cameras: Pentax 645, Mamiya 645, Contax 645
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure —
//! no I/O, no side effects.

use crate::catalog::Catalog;
use crate::config::DisplayConfig;
use crate::engine;
use crate::input::FocalLengthInput;
use crate::types::{CalculationResult, Dimensions, FormatEntry};
use serde::Serialize;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format a millimeter value without trailing zeros (`56`, `41.5`).
pub fn format_mm(value: f64) -> String {
    format!("{}", value)
}

/// Format dimensions as `W × H mm`.
pub fn format_dimensions(dimensions: Dimensions) -> String {
    format!(
        "{} \u{d7} {} mm",
        format_mm(dimensions.width),
        format_mm(dimensions.height)
    )
}

/// Equivalent focal length rounded for display, e.g. `38.6mm`.
pub fn format_focal_length(value: f64, decimals: usize) -> String {
    format!("{:.*}mm", decimals, value)
}

/// Crop factor rounded for display, e.g. `x0.48`.
pub fn format_crop_factor(value: f64, decimals: usize) -> String {
    format!("x{:.*}", decimals, value)
}

// ============================================================================
// Results
// ============================================================================

/// Format one computation: a header line, then one entry per format.
pub fn format_results(
    focal_length: f64,
    reference: Dimensions,
    results: &[CalculationResult<'_>],
    display: &DisplayConfig,
) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{}mm on medium format (reference {})",
            format_mm(focal_length),
            format_dimensions(reference)
        ),
        String::new(),
    ];

    let name_width = results
        .iter()
        .map(|r| r.format.common_name.chars().count())
        .max()
        .unwrap_or(0);

    for (i, result) in results.iter().enumerate() {
        lines.push(format!(
            "{} {:<width$} \u{2192} {}  {}",
            format_index(i + 1),
            result.format.common_name,
            format_focal_length(result.equivalent_focal_length, display.focal_decimals),
            format_crop_factor(result.crop_factor, display.crop_decimals),
            width = name_width,
        ));
        lines.push(format!(
            "    {}, diagonal {:.2} mm, aspect {:.2}",
            format_dimensions(result.format.dimensions),
            result.diagonal_mm,
            result.aspect_ratio
        ));
    }
    lines
}

/// Print results to stdout.
pub fn print_results(
    focal_length: f64,
    reference: Dimensions,
    results: &[CalculationResult<'_>],
    display: &DisplayConfig,
) {
    for line in format_results(focal_length, reference, results, display) {
        println!("{}", line);
    }
}

/// JSON document emitted by `calc --json`. Values are full precision.
#[derive(Debug, Serialize)]
pub struct ResultsDocument<'a> {
    pub focal_length: f64,
    pub reference: Dimensions,
    pub results: &'a [CalculationResult<'a>],
}

// ============================================================================
// Catalog
// ============================================================================

/// Format the catalog listing: identity, dimensions, description, cameras.
pub fn format_catalog(catalog: &Catalog, display: &DisplayConfig) -> Vec<String> {
    let reference = catalog.reference();
    let mut lines = vec![format!("Reference: {}", format_dimensions(reference))];
    lines.push(String::new());
    for (i, format) in catalog.formats().iter().enumerate() {
        let title = format!("{} {} ({})", format_index(i + 1), format.common_name, format.name);
        lines.extend(entry_lines(title, format, reference, display));
    }
    lines
}

/// Format a single catalog entry, as shown by `formats <ID>`.
pub fn format_entry(
    format: &FormatEntry,
    reference: Dimensions,
    display: &DisplayConfig,
) -> Vec<String> {
    let title = format!("{} ({})", format.common_name, format.name);
    let mut lines = entry_lines(title, format, reference, display);
    lines.push(format!("    Reference: {}", format_dimensions(reference)));
    lines
}

fn entry_lines(
    title: String,
    format: &FormatEntry,
    reference: Dimensions,
    display: &DisplayConfig,
) -> Vec<String> {
    let mut lines = vec![title];
    lines.push(format!(
        "    {}, crop factor {}",
        format_dimensions(format.dimensions),
        format_crop_factor(
            engine::crop_factor(format.dimensions, reference),
            display.crop_decimals
        )
    ));
    if !format.description.is_empty() {
        lines.push(format!("    {}", format.description));
    }
    if !format.examples.is_empty() {
        lines.push(format!("    Cameras: {}", format.examples));
    }
    lines
}

/// Print the catalog listing to stdout.
pub fn print_catalog(catalog: &Catalog, display: &DisplayConfig) {
    for line in format_catalog(catalog, display) {
        println!("{}", line);
    }
}

/// Print one catalog entry to stdout.
pub fn print_entry(format: &FormatEntry, reference: Dimensions, display: &DisplayConfig) {
    for line in format_entry(format, reference, display) {
        println!("{}", line);
    }
}

// ============================================================================
// Input field and presets
// ============================================================================

/// The focal-length field as the user typed it, e.g. `80.0mm`.
///
/// An emptied field is shown as such rather than as the zero it computes to.
pub fn format_field(input: &FocalLengthInput) -> String {
    if input.raw().is_empty() {
        "empty field".to_string()
    } else {
        format!("{}mm", input.raw())
    }
}

/// Format the quick-select presets on one line, active one in brackets.
///
/// ```text
/// p1 45  p2 50  p3 65  [p4 80]  p5 90
/// ```
pub fn format_presets(presets: &[u32], input: &FocalLengthInput) -> String {
    presets
        .iter()
        .enumerate()
        .map(|(i, &mm)| {
            let label = format!("p{} {}", i + 1, mm);
            if input.is_active_preset(mm) {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}
