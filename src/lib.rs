//! # mf-equiv
//!
//! Medium-format field-of-view calculator. Give it the focal length of a
//! medium-format lens and it tells you which focal length frames the same on a
//! 36 × 24 mm full-frame camera, for every common roll-film format from 645 to
//! 6x17.
//!
//! # The Math
//!
//! ```text
//! diagonal        = √(width² + height²)
//! crop factor     = diagonal(36 × 24) / diagonal(format)
//! equivalent      = focal length × crop factor
//! ```
//!
//! An 80 mm lens on 6x7 (70 × 56 mm) has a crop factor of about 0.48 and frames
//! like a 38.6 mm lens on full frame.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Diagonal, crop factor, per-format results; memoizing [`engine::ResultCache`] |
//! | [`catalog`] | The built-in format list and the full-frame reference, bundled as [`catalog::Catalog`] |
//! | [`input`] | Raw focal-length text → validated millimeters; quick-select presets |
//! | [`config`] | `config.toml` loading, merging, validation, and CSS color generation |
//! | [`output`] | Terminal formatting of results and the catalog |
//! | [`prompt`] | Interactive line-by-line calculator session |
//! | [`report`] | Static HTML report rendered with Maud |
//! | [`types`] | `Dimensions`, `FormatEntry`, `CalculationResult` |
//!
//! # Design Decisions
//!
//! ## The Engine Is Pure
//!
//! [`engine::compute_results`] takes the focal length, the formats, and the
//! reference as arguments and returns fresh results. There is no global
//! catalog: callers hold a [`catalog::Catalog`] and pass it in. This keeps the
//! engine trivially testable and safe to call from anywhere.
//!
//! ## Validation Lives at the Boundary
//!
//! The engine trusts its caller. [`input::parse_focal_length`] is where text
//! becomes a number: empty input is zero, negative or non-numeric input is an
//! error. The catalog is validated once by [`catalog::Catalog::new`].
//!
//! ## Rounding Is Presentation
//!
//! Results carry full precision. The terminal output and the HTML report round
//! (one decimal for focal length, two for crop factor by default) and JSON
//! output does not round at all.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod input;
pub mod output;
pub mod prompt;
pub mod report;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
