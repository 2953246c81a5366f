//! Focal-length input handling.
//!
//! The engine trusts its caller to hand it a finite, non-negative focal length.
//! This module is that caller's boundary: it turns raw text (typed at the
//! prompt, passed on the command line, or read from `config.toml`) into a
//! value the engine can use.
//!
//! ## Normalization Rules
//!
//! - `""` or whitespace only → `0.0` (an empty field displays as zero, not an error)
//! - `"80"`, `" 80 "`, `"80.5"` → the parsed value
//! - `"abc"`, `"80mm"` → [`InputError::NotANumber`]
//! - `"inf"`, `"NaN"` → [`InputError::NotFinite`]
//! - `"-50"` → [`InputError::Negative`]

use thiserror::Error;

/// Quick-select focal lengths offered when the config does not override them.
pub const DEFAULT_PRESETS: [u32; 10] = [45, 50, 65, 80, 90, 105, 110, 127, 150, 180];

/// Initial input text before the user types anything.
pub const DEFAULT_FOCAL_LENGTH: &str = "80";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("focal length must be finite, got '{0}'")]
    NotFinite(String),
    #[error("focal length must not be negative, got {0}")]
    Negative(f64),
}

/// Parse raw focal-length text into millimeters.
pub fn parse_focal_length(raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(InputError::NotFinite(trimmed.to_string()));
    }
    if value < 0.0 {
        return Err(InputError::Negative(value));
    }
    // -0.0 parses fine and compares equal to zero; normalize so it displays as 0.
    Ok(if value == 0.0 { 0.0 } else { value })
}

/// The single focal-length field, as the user sees it.
///
/// Keeps the raw text so an emptied field stays empty on screen while the
/// engine sees zero. Only valid text is ever stored: a rejected edit leaves
/// the previous text and value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct FocalLengthInput {
    raw: String,
    value: f64,
}

impl FocalLengthInput {
    pub fn new(raw: &str) -> Result<Self, InputError> {
        let value = parse_focal_length(raw)?;
        Ok(Self {
            raw: raw.trim().to_string(),
            value,
        })
    }

    /// Replace the text. On error the previous state is kept.
    pub fn set_raw(&mut self, raw: &str) -> Result<f64, InputError> {
        let value = parse_focal_length(raw)?;
        self.raw = raw.trim().to_string();
        self.value = value;
        Ok(value)
    }

    /// Set the field from a quick-select preset.
    pub fn select_preset(&mut self, mm: u32) -> f64 {
        self.raw = mm.to_string();
        self.value = f64::from(mm);
        self.value
    }

    /// Whether `mm` is the value currently in the field.
    pub fn is_active_preset(&self, mm: u32) -> bool {
        self.value == f64::from(mm)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Default for FocalLengthInput {
    fn default() -> Self {
        Self {
            raw: DEFAULT_FOCAL_LENGTH.to_string(),
            value: 80.0,
        }
    }
}
