//! Calculator configuration.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! the base layer; a user `config.toml` in the config directory (the current
//! directory unless `--config` says otherwise) overrides any subset of keys.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [calculator]
//! default_focal_length = "80"   # Raw text, same rules as typed input
//! presets = [45, 50, 65, 80, 90, 105, 110, 127, 150, 180]
//!
//! [display]
//! focal_decimals = 1            # Decimals for equivalent focal length
//! crop_decimals = 2             # Decimals for crop factor
//!
//! [colors.dark]
//! background = "#0c0a09"
//! surface = "#1c1917"
//! border = "#292524"
//! text = "#e7e5e4"
//! text_muted = "#78716c"
//! accent = "#e11d48"
//!
//! [colors.light]
//! background = "#fafaf9"
//! surface = "#ffffff"
//! border = "#e7e5e4"
//! text = "#1c1917"
//! text_muted = "#78716c"
//! accent = "#be123c"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! [display]
//! focal_decimals = 0
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::input::{self, DEFAULT_FOCAL_LENGTH, DEFAULT_PRESETS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Upper bound for either display precision setting.
pub const MAX_DECIMALS: usize = 6;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Initial input and quick-select presets.
    pub calculator: CalculatorConfig,
    /// Rounding used when showing results.
    pub display: DisplayConfig,
    /// Color schemes for the HTML report.
    pub colors: ColorConfig,
}

impl AppConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        input::parse_focal_length(&self.calculator.default_focal_length).map_err(|e| {
            ConfigError::Validation(format!("calculator.default_focal_length: {e}"))
        })?;
        if self.calculator.presets.is_empty() {
            return Err(ConfigError::Validation(
                "calculator.presets must not be empty".into(),
            ));
        }
        if self.display.focal_decimals > MAX_DECIMALS || self.display.crop_decimals > MAX_DECIMALS
        {
            return Err(ConfigError::Validation(format!(
                "display decimals must be 0-{MAX_DECIMALS}"
            )));
        }
        Ok(())
    }
}

/// Input settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Focal length used when none is given, as raw input text.
    pub default_focal_length: String,
    /// Quick-select focal lengths in millimeters, in display order.
    pub presets: Vec<u32>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_focal_length: DEFAULT_FOCAL_LENGTH.to_string(),
            presets: DEFAULT_PRESETS.to_vec(),
        }
    }
}

/// Display rounding. Computed values are never rounded, only their rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Decimals shown for equivalent focal length.
    pub focal_decimals: usize,
    /// Decimals shown for crop factor.
    pub crop_decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            focal_decimals: 1,
            crop_decimals: 2,
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Card background.
    pub surface: String,
    pub border: String,
    pub text: String,
    /// Labels, dimensions, example cameras.
    pub text_muted: String,
    /// Equivalent focal length and the active preset.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_dark() -> Self {
        Self {
            background: "#0c0a09".to_string(),
            surface: "#1c1917".to_string(),
            border: "#292524".to_string(),
            text: "#e7e5e4".to_string(),
            text_muted: "#78716c".to_string(),
            accent: "#e11d48".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#fafaf9".to_string(),
            surface: "#ffffff".to_string(),
            border: "#e7e5e4".to_string(),
            text: "#1c1917".to_string(),
            text_muted: "#78716c".to_string(),
            accent: "#be123c".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_dark()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// [`AppConfig::default`] as a TOML table, the base layer for merging.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(AppConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults: {e}")))
}

/// Lay a sparse user table over the stock defaults.
///
/// Tables meet key by key, so `[colors.dark] accent = ...` leaves the other
/// dark colors alone. Anything that is not a table on both sides (including
/// `presets` arrays) is taken from `overlay` as a whole.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read `<dir>/config.toml` without interpreting it.
///
/// There is a single optional file; a missing one is `Ok(None)` and the
/// stock defaults apply unchanged.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no config file, using stock defaults");
        return Ok(None);
    }
    tracing::debug!(path = %config_path.display(), "loading config");
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Turn defaults plus the optional user file into a checked [`AppConfig`].
///
/// Unknown keys fail here as [`ConfigError::Toml`]; out-of-range values fail
/// in [`AppConfig::validate`].
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<AppConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: AppConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// The calculator settings for a run: stock defaults, overridden by
/// `config.toml` in `dir` when present.
pub fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# mf-equiv Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Calculator
# ---------------------------------------------------------------------------
[calculator]
# Physical focal length (mm) used when none is given on the command line.
# Same rules as typed input: empty means 0, negative or non-numeric is an error.
default_focal_length = "80"

# Quick-select focal lengths (mm), in display order.
presets = [45, 50, 65, 80, 90, 105, 110, 127, 150, 180]

# ---------------------------------------------------------------------------
# Display rounding (computed values are never rounded)
# ---------------------------------------------------------------------------
[display]
# Decimals shown for the equivalent focal length (0-6).
focal_decimals = 1

# Decimals shown for the crop factor (0-6).
crop_decimals = 2

# ---------------------------------------------------------------------------
# HTML report colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0c0a09"
surface = "#1c1917"       # Format cards
border = "#292524"
text = "#e7e5e4"
text_muted = "#78716c"    # Labels, dimensions, example cameras
accent = "#e11d48"        # Equivalent focal length, active preset

# ---------------------------------------------------------------------------
# HTML report colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#fafaf9"
surface = "#ffffff"
border = "#e7e5e4"
text = "#1c1917"
text_muted = "#78716c"
accent = "#be123c"
"##
}

/// Generate CSS custom properties from color config.
///
/// Dark is the base scheme; light applies under `prefers-color-scheme: light`.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{dark}
}}

@media (prefers-color-scheme: light) {{
    :root {{
{light}
    }}
}}"#,
        dark = scheme_properties(&colors.dark, 1),
        light = scheme_properties(&colors.light, 2),
    )
}

fn scheme_properties(scheme: &ColorScheme, depth: usize) -> String {
    let pad = "    ".repeat(depth);
    [
        ("--color-bg", &scheme.background),
        ("--color-surface", &scheme.surface),
        ("--color-border", &scheme.border),
        ("--color-text", &scheme.text),
        ("--color-text-muted", &scheme.text_muted),
        ("--color-accent", &scheme.accent),
    ]
    .iter()
    .map(|(name, value)| format!("{pad}{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_calculator_settings() {
        let config = AppConfig::default();
        assert_eq!(config.calculator.default_focal_length, "80");
        assert_eq!(
            config.calculator.presets,
            vec![45, 50, 65, 80, 90, 105, 110, 127, 150, 180]
        );
    }

    #[test]
    fn default_config_has_display_settings() {
        let config = AppConfig::default();
        assert_eq!(config.display.focal_decimals, 1);
        assert_eq!(config.display.crop_decimals, 2);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors.dark]
accent = "#ff0000"
"##;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.colors.dark.accent, "#ff0000");
        // Default values preserved
        assert_eq!(config.colors.dark.background, "#0c0a09");
        assert_eq!(config.display.focal_decimals, 1);
    }

    #[test]
    fn parse_documented_example() {
        let toml = r##"
[calculator]
default_focal_length = "80"
presets = [45, 50, 65, 80, 90, 105, 110, 127, 150, 180]

[display]
focal_decimals = 1
crop_decimals = 2

[colors.dark]
background = "#0c0a09"
surface = "#1c1917"
border = "#292524"
text = "#e7e5e4"
text_muted = "#78716c"
accent = "#e11d48"

[colors.light]
background = "#fafaf9"
surface = "#ffffff"
border = "#e7e5e4"
text = "#1c1917"
text_muted = "#78716c"
accent = "#be123c"
"##;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.colors.dark.surface, "#1c1917");
        assert_eq!(config.colors.light.accent, "#be123c");
    }

    #[test]
    fn parse_rejects_flat_colors_table() {
        let toml = r##"
[colors]
background = "#000000"
"##;
        let result: Result<AppConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        let toml = r##"
[display]
focal_decimal = 2
"##;
        let result: Result<AppConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    // =========================================================================
    // validate tests
    // =========================================================================

    #[test]
    fn validate_rejects_negative_default() {
        let mut config = AppConfig::default();
        config.calculator.default_focal_length = "-80".into();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_accepts_empty_default() {
        let mut config = AppConfig::default();
        config.calculator.default_focal_length = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_presets() {
        let mut config = AppConfig::default();
        config.calculator.presets.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_excess_decimals() {
        let mut config = AppConfig::default();
        config.display.crop_decimals = 7;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_overrides_nested_key_only() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str("[display]\ncrop_decimals = 3").unwrap();
        let config: AppConfig = merge_toml(base, overlay).try_into().unwrap();
        assert_eq!(config.display.crop_decimals, 3);
        assert_eq!(config.display.focal_decimals, 1);
    }

    #[test]
    fn merge_replaces_arrays() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str("[calculator]\npresets = [35, 55]").unwrap();
        let config: AppConfig = merge_toml(base, overlay).try_into().unwrap();
        assert_eq!(config.calculator.presets, vec![35, 55]);
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.calculator.default_focal_length, "80");
        assert_eq!(config.colors.dark.background, "#0c0a09");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[calculator]
default_focal_length = "150"

[colors.light]
accent = "#123456"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.calculator.default_focal_length, "150");
        assert_eq!(config.colors.light.accent, "#123456");
        // Unspecified values should be defaults
        assert_eq!(config.calculator.presets.len(), 10);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_invalid_value_is_validation_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[calculator]\ndefault_focal_length = \"wide\"\n",
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn stock_config_toml_parses_to_defaults() {
        let config: AppConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = AppConfig::default();
        assert_eq!(
            config.calculator.presets,
            defaults.calculator.presets
        );
        assert_eq!(config.colors.dark.accent, defaults.colors.dark.accent);
        assert_eq!(config.colors.light.accent, defaults.colors.light.accent);
    }

    // =========================================================================
    // CSS generation tests
    // =========================================================================

    #[test]
    fn generate_css_includes_all_variables() {
        let css = generate_color_css(&ColorConfig::default());
        for var in [
            "--color-bg:",
            "--color-surface:",
            "--color-border:",
            "--color-text:",
            "--color-text-muted:",
            "--color-accent:",
        ] {
            assert!(css.contains(var), "missing {var}");
        }
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.dark.background = "#010101".to_string();
        colors.light.background = "#fefefe".to_string();
        let css = generate_color_css(&colors);
        assert!(css.contains("--color-bg: #010101"));
        assert!(css.contains("--color-bg: #fefefe"));
    }

    #[test]
    fn generate_css_includes_light_mode_media_query() {
        let css = generate_color_css(&ColorConfig::default());
        assert!(css.contains("@media (prefers-color-scheme: light)"));
    }
}
