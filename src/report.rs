//! Static HTML report.
//!
//! Renders one self-contained page: the physical focal length, the preset row
//! with the active preset highlighted, and a card per format. Each card shows
//! the equivalent focal length, the crop factor, example cameras, and a small
//! outline box drawn in the format's own proportions.
//!
//! ## CSS
//!
//! `static/report.css` is embedded at compile time. Colors are injected as CSS
//! custom properties generated from `[colors.dark]` and `[colors.light]` in
//! `config.toml`.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.

use crate::config::{self, AppConfig};
use crate::input::FocalLengthInput;
use crate::output::{format_crop_factor, format_dimensions};
use crate::types::{CalculationResult, Dimensions};
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

const CSS_STATIC: &str = include_str!("../static/report.css");

/// Longer edge of the aspect-ratio hint box, in CSS pixels.
pub const HINT_BOX_PX: f64 = 60.0;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Size of the aspect-ratio hint box for a format.
///
/// The longer edge gets `max_px`; the shorter edge is scaled to keep the
/// format's proportions. Square formats get `max_px` on both edges.
///
/// # Examples
/// ```
/// # use mf_equiv::report::hint_box_size;
/// # use mf_equiv::types::Dimensions;
/// assert_eq!(hint_box_size(Dimensions::new(70.0, 56.0), 60.0), (60.0, 48.0));
/// ```
pub fn hint_box_size(dimensions: Dimensions, max_px: f64) -> (f64, f64) {
    let Dimensions { width, height } = dimensions;
    if width > height {
        (max_px, max_px * height / width)
    } else {
        (max_px * width / height, max_px)
    }
}

/// Write the report to `path`.
pub fn write_report(
    path: &Path,
    input: &FocalLengthInput,
    reference: Dimensions,
    results: &[CalculationResult<'_>],
    config: &AppConfig,
) -> Result<(), ReportError> {
    let page = render_report(input, reference, results, config);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, page.into_string())?;
    tracing::info!(path = %path.display(), formats = results.len(), "wrote report");
    Ok(())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the full report page.
pub fn render_report(
    input: &FocalLengthInput,
    reference: Dimensions,
    results: &[CalculationResult<'_>],
    config: &AppConfig,
) -> Markup {
    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    );

    let content = html! {
        div.page {
            (report_header(reference))
            (input_panel(input, &config.calculator.presets))
            section.results {
                @for result in results {
                    (format_card(result, config))
                }
            }
        }
    };

    base_document("Medium Format Field of View", &css, content)
}

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

fn report_header(reference: Dimensions) -> Markup {
    html! {
        header.report-header {
            div {
                h1 { "Medium Format " span.accent { "Field of View" } }
                p { "Lens focal lengths expressed as 135 full-frame equivalents" }
            }
            div.reference {
                div.label { "Reference" }
                div.mono { (format_dimensions(reference)) }
            }
        }
    }
}

fn input_panel(input: &FocalLengthInput, presets: &[u32]) -> Markup {
    html! {
        section.input-panel {
            div {
                div.label { "Physical focal length" }
                div.focal-length.mono {
                    span.field data-placeholder="0" { (input.raw()) }
                    span.unit { " mm" }
                }
            }
            ul.presets.mono {
                @for &mm in presets {
                    li.active[input.is_active_preset(mm)] { (mm) "mm" }
                }
            }
        }
    }
}

fn format_card(result: &CalculationResult<'_>, config: &AppConfig) -> Markup {
    let format = result.format;
    let (hint_w, hint_h) = hint_box_size(format.dimensions, HINT_BOX_PX);
    let hint_style = format!("width: {:.1}px; height: {:.1}px;", hint_w, hint_h);

    html! {
        article.format-card id=(format.id) {
            div.aspect-hint style=(hint_style) {}
            div {
                h3 { (format.common_name) }
                p.dimensions.mono { (format_dimensions(format.dimensions)) }
                div.label { "135 equivalent" }
                div.equivalent.mono {
                    (format!("{:.*}", config.display.focal_decimals, result.equivalent_focal_length))
                    span.unit { "mm" }
                }
            }
            div.card-footer {
                div.crop-factor {
                    span.label { "Crop factor" }
                    span.mono {
                        (format_crop_factor(result.crop_factor, config.display.crop_decimals))
                    }
                }
                p.examples { (format.examples) }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, FULL_FRAME};
    use tempfile::TempDir;

    fn render_at(raw: &str) -> String {
        let catalog = Catalog::builtin();
        let input = FocalLengthInput::new(raw).unwrap();
        let results = catalog.compute(input.value());
        render_report(&input, catalog.reference(), &results, &AppConfig::default()).into_string()
    }

    // =========================================================================
    // hint_box_size
    // =========================================================================

    #[test]
    fn hint_box_landscape() {
        assert_eq!(hint_box_size(Dimensions::new(70.0, 56.0), 60.0), (60.0, 48.0));
    }

    #[test]
    fn hint_box_portrait() {
        let (w, h) = hint_box_size(Dimensions::new(41.5, 56.0), 60.0);
        assert!((w - 44.464).abs() < 1e-3, "{w}");
        assert_eq!(h, 60.0);
    }

    #[test]
    fn hint_box_square() {
        assert_eq!(hint_box_size(Dimensions::new(56.0, 56.0), 60.0), (60.0, 60.0));
    }

    #[test]
    fn hint_box_panorama() {
        assert_eq!(hint_box_size(Dimensions::new(168.0, 56.0), 60.0), (60.0, 20.0));
    }

    // =========================================================================
    // Page rendering
    // =========================================================================

    #[test]
    fn report_includes_doctype() {
        assert!(render_at("80").starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn report_has_card_per_format() {
        let html = render_at("80");
        assert_eq!(html.matches("class=\"format-card\"").count(), 7);
        assert!(html.contains("id=\"6x17\""));
    }

    #[test]
    fn report_shows_rounded_values() {
        let html = render_at("80");
        assert!(html.contains("38.6"));
        assert!(html.contains("x0.48"));
    }

    #[test]
    fn report_shows_reference() {
        let html = render_at("80");
        assert!(html.contains(&format_dimensions(FULL_FRAME)));
    }

    #[test]
    fn report_marks_active_preset() {
        let html = render_at("80");
        assert_eq!(html.matches("class=\"active\"").count(), 1);
        assert!(html.contains("<li class=\"active\">80mm</li>"));
    }

    #[test]
    fn report_no_active_preset_for_custom_value() {
        let html = render_at("72");
        assert!(!html.contains("class=\"active\""));
    }

    #[test]
    fn report_empty_input_shows_zero() {
        let html = render_at("");
        assert!(html.contains("0.0<span class=\"unit\">mm</span>"));
    }

    /// Text inside the focal-length field span.
    fn field_text(html: &str) -> &str {
        let start = html.find("data-placeholder=").unwrap();
        let open_end = start + html[start..].find('>').unwrap() + 1;
        let close = open_end + html[open_end..].find("</span>").unwrap();
        &html[open_end..close]
    }

    #[test]
    fn report_panel_shows_typed_text() {
        assert_eq!(field_text(&render_at(" 80.0 ")), "80.0");
    }

    #[test]
    fn report_panel_stays_empty_for_empty_input() {
        assert_eq!(field_text(&render_at("")), "");
    }

    #[test]
    fn report_embeds_color_css() {
        let html = render_at("80");
        assert!(html.contains("--color-accent: #e11d48"));
    }

    #[test]
    fn report_lists_example_cameras() {
        let html = render_at("80");
        assert!(html.contains("<p class=\"examples\">Pentax 67, Mamiya RB67/RZ67</p>"));
    }

    #[test]
    fn write_report_creates_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out").join("report.html");
        let catalog = Catalog::builtin();
        let input = FocalLengthInput::default();
        let results = catalog.compute(input.value());
        write_report(&path, &input, catalog.reference(), &results, &AppConfig::default())
            .unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Medium Format Field of View"));
    }
}
