//! Label width measurement for the chart layout.

use plotters::style::FontDesc;

/// Average glyph advance as a fraction of the font size.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Measures how wide a label renders, in pixels.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font_size: f64) -> f64;
}

/// Width estimate from character count alone; needs no fonts.
#[derive(Debug, Default, Clone, Copy)]
pub struct EstimatedMetrics;

impl TextMeasure for EstimatedMetrics {
    #[allow(clippy::cast_precision_loss)] // Label lengths are tiny
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * GLYPH_WIDTH_RATIO
    }
}

/// Widths measured with the system font `plotters` resolves for a family.
#[derive(Debug, Clone)]
pub struct FontMetrics {
    family: String,
}

impl FontMetrics {
    /// Returns `None` when no font can be loaded for `family`.
    #[must_use]
    pub fn resolve(family: &str) -> Option<Self> {
        FontDesc::from((family, 12.0)).box_size("Mg").ok()?;
        Some(Self {
            family: family.to_string(),
        })
    }
}

impl TextMeasure for FontMetrics {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        FontDesc::from((self.family.as_str(), font_size))
            .box_size(text)
            .map_or_else(
                |_| EstimatedMetrics.text_width(text, font_size),
                |(width, _)| f64::from(width),
            )
    }
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
