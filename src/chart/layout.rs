//! Geometry for the horizontal bar chart.
//!
//! Coordinates are in pixels with the origin at the top-left corner, so the
//! first data point lands in the top row.

use crate::config::ChartConfig;

use super::data::DataPoint;
use super::metrics::TextMeasure;

/// Blank border around the whole chart.
const MARGIN: f64 = 10.0;
/// Space between the end of a label and the start of its bar.
const LABEL_GAP: f64 = 8.0;
/// Labels shrink until they fit this share of the canvas width.
const MAX_GUTTER_RATIO: f64 = 0.45;
/// Labels never shrink below this size; the gutter widens instead.
const MIN_FONT_SIZE: f64 = 6.0;

/// A bar with its final position and the anchor of its label.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBar {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Right edge of the label text.
    pub label_x: f64,
    /// Vertical center of the label text.
    pub label_y: f64,
}

impl PlacedBar {
    /// Whether the bar covers at least half a pixel.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.width >= 0.5
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    /// Label font size after fitting labels into the gutter.
    pub font_size: f64,
    pub bars: Vec<PlacedBar>,
}

impl ChartLayout {
    /// Place one bar per data point, top to bottom in input order.
    ///
    /// Bar lengths scale so the largest value spans the plot area; when every
    /// value is zero all bars have zero length. Every label starts inside the
    /// left margin.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Acceptable for chart sizing
    pub fn compute(data: &[DataPoint], config: &ChartConfig, measure: &dyn TextMeasure) -> Self {
        let width = f64::from(config.width);
        let height = f64::from(config.height);

        let LabelFit { font_size, gutter } = fit_labels(data, config, measure);
        let plot_x = MARGIN + gutter;
        let plot_width = (width - plot_x - MARGIN).max(1.0);

        let slot = if data.is_empty() {
            0.0
        } else {
            MARGIN.mul_add(-2.0, height).max(0.0) / data.len() as f64
        };
        let bar_height = slot * config.bar_fill;
        let inset = (slot - bar_height) / 2.0;

        let max_value = data.iter().map(|d| d.value).fold(0.0_f64, f64::max);

        let bars = data
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let y = slot.mul_add(i as f64, MARGIN + inset);
                let bar_width = if max_value > 0.0 {
                    (point.value / max_value) * plot_width
                } else {
                    0.0
                };
                PlacedBar {
                    label: point.label.clone(),
                    value: point.value,
                    x: plot_x,
                    y,
                    width: bar_width,
                    height: bar_height,
                    label_x: plot_x - LABEL_GAP,
                    label_y: y + bar_height / 2.0,
                }
            })
            .collect();

        Self {
            width: config.width,
            height: config.height,
            font_size,
            bars,
        }
    }
}

struct LabelFit {
    font_size: f64,
    gutter: f64,
}

/// Pick the label font size and the gutter reserved left of the bars.
///
/// The widest label is measured at the configured size and shrunk until it
/// fits the preferred gutter share. At the minimum size the gutter grows to
/// whatever the widest label needs.
fn fit_labels(data: &[DataPoint], config: &ChartConfig, measure: &dyn TextMeasure) -> LabelFit {
    let widest = |size: f64| {
        data.iter()
            .filter(|d| !d.label.is_empty())
            .map(|d| measure.text_width(&d.label, size))
            .fold(0.0_f64, f64::max)
    };

    let mut font_size = f64::from(config.font_size);
    let mut text_width = widest(font_size);
    if text_width <= 0.0 {
        return LabelFit {
            font_size,
            gutter: 0.0,
        };
    }

    let budget = f64::from(config.width).mul_add(MAX_GUTTER_RATIO, -LABEL_GAP);
    while text_width > budget && font_size > MIN_FONT_SIZE {
        // Tenths of a pixel, rounded down so the scaled label still fits
        let scaled = (font_size * budget / text_width * 10.0).floor() / 10.0;
        font_size = scaled.min(font_size - 0.5).max(MIN_FONT_SIZE);
        text_width = widest(font_size);
    }

    LabelFit {
        font_size,
        gutter: text_width + LABEL_GAP,
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
