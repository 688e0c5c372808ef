//! Horizontal bar chart rendering.
//!
//! Rendering is split in three steps:
//! - display labels are truncated to a word budget ([`truncate_label`])
//! - a [`ChartLayout`] places every bar and label, sizing the label gutter
//!   from font metrics so no label runs off the canvas
//! - a painter draws that layout: the SVG writer for `.svg`, `plotters` for
//!   raster formats
//!
//! Output is staged in a temporary sibling file and renamed into place, so a
//! failed run never leaves a partial image behind.

mod bitmap;
mod data;
mod label;
mod layout;
mod metrics;
mod style;
mod svg;
mod writer;

use std::path::Path;

use tracing::{debug, info};

pub use data::DataPoint;
pub use label::truncate_label;
pub use layout::{ChartLayout, PlacedBar};
pub use metrics::{EstimatedMetrics, FontMetrics, TextMeasure};
pub use style::{ChartStyle, Rgb};
pub use writer::StagedOutput;

use crate::config::ChartConfig;
use crate::error::{RenderError, Result};
use crate::summary::SummaryTable;

/// Output encodings, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Bmp,
    Jpeg,
    Svg,
}

impl ImageFormat {
    /// # Errors
    /// Returns [`RenderError::UnsupportedFormat`] for unknown or missing extensions.
    pub fn from_path(path: &Path) -> std::result::Result<Self, RenderError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("bmp") => Ok(Self::Bmp),
            Some("jpg" | "jpeg") => Ok(Self::Jpeg),
            Some("svg") => Ok(Self::Svg),
            _ => Err(RenderError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Extension used for the staged temporary file.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Bmp => "bmp",
            Self::Jpeg => "jpg",
            Self::Svg => "svg",
        }
    }
}

/// Turn summary rows into chart data: truncated label, bar length = total words.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Word totals far below 2^52
pub fn chart_data(table: &SummaryTable, max_words: usize) -> Vec<DataPoint> {
    table
        .rows()
        .iter()
        .map(|row| DataPoint::new(truncate_label(&row.label, max_words), row.total_words as f64))
        .collect()
}

/// Draw the summary table as a horizontal bar chart and save it to `output_path`.
///
/// Rows are drawn top to bottom in table order with one bar color and no
/// axes, ticks or titles. The image either appears complete at
/// `output_path` or not at all.
///
/// # Errors
/// Returns a `RenderError` if the table is empty, the extension is not a
/// supported image format, the output directory is not writable, or drawing
/// fails. Returns a `Config` error if a configured color is invalid.
pub fn render(
    table: &SummaryTable,
    max_words: usize,
    output_path: &Path,
    config: &ChartConfig,
) -> Result<()> {
    if table.is_empty() {
        return Err(RenderError::EmptyTable.into());
    }
    let format = ImageFormat::from_path(output_path)?;
    let style = ChartStyle::from_config(config)?;

    let data = chart_data(table, max_words);
    let layout = ChartLayout::compute(&data, config, label_metrics(&data, config).as_ref());

    let mut staged = StagedOutput::create(output_path, format.extension())?;
    match format {
        ImageFormat::Svg => staged.write_all(svg::paint(&layout, &style).as_bytes())?,
        ImageFormat::Png | ImageFormat::Bmp | ImageFormat::Jpeg => {
            bitmap::paint(&layout, &style, staged.path())?;
        }
    }
    let saved = staged.commit()?;

    info!(
        format = ?format,
        width = layout.width,
        height = layout.height,
        font_size = layout.font_size,
        bars = layout.bars.len(),
        "chart written to {}",
        saved.display()
    );
    Ok(())
}

/// Font metrics for the configured family, or the estimate when no font loads.
fn label_metrics(data: &[DataPoint], config: &ChartConfig) -> Box<dyn TextMeasure> {
    if data.iter().all(|d| d.label.is_empty()) {
        return Box::new(EstimatedMetrics);
    }
    match FontMetrics::resolve(&config.font_family) {
        Some(font) => Box::new(font),
        None => {
            debug!(family = %config.font_family, "no font found, estimating label widths");
            Box::new(EstimatedMetrics)
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
