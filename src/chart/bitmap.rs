//! Raster painter backed by `plotters`.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::RenderError;

use super::layout::ChartLayout;
use super::style::{ChartStyle, Rgb};

impl From<Rgb> for RGBColor {
    fn from(color: Rgb) -> Self {
        Self(color.r, color.g, color.b)
    }
}

fn backend_error(err: impl std::fmt::Display) -> RenderError {
    RenderError::Backend(err.to_string())
}

/// Paint the layout into an image file at `target`; the encoder is picked
/// from the file extension.
///
/// The drawing area lives only inside this call. It is dropped on every
/// return path, whether or not `present` succeeded.
///
/// # Errors
/// Returns [`RenderError::Backend`] if drawing, text rasterization or encoding fails.
#[allow(clippy::cast_possible_truncation)] // Pixel coordinates fit in i32
pub fn paint(layout: &ChartLayout, style: &ChartStyle, target: &Path) -> Result<(), RenderError> {
    let root = BitMapBackend::new(target, (layout.width, layout.height)).into_drawing_area();
    root.fill(&RGBColor::from(style.background))
        .map_err(backend_error)?;

    let bar_color = RGBColor::from(style.bar);
    let label_color = RGBColor::from(style.label);
    // Fonts are only resolved when some label is actually drawn
    let label_style = layout.bars.iter().any(|b| !b.label.is_empty()).then(|| {
        FontDesc::from((style.font_family.as_str(), layout.font_size))
            .color(&label_color)
            .pos(Pos::new(HPos::Right, VPos::Center))
    });

    for bar in &layout.bars {
        if bar.is_visible() {
            let top_left = (bar.x.round() as i32, bar.y.round() as i32);
            let bottom_right = (
                (bar.x + bar.width).round() as i32,
                (bar.y + bar.height).round() as i32,
            );
            root.draw(&Rectangle::new([top_left, bottom_right], bar_color.filled()))
                .map_err(backend_error)?;
        }

        if let Some(text_style) = label_style.as_ref().filter(|_| !bar.label.is_empty()) {
            let anchor = (bar.label_x.round() as i32, bar.label_y.round() as i32);
            root.draw(&Text::new(bar.label.as_str(), anchor, text_style.clone()))
                .map_err(backend_error)?;
        }
    }

    root.present().map_err(backend_error)?;
    Ok(())
}
