//! SVG painter for [`ChartLayout`].
//!
//! Emits a fixed-size document: a background rectangle, one `<rect>` per bar
//! and one right-aligned `<text>` per non-empty label. No axes, ticks or titles.

use std::fmt::Write;

use super::layout::{ChartLayout, PlacedBar};
use super::style::{ChartStyle, Rgb};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Escape text for use inside SVG content and attribute values.
#[must_use]
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A single filled bar.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            self.x, self.y, self.width, self.height, self.color
        )
    }
}

/// A category label, right-aligned against its anchor and vertically centered.
#[derive(Debug, Clone)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: Rgb,
    pub font_family: String,
    pub font_size: f64,
}

impl SvgElement for Label {
    fn render(&self) -> String {
        format!(
            r#"<text x="{}" y="{}" text-anchor="end" dominant-baseline="middle" fill="{}" font-family="{}" font-size="{}">{}</text>"#,
            self.x,
            self.y,
            self.color,
            html_escape(&self.font_family),
            self.font_size,
            html_escape(&self.text)
        )
    }
}

/// Builder for a fixed-size SVG document.
#[derive(Debug)]
pub struct SvgBuilder {
    width: u32,
    height: u32,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn push_raw(mut self, svg: impl Into<String>) -> Self {
        self.elements.push(svg.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" role="img">"#,
            w = self.width,
            h = self.height
        );

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>\n");
        output
    }
}

/// Paint the layout as a standalone SVG document.
#[must_use]
pub fn paint(layout: &ChartLayout, style: &ChartStyle) -> String {
    let background = format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        layout.width, layout.height, style.background
    );

    layout
        .bars
        .iter()
        .fold(
            SvgBuilder::new(layout.width, layout.height).push_raw(background),
            |svg, bar| paint_bar(svg, bar, layout.font_size, style),
        )
        .build()
}

fn paint_bar(mut svg: SvgBuilder, bar: &PlacedBar, font_size: f64, style: &ChartStyle) -> SvgBuilder {
    if bar.is_visible() {
        svg = svg.push_element(&Bar {
            x: bar.x,
            y: bar.y,
            width: bar.width,
            height: bar.height,
            color: style.bar,
        });
    }

    if !bar.label.is_empty() {
        svg = svg.push_element(&Label {
            x: bar.label_x,
            y: bar.label_y,
            text: bar.label.clone(),
            color: style.label,
            font_family: style.font_family.clone(),
            font_size,
        });
    }

    svg
}

#[cfg(test)]
#[path = "svg_tests.rs"]
mod tests;
