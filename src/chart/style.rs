//! Chart styling primitives: colors and resolved drawing style.

use std::fmt;

use crate::config::ChartConfig;
use crate::error::{Result, WordTallyError};

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (case-insensitive). Returns `None` for anything else.
    #[must_use]
    pub fn parse_hex(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Colors and font family resolved from [`ChartConfig`], shared by every painter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartStyle {
    pub bar: Rgb,
    pub background: Rgb,
    pub label: Rgb,
    pub font_family: String,
}

impl ChartStyle {
    /// # Errors
    /// Returns a `Config` error if a color is not `#RRGGBB`.
    pub fn from_config(config: &ChartConfig) -> Result<Self> {
        let color = |key: &str, value: &str| {
            Rgb::parse_hex(value).ok_or_else(|| {
                WordTallyError::Config(format!("chart.{key} must be a #RRGGBB color, got '{value}'"))
            })
        };

        Ok(Self {
            bar: color("bar_color", &config.bar_color)?,
            background: color("background", &config.background)?,
            label: color("label_color", &config.label_color)?,
            font_family: config.font_family.clone(),
        })
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
