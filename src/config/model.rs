use serde::{Deserialize, Serialize};

use crate::error::{Result, WordTallyError};

/// Default number of label words kept on the chart axis.
pub const DEFAULT_MAX_WORDS: usize = 8;

/// Viridian-like bar color.
pub const DEFAULT_BAR_COLOR: &str = "#40826D";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub chart: ChartConfig,
}

/// Where the label and text live in the input table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Column holding the group label.
    #[serde(default = "default_label_column")]
    pub label_column: String,

    /// Column holding the free-form text whose words are counted.
    #[serde(default = "default_text_column")]
    pub text_column: String,

    /// Single-byte field delimiter.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            label_column: default_label_column(),
            text_column: default_text_column(),
            delimiter: default_delimiter(),
        }
    }
}

impl InputConfig {
    /// The delimiter as the byte the CSV reader expects.
    ///
    /// # Errors
    /// Returns an error if the delimiter is not a single ASCII character.
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                WordTallyError::Config(format!(
                    "input.delimiter must be a single ASCII character, got '{}'",
                    self.delimiter
                ))
            })
    }
}

/// Chart appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
    /// Words kept per display label (CLI `--max_words` wins).
    #[serde(default = "default_max_words")]
    pub max_words: usize,

    /// Canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default = "default_bar_color")]
    pub bar_color: String,

    #[serde(default = "default_background")]
    pub background: String,

    #[serde(default = "default_label_color")]
    pub label_color: String,

    /// Fraction of each row slot covered by its bar.
    #[serde(default = "default_bar_fill")]
    pub bar_fill: f64,

    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Label font size in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            max_words: default_max_words(),
            width: default_width(),
            height: default_height(),
            bar_color: default_bar_color(),
            background: default_background(),
            label_color: default_label_color(),
            bar_fill: default_bar_fill(),
            font_family: default_font_family(),
            font_size: default_font_size(),
        }
    }
}

impl Config {
    /// Check semantic constraints serde cannot express.
    ///
    /// # Errors
    /// Returns a `Config` error describing the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        let input = &self.input;
        if input.label_column.trim().is_empty() || input.text_column.trim().is_empty() {
            return Err(WordTallyError::Config(
                "input column names must not be empty".to_string(),
            ));
        }
        if input.label_column == input.text_column {
            return Err(WordTallyError::Config(format!(
                "input.label_column and input.text_column must differ (both '{}')",
                input.label_column
            )));
        }
        input.delimiter_byte()?;

        let chart = &self.chart;
        if chart.width == 0 || chart.height == 0 {
            return Err(WordTallyError::Config(format!(
                "chart size must be positive, got {}x{}",
                chart.width, chart.height
            )));
        }
        if !(chart.bar_fill > 0.0 && chart.bar_fill <= 1.0) {
            return Err(WordTallyError::Config(format!(
                "chart.bar_fill must be in (0, 1], got {}",
                chart.bar_fill
            )));
        }
        if chart.font_size == 0 {
            return Err(WordTallyError::Config(
                "chart.font_size must be positive".to_string(),
            ));
        }
        for (key, value) in [
            ("bar_color", &chart.bar_color),
            ("background", &chart.background),
            ("label_color", &chart.label_color),
        ] {
            if crate::chart::Rgb::parse_hex(value).is_none() {
                return Err(WordTallyError::Config(format!(
                    "chart.{key} must be a #RRGGBB color, got '{value}'"
                )));
            }
        }
        Ok(())
    }
}

fn default_label_column() -> String {
    "GroupName".to_string()
}

fn default_text_column() -> String {
    "Text".to_string()
}

const fn default_delimiter() -> char {
    ','
}

const fn default_max_words() -> usize {
    DEFAULT_MAX_WORDS
}

const fn default_width() -> u32 {
    1000
}

const fn default_height() -> u32 {
    800
}

fn default_bar_color() -> String {
    DEFAULT_BAR_COLOR.to_string()
}

fn default_background() -> String {
    "#FFFFFF".to_string()
}

fn default_label_color() -> String {
    "#000000".to_string()
}

const fn default_bar_fill() -> f64 {
    0.8
}

fn default_font_family() -> String {
    "sans-serif".to_string()
}

const fn default_font_size() -> u32 {
    14
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
