mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::error::Result;
use crate::summary::SummaryTable;

/// Trait for formatting a summary table for stdout.
pub trait SummaryFormatter {
    /// Format the summary table into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, table: &SummaryTable) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn SummaryFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
