use std::path::PathBuf;

use thiserror::Error;

use crate::{EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR, EXIT_RENDER_ERROR};

/// Failures while loading or validating the input table.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Input file has no data rows: {path}")]
    Empty { path: PathBuf },

    #[error("Input file {path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: String },
}

/// Failures while drawing or saving the chart.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Nothing to plot: summary table is empty")]
    EmptyTable,

    #[error("Unsupported image format for {path} (expected png, bmp, jpg, jpeg or svg)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Output directory is not writable: {path}")]
    Unwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Drawing failed: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum WordTallyError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl WordTallyError {
    /// Short category name, logged when a run fails.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Input(_) => "Input",
            Self::Render(_) => "Render",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Process exit code for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Input(_) => EXIT_INPUT_ERROR,
            Self::Render(_) => EXIT_RENDER_ERROR,
            Self::Config(_) | Self::Io(_) | Self::TomlParse(_) | Self::JsonSerialize(_) => {
                EXIT_CONFIG_ERROR
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, WordTallyError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
