use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "wordtally")]
#[command(
    author,
    version,
    about = "Summarize word counts per group in a CSV file and plot them as a bar chart"
)]
#[command(long_about = "Reads a CSV file with GroupName and Text columns, counts paragraphs \
    and words per group, prints the summary table and saves a horizontal bar chart.\n\n\
    Exit codes:\n  \
    0 - Chart written\n  \
    1 - Input file missing, empty or malformed\n  \
    2 - Chart could not be rendered or saved\n  \
    3 - Configuration or runtime error")]
pub struct Cli {
    /// Path to the CSV file
    pub filename: PathBuf,

    /// Maximum number of words from each group name shown on the chart [default: 8]
    #[arg(long = "max_words", visible_alias = "max-words", value_name = "N")]
    pub max_words: Option<usize>,

    /// Path of the image to write (.png, .bmp, .jpg, .jpeg or .svg)
    pub output_path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Summary table format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the summary table and warnings
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Diagnostic level selected by `--quiet` and `-v` flags.
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
