use tracing::{debug, info};

use crate::chart;
use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::summary;
use crate::{EXIT_SUCCESS, Result};

#[must_use]
pub fn run_report(cli: &Cli) -> i32 {
    match run_report_impl(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            debug!(kind = e.error_type(), code = e.exit_code(), "report failed");
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

/// Summarize the input file, print the table and render the chart.
///
/// # Errors
/// Returns an error if the configuration, the input file or the output image fails.
pub fn run_report_impl(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let max_words = cli.max_words.unwrap_or(config.chart.max_words);
    debug!(max_words, "resolved chart settings");

    let table = summary::summarize(&cli.filename, &config.input)?;

    if !cli.quiet {
        let formatted = cli.format.formatter().format(&table)?;
        print!("{formatted}");
        if !formatted.ends_with('\n') {
            println!();
        }
    }

    chart::render(&table, max_words, &cli.output_path, &config.chart)?;
    info!("done");
    Ok(())
}

/// Resolve the run's configuration from CLI flags.
///
/// # Errors
/// Returns an error if an explicit or discovered config file is invalid.
pub fn load_config(cli: &Cli) -> Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    match &cli.config {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
