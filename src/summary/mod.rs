//! Grouping and word tallies for labelled text records.

mod aggregate;
mod record;

use std::path::Path;

use tracing::info;

pub use aggregate::{count_words, summarize_records};
pub use record::{Record, load_records};

use crate::config::InputConfig;
use crate::error::Result;

/// Per-group tally: how many records carry the label and how many words they hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: String,
    pub paragraphs: usize,
    pub total_words: usize,
}

impl SummaryRow {
    #[must_use]
    pub fn new(label: impl Into<String>, paragraphs: usize, total_words: usize) -> Self {
        Self {
            label: label.into(),
            paragraphs,
            total_words,
        }
    }
}

/// Summary rows ordered by each label's first appearance in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryTable {
    rows: Vec<SummaryRow>,
}

impl SummaryTable {
    #[must_use]
    pub const fn new(rows: Vec<SummaryRow>) -> Self {
        Self { rows }
    }

    /// Rows in first-appearance order.
    #[must_use]
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn total_paragraphs(&self) -> usize {
        self.rows.iter().map(|r| r.paragraphs).sum()
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.rows.iter().map(|r| r.total_words).sum()
    }
}

impl<'a> IntoIterator for &'a SummaryTable {
    type Item = &'a SummaryRow;
    type IntoIter = std::slice::Iter<'a, SummaryRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Load a delimited file and summarize it by group label.
///
/// # Errors
/// Returns an `InputError` if the file cannot be read, is empty, or lacks the
/// configured label or text column.
pub fn summarize(source: &Path, input: &InputConfig) -> Result<SummaryTable> {
    let records = load_records(source, input)?;
    let table = summarize_records(&records);

    info!(
        records = records.len(),
        groups = table.len(),
        words = table.total_words(),
        "summarized {}",
        source.display()
    );

    Ok(table)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
