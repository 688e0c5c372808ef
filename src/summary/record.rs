use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::config::InputConfig;
use crate::error::{InputError, Result};

/// One input row: the group label and the text whose words are counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub label: String,
    pub text: String,
}

impl Record {
    #[must_use]
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Read every row of a delimited file into memory, in file order.
///
/// The first row is the header; columns other than the configured label and
/// text columns are ignored. Rows whose label field is empty carry no group
/// and are skipped.
///
/// # Errors
/// Returns an [`InputError`] if the file cannot be opened, is not well-formed,
/// lacks either required column, or has no data rows.
pub fn load_records(path: &Path, input: &InputConfig) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(input.delimiter_byte()?)
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let csv_error = |source: csv::Error| InputError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = reader.headers().map_err(csv_error)?.clone();
    if headers.is_empty() {
        return Err(InputError::Empty {
            path: path.to_path_buf(),
        }
        .into());
    }

    let column_index = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| InputError::MissingColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            })
    };
    let label_idx = column_index(&input.label_column)?;
    let text_idx = column_index(&input.text_column)?;

    let mut records = Vec::new();
    let mut rows = 0usize;
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        rows += 1;

        let label = row.get(label_idx).unwrap_or_default();
        if label.is_empty() {
            debug!(row = rows, "skipping row without a group label");
            continue;
        }
        let text = row.get(text_idx).unwrap_or_default();
        records.push(Record::new(label, text));
    }

    if rows == 0 {
        return Err(InputError::Empty {
            path: path.to_path_buf(),
        }
        .into());
    }

    Ok(records)
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
