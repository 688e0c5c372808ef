use serde::Serialize;

use crate::error::Result;
use crate::summary::{SummaryRow, SummaryTable};

use super::SummaryFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    groups: Vec<JsonGroup<'a>>,
    totals: JsonTotals,
}

#[derive(Serialize)]
struct JsonGroup<'a> {
    group_name: &'a str,
    paragraphs: usize,
    total_word_count: usize,
}

#[derive(Serialize)]
struct JsonTotals {
    groups: usize,
    paragraphs: usize,
    total_word_count: usize,
}

impl<'a> From<&'a SummaryRow> for JsonGroup<'a> {
    fn from(row: &'a SummaryRow) -> Self {
        Self {
            group_name: &row.label,
            paragraphs: row.paragraphs,
            total_word_count: row.total_words,
        }
    }
}

impl SummaryFormatter for JsonFormatter {
    fn format(&self, table: &SummaryTable) -> Result<String> {
        let output = JsonOutput {
            groups: table.rows().iter().map(JsonGroup::from).collect(),
            totals: JsonTotals {
                groups: table.len(),
                paragraphs: table.total_paragraphs(),
                total_word_count: table.total_words(),
            },
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
