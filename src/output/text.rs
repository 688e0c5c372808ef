use std::io::Write;

use crate::error::Result;
use crate::summary::SummaryTable;

use super::SummaryFormatter;

const LABEL_HEADER: &str = "GroupName";
const PARAGRAPHS_HEADER: &str = "Paragraphs";
const WORDS_HEADER: &str = "Total_Word_Count";

/// Plain aligned table, one line per group and a closing totals line.
pub struct TextFormatter;

impl SummaryFormatter for TextFormatter {
    fn format(&self, table: &SummaryTable) -> Result<String> {
        let mut output = Vec::new();

        let label_width = table
            .rows()
            .iter()
            .map(|r| r.label.chars().count())
            .chain(std::iter::once(LABEL_HEADER.len()))
            .max()
            .unwrap_or(LABEL_HEADER.len());
        let para_width = PARAGRAPHS_HEADER.len();
        let words_width = WORDS_HEADER.len();

        writeln!(
            output,
            "{LABEL_HEADER:<label_width$}  {PARAGRAPHS_HEADER:>para_width$}  {WORDS_HEADER:>words_width$}"
        )?;

        for row in table {
            // Labels may hold newlines from quoted CSV fields; keep one row per line
            let label = row.label.replace(['\r', '\n'], " ");
            writeln!(
                output,
                "{label:<label_width$}  {:>para_width$}  {:>words_width$}",
                row.paragraphs, row.total_words
            )?;
        }

        writeln!(output)?;
        writeln!(
            output,
            "{} groups, {} paragraphs, {} words",
            table.len(),
            table.total_paragraphs(),
            table.total_words()
        )?;

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
