use indexmap::IndexMap;

use super::{Record, SummaryRow, SummaryTable};

#[derive(Debug, Default, Clone, Copy)]
struct GroupTally {
    paragraphs: usize,
    words: usize,
}

/// Count whitespace-delimited tokens. Any run of Unicode whitespace is one
/// delimiter; punctuation stays attached to its word.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Group records by label and tally paragraphs and words per group.
///
/// Rows come out in order of each label's first appearance. Summing per-text
/// token counts equals counting tokens of the texts joined by single spaces,
/// since the joining space is itself a delimiter.
#[must_use]
pub fn summarize_records<'a, I>(records: I) -> SummaryTable
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut groups: IndexMap<&'a str, GroupTally> = IndexMap::new();

    for record in records {
        let tally = groups.entry(record.label.as_str()).or_default();
        tally.paragraphs += 1;
        tally.words += count_words(&record.text);
    }

    let rows = groups
        .into_iter()
        .map(|(label, tally)| SummaryRow {
            label: label.to_string(),
            paragraphs: tally.paragraphs,
            total_words: tally.words,
        })
        .collect();

    SummaryTable::new(rows)
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
