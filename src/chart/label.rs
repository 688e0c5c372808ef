/// Shorten a group label to its first `max_words` whitespace-delimited words.
///
/// Labels with at most `max_words` words are returned exactly as given.
/// Longer labels keep the first `max_words` words joined by single spaces.
/// `max_words == 0` keeps zero words, so the result is empty.
#[must_use]
pub fn truncate_label(label: &str, max_words: usize) -> String {
    if max_words == 0 {
        return String::new();
    }

    let words: Vec<&str> = label
        .split_whitespace()
        .take(max_words.saturating_add(1))
        .collect();

    if words.len() <= max_words {
        label.to_string()
    } else {
        words[..max_words].join(" ")
    }
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;
