//! Case conversion helpers for the rename pipeline
//!
//! These intentionally operate on whole strings rather than word
//! boundaries detected by a case-conversion crate: sentence case touches
//! only the first character of the entire base, and title case splits on
//! single spaces only (the pipeline has already collapsed whitespace by
//! the time case conversion runs).

/// Uppercase the first character, lowercase everything after it
#[must_use]
pub fn sentence(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Sentence-case each space-delimited word, rejoined with single spaces
#[must_use]
pub fn title(s: &str) -> String {
    s.split(' ').map(sentence).collect::<Vec<_>>().join(" ")
}
