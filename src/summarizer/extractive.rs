use once_cell::sync::Lazy;
use regex::Regex;

// A sentence boundary is closing punctuation immediately followed by
// whitespace. The punctuation stays with its sentence; the whitespace is
// consumed as the separator.
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Condense `text` by keeping its first `num_sentences` sentences.
///
/// The input is trimmed before splitting, and the kept sentences are
/// rejoined with single spaces. If no sentence candidates are found the
/// original input is returned unchanged.
#[must_use]
pub fn extractive_fallback(text: &str, num_sentences: usize) -> String {
    let trimmed = text.trim();

    let mut sentences: Vec<&str> = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(trimmed) {
        // the punctuation character is ASCII, so +1 lands on a char boundary
        sentences.push(&trimmed[start..=boundary.start()]);
        start = boundary.end();
    }
    if start < trimmed.len() {
        sentences.push(&trimmed[start..]);
    }

    if sentences.is_empty() {
        return text.to_string();
    }

    sentences
        .into_iter()
        .take(num_sentences)
        .collect::<Vec<_>>()
        .join(" ")
}
