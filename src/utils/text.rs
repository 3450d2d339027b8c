/// Number of whitespace-separated words in `text`.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// The first `limit` whitespace-separated words of `text`, rejoined with
/// single spaces.
#[must_use]
pub fn truncate_words(text: &str, limit: usize) -> String {
    text.split_whitespace()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_splits_on_any_whitespace() {
        assert_eq!(word_count("one two\tthree\nfour"), 4);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_truncate_words_keeps_the_first_n() {
        assert_eq!(truncate_words("a b c d e", 3), "a b c");
    }

    #[test]
    fn test_truncate_words_normalizes_separators() {
        assert_eq!(truncate_words("a  b\tc", 5), "a b c");
    }

    #[test]
    fn test_truncate_words_with_short_input() {
        assert_eq!(truncate_words("a b", 1000), "a b");
    }
}
