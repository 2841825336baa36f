// Stopword filtering.
//
// English stop words are the NLTK list from the `stop-words` crate (built
// with its `nltk` feature), not the much larger ISO list: skill words like
// "web" and "system" must survive filtering. On top of that list we
// drop punctuation tokens and the possessive/contraction suffixes the
// tokenizer splits off, since none of them say anything about a person's
// skills or a company's stack.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Tokenizer output that is never a useful feature.
const PUNCTUATION_STOPWORDS: &[&str] = &[",", ".", "(", ")", ":", "'s", "n't", "'nt"];

/// A fixed stopword set.
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// English stop words plus the punctuation supplement.
    pub fn english() -> Self {
        let words: Vec<String> = get(LANGUAGE::English);
        Self::from_words(words)
    }

    /// Build a stopword set from an explicit word list. The punctuation
    /// supplement is always included.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(Into::into)
            .chain(PUNCTUATION_STOPWORDS.iter().map(|s| s.to_string()))
            .collect();
        Self { words }
    }

    /// Whether a (normalized) token should be discarded.
    ///
    /// Tokens with no letters or digits at all ("--", "...", "!") are
    /// treated as punctuation and dropped too.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token) || !token.chars().any(char::is_alphanumeric)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_drops_common_words() {
        let sw = Stopwords::english();
        assert!(sw.contains("the"));
        assert!(sw.contains("and"));
        assert!(!sw.contains("python"));
    }

    #[test]
    fn test_english_is_the_short_nltk_list() {
        let sw = Stopwords::english();
        for word in ["web", "computer", "research", "system", "test"] {
            assert!(!sw.contains(word), "{word} should not be a stopword");
        }
        assert!(sw.len() < 400, "expected the ~180 word NLTK list, got {}", sw.len());
    }

    #[test]
    fn test_punctuation_supplement() {
        let sw = Stopwords::from_words(Vec::<String>::new());
        for token in [",", ".", "(", ")", ":", "'s", "n't"] {
            assert!(sw.contains(token), "{token} should be a stopword");
        }
        assert!(sw.len() >= PUNCTUATION_STOPWORDS.len());
    }

    #[test]
    fn test_symbol_only_tokens_dropped() {
        let sw = Stopwords::from_words(["the"]);
        assert!(sw.contains("--"));
        assert!(sw.contains("..."));
        assert!(sw.contains(""));
        assert!(!sw.contains("c++"));
    }
}
