// Text handling: tokenization, normalization, stopword filtering.
//
// Both the vocabulary builder and the feature extractor go through
// `TextNormalizer`, so the two stages always agree on what a token looks like.

pub mod stopwords;
pub mod tokenizer;

use anyhow::Result;

use self::stopwords::Stopwords;
use self::tokenizer::WordTokenizer;

/// Tokenizer + stopword set, with the single shared normalization rule.
pub struct TextNormalizer {
    tokenizer: WordTokenizer,
    stopwords: Stopwords,
}

impl TextNormalizer {
    /// English tokenizer with the default English stopword list.
    pub fn new() -> Result<Self> {
        Ok(Self::with_stopwords(WordTokenizer::new()?, Stopwords::english()))
    }

    pub fn with_stopwords(tokenizer: WordTokenizer, stopwords: Stopwords) -> Self {
        Self {
            tokenizer,
            stopwords,
        }
    }

    /// Raw word tokens, before any normalization.
    pub fn tokenize(&self, text: Option<&str>) -> Vec<String> {
        self.tokenizer.tokenize(text)
    }

    /// Lowercase and strip one trailing period.
    pub fn normalize(token: &str) -> String {
        let lower = token.to_lowercase();
        match lower.strip_suffix('.') {
            Some(stripped) => stripped.to_string(),
            None => lower,
        }
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Normalized tokens with no stopword filtering (feature extraction side).
    pub fn normalized_tokens(&self, text: Option<&str>) -> Vec<String> {
        self.tokenize(text)
            .iter()
            .map(|t| Self::normalize(t))
            .collect()
    }

    /// Normalized, stopword-free terms (vocabulary side).
    pub fn terms(&self, text: Option<&str>) -> Vec<String> {
        self.normalized_tokens(text)
            .into_iter()
            .filter(|t| !self.is_stopword(t))
            .collect()
    }
}
