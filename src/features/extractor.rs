// Binary feature vectors over the shared vocabulary.
//
// A record's vector has one slot per vocabulary term: 1 when the term occurs
// in any of the record's bag-of-words fields, 0 otherwise. Records that light
// up too few slots fail the completeness gate and get no vector at all.

use std::collections::HashSet;

use crate::records::Record;
use crate::text::TextNormalizer;

use super::vocabulary::Vocabulary;

/// Records need more than this many vocabulary terms to be compared.
pub const DEFAULT_COMPLETENESS_THRESHOLD: usize = 4;

/// Presence vector over a vocabulary; every entry is 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector {
    bits: Vec<u8>,
}

impl FeatureVector {
    /// Any non-zero input is stored as 1.
    pub fn from_bits(bits: impl IntoIterator<Item = u8>) -> Self {
        Self {
            bits: bits.into_iter().map(|b| u8::from(b != 0)).collect(),
        }
    }

    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of set features.
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }

    /// Positions set in both vectors.
    pub fn intersection(&self, other: &FeatureVector) -> usize {
        debug_assert_eq!(self.len(), other.len());
        self.bits
            .iter()
            .zip(&other.bits)
            .filter(|(a, b)| **a == 1 && **b == 1)
            .count()
    }

    /// Positions set in at least one vector.
    pub fn union(&self, other: &FeatureVector) -> usize {
        debug_assert_eq!(self.len(), other.len());
        self.bits
            .iter()
            .zip(&other.bits)
            .filter(|(a, b)| **a == 1 || **b == 1)
            .count()
    }
}

/// Projects records onto one vocabulary with one set of fields.
///
/// Holding the vocabulary by reference guarantees that every vector produced
/// by the same extractor shares the same dimensionality and index order.
pub struct FeatureExtractor<'a> {
    vocabulary: &'a Vocabulary,
    fields: &'a [String],
    normalizer: &'a TextNormalizer,
    completeness_threshold: usize,
}

impl<'a> FeatureExtractor<'a> {
    pub fn new(
        vocabulary: &'a Vocabulary,
        fields: &'a [String],
        normalizer: &'a TextNormalizer,
    ) -> Self {
        Self {
            vocabulary,
            fields,
            normalizer,
            completeness_threshold: DEFAULT_COMPLETENESS_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, completeness_threshold: usize) -> Self {
        self.completeness_threshold = completeness_threshold;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.vocabulary
    }

    /// Build a record's feature vector, or `None` if it fails the
    /// completeness gate.
    ///
    /// Tokens go through the same normalization as the vocabulary but are
    /// not stopword-filtered; stopwords can't match anyway since the
    /// vocabulary has none.
    pub fn extract(&self, record: &Record) -> Option<FeatureVector> {
        let tokens: HashSet<String> = self
            .fields
            .iter()
            .flat_map(|field| self.normalizer.normalized_tokens(record.get(field)))
            .collect();

        let features = FeatureVector::from_bits(
            self.vocabulary
                .terms()
                .map(|term| u8::from(tokens.contains(term))),
        );

        if features.ones() <= self.completeness_threshold {
            return None;
        }
        Some(features)
    }
}

/// Free-function form of [`FeatureExtractor::extract`].
pub fn extract_features(
    record: &Record,
    vocabulary: &Vocabulary,
    fields: &[String],
    normalizer: &TextNormalizer,
    completeness_threshold: usize,
) -> Option<FeatureVector> {
    FeatureExtractor::new(vocabulary, fields, normalizer)
        .with_threshold(completeness_threshold)
        .extract(record)
}
