// Global bag-of-words vocabulary.
//
// Every bag-of-words field of every record on both sides is tokenized,
// normalized and stopword-filtered, and the surviving terms are counted
// globally. Terms seen only once are pruned: they cannot be shared between a
// student and a startup, so they would only widen the feature vectors.

use std::collections::BTreeMap;

use tracing::debug;

use crate::records::Record;
use crate::text::TextNormalizer;

/// Term -> global occurrence count, restricted to terms seen at least twice.
///
/// Iteration is in lexicographic term order, which is also the index order of
/// every feature vector built against this vocabulary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    counts: BTreeMap<String, u32>,
}

impl Vocabulary {
    /// Build the shared vocabulary from any number of record collections.
    pub fn build(
        collections: &[&[Record]],
        fields: &[String],
        normalizer: &TextNormalizer,
    ) -> Self {
        let mut counts = collections
            .iter()
            .flat_map(|records| records.iter())
            .flat_map(|record| fields.iter().map(move |field| record.get(field)))
            .flat_map(|text| normalizer.terms(text))
            .fold(BTreeMap::new(), |mut counts, term| {
                *counts.entry(term).or_insert(0u32) += 1;
                counts
            });

        let seen = counts.len();
        counts.retain(|_, count| *count > 1);

        debug!(
            distinct_terms = seen,
            vocabulary = counts.len(),
            "Built global vocabulary"
        );

        Self { counts }
    }

    /// Build directly from term counts. Singletons are still pruned.
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let counts = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(term, count)| (term.into(), count))
            .collect();
        Self { counts }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, term: &str) -> Option<u32> {
        self.counts.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Terms in feature-index order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// (term, count) pairs in feature-index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(term, count)| (term.as_str(), *count))
    }
}

/// Free-function form of [`Vocabulary::build`].
pub fn build_vocabulary(
    collections: &[&[Record]],
    fields: &[String],
    normalizer: &TextNormalizer,
) -> Vocabulary {
    Vocabulary::build(collections, fields, normalizer)
}
