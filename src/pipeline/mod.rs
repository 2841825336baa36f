// Matching pipeline: vocabulary, then features, then the score matrix.
//
// One linear pass per run. The vocabulary is built from both sides together
// and shared by reference for every feature extraction in the run.

use anyhow::Result;
use tracing::info;

use crate::config::MatchConfig;
use crate::features::extractor::FeatureExtractor;
use crate::features::vocabulary::Vocabulary;
use crate::ranking::engine::{Ranker, ScoreMatrix};
use crate::records::Record;
use crate::text::TextNormalizer;

/// Build the vocabulary shared by both sides of a run.
pub fn shared_vocabulary(
    base: &[Record],
    matches: &[Record],
    config: &MatchConfig,
    normalizer: &TextNormalizer,
) -> Vocabulary {
    Vocabulary::build(&[base, matches], &config.bow_fields, normalizer)
}

/// Score every match-side record against every base-side record.
pub fn run(base: &[Record], matches: &[Record], config: &MatchConfig) -> Result<ScoreMatrix> {
    config.validate()?;

    let normalizer = TextNormalizer::new()?;
    let vocabulary = shared_vocabulary(base, matches, config, &normalizer);

    info!(
        base = base.len(),
        matches = matches.len(),
        vocabulary = vocabulary.len(),
        metric = %config.metric,
        "Ranking"
    );

    let extractor = FeatureExtractor::new(&vocabulary, &config.bow_fields, &normalizer)
        .with_threshold(config.completeness_threshold);
    let ranker = Ranker::new(extractor, &config.base_name_field, &config.match_name_field)
        .with_duplicate_policy(config.duplicate_policy);

    ranker.rank(base, matches, &config.metric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_rejects_empty_fields() {
        let config = MatchConfig {
            bow_fields: vec![],
            ..MatchConfig::default()
        };
        assert!(run(&[], &[], &config).is_err());
    }

    #[test]
    fn test_run_with_no_records_is_empty() {
        let matrix = run(&[], &[], &MatchConfig::default()).unwrap();
        assert!(matrix.is_empty());
    }
}
