// Ranking engine: the dense all-pairs score matrix.
//
// Every base record is vectorized once and cached by its name. Every match
// record is then vectorized and scored against every cached base vector.
// Pairs where either side failed the completeness gate score 0.0 without
// calling the distance function. No pruning: both sides are small.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::features::extractor::{FeatureExtractor, FeatureVector};
use crate::records::Record;

use super::distance::Distance;

/// match name -> (base name -> score).
pub type ScoreMatrix = BTreeMap<String, BTreeMap<String, f64>>;

/// What to do when two records on the same side share a name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Later records replace earlier ones; each collision is logged.
    #[default]
    LastWins,
    /// Fail the run on the first collision.
    Reject,
}

impl FromStr for DuplicatePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-wins" => Ok(DuplicatePolicy::LastWins),
            "reject" => Ok(DuplicatePolicy::Reject),
            other => bail!("Unknown duplicate policy '{other}' (expected 'last-wins' or 'reject')"),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::LastWins => f.write_str("last-wins"),
            DuplicatePolicy::Reject => f.write_str("reject"),
        }
    }
}

/// Scores one record collection (match side) against another (base side).
pub struct Ranker<'a> {
    extractor: FeatureExtractor<'a>,
    base_key_field: &'a str,
    match_key_field: &'a str,
    duplicate_policy: DuplicatePolicy,
}

impl<'a> Ranker<'a> {
    pub fn new(
        extractor: FeatureExtractor<'a>,
        base_key_field: &'a str,
        match_key_field: &'a str,
    ) -> Self {
        Self {
            extractor,
            base_key_field,
            match_key_field,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    pub fn with_duplicate_policy(mut self, duplicate_policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = duplicate_policy;
        self
    }

    /// Compute the score of every (match, base) pair.
    ///
    /// Errors if a record has no value for its side's name field, or if a
    /// name repeats under `DuplicatePolicy::Reject`.
    pub fn rank(
        &self,
        base: &[Record],
        matches: &[Record],
        distance: &dyn Distance,
    ) -> Result<ScoreMatrix> {
        let mut base_vectors: BTreeMap<&str, Option<FeatureVector>> = BTreeMap::new();
        for (index, record) in base.iter().enumerate() {
            let key = record_key(record, self.base_key_field, index)?;
            let features = self.extractor.extract(record);
            if features.is_none() {
                debug!(record = key, "Base record below completeness threshold");
            }
            if base_vectors.insert(key, features).is_some() {
                self.on_duplicate("base", key)?;
            }
        }

        let mut matrix = ScoreMatrix::new();
        for (index, record) in matches.iter().enumerate() {
            let key = record_key(record, self.match_key_field, index)?;
            let features = self.extractor.extract(record);
            if features.is_none() {
                debug!(record = key, "Match record below completeness threshold");
            }

            let row: BTreeMap<String, f64> = base_vectors
                .iter()
                .map(|(&base_key, base_features)| {
                    let score = match (base_features, &features) {
                        (Some(b), Some(m)) => distance.score(b, m),
                        _ => 0.0,
                    };
                    trace!(record = key, candidate = base_key, score, "Scored pair");
                    (base_key.to_string(), score)
                })
                .collect();

            if matrix.insert(key.to_string(), row).is_some() {
                self.on_duplicate("match", key)?;
            }
        }

        info!(
            base = base_vectors.len(),
            matches = matrix.len(),
            vocabulary = self.extractor.vocabulary().len(),
            "Computed score matrix"
        );

        Ok(matrix)
    }

    fn on_duplicate(&self, side: &str, key: &str) -> Result<()> {
        match self.duplicate_policy {
            DuplicatePolicy::LastWins => {
                warn!(side, key, "Duplicate record name, keeping the later record");
                Ok(())
            }
            DuplicatePolicy::Reject => bail!("Duplicate {side} record name '{key}'"),
        }
    }
}

fn record_key<'r>(record: &'r Record, field: &str, index: usize) -> Result<&'r str> {
    record
        .get(field)
        .with_context(|| format!("Record {} has no '{field}' value", index + 1))
}
