// Set-similarity coefficients over binary feature vectors.
//
// The default is the Jaccard coefficient:
//
//   |a AND b| / |a OR b|
//
// which gives 0.0 for no shared features and 1.0 for identical vectors. Two
// all-zero vectors share nothing, so they score 0.0 rather than 0/0.
//
// Dice weighs shared features more heavily:
//
//   2 * |a AND b| / (|a| + |b|)
//
// Both are symmetric and stay within [0, 1].

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Error};
use serde::{Deserialize, Serialize};

use crate::features::extractor::FeatureVector;

/// Pluggable pairwise score between two feature vectors of equal length.
///
/// Any `Fn(&FeatureVector, &FeatureVector) -> f64` closure is a `Distance`,
/// so custom scoring can be dropped in without a new type.
pub trait Distance {
    fn score(&self, a: &FeatureVector, b: &FeatureVector) -> f64;
}

impl<F> Distance for F
where
    F: Fn(&FeatureVector, &FeatureVector) -> f64,
{
    fn score(&self, a: &FeatureVector, b: &FeatureVector) -> f64 {
        self(a, b)
    }
}

pub fn jaccard(a: &FeatureVector, b: &FeatureVector) -> f64 {
    let union = a.union(b);
    if union == 0 {
        return 0.0;
    }
    a.intersection(b) as f64 / union as f64
}

pub fn dice(a: &FeatureVector, b: &FeatureVector) -> f64 {
    let total = a.ones() + b.ones();
    if total == 0 {
        return 0.0;
    }
    2.0 * a.intersection(b) as f64 / total as f64
}

/// Built-in metrics selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Jaccard,
    Dice,
}

impl Distance for Metric {
    fn score(&self, a: &FeatureVector, b: &FeatureVector) -> f64 {
        match self {
            Metric::Jaccard => jaccard(a, b),
            Metric::Dice => dice(a, b),
        }
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jaccard" => Ok(Metric::Jaccard),
            "dice" => Ok(Metric::Dice),
            other => bail!("Unknown metric '{other}' (expected 'jaccard' or 'dice')"),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Jaccard => f.write_str("jaccard"),
            Metric::Dice => f.write_str("dice"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(bits: &[u8]) -> FeatureVector {
        FeatureVector::from_bits(bits.iter().copied())
    }

    #[test]
    fn test_identical_vectors() {
        let a = v(&[1, 0, 1, 1]);
        assert!((jaccard(&a, &a) - 1.0).abs() < 1e-9);
        assert!((dice(&a, &a) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_overlap() {
        let a = v(&[1, 1, 0, 0]);
        let b = v(&[0, 0, 1, 1]);
        assert_eq!(jaccard(&a, &b), 0.0);
        assert_eq!(dice(&a, &b), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        let a = v(&[1, 1, 1, 0]);
        let b = v(&[0, 1, 1, 1]);
        // 2 shared out of 4 set anywhere
        assert!((jaccard(&a, &b) - 0.5).abs() < 1e-9);
        // 2 * 2 / (3 + 3)
        assert!((dice(&a, &b) - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_vectors_score_zero() {
        let z = v(&[0, 0, 0]);
        assert_eq!(jaccard(&z, &z), 0.0);
        assert_eq!(dice(&z, &z), 0.0);
    }

    #[test]
    fn test_metric_parsing() {
        assert_eq!("Jaccard".parse::<Metric>().unwrap(), Metric::Jaccard);
        assert_eq!(" dice ".parse::<Metric>().unwrap(), Metric::Dice);
        assert!("cosine".parse::<Metric>().is_err());
        assert_eq!(Metric::default().to_string(), "jaccard");
    }

    #[test]
    fn test_closure_is_a_distance() {
        let always_half = |_: &FeatureVector, _: &FeatureVector| 0.5;
        let a = v(&[1]);
        assert_eq!(always_half.score(&a, &a), 0.5);
    }
}
