use std::env;
use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::features::extractor::DEFAULT_COMPLETENESS_THRESHOLD;
use crate::ranking::distance::Metric;
use crate::ranking::engine::DuplicatePolicy;

/// Text fields that feed the vocabulary and the feature vectors.
pub const DEFAULT_BOW_FIELDS: [&str; 4] = ["Environment", "Project", "Skills", "Misc"];

/// Name field of the startup CSV.
pub const COMPANY_FIELD: &str = "Company";

/// Name field of the student CSV.
pub const STUDENT_NAME_FIELD: &str = "Student Name";

pub const DEFAULT_NUM_MATCHES: usize = 15;

/// Everything one matching run needs, passed explicitly into the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    /// Bag-of-words fields read from every record
    pub bow_fields: Vec<String>,
    /// A record needs more than this many vocabulary terms to be compared
    pub completeness_threshold: usize,
    /// How many candidates to report per record
    pub num_matches: usize,
    pub metric: Metric,
    /// Name field on the base side (the candidates in the report)
    pub base_name_field: String,
    /// Name field on the match side (the report headings)
    pub match_name_field: String,
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            bow_fields: DEFAULT_BOW_FIELDS.iter().map(|f| f.to_string()).collect(),
            completeness_threshold: DEFAULT_COMPLETENESS_THRESHOLD,
            num_matches: DEFAULT_NUM_MATCHES,
            metric: Metric::default(),
            base_name_field: COMPANY_FIELD.to_string(),
            match_name_field: STUDENT_NAME_FIELD.to_string(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl MatchConfig {
    /// Defaults, overridden by any HACKMATCH_* environment variables.
    ///
    /// Unset variables keep the default; set but unparseable ones are errors.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(n) = env_parse("HACKMATCH_NUM_MATCHES")? {
            config.num_matches = n;
        }
        if let Some(threshold) = env_parse("HACKMATCH_THRESHOLD")? {
            config.completeness_threshold = threshold;
        }
        if let Some(metric) = env_parse("HACKMATCH_METRIC")? {
            config.metric = metric;
        }
        if let Some(policy) = env_parse("HACKMATCH_DUPLICATES")? {
            config.duplicate_policy = policy;
        }
        if let Ok(fields) = env::var("HACKMATCH_BOW_FIELDS") {
            config.bow_fields = parse_field_list(&fields);
        }

        Ok(config)
    }

    /// Swap orientation: students become the candidates, startups the headings.
    pub fn reversed(mut self) -> Self {
        std::mem::swap(&mut self.base_name_field, &mut self.match_name_field);
        self
    }

    /// Check the config can produce a meaningful run.
    pub fn validate(&self) -> Result<()> {
        if self.bow_fields.is_empty() {
            anyhow::bail!("No bag-of-words fields configured: nothing to match on");
        }
        if self.base_name_field.is_empty() || self.match_name_field.is_empty() {
            anyhow::bail!("Name fields must not be empty");
        }
        Ok(())
    }
}

/// Split a comma-separated field list, dropping blanks.
pub fn parse_field_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}

fn env_parse<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("Invalid value for {name}: {raw:?}")),
        Err(_) => Ok(None),
    }
}
