// Treebank-style English word tokenizer.
//
// Works the way the Penn Treebank tokenizer does: pad the text with spaces,
// run an ordered list of regex substitutions that push punctuation and
// contraction suffixes away from the words they are attached to, then split
// on whitespace. Periods stay attached inside tokens ("node.js", "e.g")
// and only sentence-final periods become their own token.

use anyhow::{Context, Result};
use regex_lite::Regex;

/// Ordered (pattern, replacement) rules. Order matters: contraction rules
/// rely on the trailing space the earlier rules leave behind.
const RULES: &[(&str, &str)] = &[
    // Double quotes become standalone tokens
    (r#"""#, r#" " "#),
    // Colons and commas, except inside numbers like 1,000 or 10:30
    (r"([:,])([^\d])", " $1 $2"),
    (r"([:,])$", " $1 "),
    // Ellipsis
    (r"\.\.\.", " ... "),
    (r"[;@$%&]", " $0 "),
    // Sentence-final period at the very end of the text
    (r#"([^\.])(\.)([\]\)}>"']*)\s*$"#, "$1 $2$3 "),
    // Sentence-final period followed by the start of another sentence
    (r"([^\.\s])\.(\s+[A-Z])", "$1 .$2"),
    (r"[?!]", " $0 "),
    (r"([^'])' ", "$1 ' "),
    // Brackets
    (r"[\]\[\(\)\{\}<>]", " $0 "),
    (r"--", " -- "),
    // Possessives and contractions
    (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "$1 $2 "),
    (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "$1 $2 "),
];

/// General-purpose English word tokenizer.
///
/// Construct once and reuse; the rules are compiled up front.
pub struct WordTokenizer {
    rules: Vec<(Regex, &'static str)>,
}

impl WordTokenizer {
    pub fn new() -> Result<Self> {
        let rules = RULES
            .iter()
            .map(|(pattern, replacement)| {
                let re = Regex::new(pattern)
                    .with_context(|| format!("Invalid tokenizer rule: {pattern}"))?;
                Ok((re, *replacement))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Split text into raw (un-normalized) word tokens.
    ///
    /// A missing value yields no tokens rather than an error.
    pub fn tokenize(&self, text: Option<&str>) -> Vec<String> {
        let Some(text) = text else {
            return Vec::new();
        };

        let mut padded = format!(" {text} ");
        for (re, replacement) in &self.rules {
            padded = re.replace_all(&padded, *replacement).into_owned();
        }

        padded.split_whitespace().map(str::to_string).collect()
    }
}
