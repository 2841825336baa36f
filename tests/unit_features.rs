// Unit tests for vocabulary building and feature extraction.
//
// Tests isolated pure functions: Vocabulary::build pruning and stopword
// invariants, extract_features vector shape, and the completeness gate
// boundaries.

use hackmatch::features::extractor::{extract_features, FeatureVector};
use hackmatch::features::vocabulary::{build_vocabulary, Vocabulary};
use hackmatch::records::Record;
use hackmatch::text::stopwords::Stopwords;
use hackmatch::text::tokenizer::WordTokenizer;
use hackmatch::text::TextNormalizer;

fn normalizer() -> TextNormalizer {
    TextNormalizer::new().unwrap()
}

fn skills() -> Vec<String> {
    vec!["Skills".to_string()]
}

fn skill(text: &str) -> Record {
    Record::new().with("Skills", text)
}

// ============================================================
// Vocabulary: pruning and filtering
// ============================================================

#[test]
fn vocabulary_excludes_singletons() {
    let records = vec![skill("rust docker golang"), skill("rust docker haskell")];
    let vocab = build_vocabulary(&[&records], &skills(), &normalizer());
    for term in ["golang", "haskell"] {
        assert!(!vocab.contains(term), "{term} occurs once and must be pruned");
    }
    assert_eq!(vocab.count("rust"), Some(2));
    assert_eq!(vocab.count("docker"), Some(2));
}

#[test]
fn vocabulary_counts_repeats_within_one_record() {
    let records = vec![skill("kotlin kotlin")];
    let vocab = build_vocabulary(&[&records], &skills(), &normalizer());
    assert_eq!(vocab.count("kotlin"), Some(2));
}

#[test]
fn vocabulary_is_case_insensitive() {
    let startups = vec![skill("PostgreSQL")];
    let students = vec![skill("postgresql.")];
    let vocab = build_vocabulary(&[&startups, &students], &skills(), &normalizer());
    assert_eq!(vocab.count("postgresql"), Some(2));
}

#[test]
fn vocabulary_never_contains_stopwords() {
    let sw = Stopwords::from_words(["with", "and"]);
    let normalizer = TextNormalizer::with_stopwords(WordTokenizer::new().unwrap(), sw);
    let records = vec![skill("rust with docker, and more"), skill("rust with docker, and more")];

    let vocab = Vocabulary::build(&[&records], &skills(), &normalizer);
    for term in vocab.terms() {
        assert!(!normalizer.is_stopword(term), "{term} is a stopword");
    }
    assert!(vocab.contains("rust"));
    assert!(vocab.contains("more"));
}

#[test]
fn vocabulary_ignores_unlisted_fields() {
    let records = vec![
        Record::new().with("Company", "Acme").with("Skills", "rust"),
        Record::new().with("Company", "Acme").with("Skills", "rust"),
    ];
    let vocab = build_vocabulary(&[&records], &skills(), &normalizer());
    assert!(!vocab.contains("acme"));
    assert!(vocab.contains("rust"));
}

#[test]
fn vocabulary_order_is_stable() {
    let records = vec![skill("zig rust elixir"), skill("elixir zig rust")];
    let a = build_vocabulary(&[&records], &skills(), &normalizer());
    let b = build_vocabulary(&[&records], &skills(), &normalizer());
    let terms_a: Vec<&str> = a.terms().collect();
    let terms_b: Vec<&str> = b.terms().collect();
    assert_eq!(terms_a, vec!["elixir", "rust", "zig"]);
    assert_eq!(terms_a, terms_b);
}

// ============================================================
// extract_features: shape and completeness gate
// ============================================================

fn five_term_vocab() -> Vocabulary {
    Vocabulary::from_counts([
        ("docker", 2),
        ("golang", 2),
        ("kubernetes", 2),
        ("python", 2),
        ("rust", 2),
        ("terraform", 2),
    ])
}

#[test]
fn vector_length_matches_vocabulary() {
    let vocab = five_term_vocab();
    let record = skill("docker golang kubernetes python rust");
    let features = extract_features(&record, &vocab, &skills(), &normalizer(), 0).unwrap();
    assert_eq!(features.len(), vocab.len());
    assert!(features.bits().iter().all(|&b| b == 0 || b == 1));
}

#[test]
fn gate_sum_equal_to_threshold_is_absent() {
    let vocab = five_term_vocab();
    let record = skill("docker golang kubernetes python");
    assert!(extract_features(&record, &vocab, &skills(), &normalizer(), 4).is_none());
}

#[test]
fn gate_sum_above_threshold_is_present() {
    let vocab = five_term_vocab();
    let record = skill("docker golang kubernetes python rust");
    let features = extract_features(&record, &vocab, &skills(), &normalizer(), 4).unwrap();
    assert_eq!(features.ones(), 5);
}

#[test]
fn missing_fields_give_absent_vector() {
    let vocab = five_term_vocab();
    let record = Record::new().with("Company", "Acme");
    assert!(extract_features(&record, &vocab, &skills(), &normalizer(), 0).is_none());
}

#[test]
fn empty_vocabulary_always_absent() {
    let vocab = Vocabulary::default();
    let record = skill("docker golang");
    assert!(extract_features(&record, &vocab, &skills(), &normalizer(), 0).is_none());
}

#[test]
fn record_tokens_are_normalized_before_matching() {
    let vocab = five_term_vocab();
    let record = skill("Docker. GOLANG, Kubernetes Python Rust");
    let features = extract_features(&record, &vocab, &skills(), &normalizer(), 4).unwrap();
    assert_eq!(features, FeatureVector::from_bits([1, 1, 1, 1, 1, 0]));
}

#[test]
fn tokens_spread_across_fields_are_combined() {
    let vocab = five_term_vocab();
    let fields = vec!["Skills".to_string(), "Project".to_string(), "Misc".to_string()];
    let record = Record::new()
        .with("Skills", "docker golang")
        .with("Project", "kubernetes operator")
        .with("Misc", "python and terraform");
    let features = extract_features(&record, &vocab, &fields, &normalizer(), 4).unwrap();
    assert_eq!(features.bits(), &[1, 1, 1, 1, 0, 1]);
}
