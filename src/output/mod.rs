// Output formatting: top-N reports from a score matrix.

pub mod terminal;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::ranking::engine::ScoreMatrix;

/// One candidate line in a report entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub name: String,
    pub score: f64,
}

/// A match-side record with its best base-side candidates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub name: String,
    pub candidates: Vec<RankedCandidate>,
}

/// Sort candidates by descending score, ties by ascending name, keep `n`.
pub fn top_matches(row: &BTreeMap<String, f64>, n: usize) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = row
        .iter()
        .map(|(name, &score)| RankedCandidate {
            name: name.clone(),
            score,
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(n);
    ranked
}

/// One report entry per match-side record, in name order.
pub fn build_report(matrix: &ScoreMatrix, n: usize) -> Vec<MatchReport> {
    matrix
        .iter()
        .map(|(name, row)| MatchReport {
            name: name.clone(),
            candidates: top_matches(row, n),
        })
        .collect()
}

/// Plain-text report: a heading per record, one tab-indented
/// `candidate :: score` line per candidate, and a blank line after each entry.
pub fn format_report(reports: &[MatchReport]) -> String {
    render_report(reports, str::to_string, format_score)
}

/// Report layout with caller-supplied styling for headings and scores.
/// Every report renderer goes through here.
pub fn render_report<H, S>(reports: &[MatchReport], heading: H, score: S) -> String
where
    H: Fn(&str) -> String,
    S: Fn(f64) -> String,
{
    let mut out = String::new();
    for report in reports {
        out.push_str(&heading(&report.name));
        out.push('\n');
        for candidate in &report.candidates {
            out.push_str(&format!("\t{} :: {}\n", candidate.name, score(candidate.score)));
        }
        out.push('\n');
    }
    out
}

/// Scores print with four decimals.
pub fn format_score(score: f64) -> String {
    format!("{score:.4}")
}
