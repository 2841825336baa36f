// Colored terminal output for match reports and the vocabulary.

use colored::Colorize;

use crate::features::vocabulary::Vocabulary;

use super::{format_score, render_report, MatchReport};

/// Print the ranked matches, one block per match-side record.
pub fn display_report(reports: &[MatchReport]) {
    print!("{}", colored_report(reports));
}

/// The plain-text report layout with a bold heading and colored scores.
/// Identical to `format_report` when colors are disabled.
pub fn colored_report(reports: &[MatchReport]) -> String {
    render_report(
        reports,
        |name| name.bold().to_string(),
        |score| colorize_score(score).to_string(),
    )
}

/// Print the shared vocabulary, most frequent terms first.
pub fn display_vocabulary(vocabulary: &Vocabulary) {
    println!(
        "\n{}",
        format!("=== Global vocabulary ({} terms) ===", vocabulary.len()).bold()
    );
    println!();

    let mut terms: Vec<(&str, u32)> = vocabulary.iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    for (term, count) in terms {
        println!("  {:>5}  {}", count.to_string().dimmed(), term);
    }
}

fn colorize_score(score: f64) -> colored::ColoredString {
    let text = format_score(score);
    if score >= 0.5 {
        text.bright_green()
    } else if score > 0.0 {
        text.yellow()
    } else {
        text.dimmed()
    }
}
