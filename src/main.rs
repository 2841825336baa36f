use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use hackmatch::config::MatchConfig;
use hackmatch::ranking::distance::Metric;
use hackmatch::ranking::engine::DuplicatePolicy;
use hackmatch::records::{load_records, Record};

/// hackmatch: match hackathon students to startups by what they write about
/// their skills, projects and environment.
#[derive(Parser)]
#[command(name = "hackmatch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the best startups for every student
    Match {
        #[command(flatten)]
        input: InputArgs,

        /// Candidates to list per record (default: 15)
        #[arg(long)]
        num_matches: Option<usize>,

        /// Records need more than this many shared terms to be compared (default: 4)
        #[arg(long)]
        threshold: Option<usize>,

        /// Similarity coefficient: jaccard or dice
        #[arg(long)]
        metric: Option<Metric>,

        /// Rank students for every startup instead
        #[arg(long)]
        reverse: bool,

        /// Fail on duplicate names instead of keeping the last record
        #[arg(long)]
        strict_keys: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the shared vocabulary built from both files
    Vocab {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Student CSV
    #[arg(long, default_value = "unmatched_students.csv")]
    students: PathBuf,

    /// Startup CSV
    #[arg(long, default_value = "unmatched_top_startups.csv")]
    startups: PathBuf,

    /// Comma-separated bag-of-words fields (default: Environment,Project,Skills,Misc)
    #[arg(long, value_delimiter = ',')]
    fields: Vec<String>,
}

impl InputArgs {
    /// Load both files. Either one missing or malformed aborts the run.
    fn load(&self) -> Result<(Vec<Record>, Vec<Record>)> {
        let students = load_records(&self.students)?;
        let startups = load_records(&self.startups)?;
        Ok((students, startups))
    }

    fn apply(&self, config: &mut MatchConfig) {
        if !self.fields.is_empty() {
            config.bow_fields = self.fields.clone();
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hackmatch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Match {
            input,
            num_matches,
            threshold,
            metric,
            reverse,
            strict_keys,
            json,
        } => {
            let mut config = MatchConfig::load()?;
            input.apply(&mut config);
            if let Some(n) = num_matches {
                config.num_matches = n;
            }
            if let Some(threshold) = threshold {
                config.completeness_threshold = threshold;
            }
            if let Some(metric) = metric {
                config.metric = metric;
            }
            if strict_keys {
                config.duplicate_policy = DuplicatePolicy::Reject;
            }

            let (students, startups) = input.load()?;

            // Default orientation: startups are the candidates, students the headings
            let (base, matches, config) = if reverse {
                (students, startups, config.reversed())
            } else {
                (startups, students, config)
            };

            let matrix = hackmatch::pipeline::run(&base, &matches, &config)?;
            let reports = hackmatch::output::build_report(&matrix, config.num_matches);
            info!(reports = reports.len(), "Matching complete");

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                hackmatch::output::terminal::display_report(&reports);
            }
        }

        Commands::Vocab { input } => {
            let mut config = MatchConfig::load()?;
            input.apply(&mut config);
            config.validate()?;

            let (students, startups) = input.load()?;
            let normalizer = hackmatch::text::TextNormalizer::new()?;
            let vocabulary =
                hackmatch::pipeline::shared_vocabulary(&startups, &students, &config, &normalizer);

            hackmatch::output::terminal::display_vocabulary(&vocabulary);
        }
    }

    Ok(())
}
