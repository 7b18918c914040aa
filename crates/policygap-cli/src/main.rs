mod display;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use policygap_core::{AnalysisConfig, VectorizerMode, segment_with_min_length};
use policygap_match::{analyze, gaps};
use tracing_subscriber::EnvFilter;

/// Policy gap analysis: checks a policy document against a clause catalogue.
#[derive(Parser, Debug)]
#[command(name = "policygap", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify every clause as Covered, Partial or Missing.
    Analyze {
        /// Policy document (.txt).
        #[arg(long)]
        policy: PathBuf,

        /// Clause catalogue (JSON array of records).
        #[arg(long)]
        clauses: PathBuf,

        /// Analysis config (JSON). Flags override its values.
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        tuning: Tuning,

        /// Similarity vector space.
        #[arg(long, env = "POLICYGAP_VECTORIZER")]
        vectorizer: Option<VectorizerMode>,

        #[arg(long, value_enum, default_value_t = Format::Card)]
        format: Format,

        /// Only show clauses that are not Covered.
        #[arg(long)]
        gaps_only: bool,
    },
    /// Print the segments kept from a policy document.
    Segments {
        /// Policy document (.txt).
        #[arg(long)]
        policy: PathBuf,

        /// Analysis config (JSON). Only `min_segment_length` is used here.
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        tuning: Tuning,
    },
}

#[derive(clap::Args, Debug)]
struct Tuning {
    /// Minimum raw sentence length (characters) to keep a segment.
    #[arg(long, env = "POLICYGAP_MIN_SEGMENT_LENGTH")]
    min_segment_length: Option<usize>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Card,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!("policygap v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Analyze {
            policy,
            clauses,
            config,
            tuning,
            vectorizer,
            format,
            gaps_only,
        } => {
            let mut cfg = resolve_config(config.as_deref(), &tuning)?;
            if let Some(mode) = vectorizer {
                cfg.vectorizer = mode;
            }
            cmd_analyze(&policy, &clauses, &cfg, format, gaps_only)
        }
        Command::Segments {
            policy,
            config,
            tuning,
        } => {
            let cfg = resolve_config(config.as_deref(), &tuning)?;
            cmd_segments(&policy, cfg.min_segment_length)
        }
    }
}

/// Logs go to stderr so JSON on stdout stays machine-readable.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the config file, then flags and environment.
fn resolve_config(path: Option<&Path>, tuning: &Tuning) -> anyhow::Result<AnalysisConfig> {
    let mut cfg = match path {
        Some(p) => policygap_store::load_config(p)
            .with_context(|| format!("loading config {}", p.display()))?,
        None => AnalysisConfig::default(),
    };
    if let Some(n) = tuning.min_segment_length {
        cfg.min_segment_length = n;
    }
    cfg.validate().context("validating analysis config")?;
    Ok(cfg)
}

// ── Commands ──

fn cmd_analyze(
    policy: &Path,
    clauses: &Path,
    cfg: &AnalysisConfig,
    format: Format,
    gaps_only: bool,
) -> anyhow::Result<()> {
    let text = policygap_store::load_policy_text(policy)
        .with_context(|| format!("loading policy {}", policy.display()))?;
    let records = policygap_store::load_catalogue(clauses)
        .with_context(|| format!("loading clauses {}", clauses.display()))?;

    let analysis = analyze(&text, &records, cfg).context("analysing policy")?;

    match format {
        Format::Json => {
            let doc = display::JsonReport {
                generated_at: chrono::Utc::now().to_rfc3339(),
                config: cfg,
                summary: &analysis.summary,
                gap_report: &analysis.report,
                gaps: gaps(&analysis.report),
            };
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        Format::Card => {
            let entries = if gaps_only {
                gaps(&analysis.report)
            } else {
                analysis.report.iter().collect()
            };
            for entry in entries {
                display::print_entry_card(entry);
            }
            display::print_summary(&analysis.summary);
        }
    }
    Ok(())
}

fn cmd_segments(policy: &Path, min_segment_length: usize) -> anyhow::Result<()> {
    let text = policygap_store::load_policy_text(policy)
        .with_context(|| format!("loading policy {}", policy.display()))?;
    let segments = segment_with_min_length(&text, min_segment_length);
    display::print_segments(&segments, min_segment_length);
    Ok(())
}
