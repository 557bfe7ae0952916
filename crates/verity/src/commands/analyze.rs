//! Analyze command — originality and machine-authorship scoring.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use verity_core::{AnalysisReport, Config, MatchType, markdown};

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Strip markdown formatting before analysis (implied for `.md` files).
    #[arg(long)]
    pub strip_markdown: bool,

    /// Minimum acceptable originality score (0–100).
    #[arg(long)]
    pub min_score: Option<u8>,

    /// Maximum acceptable AI-generation score (0–100).
    #[arg(long)]
    pub max_ai_score: Option<u8>,

    /// Skip the minimum/maximum length check.
    #[arg(long)]
    pub no_length_check: bool,
}

/// Score a file for originality and machine-generated phrasing.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(
        file = %args.file,
        strip_markdown = args.strip_markdown,
        min_score = ?args.min_score,
        max_ai_score = ?args.max_ai_score,
        "executing analyze command"
    );

    let content = read_input_file(&args.file, max_input_bytes)?;

    let strip_md = args.strip_markdown || args.file.extension() == Some("md");
    let prose = if strip_md {
        markdown::strip_to_prose(&content)
    } else {
        content
    };

    if config.enforce_length && !args.no_length_check {
        config
            .input_limits()
            .check(&prose)
            .with_context(|| format!("cannot analyze {}", args.file))?;
    }

    let engine = config
        .engine()
        .context("failed to build pattern library from configuration")?;
    let report = engine.analyze(&prose);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&args.file, &report);
    }

    let min_score = args.min_score.or(config.min_overall_score);
    let max_ai = args.max_ai_score.or(config.max_ai_score);

    if let Some(min) = min_score
        && report.overall_score < min
    {
        bail!(
            "{} originality score {} is below minimum {}. Rework stock phrasing and vary sentence structure.",
            args.file,
            report.overall_score,
            min,
        );
    }
    if let Some(max) = max_ai
        && report.ai_generated_score > max
    {
        bail!(
            "{} AI-generation score {} exceeds maximum {}.",
            args.file,
            report.ai_generated_score,
            max,
        );
    }

    Ok(())
}

fn print_report(file: &Utf8Path, report: &AnalysisReport) {
    println!("{}", file.bold());

    println!(
        "\n  {} {}/100",
        "Originality:".cyan(),
        colored_score(report.overall_score, false)
    );
    println!(
        "  {} {}/100",
        "AI likelihood:".cyan(),
        colored_score(report.ai_generated_score, true)
    );
    println!("  {}", report.summary);

    let s = &report.signals;
    println!(
        "\n  {} {} words, {} sentences, burstiness {:.0}, vocabulary {:.0}",
        "Signals:".cyan(),
        s.word_count,
        s.sentence_count,
        s.burstiness,
        s.vocabulary_richness,
    );

    if !report.matches.is_empty() {
        println!(
            "\n  {} {} AI patterns, {} clichés (penalty {})",
            "Matches:".yellow(),
            s.ai_pattern_count,
            s.cliche_count,
            s.match_penalty,
        );
        for m in &report.matches {
            let kind = match m.match_type {
                MatchType::AiPattern => "ai",
                MatchType::Paraphrase => "cliché",
                MatchType::Exact => "exact",
            };
            println!(
                "    {}-{} [{}] \"{}\" ({})",
                m.start_index,
                m.end_index,
                kind.dimmed(),
                m.text,
                m.pattern,
            );
        }
    }

    if !report.suggestions.is_empty() {
        println!("\n  {}", "Suggestions:".cyan());
        for suggestion in &report.suggestions {
            println!("    - {suggestion}");
        }
    }
}

/// Color a 0–100 score; `inverted` means higher is worse.
fn colored_score(score: u8, inverted: bool) -> String {
    let goodness = if inverted { 100 - score } else { score };
    let text = score.to_string();
    if goodness >= 80 {
        text.green().to_string()
    } else if goodness >= 60 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}
