//! Compare command — overlap between two submissions.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use verity_core::compare;

use super::read_input_file;

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First file.
    pub first: Utf8PathBuf,

    /// Second file.
    pub second: Utf8PathBuf,

    /// Maximum acceptable similarity (0–100).
    #[arg(long)]
    pub max_similarity: Option<u8>,
}

/// Compare two files for shared wording.
#[instrument(name = "cmd_compare", skip_all, fields(first = %args.first, second = %args.second))]
pub fn cmd_compare(
    args: CompareArgs,
    global_json: bool,
    config_max_similarity: Option<u8>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(max_similarity = ?args.max_similarity, "executing compare command");

    let first = read_input_file(&args.first, max_input_bytes)?;
    let second = read_input_file(&args.second, max_input_bytes)?;

    let report = compare(&first, &second);
    let max_similarity = args.max_similarity.or(config_max_similarity);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} {} vs {}: {}% similar",
            "Similarity:".cyan(),
            args.first,
            args.second,
            report.similarity,
        );
        if !report.common_phrases.is_empty() {
            println!("  {}", "Shared phrases:".cyan());
            for phrase in &report.common_phrases {
                println!("    \"{phrase}\"");
            }
        }
    }

    if let Some(max) = max_similarity
        && report.similarity > max
    {
        bail!(
            "{} and {} are {}% similar (max: {}%).",
            args.first,
            args.second,
            report.similarity,
            max,
        );
    }

    Ok(())
}
