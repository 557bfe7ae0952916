//! Patterns command — list the pattern families in effect.

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use verity_core::{Config, PatternCategory, PatternDefinition};

/// Arguments for the `patterns` subcommand.
#[derive(Args, Debug, Default)]
pub struct PatternsArgs {
    /// Only list families in this category.
    #[arg(long, value_enum)]
    pub category: Option<PatternCategory>,
}

/// List built-in and configured pattern families.
#[instrument(name = "cmd_patterns", skip_all, fields(category = ?args.category))]
pub fn cmd_patterns(args: PatternsArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!("executing patterns command");

    let library = config
        .pattern_library()
        .context("failed to build pattern library from configuration")?;
    let definitions: Vec<PatternDefinition> = library
        .definitions()
        .into_iter()
        .filter(|d| args.category.is_none_or(|c| d.category == c))
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&definitions)?);
        return Ok(());
    }

    for d in &definitions {
        println!(
            "{:<28} {:<10} {:>3}  {}",
            d.label.bold(),
            d.category.as_str(),
            d.effective_confidence(),
            d.pattern.dimmed(),
        );
    }
    println!("\n{} families", definitions.len());

    Ok(())
}
