// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bestbets::{BestBetsMatcher, MatchResult, MatcherConfig, MemoryRuleIndex, RuleCorpus};

mod cli;
use cli::batch::{read_phrases, resolve_all};
use cli::display::*;
use cli::{Cli, Commands, MatcherArgs};

/// Machine-readable result line for `--json`.
#[derive(Serialize)]
struct JsonMatch<'a> {
    language: &'a str,
    query: &'a str,
    categories: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Match { matcher, json, query } => run_match(&matcher, json, &query.join(" ")),
        Commands::Inspect { file } => run_inspect(&file),
        Commands::Batch { matcher, json, queries } => run_batch(&matcher, json, &queries),
    };

    if let Err(e) = outcome {
        eprintln!("{} {:#}", error_label("error:"), e);
        std::process::exit(1);
    }
}

/// Library events go to stderr, filtered by `BESTBETS_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("BESTBETS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn load_matcher(args: &MatcherArgs) -> Result<BestBetsMatcher> {
    let config = match &args.config {
        Some(path) => MatcherConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MatcherConfig::default(),
    };
    let corpus = RuleCorpus::from_path(&args.rules)
        .with_context(|| format!("loading rules {}", args.rules.display()))?;
    info!(target: "bestbets", rules = corpus.len(), languages = corpus.languages().len(), "corpus loaded");

    Ok(BestBetsMatcher::new(Arc::new(MemoryRuleIndex::new(corpus)), config)?)
}

fn json_line(language: &str, query: &str, result: Result<&MatchResult, String>) -> Result<String> {
    let (categories, error) = match result {
        Ok(result) => (result.ids(), None),
        Err(e) => (Vec::new(), Some(e)),
    };
    let line = JsonMatch {
        language,
        query,
        categories,
        error,
    };
    Ok(serde_json::to_string(&line)?)
}

// ============================================================================
// MATCH
// ============================================================================

fn run_match(args: &MatcherArgs, json: bool, query: &str) -> Result<()> {
    let matcher = load_matcher(args)?;

    let start = Instant::now();
    let result = matcher.get_matches(&args.lang, query)?;
    let elapsed = start.elapsed().as_secs_f64() * 1000.0;

    if json {
        println!("{}", json_line(&args.lang, query, Ok(&result))?);
        return Ok(());
    }

    section_top("MATCH");
    row(&format!(" {} {}", pad_right(&note("query"), 10), query));
    row(&format!(" {} {}", pad_right(&note("language"), 10), args.lang));
    row(&format!(" {} {}", pad_right(&note("time"), 10), timing_ms(elapsed)));
    section_mid("CATEGORIES");
    if result.is_empty() {
        row(&format!(" {}", note("no best bet")));
    } else {
        for (i, category) in result.categories().iter().enumerate() {
            row(&format!(" {} {}", pad_left(&(i + 1).to_string(), 3), category_badge(category.as_str())));
        }
    }
    section_bot();
    Ok(())
}

// ============================================================================
// INSPECT
// ============================================================================

fn run_inspect(file: &Path) -> Result<()> {
    let corpus = RuleCorpus::from_path(file).with_context(|| format!("loading rules {}", file.display()))?;

    section_top("CORPUS");
    row(&format!(" {} {}", pad_right(&note("file"), 10), file.display()));
    row(&format!(" {} {}", pad_right(&note("rules"), 10), corpus.len()));
    row(&format!(" {} {}", pad_right(&note("languages"), 10), corpus.languages().join(", ")));

    for language in corpus.languages() {
        let counts = corpus.tier_counts(language);
        let max = counts.values().copied().max().unwrap_or(0);
        section_mid(&language.to_uppercase());
        for (tier, count) in &counts {
            row(&format!(
                " {} {} {}",
                pad_right(&tier_label(*tier), 4),
                pad_left(&count.to_string(), 6),
                count_bar(*count, max, 40)
            ));
        }
    }
    section_bot();
    Ok(())
}

// ============================================================================
// BATCH
// ============================================================================

fn run_batch(args: &MatcherArgs, json: bool, queries: &Path) -> Result<()> {
    let matcher = load_matcher(args)?;
    let contents =
        fs::read_to_string(queries).with_context(|| format!("reading queries {}", queries.display()))?;
    let phrases = read_phrases(&contents);

    let start = Instant::now();
    let outcomes = resolve_all(&matcher, &args.lang, phrases);
    let elapsed = start.elapsed().as_secs_f64() * 1000.0;

    let mut failures = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(result) if json => println!("{}", json_line(&args.lang, &outcome.phrase, Ok(result))?),
            Ok(result) => println!("{}\t{}", outcome.phrase, result.ids().join(",")),
            Err(e) => {
                failures += 1;
                if json {
                    println!("{}", json_line(&args.lang, &outcome.phrase, Err(e.to_string()))?);
                } else {
                    eprintln!("{} line {}: {}", error_label("error:"), outcome.line, e);
                }
            }
        }
    }

    eprintln!(
        "{} phrases, {} failed, {}",
        outcomes.len(),
        failures,
        timing_ms(elapsed)
    );
    if failures > 0 {
        anyhow::bail!("{} of {} phrases failed", failures, outcomes.len());
    }
    Ok(())
}
