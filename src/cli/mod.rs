// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the bestbets command-line interface.
//!
//! Three subcommands: `match` to resolve one phrase, `inspect` to see how a
//! rule corpus is spread over languages and tiers, and `batch` to resolve a
//! file of phrases (in parallel when built with the `parallel` feature).

pub mod batch;
pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bestbets",
    about = "Resolve search phrases to curated best bet categories",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the rules and matcher settings come from.
#[derive(Args, Debug, Clone)]
pub struct MatcherArgs {
    /// Rule corpus (JSON)
    #[arg(short, long)]
    pub rules: PathBuf,

    /// Matcher configuration (JSON). Defaults: en/es, page size 100, no tier cap
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Language of the search phrases
    #[arg(short, long, default_value = "en")]
    pub lang: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve one search phrase
    Match {
        #[command(flatten)]
        matcher: MatcherArgs,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Search phrase (remaining words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Show rule counts per language and tier
    Inspect {
        /// Path to rule corpus
        file: PathBuf,
    },

    /// Resolve every line of a file as a search phrase
    ///
    /// Blank lines are skipped. Output follows input order regardless of how
    /// the requests were scheduled.
    Batch {
        #[command(flatten)]
        matcher: MatcherArgs,

        /// Print results as JSON lines
        #[arg(long)]
        json: bool,

        /// File with one search phrase per line
        queries: PathBuf,
    },
}
