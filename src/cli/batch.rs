// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Batch resolution of a file of search phrases.
//!
//! Requests share nothing but the read-only index, so they fan out over rayon
//! when the `parallel` feature is on. `collect()` on an indexed parallel
//! iterator keeps input order, so results line up with the input file.

use bestbets::{BestBetsMatcher, MatchError, MatchResult};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One input line and what became of it.
pub struct BatchOutcome {
    pub line: usize,
    pub phrase: String,
    pub result: Result<MatchResult, MatchError>,
}

/// Non-blank lines, numbered from 1.
pub fn read_phrases(contents: &str) -> Vec<(usize, String)> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, line.trim().to_string()))
        .collect()
}

#[cfg(feature = "parallel")]
fn create_progress_style() -> Option<ProgressStyle> {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .ok()
        .map(|style| style.progress_chars("━━╸"))
}

/// Resolve every phrase in parallel, reporting progress on stderr.
#[cfg(feature = "parallel")]
pub fn resolve_all(matcher: &BestBetsMatcher, language: &str, phrases: Vec<(usize, String)>) -> Vec<BatchOutcome> {
    let progress = ProgressBar::new(phrases.len() as u64);
    if let Some(style) = create_progress_style() {
        progress.set_style(style);
    }
    progress.set_prefix("Resolving");

    let outcomes: Vec<BatchOutcome> = phrases
        .into_par_iter()
        .map(|(line, phrase)| {
            let result = matcher.get_matches(language, &phrase);
            progress.inc(1);
            BatchOutcome { line, phrase, result }
        })
        .collect();

    progress.finish_with_message(format!("{} phrases", outcomes.len()));
    outcomes
}

/// Resolve every phrase on the calling thread.
#[cfg(not(feature = "parallel"))]
pub fn resolve_all(matcher: &BestBetsMatcher, language: &str, phrases: Vec<(usize, String)>) -> Vec<BatchOutcome> {
    phrases
        .into_iter()
        .map(|(line, phrase)| {
            let result = matcher.get_matches(language, &phrase);
            BatchOutcome { line, phrase, result }
        })
        .collect()
}
