// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The public entry point: `get_matches(language, search_term)`.
//!
//! normalize → fetch tiers → resolve, strictly in that order, on the calling
//! thread. The matcher holds no mutable state, so one instance can serve any
//! number of concurrent requests; they share only the read-only index.

use std::sync::Arc;

use tracing::{debug, debug_span};

use super::fetch::PageFetcher;
use super::query::normalize_phrase;
use super::resolve::Resolver;
use crate::cancel::CancelToken;
use crate::config::MatcherConfig;
use crate::contracts::check_result_unique;
use crate::error::{ConfigError, MatchError};
use crate::index::RuleIndex;
use crate::types::MatchResult;

/// Resolves search phrases to best bet categories.
#[derive(Clone)]
pub struct BestBetsMatcher {
    index: Arc<dyn RuleIndex>,
    config: MatcherConfig,
}

impl BestBetsMatcher {
    /// Matcher over `index`. Fails on a config that could never produce a
    /// match (no languages, zero page size, tier cap of zero), the same checks
    /// a config file goes through.
    pub fn new(index: Arc<dyn RuleIndex>, config: MatcherConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(BestBetsMatcher { index, config })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Categories matched by `search_term` in `language`.
    ///
    /// An empty result means "no best bet" and is never used to paper over a
    /// failure: index errors surface as [`MatchError::Query`].
    pub fn get_matches(&self, language: &str, search_term: &str) -> Result<MatchResult, MatchError> {
        self.run(language, search_term, None)
    }

    /// Like [`get_matches`](Self::get_matches), abandoning the request once
    /// `cancel` is set. A cancelled request returns [`MatchError::Cancelled`],
    /// never the categories gathered so far.
    pub fn get_matches_with_cancel(
        &self,
        language: &str,
        search_term: &str,
        cancel: &CancelToken,
    ) -> Result<MatchResult, MatchError> {
        self.run(language, search_term, Some(cancel))
    }

    fn run(&self, language: &str, search_term: &str, cancel: Option<&CancelToken>) -> Result<MatchResult, MatchError> {
        let phrase = normalize_phrase(search_term, language, &self.config.languages)?;
        let span = debug_span!(
            target: "bestbets",
            "get_matches",
            language = %phrase.language,
            words = phrase.word_count()
        );
        let _guard = span.enter();

        let last_tier = self.config.last_tier(phrase.word_count());
        let mut fetcher = PageFetcher::new(self.index.as_ref(), &phrase, last_tier, self.config.page_size);
        if let Some(token) = cancel {
            fetcher = fetcher.with_cancel(token);
        }

        let mut resolver = Resolver::new(&phrase);
        for page in fetcher.by_ref() {
            resolver.apply_page(&page?);
        }

        if cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(MatchError::Cancelled);
        }

        let result = resolver.finish();
        check_result_unique(result.categories());
        debug!(
            target: "bestbets",
            queries = fetcher.queries_issued(),
            matches = result.len(),
            "resolved"
        );
        Ok(result)
    }
}
