// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Paged rule fetching: one tier at a time, stop at the first empty tier.
//!
//! Tier `n` holds the rules configured for exactly `n` words. For a phrase of
//! `w` words the fetcher walks tiers `1..=w` in order and stops as soon as a
//! tier comes back with zero hits. Tiers past that point are never queried,
//! even if they would have matched: rule authors are expected to file broad
//! rules on low tiers, and a gap means "nothing more specific exists".
//!
//! A single tier may need several round trips. The index reports the tier's
//! total hit count with each chunk, and the fetcher keeps asking (`from`
//! advancing by `page_size`) until it has them all. Responses that cannot be
//! right for the query sent are rejected as malformed rather than trusted.
//!
//! ```text
//!   tier 1 ──▶ [chunk][chunk] ──▶ RulePage(1) ──▶ yield
//!   tier 2 ──▶ [chunk]        ──▶ RulePage(2) ──▶ yield
//!   tier 3 ──▶ (0 hits)       ──▶ stop, tier 4.. never queried
//! ```

use std::iter::FusedIterator;

use tracing::{debug, warn};

use crate::cancel::CancelToken;
use crate::contracts::check_page_well_formed;
use crate::error::{IndexError, MatchError};
use crate::index::{PageQuery, RuleHits, RuleIndex};
use crate::types::{RulePage, SearchPhrase};

/// Lazy, non-restartable sequence of rule pages for one phrase.
///
/// Each `next()` issues the queries for one tier. After an error, a
/// cancellation, an empty tier or the last tier, it only yields `None`.
pub struct PageFetcher<'a> {
    index: &'a dyn RuleIndex,
    phrase: &'a SearchPhrase,
    page_size: usize,
    next_tier: usize,
    last_tier: usize,
    cancel: Option<&'a CancelToken>,
    queries_issued: usize,
    done: bool,
}

impl<'a> PageFetcher<'a> {
    /// Fetch tiers `1..=last_tier` for `phrase`, `page_size` rules per round trip.
    pub fn new(index: &'a dyn RuleIndex, phrase: &'a SearchPhrase, last_tier: usize, page_size: usize) -> Self {
        PageFetcher {
            index,
            phrase,
            page_size: page_size.max(1),
            next_tier: 1,
            last_tier,
            cancel: None,
            queries_issued: 0,
            done: last_tier == 0,
        }
    }

    /// Check `token` before every index query.
    pub fn with_cancel(mut self, token: &'a CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Index round trips issued so far.
    pub fn queries_issued(&self) -> usize {
        self.queries_issued
    }

    fn ensure_not_cancelled(&self) -> Result<(), MatchError> {
        match self.cancel {
            Some(token) if token.is_cancelled() => Err(MatchError::Cancelled),
            _ => Ok(()),
        }
    }

    fn fetch_tier(&mut self, word_count: usize) -> Result<RulePage, MatchError> {
        let mut rules = Vec::new();
        let mut total: Option<usize> = None;

        loop {
            self.ensure_not_cancelled()?;

            let query = PageQuery {
                language: self.phrase.language.clone(),
                word_count,
                tokens: self.phrase.tokens().to_vec(),
                from: rules.len(),
                size: self.page_size,
            };
            self.queries_issued += 1;
            let hits = self.index.query(&query).map_err(|e| {
                warn!(target: "bestbets", tier = word_count, error = %e, "rule index query failed");
                e
            })?;

            let expected = validate_chunk(&query, &hits, total)?;
            total = Some(expected);
            rules.extend(hits.rules);

            if rules.len() >= expected {
                break;
            }
        }

        let page = RulePage {
            word_count,
            total_hits: total.unwrap_or(0),
            rules,
        };
        check_page_well_formed(&page);
        Ok(page)
    }
}

/// Reject chunks that cannot be a correct answer to `query`. Returns the
/// tier's total hit count.
fn validate_chunk(query: &PageQuery, hits: &RuleHits, total: Option<usize>) -> Result<usize, IndexError> {
    let malformed = |reason: String| IndexError::Malformed {
        word_count: query.word_count,
        reason,
    };

    if let Some(previous) = total {
        if previous != hits.total {
            return Err(malformed(format!(
                "hit count changed from {} to {} between chunks",
                previous, hits.total
            )));
        }
    }
    if hits.rules.len() > query.size {
        return Err(malformed(format!(
            "{} rules returned for a chunk of {}",
            hits.rules.len(),
            query.size
        )));
    }
    if query.from + hits.rules.len() > hits.total {
        return Err(malformed(format!(
            "{} rules returned past a total of {}",
            query.from + hits.rules.len(),
            hits.total
        )));
    }
    if hits.rules.is_empty() && query.from < hits.total {
        return Err(malformed(format!(
            "empty chunk at offset {} of {}",
            query.from, hits.total
        )));
    }
    if let Some(rule) = hits.rules.iter().find(|r| r.word_count != query.word_count) {
        return Err(malformed(format!(
            "rule for category {} belongs to tier {}",
            rule.category_id, rule.word_count
        )));
    }
    Ok(hits.total)
}

impl Iterator for PageFetcher<'_> {
    type Item = Result<RulePage, MatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.next_tier > self.last_tier {
            self.done = true;
            return None;
        }

        let tier = self.next_tier;
        self.next_tier += 1;

        match self.fetch_tier(tier) {
            Ok(page) if page.is_empty() => {
                debug!(target: "bestbets", tier, "empty tier, stopping");
                self.done = true;
                None
            }
            Ok(page) => {
                debug!(target: "bestbets", tier, hits = page.total_hits, "fetched tier");
                if tier == self.last_tier {
                    self.done = true;
                }
                Some(Ok(page))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for PageFetcher<'_> {}
