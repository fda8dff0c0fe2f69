// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The rule index: where curated rules come from.
//!
//! The matcher never owns the rules. It asks a [`RuleIndex`] for the rules of
//! one tier that are hits for a phrase, and the index answers with a chunk of
//! rules plus the tier's total hit count. A production deployment puts a
//! search engine behind this trait; tests and the CLI use the in-process
//! [`MemoryRuleIndex`] over a JSON [`RuleCorpus`].
//!
//! Timeouts, retries and connection pooling are the implementation's
//! business. The matcher only sees `Ok` or an [`IndexError`].

mod corpus;
mod memory;

pub use corpus::{RuleCorpus, CORPUS_VERSION};
pub use memory::MemoryRuleIndex;

use crate::error::IndexError;
use crate::types::{BestBetRule, Language};

/// One round trip to the index: a chunk of tier `word_count` for `tokens`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub language: Language,
    /// Tier being fetched.
    pub word_count: usize,
    /// The normalized search phrase.
    pub tokens: Vec<String>,
    /// Offset of the first hit to return.
    pub from: usize,
    /// Maximum number of hits to return.
    pub size: usize,
}

/// Index response to a [`PageQuery`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleHits {
    /// Hits in the whole tier, not just this chunk.
    pub total: usize,
    pub rules: Vec<BestBetRule>,
}

/// Read-only source of best bet rules.
///
/// Implementations are shared across concurrent requests, hence `Send + Sync`.
pub trait RuleIndex: Send + Sync {
    fn query(&self, query: &PageQuery) -> Result<RuleHits, IndexError>;
}

impl<T: RuleIndex + ?Sized> RuleIndex for std::sync::Arc<T> {
    fn query(&self, query: &PageQuery) -> Result<RuleHits, IndexError> {
        (**self).query(query)
    }
}

impl<T: RuleIndex + ?Sized> RuleIndex for &T {
    fn query(&self, query: &PageQuery) -> Result<RuleHits, IndexError> {
        (**self).query(query)
    }
}
