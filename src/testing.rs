//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical index doubles to avoid duplication.

#![doc(hidden)]

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::IndexError;
use crate::index::{MemoryRuleIndex, PageQuery, RuleCorpus, RuleHits, RuleIndex};
use crate::types::BestBetRule;

/// Create a memory index holding `rules` under `language`.
pub fn make_index(language: &str, rules: impl IntoIterator<Item = BestBetRule>) -> MemoryRuleIndex {
    MemoryRuleIndex::new(RuleCorpus::new().with_rules(language, rules))
}

/// Spy that records every query before delegating.
pub struct CountingIndex<I> {
    inner: I,
    queries: Mutex<Vec<PageQuery>>,
}

impl<I: RuleIndex> CountingIndex<I> {
    pub fn new(inner: I) -> Self {
        CountingIndex {
            inner,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Number of queries seen so far.
    pub fn count(&self) -> usize {
        self.queries.lock().len()
    }

    /// Tiers queried, in order, one entry per round trip.
    pub fn tiers(&self) -> Vec<usize> {
        self.queries.lock().iter().map(|query| query.word_count).collect()
    }

    pub fn queries(&self) -> Vec<PageQuery> {
        self.queries.lock().clone()
    }
}

impl<I: RuleIndex> RuleIndex for CountingIndex<I> {
    fn query(&self, query: &PageQuery) -> Result<RuleHits, IndexError> {
        self.queries.lock().push(query.clone());
        self.inner.query(query)
    }
}

/// Index that answers normally for `succeed_for` queries, then fails with `error`.
pub struct FailingIndex<I> {
    inner: I,
    succeed_for: usize,
    calls: AtomicUsize,
    error: IndexError,
}

impl<I: RuleIndex> FailingIndex<I> {
    pub fn new(inner: I, succeed_for: usize, error: IndexError) -> Self {
        FailingIndex {
            inner,
            succeed_for,
            calls: AtomicUsize::new(0),
            error,
        }
    }
}

impl<I: RuleIndex> RuleIndex for FailingIndex<I> {
    fn query(&self, query: &PageQuery) -> Result<RuleHits, IndexError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call >= self.succeed_for {
            Err(self.error.clone())
        } else {
            self.inner.query(query)
        }
    }
}

/// Index that returns a fixed response to every query.
pub struct ScriptedIndex {
    response: RuleHits,
}

impl ScriptedIndex {
    pub fn new(response: RuleHits) -> Self {
        ScriptedIndex { response }
    }
}

impl RuleIndex for ScriptedIndex {
    fn query(&self, _query: &PageQuery) -> Result<RuleHits, IndexError> {
        Ok(self.response.clone())
    }
}
