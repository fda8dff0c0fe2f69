// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Order-preserving category deduplication.
//!
//! A category should appear at most once in a match result, no matter how
//! many rules across how many tiers point at it. It should also appear where
//! it was *first* confirmed, because callers display best bets in that order.
//! A `HashSet` alone loses the order and a `Vec` alone lets duplicates in, so
//! `CategoryMerger` keeps both.
//!
//! Exact-phrase exclusions complicate this: a veto can arrive on tier 2 for a
//! category tier 1 already contributed, and must also block tier 3. Vetoed
//! categories are removed and remembered for the rest of the request.
//!
//! **Invariant**: each category appears at most once, in first-contribution
//! order, and never after it was vetoed.

use std::collections::HashSet;

use crate::types::{CategoryId, MatchResult};

/// Accumulates contributed categories for one request.
#[derive(Debug, Default)]
pub struct CategoryMerger {
    ordered: Vec<CategoryId>,
    seen: HashSet<CategoryId>,
    vetoed: HashSet<CategoryId>,
}

impl CategoryMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contribute a category. Returns `true` if it was appended.
    pub fn merge(&mut self, category: &CategoryId) -> bool {
        if self.vetoed.contains(category) || self.seen.contains(category) {
            return false;
        }
        self.seen.insert(category.clone());
        self.ordered.push(category.clone());
        true
    }

    /// Remove a category and refuse it for the rest of the request.
    /// Returns `true` if it had already been contributed.
    pub fn veto(&mut self, category: &CategoryId) -> bool {
        self.vetoed.insert(category.clone());
        if self.seen.remove(category) {
            self.ordered.retain(|c| c != category);
            true
        } else {
            false
        }
    }

    pub fn into_result(self) -> MatchResult {
        MatchResult::from_ordered(self.ordered)
    }
}
