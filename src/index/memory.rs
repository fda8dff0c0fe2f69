// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-process rule index over a [`RuleCorpus`].
//!
//! Mirrors what a search engine would return: a rule is a hit for a query
//! when it sits on the requested tier and at least one of its positive tokens
//! occurs in the phrase. Negation terms never make a rule a hit. Hits come
//! back in corpus order, chunked by `from`/`size`.

use std::collections::HashSet;

use super::{PageQuery, RuleCorpus, RuleHits, RuleIndex};
use crate::error::IndexError;
use crate::types::BestBetRule;

#[derive(Debug, Clone, Default)]
pub struct MemoryRuleIndex {
    corpus: RuleCorpus,
}

impl MemoryRuleIndex {
    pub fn new(corpus: RuleCorpus) -> Self {
        MemoryRuleIndex { corpus }
    }

    fn tier_hits<'a>(&'a self, query: &'a PageQuery) -> impl Iterator<Item = &'a BestBetRule> + 'a {
        let phrase: HashSet<&str> = query.tokens.iter().map(String::as_str).collect();
        self.corpus
            .rules(query.language.as_str())
            .iter()
            .filter(move |rule| rule.word_count == query.word_count)
            .filter(move |rule| rule.kind.positive_tokens().any(|t| phrase.contains(t)))
    }
}

impl RuleIndex for MemoryRuleIndex {
    fn query(&self, query: &PageQuery) -> Result<RuleHits, IndexError> {
        let total = self.tier_hits(query).count();
        let rules = self
            .tier_hits(query)
            .skip(query.from)
            .take(query.size)
            .cloned()
            .collect();
        Ok(RuleHits { total, rules })
    }
}
