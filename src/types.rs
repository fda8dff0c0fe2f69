// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The vocabulary of best bet resolution.
//!
//! A curator writes rules. Each rule names a category and says which words a
//! query must contain (and which words disqualify it), or which exact phrase
//! it answers to. Rules live in tiers keyed by how many words they match, and
//! the index hands them back one tier at a time as [`RulePage`]s.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **BestBetRule**: `word_count` equals the number of tokens the rule's
//!   positive side needs. A rule on the wrong tier is never fetched for the
//!   phrases it was written for.
//!
//! - **Term**: non-empty, already normalized. `Term::parse` is the only way
//!   to build one and refuses blank text. Matching is literal token
//!   equality, so an un-normalized term silently never matches.
//!
//! - **MatchResult**: each category appears at most once, in the order it was
//!   first contributed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::normalize;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Opaque identifier of a curated category. The output unit of matching.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        CategoryId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        CategoryId(id.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(id: String) -> Self {
        CategoryId(id)
    }
}

/// A supported language code, lowercase.
///
/// Only [`LanguageSet::resolve`](crate::LanguageSet::resolve) hands these out,
/// so holding a `Language` means the code was checked against configuration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    pub(crate) fn new_unchecked(code: impl Into<String>) -> Self {
        Language(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// TERMS
// =============================================================================

/// A normalized word or phrase, stored as its token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term(Vec<String>);

impl Term {
    /// Normalize `raw` into a term. Returns `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let tokens = normalize(raw);
        if tokens.is_empty() {
            None
        } else {
            Some(Term(tokens))
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Number of words in the term.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First index where the term occurs as a contiguous window of `phrase`.
    pub fn position_in(&self, phrase: &[String]) -> Option<usize> {
        if self.0.is_empty() || self.0.len() > phrase.len() {
            return None;
        }
        phrase
            .windows(self.0.len())
            .position(|window| window == self.0.as_slice())
    }

    pub fn is_present_in(&self, phrase: &[String]) -> bool {
        self.position_in(phrase).is_some()
    }

    /// Whole-phrase equality.
    pub fn equals_phrase(&self, phrase: &[String]) -> bool {
        self.0.as_slice() == phrase
    }

    pub fn text(&self) -> String {
        self.0.join(" ")
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

// =============================================================================
// RULES
// =============================================================================

/// Whether a firing exact-phrase rule adds or removes its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Include,
    /// The "negated exact match": vetoes the category for this phrase.
    Exclude,
}

/// How a rule decides whether it applies to a phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// Every match term must be present. Any present negation term suppresses
    /// the rule. With `adjacent`, the match terms must also appear
    /// back-to-back in declared order.
    ContainsAll {
        match_terms: Vec<Term>,
        negation_terms: Vec<Term>,
        adjacent: bool,
    },
    /// Fires only when the whole normalized phrase equals `phrase`.
    ExactPhrase { phrase: Term, polarity: Polarity },
}

impl RuleKind {
    /// Tokens the rule needs on its positive side. This is the rule's tier.
    pub fn positive_word_count(&self) -> usize {
        match self {
            RuleKind::ContainsAll { match_terms, .. } => match_terms.iter().map(Term::len).sum(),
            RuleKind::ExactPhrase { phrase, .. } => phrase.len(),
        }
    }

    /// Tokens an index can use to decide the rule is a hit for a phrase.
    pub fn positive_tokens(&self) -> impl Iterator<Item = &str> {
        let terms: Vec<&Term> = match self {
            RuleKind::ContainsAll { match_terms, .. } => match_terms.iter().collect(),
            RuleKind::ExactPhrase { phrase, .. } => vec![phrase],
        };
        terms
            .into_iter()
            .flat_map(|term| term.tokens().iter().map(String::as_str))
    }
}

/// One curated best bet entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestBetRule {
    pub category_id: CategoryId,
    /// Tier the rule is stored under.
    pub word_count: usize,
    pub kind: RuleKind,
}

impl BestBetRule {
    /// Rule over the given match terms with no negations. Terms that
    /// normalize to nothing are dropped.
    pub fn contains_all(category: impl Into<CategoryId>, match_terms: &[&str]) -> Self {
        Self::from_kind(
            category,
            RuleKind::ContainsAll {
                match_terms: parse_terms(match_terms),
                negation_terms: Vec::new(),
                adjacent: false,
            },
        )
    }

    /// Rule that fires only on the exact phrase.
    ///
    /// `None` when `phrase` normalizes to nothing: there is no tier for a
    /// zero-word phrase, so such a rule could never be fetched.
    pub fn exact_phrase(category: impl Into<CategoryId>, phrase: &str) -> Option<Self> {
        Self::exact(category, phrase, Polarity::Include)
    }

    /// Rule that vetoes its category when the query is exactly `phrase`.
    /// `None` for a blank phrase, as with [`exact_phrase`](Self::exact_phrase).
    pub fn exact_exclusion(category: impl Into<CategoryId>, phrase: &str) -> Option<Self> {
        Self::exact(category, phrase, Polarity::Exclude)
    }

    fn exact(category: impl Into<CategoryId>, phrase: &str, polarity: Polarity) -> Option<Self> {
        let phrase = Term::parse(phrase)?;
        Some(Self::from_kind(category, RuleKind::ExactPhrase { phrase, polarity }))
    }

    /// Add negation terms. No effect on exact-phrase rules.
    pub fn negated_by(mut self, negations: &[&str]) -> Self {
        if let RuleKind::ContainsAll { negation_terms, .. } = &mut self.kind {
            negation_terms.extend(parse_terms(negations));
        }
        self
    }

    /// Require the match terms to appear back-to-back, in order.
    pub fn adjacent(mut self) -> Self {
        if let RuleKind::ContainsAll { adjacent, .. } = &mut self.kind {
            *adjacent = true;
        }
        self
    }

    /// Build a rule whose tier is derived from its positive side.
    pub fn from_kind(category: impl Into<CategoryId>, kind: RuleKind) -> Self {
        BestBetRule {
            category_id: category.into(),
            word_count: kind.positive_word_count(),
            kind,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self.kind, RuleKind::ExactPhrase { .. })
    }
}

fn parse_terms(raw: &[&str]) -> Vec<Term> {
    raw.iter().filter_map(|t| Term::parse(t)).collect()
}

// =============================================================================
// PHRASES, PAGES, RESULTS
// =============================================================================

/// A normalized search phrase, ready for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPhrase {
    pub language: Language,
    tokens: Vec<String>,
}

impl SearchPhrase {
    pub fn new(language: Language, tokens: Vec<String>) -> Self {
        SearchPhrase { language, tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }

}

/// All rules of one tier that the index returned for a phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulePage {
    pub word_count: usize,
    /// Hit count reported by the index for the tier.
    pub total_hits: usize,
    pub rules: Vec<BestBetRule>,
}

impl RulePage {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Ordered, de-duplicated categories matched by a phrase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchResult {
    categories: Vec<CategoryId>,
}

impl MatchResult {
    pub(crate) fn from_ordered(categories: Vec<CategoryId>) -> Self {
        MatchResult { categories }
    }

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    /// Category ids as plain strings, in result order.
    pub fn ids(&self) -> Vec<&str> {
        self.categories.iter().map(CategoryId::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn into_vec(self) -> Vec<CategoryId> {
        self.categories
    }
}

impl IntoIterator for MatchResult {
    type Item = CategoryId;
    type IntoIter = std::vec::IntoIter<CategoryId>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.into_iter()
    }
}
