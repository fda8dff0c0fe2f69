// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match resolution: deciding which rules fire.
//!
//! Each rule is judged on its own. There is no corpus-wide blacklist: a
//! broad rule negated by "stat" says nothing about a narrower rule for the
//! same category that happens to contain "stat". That locality is what lets
//! "seer stat" resolve to nothing while "seer stat fact sheet" still finds
//! SEER through a more specific rule.
//!
//! The one cross-rule effect is the exact-phrase exclusion. When the whole
//! query equals its phrase, it vetoes its category for the request, whatever
//! other tiers said. Exact rules are self-contained gates: negation terms
//! never apply to them.
//!
//! ```text
//!   ContainsAll ──▶ all match terms present? ──no──▶ NoMatch
//!                          │ yes
//!                          ▼
//!                 any negation present? ──yes──▶ Suppressed
//!                          │ no
//!                          ▼
//!                        Fires
//!
//!   ExactPhrase ──▶ phrase == query? ──no──▶ NoMatch
//!                          │ yes
//!                          ▼
//!               Include ▶ Fires    Exclude ▶ Vetoes
//! ```

use tracing::{debug, trace};

use super::dedup::CategoryMerger;
use crate::contracts::check_tier_follows;
use crate::types::{BestBetRule, MatchResult, Polarity, RuleKind, RulePage, SearchPhrase, Term};

/// Outcome of evaluating one rule against one phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The rule applies; its category is contributed.
    Fires,
    /// Match terms were satisfied but this negation term was present.
    Suppressed(Term),
    /// Exact exclusion matched; the category is vetoed for the request.
    Vetoes,
    /// The rule does not apply.
    NoMatch,
}

/// Evaluate a rule against normalized phrase tokens.
pub fn evaluate(rule: &BestBetRule, phrase: &[String]) -> Verdict {
    match &rule.kind {
        RuleKind::ContainsAll {
            match_terms,
            negation_terms,
            adjacent,
        } => evaluate_contains_all(match_terms, negation_terms, *adjacent, phrase),
        RuleKind::ExactPhrase { phrase: exact, polarity } => evaluate_exact(exact, *polarity, phrase),
    }
}

fn evaluate_contains_all(
    match_terms: &[Term],
    negation_terms: &[Term],
    adjacent: bool,
    phrase: &[String],
) -> Verdict {
    if match_terms.is_empty() {
        return Verdict::NoMatch;
    }

    let matched = if adjacent {
        contains_run(match_terms, phrase)
    } else {
        match_terms.iter().all(|term| term.is_present_in(phrase))
    };
    if !matched {
        return Verdict::NoMatch;
    }

    match negation_terms.iter().find(|term| term.is_present_in(phrase)) {
        Some(negation) => Verdict::Suppressed(negation.clone()),
        None => Verdict::Fires,
    }
}

/// Match terms laid end to end, in order, form a window of the phrase.
fn contains_run(match_terms: &[Term], phrase: &[String]) -> bool {
    let run: Vec<String> = match_terms
        .iter()
        .flat_map(|term| term.tokens().iter().cloned())
        .collect();
    !run.is_empty() && phrase.windows(run.len()).any(|window| window == run.as_slice())
}

fn evaluate_exact(exact: &Term, polarity: Polarity, phrase: &[String]) -> Verdict {
    if !exact.equals_phrase(phrase) {
        return Verdict::NoMatch;
    }
    match polarity {
        Polarity::Include => Verdict::Fires,
        Polarity::Exclude => Verdict::Vetoes,
    }
}

/// Incremental resolver: feed it pages in fetch order, then finish.
///
/// Pages must arrive in strictly ascending tier order. Every page fed in is
/// applied in full; resolution never stops at the first match.
#[derive(Debug)]
pub struct Resolver<'a> {
    phrase: &'a SearchPhrase,
    merger: CategoryMerger,
    last_tier: Option<usize>,
}

impl<'a> Resolver<'a> {
    pub fn new(phrase: &'a SearchPhrase) -> Self {
        Resolver {
            phrase,
            merger: CategoryMerger::new(),
            last_tier: None,
        }
    }

    /// Apply every rule of a page, in rule order.
    pub fn apply_page(&mut self, page: &RulePage) {
        check_tier_follows(self.last_tier, page.word_count);
        self.last_tier = Some(page.word_count);

        let tokens = self.phrase.tokens();
        for rule in &page.rules {
            let verdict = evaluate(rule, tokens);
            trace!(
                target: "bestbets",
                tier = page.word_count,
                category = %rule.category_id,
                verdict = ?verdict,
                "rule evaluated"
            );
            match verdict {
                Verdict::Fires => {
                    self.merger.merge(&rule.category_id);
                }
                Verdict::Vetoes => {
                    if self.merger.veto(&rule.category_id) {
                        debug!(
                            target: "bestbets",
                            tier = page.word_count,
                            category = %rule.category_id,
                            "exact exclusion withdrew an earlier match"
                        );
                    }
                }
                Verdict::Suppressed(_) | Verdict::NoMatch => {}
            }
        }
    }

    pub fn finish(self) -> MatchResult {
        self.merger.into_result()
    }
}

/// Resolve a phrase against already-fetched pages.
pub fn resolve<'p>(phrase: &SearchPhrase, pages: impl IntoIterator<Item = &'p RulePage>) -> MatchResult {
    let mut resolver = Resolver::new(phrase);
    for page in pages {
        resolver.apply_page(page);
    }
    resolver.finish()
}
