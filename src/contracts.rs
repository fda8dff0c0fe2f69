//! Runtime contracts for the paging and resolution invariants.
//!
//! Debug-mode assertions only: zero cost in release builds, loud failures
//! during development and in tests.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Invariant                                         |
//! |--------------------------|---------------------------------------------------|
//! | `check_tier_follows`     | Tiers are consulted in strictly ascending order   |
//! | `check_page_well_formed` | Every rule on a page belongs to the page's tier   |
//! | `check_result_unique`    | A category appears at most once in a result       |

use std::collections::HashSet;

use crate::types::{CategoryId, RulePage};

/// Check that tier `next` may follow tier `prev`.
///
/// # Panics (debug builds only)
/// Panics if `next <= prev`, or if the first tier is 0.
#[inline]
pub fn check_tier_follows(prev: Option<usize>, next: usize) {
    debug_assert!(next >= 1, "tier 0 is never queried");
    if let Some(prev) = prev {
        debug_assert!(
            next > prev,
            "tiers must ascend: tier {} after tier {}",
            next,
            prev
        );
    }
}

/// Check that every rule on a page is filed under the page's tier.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_page_well_formed(page: &RulePage) {
    for rule in &page.rules {
        debug_assert_eq!(
            rule.word_count, page.word_count,
            "rule for category {} filed under tier {} but page is tier {}",
            rule.category_id, rule.word_count, page.word_count
        );
    }
    debug_assert!(
        page.rules.len() <= page.total_hits,
        "page holds {} rules but reports {} hits",
        page.rules.len(),
        page.total_hits
    );
}

/// Check that a result has no duplicate categories.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_result_unique(categories: &[CategoryId]) {
    if cfg!(debug_assertions) {
        let mut seen = HashSet::with_capacity(categories.len());
        for category in categories {
            debug_assert!(seen.insert(category), "duplicate category {} in result", category);
        }
    }
}
