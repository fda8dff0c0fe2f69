//! The curated phrases the service is expected to answer.
//!
//! Each case runs end to end: normalization, tier fetching through the
//! fixture index, and resolution.

use super::common::{matches, spied_matcher};
use bestbets::MatcherConfig;

/// (phrase, expected categories, index queries issued)
const CASES: &[(&str, &[&str], usize)] = &[
    // One word, one tier, one rule.
    ("pancoast", &["36012"], 1),
    // The category lives on tier 2; every tier-1 "breast" rule is negated by "cancer".
    ("breast cancer", &["36408"], 2),
    // Tier 3 comes back empty and is the last one queried.
    ("breast cancer treatment", &["36408"], 3),
    // Acronym collision: the broad SEER rule is negated and the exact
    // exclusion on tier 2 fires.
    ("seer stat", &[], 2),
    // The exact exclusion does not apply to a longer phrase; the tier-3
    // SEER rule fires instead. Tier 4 is empty.
    ("seer stat fact sheet", &["36681"], 4),
];

#[test]
fn test_curated_phrases_resolve() {
    for (phrase, expected, _) in CASES {
        assert_eq!(
            matches("en", phrase),
            expected.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
            "phrase '{}'",
            phrase
        );
    }
}

#[test]
fn test_curated_phrases_query_expected_tiers() {
    for (phrase, _, queries) in CASES {
        let (matcher, spy) = spied_matcher(MatcherConfig::default());
        matcher.get_matches("en", phrase).unwrap();
        assert_eq!(spy.count(), *queries, "phrase '{}'", phrase);
        let expected_tiers: Vec<usize> = (1..=*queries).collect();
        assert_eq!(spy.tiers(), expected_tiers, "phrase '{}'", phrase);
    }
}

#[test]
fn test_case_and_spacing_do_not_matter() {
    assert_eq!(matches("en", "  BREAST\tCancer "), vec!["36408"]);
    assert_eq!(matches("EN", "Pancoast"), vec!["36012"]);
}

#[test]
fn test_unmatched_phrase_is_empty_not_error() {
    assert!(matches("en", "hodgkin lymphoma").is_empty());
    assert!(matches("en", "").is_empty());
    assert!(matches("en", "   ").is_empty());
}

#[test]
fn test_repeated_calls_are_identical() {
    let first = matches("en", "seer stat fact sheet");
    for _ in 0..5 {
        assert_eq!(matches("en", "seer stat fact sheet"), first);
    }
}
