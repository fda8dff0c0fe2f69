//! Language handling.

use super::common::{fixture_index, matches};
use bestbets::{BestBetsMatcher, LanguageSet, MatchError, MatcherConfig};
use std::sync::Arc;

#[test]
fn test_rules_are_per_language() {
    assert_eq!(matches("es", "pancoast"), vec!["36012"]);
    assert_eq!(matches("es", "Cáncer  SENO"), vec!["36408"]);
    assert!(matches("es", "breast cancer").is_empty());
    assert!(matches("en", "cáncer seno").is_empty());
}

#[test]
fn test_accents_are_kept_literal() {
    // "cancer" is neither the negation "cáncer" nor a match term for 36408.
    assert_eq!(matches("es", "cancer seno"), vec!["36055"]);
}

#[test]
fn test_exact_rule_behind_empty_tier() {
    // Tier 1 has no hits for this phrase, so the tier-3 exact rule is never fetched.
    assert!(matches("es", "cáncer de mama").is_empty());
}

#[test]
fn test_configured_languages_gate_requests() {
    let matcher = BestBetsMatcher::new(
        Arc::new(fixture_index()),
        MatcherConfig::default().with_languages(LanguageSet::new(["en"])),
    )
    .unwrap();
    assert!(matches!(
        matcher.get_matches("es", "pancoast"),
        Err(MatchError::InvalidInput(_))
    ));
    assert_eq!(matcher.get_matches("en", "pancoast").unwrap().ids(), vec!["36012"]);
}
