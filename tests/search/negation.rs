//! Negation and exact-phrase behavior.

use super::common::{make_index, matches};
use bestbets::{BestBetRule, BestBetsMatcher, MatcherConfig};
use std::sync::Arc;

fn matcher(rules: Vec<BestBetRule>) -> BestBetsMatcher {
    BestBetsMatcher::new(Arc::new(make_index("en", rules)), MatcherConfig::default()).unwrap()
}

#[test]
fn test_negation_suppresses_only_its_rule() {
    // "breast changes" is negated by "cancer", "breast cancer" is not.
    assert_eq!(matches("en", "breast cancer"), vec!["36408"]);
    // Without "cancer" the tier-1 breast rules fire on their own.
    assert_eq!(matches("en", "breast"), vec!["36055", "36061", "36063"]);
}

#[test]
fn test_companion_word_disqualifies() {
    assert_eq!(matches("en", "breast lump"), vec!["36055", "36063"]);
}

#[test]
fn test_negated_two_word_rule() {
    // 36408 is negated by "male"; the adjacent "male breast" rule fires.
    assert_eq!(matches("en", "male breast cancer"), vec!["36410"]);
    // Adjacency: "breast male cancer" does not satisfy "male breast".
    assert!(matches("en", "breast male cancer").is_empty());
}

#[test]
fn test_multiword_negation_term() {
    // "fact sheet" negates the generic cancer rule only as a contiguous phrase.
    let m = matcher(vec![BestBetRule::contains_all("1", &["cancer"]).negated_by(&["fact sheet"])]);
    assert!(m.get_matches("en", "cancer fact sheet").unwrap().is_empty());
    assert_eq!(m.get_matches("en", "cancer sheet fact").unwrap().ids(), vec!["1"]);
}

#[test]
fn test_exact_phrase_fires_only_on_equality() {
    let m = matcher(vec![
        BestBetRule::contains_all("seer", &["seer"]),
        BestBetRule::exact_phrase("tool", "seer stat").unwrap(),
    ]);
    assert_eq!(m.get_matches("en", "Seer Stat").unwrap().ids(), vec!["seer", "tool"]);
    assert_eq!(m.get_matches("en", "seer stat software").unwrap().ids(), vec!["seer"]);
    assert_eq!(m.get_matches("en", "stat seer").unwrap().ids(), vec!["seer"]);
}

#[test]
fn test_exact_exclusion_overrides_every_tier() {
    let m = matcher(vec![
        BestBetRule::contains_all("36681", &["seer"]),
        BestBetRule::contains_all("36681", &["stat"]),
        BestBetRule::exact_exclusion("36681", "seer stat").unwrap(),
        BestBetRule::contains_all("other", &["stat"]),
    ]);
    assert_eq!(m.get_matches("en", "seer stat").unwrap().ids(), vec!["other"]);
    assert_eq!(m.get_matches("en", "seer").unwrap().ids(), vec!["36681"]);
}

#[test]
fn test_exact_exclusion_removes_earlier_and_same_tier_contributions() {
    let m = matcher(vec![
        BestBetRule::contains_all("filler", &["seer"]).negated_by(&["seer"]),
        BestBetRule::exact_exclusion("36681", "seer stat cancer").unwrap(),
        BestBetRule::contains_all("36681", &["seer", "cancer"]),
        BestBetRule::contains_all("36681", &["seer", "stat", "cancer"]),
    ]);
    assert!(m.get_matches("en", "seer stat cancer").unwrap().is_empty());
}

#[test]
fn test_duplicate_category_reported_once() {
    let m = matcher(vec![
        BestBetRule::contains_all("1", &["lung"]),
        BestBetRule::contains_all("2", &["cancer"]),
        BestBetRule::contains_all("1", &["cancer"]),
        BestBetRule::contains_all("1", &["lung", "cancer"]),
    ]);
    assert_eq!(m.get_matches("en", "lung cancer").unwrap().ids(), vec!["1", "2"]);
}
