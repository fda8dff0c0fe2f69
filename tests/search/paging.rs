//! Tier paging: ascending order, early termination, chunked tiers.

use super::common::{fixture_matcher, make_index, spied_matcher};
use bestbets::testing::CountingIndex;
use bestbets::{BestBetRule, BestBetsMatcher, MatcherConfig};
use std::sync::Arc;

#[test]
fn test_empty_tier_hides_later_matches() {
    // Tier 3 holds a rule for "superior sulcus tumor", but tier 2 has no hits
    // for this phrase, so tier 3 is never consulted.
    let (matcher, spy) = spied_matcher(MatcherConfig::default());
    let result = matcher.get_matches("en", "pancoast superior sulcus tumor").unwrap();
    assert_eq!(result.ids(), vec!["36012"]);
    assert_eq!(spy.tiers(), vec![1, 2]);
}

#[test]
fn test_rule_behind_empty_first_tier_unreachable() {
    // The tier-3 rule matches this phrase exactly, but tier 1 has no hits.
    let result = fixture_matcher().get_matches("en", "superior sulcus tumor").unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_tiers_never_exceed_word_count() {
    let (matcher, spy) = spied_matcher(MatcherConfig::default());
    matcher.get_matches("en", "breast cancer").unwrap();
    assert!(spy.tiers().iter().all(|t| *t <= 2));
}

#[test]
fn test_tier_collected_across_chunks() {
    let (matcher, spy) = spied_matcher(MatcherConfig::default().with_page_size(1));
    let result = matcher.get_matches("en", "breast").unwrap();
    assert_eq!(result.ids(), vec!["36055", "36061", "36063"]);

    let offsets: Vec<usize> = spy.queries().iter().map(|q| q.from).collect();
    assert_eq!(offsets, vec![0, 1, 2]);
    assert!(spy.queries().iter().all(|q| q.size == 1));
}

#[test]
fn test_chunk_size_does_not_change_result() {
    for page_size in [1, 2, 3, 100] {
        let (matcher, _) = spied_matcher(MatcherConfig::default().with_page_size(page_size));
        assert_eq!(
            matcher.get_matches("en", "breast cancer treatment").unwrap().ids(),
            vec!["36408"],
            "page size {}",
            page_size
        );
    }
}

#[test]
fn test_max_word_count_caps_tiers() {
    let (matcher, spy) = spied_matcher(MatcherConfig::default().with_max_word_count(2));
    let result = matcher.get_matches("en", "seer stat fact sheet").unwrap();
    assert!(result.is_empty());
    assert_eq!(spy.tiers(), vec![1, 2]);
}

#[test]
fn test_queries_carry_normalized_phrase() {
    let (matcher, spy) = spied_matcher(MatcherConfig::default());
    matcher.get_matches("EN", "  Seer   STAT ").unwrap();
    for query in spy.queries() {
        assert_eq!(query.tokens, vec!["seer", "stat"]);
        assert_eq!(query.language.as_str(), "en");
    }
}

#[test]
fn test_every_fetched_tier_contributes() {
    let spy = Arc::new(CountingIndex::new(make_index(
        "en",
        [
            BestBetRule::contains_all("a", &["lung"]),
            BestBetRule::contains_all("b", &["lung", "cancer"]),
            BestBetRule::contains_all("c", &["lung", "cancer", "screening"]),
        ],
    )));
    let matcher = BestBetsMatcher::new(spy.clone(), MatcherConfig::default()).unwrap();
    let result = matcher.get_matches("en", "lung cancer screening").unwrap();
    assert_eq!(result.ids(), vec!["a", "b", "c"]);
    assert_eq!(spy.count(), 3);
}
