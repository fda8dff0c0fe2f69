//! Failure outcomes: bad input, index trouble, cancellation.
//!
//! None of these may degrade into an empty or partial result.

use super::common::{fixture_index, spied_matcher, FailingIndex, ScriptedIndex};
use bestbets::{
    BestBetRule, BestBetsMatcher, CancelToken, IndexError, MatchError, MatcherConfig, PageQuery,
    RuleHits, RuleIndex,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_unsupported_language_issues_no_query() {
    let (matcher, spy) = spied_matcher(MatcherConfig::default());
    let err = matcher.get_matches("fr", "pancoast").unwrap_err();
    assert!(matches!(err, MatchError::InvalidInput(ref code) if code == "fr"));
    assert_eq!(spy.count(), 0);
}

#[test]
fn test_index_failure_on_later_tier_fails_request() {
    // Tier 1 succeeds (and would contribute nothing for this phrase), tier 2 fails.
    let index = FailingIndex::new(fixture_index(), 1, IndexError::Unavailable("connection reset".into()));
    let matcher = BestBetsMatcher::new(Arc::new(index), MatcherConfig::default()).unwrap();
    match matcher.get_matches("en", "breast cancer") {
        Err(MatchError::Query(IndexError::Unavailable(msg))) => assert_eq!(msg, "connection reset"),
        other => panic!("Expected Query(Unavailable), got {:?}", other),
    }
}

#[test]
fn test_failure_after_contribution_is_not_partial() {
    // "breast" alone fires on tier 1; a failure on the next chunk must still fail.
    let index = FailingIndex::new(fixture_index(), 1, IndexError::Timeout(Duration::from_millis(500)));
    let config = MatcherConfig::default().with_page_size(1);
    let matcher = BestBetsMatcher::new(Arc::new(index), config).unwrap();
    let err = matcher.get_matches("en", "breast").unwrap_err();
    assert!(matches!(err, MatchError::Query(IndexError::Timeout(_))));
    assert!(err.is_retryable());
}

#[test]
fn test_wrong_tier_response_is_malformed() {
    let index = ScriptedIndex::new(RuleHits {
        total: 1,
        rules: vec![BestBetRule::contains_all("36408", &["breast", "cancer"])],
    });
    let matcher = BestBetsMatcher::new(Arc::new(index), MatcherConfig::default()).unwrap();
    let err = matcher.get_matches("en", "breast cancer").unwrap_err();
    assert!(matches!(
        err,
        MatchError::Query(IndexError::Malformed { word_count: 1, .. })
    ));
}

#[test]
fn test_overfull_chunk_is_malformed() {
    let index = ScriptedIndex::new(RuleHits {
        total: 1,
        rules: vec![
            BestBetRule::contains_all("1", &["breast"]),
            BestBetRule::contains_all("2", &["breast"]),
        ],
    });
    let matcher = BestBetsMatcher::new(Arc::new(index), MatcherConfig::default()).unwrap();
    assert!(matches!(
        matcher.get_matches("en", "breast"),
        Err(MatchError::Query(IndexError::Malformed { .. }))
    ));
}

/// Cancels the shared token while answering its first query.
struct CancelOnFirstQuery {
    inner: bestbets::MemoryRuleIndex,
    token: CancelToken,
    calls: AtomicUsize,
}

impl RuleIndex for CancelOnFirstQuery {
    fn query(&self, query: &PageQuery) -> Result<RuleHits, IndexError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.token.cancel();
        self.inner.query(query)
    }
}

#[test]
fn test_cancellation_mid_request_stops_querying() {
    let token = CancelToken::new();
    let index = Arc::new(CancelOnFirstQuery {
        inner: fixture_index(),
        token: token.clone(),
        calls: AtomicUsize::new(0),
    });
    let matcher = BestBetsMatcher::new(index.clone(), MatcherConfig::default()).unwrap();

    let result = matcher.get_matches_with_cancel("en", "seer stat fact sheet", &token);
    assert!(matches!(result, Err(MatchError::Cancelled)));
    assert_eq!(index.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_cancellation_after_last_tier_still_cancelled() {
    // Single-word phrase: the only query runs, then the token is seen as set.
    let token = CancelToken::new();
    let index = Arc::new(CancelOnFirstQuery {
        inner: fixture_index(),
        token: token.clone(),
        calls: AtomicUsize::new(0),
    });
    let matcher = BestBetsMatcher::new(index, MatcherConfig::default()).unwrap();
    assert!(matches!(
        matcher.get_matches_with_cancel("en", "pancoast", &token),
        Err(MatchError::Cancelled)
    ));
}

#[test]
fn test_uncancelled_token_changes_nothing() {
    let (matcher, _) = spied_matcher(MatcherConfig::default());
    let token = CancelToken::new();
    let result = matcher.get_matches_with_cancel("en", "breast cancer", &token).unwrap();
    assert_eq!(result.ids(), vec!["36408"]);
}
