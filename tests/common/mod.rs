//! Shared test utilities and fixtures.

#![allow(dead_code)]

use bestbets::testing::CountingIndex;
use bestbets::{BestBetsMatcher, MatcherConfig, MemoryRuleIndex, RuleCorpus};
use std::sync::{Arc, LazyLock};

// Re-export canonical test utilities from bestbets::testing
pub use bestbets::testing::{make_index, FailingIndex, ScriptedIndex};

/// Fixture corpus with the curated English and Spanish rules the scenario
/// tests rely on.
pub const FIXTURE_CORPUS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/fixtures/bestbets.json");

/// Parsed once per test binary.
static CORPUS: LazyLock<RuleCorpus> =
    LazyLock::new(|| RuleCorpus::from_path(FIXTURE_CORPUS).expect("Failed to load fixture corpus"));

pub fn fixture_corpus() -> RuleCorpus {
    CORPUS.clone()
}

pub fn fixture_index() -> MemoryRuleIndex {
    MemoryRuleIndex::new(fixture_corpus())
}

/// Matcher over the fixture corpus with default configuration.
pub fn fixture_matcher() -> BestBetsMatcher {
    BestBetsMatcher::new(Arc::new(fixture_index()), MatcherConfig::default()).unwrap()
}

/// Matcher over the fixture corpus, plus the spy it queries through.
pub fn spied_matcher(config: MatcherConfig) -> (BestBetsMatcher, Arc<CountingIndex<MemoryRuleIndex>>) {
    let spy = Arc::new(CountingIndex::new(fixture_index()));
    (BestBetsMatcher::new(spy.clone(), config).unwrap(), spy)
}

/// Run a phrase through the fixture matcher and return plain ids.
pub fn matches(language: &str, term: &str) -> Vec<String> {
    fixture_matcher()
        .get_matches(language, term)
        .expect("get_matches failed")
        .ids()
        .into_iter()
        .map(str::to_string)
        .collect()
}
