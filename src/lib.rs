//! Best bet resolution over curated, paged term/negation rules.
//!
//! Given a free-text search phrase and a language, decide which editorially
//! curated "best bet" categories the phrase satisfies. Curators file rules in
//! tiers by how many words they match; each rule either requires a set of
//! terms (and is suppressed by its negation terms) or answers to one exact
//! phrase.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ search/query │────▶│ search/fetch │────▶│search/resolve│
//! │ (normalize,  │     │ (tier 1..=n, │     │ (per-rule    │
//! │  language)   │     │  stop empty) │     │  verdicts)   │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │                    │
//!                             ▼                    ▼
//!                      ┌──────────────┐     ┌──────────────┐
//!                      │    index     │     │ search/dedup │
//!                      │ (RuleIndex,  │     │ (ordered,    │
//!                      │  corpus)     │     │  vetoes)     │
//!                      └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use bestbets::{BestBetRule, BestBetsMatcher, MatcherConfig, MemoryRuleIndex, RuleCorpus};
//!
//! let corpus = RuleCorpus::new().with_rules(
//!     "en",
//!     [
//!         BestBetRule::contains_all("36012", &["pancoast"]),
//!         BestBetRule::contains_all("36681", &["seer"]).negated_by(&["stat"]),
//!     ],
//! );
//! let index = Arc::new(MemoryRuleIndex::new(corpus));
//! let matcher = BestBetsMatcher::new(index, MatcherConfig::default()).unwrap();
//!
//! assert_eq!(matcher.get_matches("en", "Pancoast").unwrap().ids(), vec!["36012"]);
//! assert!(matcher.get_matches("en", "seer stat").unwrap().is_empty());
//! ```

// Module declarations
mod cancel;
mod config;
pub mod contracts;
mod error;
pub mod index;
pub mod search;
mod types;
mod utils;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use cancel::CancelToken;
pub use config::{LanguageSet, MatcherConfig, DEFAULT_PAGE_SIZE};
pub use error::{ConfigError, CorpusError, IndexError, MatchError};
pub use index::{MemoryRuleIndex, PageQuery, RuleCorpus, RuleHits, RuleIndex, CORPUS_VERSION};
pub use search::{evaluate, normalize_phrase, resolve, BestBetsMatcher, PageFetcher, Resolver, Verdict};
pub use types::{
    BestBetRule, CategoryId, Language, MatchResult, Polarity, RuleKind, RulePage, SearchPhrase, Term,
};
pub use utils::normalize;
