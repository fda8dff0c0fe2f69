// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON rule corpus.
//!
//! The on-disk shape curators (or an export job) produce:
//!
//! ```json
//! {
//!   "version": 1,
//!   "languages": {
//!     "en": [
//!       { "kind": "contains", "category": "36012", "match": ["pancoast"] },
//!       { "kind": "contains", "category": "36408", "match": ["breast", "cancer"],
//!         "negate": ["male"] },
//!       { "kind": "exact", "category": "36681", "phrase": "seer stat", "exclude": true }
//!     ]
//!   }
//! }
//! ```
//!
//! Terms are normalized on load. `wordCount` is optional; when given it must
//! agree with the rule's positive side, since a rule filed under the wrong
//! tier is never fetched for the phrases it was written for.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::error::CorpusError;
use crate::types::{BestBetRule, CategoryId, Polarity, RuleKind, Term};

/// Corpus format version understood by this crate.
pub const CORPUS_VERSION: u32 = 1;

#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
struct CorpusFile {
    version: u32,
    #[serde(default)]
    languages: BTreeMap<String, Vec<RuleRecord>>,
}

// Unknown keys are errors: a misspelled "negate" or "exclude" would otherwise
// load as a rule that fires where it must not.
#[derive(Deserialize, Clone, Debug)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
enum RuleRecord {
    Contains {
        category: String,
        #[serde(rename = "match")]
        match_terms: Vec<String>,
        #[serde(default)]
        negate: Vec<String>,
        #[serde(default)]
        adjacent: bool,
        #[serde(default, rename = "wordCount")]
        word_count: Option<usize>,
    },
    Exact {
        category: String,
        phrase: String,
        #[serde(default)]
        exclude: bool,
        #[serde(default, rename = "wordCount")]
        word_count: Option<usize>,
    },
}

impl RuleRecord {
    fn into_rule(self, language: &str, index: usize) -> Result<BestBetRule, CorpusError> {
        let (category, kind, declared) = match self {
            RuleRecord::Contains {
                category,
                match_terms,
                negate,
                adjacent,
                word_count,
            } => {
                let kind = RuleKind::ContainsAll {
                    match_terms: match_terms.iter().filter_map(|t| Term::parse(t)).collect(),
                    negation_terms: negate.iter().filter_map(|t| Term::parse(t)).collect(),
                    adjacent,
                };
                (category, kind, word_count)
            }
            RuleRecord::Exact {
                category,
                phrase,
                exclude,
                word_count,
            } => {
                let Some(phrase) = Term::parse(&phrase) else {
                    return Err(CorpusError::NoMatchTerms { category, index });
                };
                let polarity = if exclude {
                    Polarity::Exclude
                } else {
                    Polarity::Include
                };
                (category, RuleKind::ExactPhrase { phrase, polarity }, word_count)
            }
        };

        let category = category.trim().to_string();
        if category.is_empty() {
            return Err(CorpusError::EmptyCategory {
                language: language.to_string(),
                index,
            });
        }

        let actual = kind.positive_word_count();
        if actual == 0 {
            return Err(CorpusError::NoMatchTerms { category, index });
        }
        if let Some(declared) = declared {
            if declared != actual {
                return Err(CorpusError::WordCountMismatch {
                    category,
                    index,
                    declared,
                    actual,
                });
            }
        }

        Ok(BestBetRule {
            category_id: CategoryId::new(category),
            word_count: actual,
            kind,
        })
    }
}

/// Validated rules, grouped by language, in corpus order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleCorpus {
    rules: HashMap<String, Vec<BestBetRule>>,
}

impl RuleCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add rules for a language. Rules keep the order given; tiers are taken
    /// from each rule as-is.
    pub fn with_rules(mut self, language: &str, rules: impl IntoIterator<Item = BestBetRule>) -> Self {
        self.rules
            .entry(language.trim().to_lowercase())
            .or_default()
            .extend(rules);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, CorpusError> {
        let file: CorpusFile = serde_json::from_str(json)?;
        if file.version != CORPUS_VERSION {
            return Err(CorpusError::UnsupportedVersion(file.version));
        }

        let mut rules = HashMap::new();
        for (language, records) in file.languages {
            let language = language.trim().to_lowercase();
            if language.is_empty() {
                return Err(CorpusError::EmptyLanguage);
            }
            let parsed = records
                .into_iter()
                .enumerate()
                .map(|(i, record)| record.into_rule(&language, i))
                .collect::<Result<Vec<_>, _>>()?;
            rules.entry(language).or_insert_with(Vec::new).extend(parsed);
        }
        Ok(RuleCorpus { rules })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Rules for a language code, in corpus order. Empty for unknown codes.
    pub fn rules(&self, language: &str) -> &[BestBetRule] {
        self.rules.get(language).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Language codes present, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }

    /// Rule count per tier for a language.
    pub fn tier_counts(&self, language: &str) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for rule in self.rules(language) {
            *counts.entry(rule.word_count).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
