// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! A request either produces a complete [`MatchResult`](crate::MatchResult) or
//! one of the [`MatchError`] outcomes. There is no third option: an index
//! failure halfway through the tiers is a failure, not an empty result,
//! because "no best bet" is a legitimate answer and must stay unambiguous.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a whole `get_matches` request.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Language code is not configured. No query was issued.
    #[error("unsupported language '{0}'")]
    InvalidInput(String),
    /// The rule index failed; the request is abandoned.
    #[error("rule index query failed: {0}")]
    Query(#[from] IndexError),
    /// The caller cancelled before resolution finished.
    #[error("request cancelled")]
    Cancelled,
}

impl MatchError {
    /// True for outcomes worth retrying (index trouble), false for bad input
    /// or caller-initiated aborts.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            MatchError::Query(IndexError::Unavailable(_) | IndexError::Timeout(_))
        )
    }
}

/// Failure reported by (or detected in the responses of) a rule index.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The index could not be reached.
    #[error("index unavailable: {0}")]
    Unavailable(String),
    /// The index did not answer in time.
    #[error("index timed out after {0:?}")]
    Timeout(std::time::Duration),
    /// The response does not make sense for the query that was sent.
    #[error("malformed index response for tier {word_count}: {reason}")]
    Malformed { word_count: usize, reason: String },
}

/// Failure loading or validating a rule corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid corpus JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported corpus version {0}")]
    UnsupportedVersion(u32),
    #[error("empty language code in corpus")]
    EmptyLanguage,
    #[error("rule #{index} in '{language}' has an empty category")]
    EmptyCategory { language: String, index: usize },
    #[error("rule #{index} for category {category} has no usable match terms")]
    NoMatchTerms { category: String, index: usize },
    #[error("rule #{index} for category {category} declares {declared} words but matches {actual}")]
    WordCountMismatch {
        category: String,
        index: usize,
        declared: usize,
        actual: usize,
    },
}

/// Failure loading matcher configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config lists no languages")]
    NoLanguages,
    #[error("pageSize must be at least 1")]
    ZeroPageSize,
    #[error("maxWordCount must be at least 1")]
    ZeroMaxWordCount,
}
