// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matcher configuration.
//!
//! The surrounding service owns configuration; the matcher only needs to know
//! which languages exist and how to page through the index. Everything can be
//! built in code or read from a small JSON file:
//!
//! ```json
//! { "languages": ["en", "es"], "pageSize": 100, "maxWordCount": 8 }
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, MatchError};
use crate::types::Language;

/// Default number of rules requested per index round trip.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Languages the deployment supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSet {
    codes: Vec<Language>,
}

impl LanguageSet {
    /// Build from codes. Codes are trimmed and lowercased; blanks and
    /// duplicates are dropped.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<Language> = Vec::new();
        for code in codes {
            let code = code.as_ref().trim().to_lowercase();
            if code.is_empty() || out.iter().any(|l| l.as_str() == code) {
                continue;
            }
            out.push(Language::new_unchecked(code));
        }
        LanguageSet { codes: out }
    }

    /// Check a caller-supplied code. Case and surrounding whitespace are ignored.
    pub fn resolve(&self, code: &str) -> Result<Language, MatchError> {
        let wanted = code.trim().to_lowercase();
        self.codes
            .iter()
            .find(|l| l.as_str() == wanted)
            .cloned()
            .ok_or_else(|| MatchError::InvalidInput(code.to_string()))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for LanguageSet {
    fn default() -> Self {
        LanguageSet::new(["en", "es"])
    }
}

/// Settings for [`BestBetsMatcher`](crate::BestBetsMatcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherConfig {
    pub languages: LanguageSet,
    /// Rules requested per index round trip within one tier.
    pub page_size: usize,
    /// Highest tier ever queried. `None` queries up to the phrase's word count.
    pub max_word_count: Option<usize>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig {
            languages: LanguageSet::default(),
            page_size: DEFAULT_PAGE_SIZE,
            max_word_count: None,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigFile {
    languages: Vec<String>,
    #[serde(default)]
    page_size: Option<usize>,
    #[serde(default)]
    max_word_count: Option<usize>,
}

impl MatcherConfig {
    pub fn with_languages(mut self, languages: LanguageSet) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_max_word_count(mut self, max: usize) -> Self {
        self.max_word_count = Some(max);
        self
    }

    /// Last tier to query for a phrase of `word_count` words.
    pub fn last_tier(&self, word_count: usize) -> usize {
        match self.max_word_count {
            Some(max) => word_count.min(max),
            None => word_count,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.languages.is_empty() {
            return Err(ConfigError::NoLanguages);
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.max_word_count == Some(0) {
            return Err(ConfigError::ZeroMaxWordCount);
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(json)?;
        let config = MatcherConfig {
            languages: LanguageSet::new(&file.languages),
            page_size: file.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            max_word_count: file.max_word_count,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}
