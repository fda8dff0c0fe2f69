//! Query normalizer: raw text plus language code in, [`SearchPhrase`] out.

use crate::config::LanguageSet;
use crate::error::MatchError;
use crate::types::SearchPhrase;
use crate::utils::normalize;

/// Check the language and tokenize the text.
///
/// Only the language can be rejected. Empty or blank text is valid and
/// yields a phrase with no tokens, which can never match anything.
pub fn normalize_phrase(raw: &str, language: &str, languages: &LanguageSet) -> Result<SearchPhrase, MatchError> {
    let language = languages.resolve(language)?;
    Ok(SearchPhrase::new(language, normalize(raw)))
}
