//! Query normalization.

/// Normalize a string for matching: lowercase, trim, and split on whitespace.
///
/// Rules match on literal token equality, so this is deliberately minimal:
/// - "Breast  Cancer" → ["breast", "cancer"]
/// - "  PANCOAST\t" → ["pancoast"]
/// - "   " → []
///
/// No stemming, no stop words, no diacritic folding. A curator who writes
/// "tumour" gets "tumour", not "tumor".
pub fn normalize(value: &str) -> Vec<String> {
    value
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
