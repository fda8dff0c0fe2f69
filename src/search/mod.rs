// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Best bet matching: where the rules meet the query.
//!
//! Three stages, each in its own module. `query` normalizes the phrase,
//! `fetch` pulls rule tiers from the index until one comes back empty, and
//! `resolve` decides which rules fire. `matcher` strings them together
//! behind `get_matches`.

pub mod dedup;
pub mod fetch;
pub mod matcher;
pub mod query;
pub mod resolve;

pub use dedup::CategoryMerger;
pub use fetch::PageFetcher;
pub use matcher::BestBetsMatcher;
pub use query::normalize_phrase;
pub use resolve::{evaluate, resolve, Resolver, Verdict};
