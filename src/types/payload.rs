// src/types/payload.rs
//! Wire entity posted to the save endpoint. Field order matches the page's
//! JSON object exactly.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Experience levels the search includes. The page ships this as a fixed
/// constant rather than reading toggle state, so the client does the same.
pub fn default_experience_levels() -> BTreeMap<String, bool> {
    [
        ("Associate", true),
        ("Director", false),
        ("Entry level", true),
        ("Internship", false),
        ("Mid-Senior level", true),
    ]
    .into_iter()
    .map(|(level, included)| (level.to_string(), included))
    .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomizationsPayload {
    pub searches: Vec<String>,
    pub locations: Vec<String>,
    pub excluded_locations: Vec<String>,
    pub excluded_industries: Vec<String>,
    pub excluded_companies: Vec<String>,
    pub excluded_title_keywords: Vec<String>,
    pub word_weights: BTreeMap<String, i64>,
    pub minimum_good_results_per_search_per_location: i64,
    pub include_hybrid_jobs: bool,
    pub experience_levels: BTreeMap<String, bool>,
}

/// Drop repeated values, keeping the first occurrence's position.
pub fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
