// src/form/document.rs
//! Raw snapshot of the customizations form: the values the page's named
//! elements hold at the moment of submit, before any validation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Selected option values of one multi-select control, in selection order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MultiSelect {
    pub selected: Vec<String>,
}

impl MultiSelect {
    pub fn from_values<S: Into<String>>(values: Vec<S>) -> Self {
        Self {
            selected: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// One row of the dynamic keyword/weight table, exactly as typed. The weight
/// arrives as the number input's raw text so a non-numeric entry stays
/// representable until validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KeywordRow {
    pub keyword: String,
    pub weight: String,
}

impl KeywordRow {
    pub fn new(keyword: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            weight: weight.into(),
        }
    }
}

/// The whole form. Field names match the element ids on the page; every
/// value is raw input state (untrimmed, unparsed).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomizationsForm {
    #[serde(default)]
    pub search_terms: MultiSelect,
    #[serde(default)]
    pub search_locations: MultiSelect,
    #[serde(default)]
    pub excluded_locations: MultiSelect,
    #[serde(default)]
    pub excluded_industries: MultiSelect,
    #[serde(default)]
    pub excluded_companies: MultiSelect,
    #[serde(default)]
    pub excluded_job_titles: MultiSelect,
    /// Rows of the `keywordTable` body, in display order.
    #[serde(default)]
    pub keyword_table: Vec<KeywordRow>,
    /// Raw text of the minimum-good-results number input.
    #[serde(default)]
    pub minimum_good_results_per_search_per_location: String,
    /// Checkbox state; a checkbox cannot be invalid.
    #[serde(default)]
    pub include_hybrid_jobs: bool,
}

impl CustomizationsForm {
    /// Load a form document from disk, picking the format by extension
    /// (`.yaml`/`.yml` or `.json`).
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        let is_yaml = matches!(extension.as_deref(), Some("yaml") | Some("yml"));
        if !is_yaml && extension.as_deref() != Some("json") {
            anyhow::bail!(
                "Unsupported form document format: {}. Use .yaml, .yml or .json",
                path.display()
            );
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read form document: {}", path.display()))?;

        if is_yaml {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML form document: {}", path.display()))
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON form document: {}", path.display()))
        }
    }

    /// Starter document for `init`, mirroring the option lists the page
    /// ships with. Meant to be edited, not submitted as-is.
    pub fn starter() -> Self {
        Self {
            search_terms: MultiSelect::from_values(vec!["Software Engineer"]),
            search_locations: MultiSelect::from_values(vec!["Remote"]),
            excluded_locations: MultiSelect::default(),
            excluded_industries: MultiSelect::from_values(vec!["Staffing and Recruiting"]),
            excluded_companies: MultiSelect::default(),
            excluded_job_titles: MultiSelect::default(),
            keyword_table: vec![
                KeywordRow::new("python", "5"),
                KeywordRow::new("rust", "3"),
            ],
            minimum_good_results_per_search_per_location: "10".to_string(),
            include_hybrid_jobs: true,
        }
    }
}
