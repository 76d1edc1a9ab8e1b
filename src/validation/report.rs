// src/validation/report.rs
//! Per-field error regions, mirroring the page's named error containers.

use std::collections::BTreeMap;

use crate::form::FormField;

/// Messages destined for the page's error containers, keyed by container id.
///
/// A fresh report is created for every submit attempt with one empty region
/// per validated field — the equivalent of clearing every container before
/// re-validating. Messages within a region keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    regions: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report with every field's error region present and empty.
    pub fn with_cleared_regions() -> Self {
        let mut report = Self::default();
        for field in FormField::ALL {
            report
                .regions
                .insert(field.error_container().to_string(), Vec::new());
        }
        report
    }

    pub fn add_error(&mut self, field: FormField, message: impl Into<String>) {
        self.regions
            .entry(field.error_container().to_string())
            .or_default()
            .push(message.into());
    }

    /// True when no region holds a message.
    pub fn is_valid(&self) -> bool {
        self.regions.values().all(Vec::is_empty)
    }

    pub fn error_count(&self) -> usize {
        self.regions.values().map(Vec::len).sum()
    }

    pub fn messages_for(&self, field: FormField) -> &[String] {
        self.regions
            .get(field.error_container())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Terminal rendering: one line per message, prefixed with its container.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (container, messages) in &self.regions {
            for message in messages {
                out.push_str(container);
                out.push_str(": ");
                out.push_str(message);
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleared_regions_are_valid() {
        let report = ValidationReport::with_cleared_regions();
        assert!(report.is_valid());
        assert_eq!(report.error_count(), 0);
        assert!(report.messages_for(FormField::SearchTerms).is_empty());
    }

    #[test]
    fn test_add_error_marks_report_invalid() {
        let mut report = ValidationReport::with_cleared_regions();
        report.add_error(FormField::SearchTerms, "Must provide at least one search term.");
        assert!(!report.is_valid());
        assert_eq!(report.error_count(), 1);
        assert_eq!(
            report.messages_for(FormField::SearchTerms),
            &["Must provide at least one search term.".to_string()]
        );
        assert!(report.messages_for(FormField::SearchLocations).is_empty());
    }

    #[test]
    fn test_messages_keep_insertion_order() {
        let mut report = ValidationReport::new();
        report.add_error(FormField::KeywordWeights, "first");
        report.add_error(FormField::KeywordWeights, "second");
        assert_eq!(
            report.messages_for(FormField::KeywordWeights),
            &["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn test_render_text_skips_empty_regions() {
        let mut report = ValidationReport::with_cleared_regions();
        report.add_error(FormField::MinimumGoodResults, "'abc' is not a valid minimum good results value. Please provide a positive integer.");
        let rendered = report.render_text();
        assert_eq!(rendered.lines().count(), 1);
        assert!(rendered.starts_with("minimum-good-results-error-container: "));
    }
}
