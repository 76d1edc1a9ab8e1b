// src/validation/field_reader.rs
//! Multi-select extraction with the page's empty-allowed semantics.

use crate::form::MultiSelect;
use crate::validation::characters::all_english;

/// Why a multi-select read was rejected. The controller maps each reason to
/// the field's fixed message, so the enum stays bare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldReadError {
    /// Required field with zero selections.
    Empty,
    /// At least one selected value fails the character rule.
    NotEnglish,
}

/// Read a multi-select: trim every selected value, enforce `empty_allowed`,
/// then run the character rule over the whole set.
pub fn read_multi_select(
    field: &MultiSelect,
    empty_allowed: bool,
) -> Result<Vec<String>, FieldReadError> {
    let values: Vec<String> = field
        .selected
        .iter()
        .map(|value| value.trim().to_string())
        .collect();

    if values.is_empty() {
        return if empty_allowed {
            Ok(values)
        } else {
            Err(FieldReadError::Empty)
        };
    }

    if !all_english(&values) {
        return Err(FieldReadError::NotEnglish);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(values: &[&str]) -> MultiSelect {
        MultiSelect::from_values(values.to_vec())
    }

    #[test]
    fn test_required_field_with_no_selection_is_empty() {
        assert_eq!(
            read_multi_select(&select(&[]), false),
            Err(FieldReadError::Empty)
        );
    }

    #[test]
    fn test_optional_field_with_no_selection_is_valid() {
        assert_eq!(read_multi_select(&select(&[]), true), Ok(vec![]));
    }

    #[test]
    fn test_values_are_trimmed() {
        assert_eq!(
            read_multi_select(&select(&["  Remote ", "New York"]), false),
            Ok(vec!["Remote".to_string(), "New York".to_string()])
        );
    }

    #[test]
    fn test_non_english_value_rejects_whole_field() {
        assert_eq!(
            read_multi_select(&select(&["Remote", "São Paulo"]), false),
            Err(FieldReadError::NotEnglish)
        );
        // Optional fields still validate whatever they hold.
        assert_eq!(
            read_multi_select(&select(&["C++"]), true),
            Err(FieldReadError::NotEnglish)
        );
    }

    #[test]
    fn test_value_that_trims_to_empty_is_not_english() {
        // "   " trims to "", which the one-or-more character rule rejects.
        assert_eq!(
            read_multi_select(&select(&["   "]), false),
            Err(FieldReadError::NotEnglish)
        );
    }

    #[test]
    fn test_duplicates_survive_the_read() {
        // De-duplication happens at payload construction, not here.
        assert_eq!(
            read_multi_select(&select(&["Remote", "Remote"]), false),
            Ok(vec!["Remote".to_string(), "Remote".to_string()])
        );
    }
}
