// src/validation/keyword_weights.rs
//! Row-wise read of the dynamic keyword/weight table.

use std::collections::BTreeMap;
use std::fmt;

use crate::form::KeywordRow;
use crate::validation::characters::is_english;

/// First failing row of the table. Carries the exact message the page renders
/// in the keyword-weights error container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordWeightError {
    InvalidKeyword { keyword: String },
    InvalidWeight { raw_weight: String },
    DuplicateKeyword { keyword: String },
}

impl fmt::Display for KeywordWeightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeywordWeightError::InvalidKeyword { keyword } => write!(
                f,
                "'{}' is not a valid keyword. Keywords must be English characters.",
                keyword
            ),
            KeywordWeightError::InvalidWeight { raw_weight } => write!(
                f,
                "'{}' is not a valid weight. Weights must be integers.",
                raw_weight
            ),
            KeywordWeightError::DuplicateKeyword { keyword } => write!(
                f,
                "'{}' is a duplicate keyword. Please provide a unique keyword.",
                keyword
            ),
        }
    }
}

/// Build the keyword → weight map from the table rows, in display order.
///
/// The read aborts on the first failing row, so at most one keyword error
/// surfaces per submit attempt. An empty table is a valid empty map.
pub fn read_keyword_weights(
    rows: &[KeywordRow],
) -> Result<BTreeMap<String, i64>, KeywordWeightError> {
    let mut weights = BTreeMap::new();

    for row in rows {
        let keyword = row.keyword.trim().to_string();
        if !is_english(&keyword) {
            return Err(KeywordWeightError::InvalidKeyword { keyword });
        }

        let raw_weight = row.weight.trim();
        let weight: i64 = raw_weight
            .parse()
            .map_err(|_| KeywordWeightError::InvalidWeight {
                raw_weight: raw_weight.to_string(),
            })?;

        if weights.contains_key(&keyword) {
            return Err(KeywordWeightError::DuplicateKeyword { keyword });
        }

        weights.insert(keyword, weight);
    }

    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(pairs: &[(&str, &str)]) -> Vec<KeywordRow> {
        pairs
            .iter()
            .map(|(keyword, weight)| KeywordRow::new(*keyword, *weight))
            .collect()
    }

    #[test]
    fn test_empty_table_is_a_valid_empty_map() {
        assert_eq!(read_keyword_weights(&[]), Ok(BTreeMap::new()));
    }

    #[test]
    fn test_reads_trimmed_keywords_and_parsed_weights() {
        let weights = read_keyword_weights(&rows(&[(" python ", " 5 "), ("rust", "3")])).unwrap();
        assert_eq!(weights.get("python"), Some(&5));
        assert_eq!(weights.get("rust"), Some(&3));
        assert_eq!(weights.len(), 2);
    }

    #[test]
    fn test_rejects_non_english_keyword() {
        let err = read_keyword_weights(&rows(&[("c++", "5")])).unwrap_err();
        assert_eq!(
            err,
            KeywordWeightError::InvalidKeyword {
                keyword: "c++".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "'c++' is not a valid keyword. Keywords must be English characters."
        );
    }

    #[test]
    fn test_rejects_non_integer_weight() {
        let err = read_keyword_weights(&rows(&[("python", "five")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'five' is not a valid weight. Weights must be integers."
        );
        // Strict base-10: no float, no trailing garbage.
        assert!(read_keyword_weights(&rows(&[("python", "5.0")])).is_err());
        assert!(read_keyword_weights(&rows(&[("python", "5abc")])).is_err());
        assert!(read_keyword_weights(&rows(&[("python", "")])).is_err());
    }

    #[test]
    fn test_negative_weights_are_integers() {
        let weights = read_keyword_weights(&rows(&[("recruiter", "-10")])).unwrap();
        assert_eq!(weights.get("recruiter"), Some(&-10));
    }

    #[test]
    fn test_rejects_duplicate_keyword() {
        let err = read_keyword_weights(&rows(&[("python", "3"), ("python", "5")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'python' is a duplicate keyword. Please provide a unique keyword."
        );
    }

    #[test]
    fn test_duplicate_detected_after_trimming() {
        let err = read_keyword_weights(&rows(&[("python", "3"), (" python ", "5")])).unwrap_err();
        assert_eq!(
            err,
            KeywordWeightError::DuplicateKeyword {
                keyword: "python".to_string()
            }
        );
    }

    #[test]
    fn test_aborts_on_first_failing_row() {
        // Row two fails on its weight before row three's bad keyword is seen.
        let err = read_keyword_weights(&rows(&[
            ("python", "5"),
            ("sql", "x"),
            ("c#", "1"),
        ]))
        .unwrap_err();
        assert!(matches!(err, KeywordWeightError::InvalidWeight { .. }));
    }
}
