// src/validation/characters.rs
//! Character rule shared by every free-text value on the customizations page.

use once_cell::sync::Lazy;
use regex::Regex;

// Letters, whitespace, hyphen and comma. One-or-more, so the empty string
// never qualifies.
static ENGLISH_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s,-]+$").expect("Invalid character-class pattern"));

/// True iff the entire string is built from the allowed characters.
pub fn is_english(value: &str) -> bool {
    ENGLISH_TEXT.is_match(value)
}

/// True iff every string in the slice passes [`is_english`].
pub fn all_english<S: AsRef<str>>(values: &[S]) -> bool {
    values.iter().all(|value| is_english(value.as_ref()))
}
