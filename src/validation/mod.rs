// src/validation/mod.rs
pub mod characters;
pub mod field_reader;
pub mod keyword_weights;
pub mod report;

pub use characters::{all_english, is_english};
pub use field_reader::{read_multi_select, FieldReadError};
pub use keyword_weights::{read_keyword_weights, KeywordWeightError};
pub use report::ValidationReport;
