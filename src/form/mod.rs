// src/form/mod.rs
pub mod document;
pub mod fields;

pub use document::{CustomizationsForm, KeywordRow, MultiSelect};
pub use fields::FormField;
