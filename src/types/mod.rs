// src/types/mod.rs
pub mod payload;
pub mod response;

pub use payload::{default_experience_levels, dedup_preserving_order, CustomizationsPayload};
pub use response::SaveResponse;
