// src/types/response.rs

use serde::{Deserialize, Serialize};

/// Body of the save endpoint's reply. The server answers
/// `{"status": "success"}` when the customizations were written.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub status: String,
}

impl SaveResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
