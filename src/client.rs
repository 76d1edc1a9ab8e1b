// src/client.rs
//! HTTP client for the customizations endpoints - JSON in, JSON out.

use anyhow::{Context, Result};
use tracing::{error, info, trace};

use crate::types::{CustomizationsPayload, SaveResponse};

const SAVE_CUSTOMIZATIONS_ENDPOINT: &str = "/save_customizations";
const CUSTOMIZATIONS_PAGE_ENDPOINT: &str = "/customizations";

pub struct CustomizationsClient {
    client: reqwest::Client,
    base_url: String,
}

impl CustomizationsClient {
    /// Create new client with configuration
    pub fn new(base_url: String, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// POST the payload to the save endpoint and check the server's verdict.
    pub async fn save_customizations(&self, payload: &CustomizationsPayload) -> Result<SaveResponse> {
        let url = format!("{}{}", self.base_url, SAVE_CUSTOMIZATIONS_ENDPOINT);

        info!("Posting customizations to {}", url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        let status = response.status();
        trace!("Response status: {}", status);

        if status.is_success() {
            let save_response: SaveResponse = response
                .json()
                .await
                .context("Failed to parse save response")?;

            if save_response.is_success() {
                Ok(save_response)
            } else {
                anyhow::bail!("Saving customizations failed: {}", save_response.status)
            }
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!("Save endpoint error response: {}", error_text);
            anyhow::bail!("Server returned error status {}: {}", status, error_text)
        }
    }

    /// GET the customizations page the browser is redirected to on success.
    pub async fn fetch_customizations_page(&self) -> Result<String> {
        let url = format!("{}{}", self.base_url, CUSTOMIZATIONS_PAGE_ENDPOINT);

        trace!("Fetching customizations page: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        let status = response.status();
        if status.is_success() {
            response
                .text()
                .await
                .context("Failed to read customizations page body")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("HTTP {} error: {}", status, error_text)
        }
    }

    /// Path a successful save redirects to, relative to the server root.
    pub fn redirect_path() -> &'static str {
        CUSTOMIZATIONS_PAGE_ENDPOINT
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_builds_with_timeout() {
        let client = CustomizationsClient::new("http://127.0.0.1:9090".to_string(), 30).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9090");
    }

    #[test]
    fn test_redirect_path_is_the_customizations_page() {
        assert_eq!(CustomizationsClient::redirect_path(), "/customizations");
    }
}
