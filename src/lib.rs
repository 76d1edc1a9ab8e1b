//! Client for the job-search customizations page: load a form document,
//! validate it field by field, and post the resulting payload to the server.

use anyhow::Result;

pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod form;
pub mod types;
pub mod validation;

pub use client::CustomizationsClient;
pub use config::ClientConfig;
pub use controller::{validate_form, SubmissionController, SubmitOutcome};
pub use form::CustomizationsForm;
pub use types::CustomizationsPayload;
pub use validation::ValidationReport;

/// Convenience function: run one submit attempt against a configured server.
pub async fn submit_form(form: &CustomizationsForm, config: ClientConfig) -> Result<SubmitOutcome> {
    let client = CustomizationsClient::new(config.server_url, config.timeout_seconds)?;
    let controller = SubmissionController::new(client);
    Ok(controller.submit(form).await)
}
