// src/controller.rs
//! The submit state machine: validate every field, build the payload only
//! when the whole form passed, post it, and surface whatever went wrong.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, error, info};

use crate::client::CustomizationsClient;
use crate::form::{CustomizationsForm, FormField};
use crate::types::{
    dedup_preserving_order, default_experience_levels, CustomizationsPayload,
};
use crate::validation::{
    read_keyword_weights, read_multi_select, ValidationReport,
};

const SEARCH_TERMS_MESSAGE: &str =
    "Must provide at least one search term and all search terms must be English characters.";
const SEARCH_LOCATIONS_MESSAGE: &str =
    "Must provide at least one location and all locations must be English characters.";
const EXCLUDED_LOCATIONS_MESSAGE: &str = "All excluded locations must be English characters.";
const EXCLUDED_INDUSTRIES_MESSAGE: &str = "All excluded industries must be English characters.";
const EXCLUDED_COMPANIES_MESSAGE: &str = "All excluded companies must be English characters.";
const EXCLUDED_JOB_TITLES_MESSAGE: &str = "All excluded job titles must be English characters.";

/// Result of one submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Payload accepted; the caller should navigate to `redirect`.
    Accepted { redirect: String },
    /// Validation failed; no request was made.
    Rejected(ValidationReport),
    /// Validation passed but the POST did not; the report carries the
    /// submission error alongside the (clean) field regions.
    Failed(ValidationReport),
    /// Another submit is still in flight; nothing was done.
    InFlight,
}

/// Validate the whole form in one pass, collecting every field's error.
///
/// Returns the payload only when every region stayed clean - a partial
/// payload cannot be expressed.
pub fn validate_form(form: &CustomizationsForm) -> Result<CustomizationsPayload, ValidationReport> {
    let mut report = ValidationReport::with_cleared_regions();

    let search_terms = read_multi_select(&form.search_terms, false)
        .map_err(|_| report.add_error(FormField::SearchTerms, SEARCH_TERMS_MESSAGE))
        .ok();
    let search_locations = read_multi_select(&form.search_locations, false)
        .map_err(|_| report.add_error(FormField::SearchLocations, SEARCH_LOCATIONS_MESSAGE))
        .ok();
    let excluded_locations = read_multi_select(&form.excluded_locations, true)
        .map_err(|_| report.add_error(FormField::ExcludedLocations, EXCLUDED_LOCATIONS_MESSAGE))
        .ok();
    let excluded_industries = read_multi_select(&form.excluded_industries, true)
        .map_err(|_| report.add_error(FormField::ExcludedIndustries, EXCLUDED_INDUSTRIES_MESSAGE))
        .ok();
    let excluded_companies = read_multi_select(&form.excluded_companies, true)
        .map_err(|_| report.add_error(FormField::ExcludedCompanies, EXCLUDED_COMPANIES_MESSAGE))
        .ok();
    let excluded_job_titles = read_multi_select(&form.excluded_job_titles, true)
        .map_err(|_| report.add_error(FormField::ExcludedJobTitles, EXCLUDED_JOB_TITLES_MESSAGE))
        .ok();

    let word_weights = read_keyword_weights(&form.keyword_table)
        .map_err(|err| report.add_error(FormField::KeywordWeights, err.to_string()))
        .ok();

    let minimum_raw = form.minimum_good_results_per_search_per_location.trim();
    let minimum_good_results = match minimum_raw.parse::<i64>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            report.add_error(
                FormField::MinimumGoodResults,
                format!(
                    "'{}' is not a valid minimum good results value. Please provide a positive integer.",
                    minimum_raw
                ),
            );
            None
        }
    };

    if !report.is_valid() {
        return Err(report);
    }

    // Every reader succeeded when the report is clean.
    Ok(CustomizationsPayload {
        searches: dedup_preserving_order(search_terms.unwrap_or_default()),
        locations: dedup_preserving_order(search_locations.unwrap_or_default()),
        excluded_locations: dedup_preserving_order(excluded_locations.unwrap_or_default()),
        excluded_industries: dedup_preserving_order(excluded_industries.unwrap_or_default()),
        excluded_companies: dedup_preserving_order(excluded_companies.unwrap_or_default()),
        excluded_title_keywords: dedup_preserving_order(excluded_job_titles.unwrap_or_default()),
        word_weights: word_weights.unwrap_or_default(),
        minimum_good_results_per_search_per_location: minimum_good_results.unwrap_or_default(),
        include_hybrid_jobs: form.include_hybrid_jobs,
        experience_levels: default_experience_levels(),
    })
}

pub struct SubmissionController {
    client: CustomizationsClient,
    in_flight: AtomicBool,
}

impl SubmissionController {
    pub fn new(client: CustomizationsClient) -> Self {
        Self {
            client,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Run one full submit attempt: validate, post, report.
    pub async fn submit(&self, form: &CustomizationsForm) -> SubmitOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            info!("Submit attempt ignored: a submission is already in flight");
            return SubmitOutcome::InFlight;
        }

        let outcome = self.submit_inner(form).await;
        self.in_flight.store(false, Ordering::SeqCst);
        outcome
    }

    async fn submit_inner(&self, form: &CustomizationsForm) -> SubmitOutcome {
        let payload = match validate_form(form) {
            Ok(payload) => payload,
            Err(report) => {
                info!("Form rejected with {} validation error(s)", report.error_count());
                return SubmitOutcome::Rejected(report);
            }
        };

        debug!(
            "All input is valid, posting customizations: {}",
            serde_json::to_string(&payload).unwrap_or_default()
        );

        match self.client.save_customizations(&payload).await {
            Ok(_) => {
                info!("Customizations saved");
                SubmitOutcome::Accepted {
                    redirect: CustomizationsClient::redirect_path().to_string(),
                }
            }
            Err(err) => {
                error!("Failed to save customizations: {:#}", err);
                let mut report = ValidationReport::with_cleared_regions();
                report.add_error(
                    FormField::Submission,
                    format!("Failed to save customizations: {}", err),
                );
                SubmitOutcome::Failed(report)
            }
        }
    }

    pub fn client(&self) -> &CustomizationsClient {
        &self.client
    }
}
