// src/form/fields.rs

/// Every validated region of the customizations page.
///
/// `Submission` is not an input: it is the extra error region that surfaces
/// network failures instead of burying them in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    SearchTerms,
    SearchLocations,
    ExcludedLocations,
    ExcludedIndustries,
    ExcludedCompanies,
    ExcludedJobTitles,
    KeywordWeights,
    MinimumGoodResults,
    Submission,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::SearchTerms,
        FormField::SearchLocations,
        FormField::ExcludedLocations,
        FormField::ExcludedIndustries,
        FormField::ExcludedCompanies,
        FormField::ExcludedJobTitles,
        FormField::KeywordWeights,
        FormField::MinimumGoodResults,
        FormField::Submission,
    ];

    /// Id of the error container the page renders this field's messages in.
    pub fn error_container(&self) -> &'static str {
        match self {
            FormField::SearchTerms => "search-terms-error-container",
            FormField::SearchLocations => "search-location-error-container",
            FormField::ExcludedLocations => "excluded-locations-error-container",
            FormField::ExcludedIndustries => "excluded-industries-error-container",
            FormField::ExcludedCompanies => "excluded-companies-error-container",
            FormField::ExcludedJobTitles => "excluded-job-titles-error-container",
            FormField::KeywordWeights => "keyword-weights-error-container",
            FormField::MinimumGoodResults => "minimum-good-results-error-container",
            FormField::Submission => "submission-error-container",
        }
    }

    /// Human-readable name for terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::SearchTerms => "search terms",
            FormField::SearchLocations => "search locations",
            FormField::ExcludedLocations => "excluded locations",
            FormField::ExcludedIndustries => "excluded industries",
            FormField::ExcludedCompanies => "excluded companies",
            FormField::ExcludedJobTitles => "excluded job titles",
            FormField::KeywordWeights => "keyword weights",
            FormField::MinimumGoodResults => "minimum good results",
            FormField::Submission => "submission",
        }
    }
}
