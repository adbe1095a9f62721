use crate::schema::SchemaError;
use thiserror::Error;

/// Shown to end users for any analysis failure. The underlying detail is
/// logged for operators but never surfaced raw, so provider-internal error
/// text and credentials stay out of the UI.
pub const USER_FACING_FAILURE: &str = "Failed to analyze document. Please try again.";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set; the analysis provider cannot be reached")]
    MissingApiKey,
    #[error("GEMINI_API_KEY is blank")]
    BlankApiKey,
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Everything that can go wrong between "analysis triggered" and "verdict
/// in hand". All variants collapse to [`USER_FACING_FAILURE`] at the UI
/// boundary.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("provider returned no text")]
    EmptyResponse,
    #[error("provider response failed validation: {0}")]
    MalformedResponse(#[from] SchemaError),
    #[error("provider request failed: {0}")]
    Transport(#[source] anyhow::Error),
}

impl AnalysisError {
    pub fn user_message(&self) -> &'static str {
        USER_FACING_FAILURE
    }
}
