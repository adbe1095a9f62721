use crate::error::ConfigError;
use std::env;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Provider settings, resolved once at startup. A missing credential is a
/// startup failure, not something deferred to the first analysis call.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            env::var("GEMINI_API_KEY").ok(),
            env::var("GEMINI_MODEL").ok(),
            env::var("GEMINI_BASE_URL").ok(),
        )
    }

    pub fn from_parts(
        api_key: Option<String>,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key.ok_or(ConfigError::MissingApiKey)?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::BlankApiKey);
        }
        Ok(Self {
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}
