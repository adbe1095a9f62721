use super::{GenerateRequest, Provider};
use crate::config::Config;
use crate::error::ConfigError;
use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

// A hung provider call surfaces as a transport failure after this bound.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Gemini `generateContent` client. Constructed explicitly at startup with a
/// validated credential; there is no module-level singleton.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    model: String,
    key: String,
}

impl GeminiClient {
    pub fn new(cfg: &Config) -> Result<Self, ConfigError> {
        if cfg.api_key.trim().is_empty() {
            return Err(ConfigError::BlankApiKey);
        }
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            model: cfg.model.clone(),
            key: cfg.api_key.clone(),
        })
    }
}

#[async_trait::async_trait]
impl Provider for GeminiClient {
    async fn generate(&self, req: GenerateRequest) -> Result<Option<String>> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = serde_json::json!({
            "contents": [{
                "parts": [
                    { "inline_data": { "mime_type": req.mime_type, "data": req.image_base64 } },
                    { "text": req.instruction }
                ]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": req.response_schema,
                "temperature": req.temperature
            }
        });
        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateContentResponse>()
            .await?;

        let text = resp
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|t| !t.is_empty());
        Ok(text)
    }
}
