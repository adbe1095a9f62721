pub mod gemini;

use anyhow::Result;
use serde_json::Value;

/// One image-analysis generation request: an inline binary payload tagged
/// with its media type, a fixed instruction, and a structured-output
/// constraint.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub image_base64: String,
    pub mime_type: String,
    pub instruction: String,
    pub response_schema: Value,
    pub temperature: f32,
}

/// Seam between the analysis logic and the external generative model.
/// `Ok(None)` means the provider answered without any text payload.
#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<Option<String>>;
}
