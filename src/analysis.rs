//! The analysis client: builds the provider request for one document image,
//! validates the structured verdict that comes back, and translates every
//! failure mode into [`AnalysisError`].

use crate::error::AnalysisError;
use crate::provider::{GenerateRequest, Provider};
use crate::schema;
use crate::types::VerificationResult;
use tracing::{debug, error};

const INSTRUCTION: &str = "Analyze this image as an identity document or official record. \
Check for visual authenticity markers, consistency, and readability. \
Extract key details and assess if it appears legitimate or suspicious. \
Provide the output strictly in JSON format matching the schema.";

// Low temperature for analytical consistency over creative variance.
const TEMPERATURE: f32 = 0.1;

pub fn build_request(image_base64: &str, mime_type: &str) -> GenerateRequest {
    GenerateRequest {
        image_base64: image_base64.to_string(),
        mime_type: mime_type.to_string(),
        instruction: INSTRUCTION.to_string(),
        response_schema: schema::response_schema(),
        temperature: TEMPERATURE,
    }
}

/// Sends one document image to the provider and returns its verdict.
/// No retry, no caching; a failed call is re-triggered by the caller.
/// Provider error detail is logged here and never propagated verbatim to
/// the UI layer.
pub async fn analyze_document(
    provider: &dyn Provider,
    image_base64: &str,
    mime_type: &str,
) -> Result<VerificationResult, AnalysisError> {
    let req = build_request(image_base64, mime_type);
    let text = match provider.generate(req).await {
        Ok(Some(text)) => text,
        Ok(None) => {
            error!("provider returned an empty response");
            return Err(AnalysisError::EmptyResponse);
        }
        Err(e) => {
            error!(error = %e, "provider call failed");
            return Err(AnalysisError::Transport(e));
        }
    };
    debug!(len = text.len(), "provider returned text payload");
    let result = schema::validate(&text).map_err(|e| {
        error!(error = %e, "provider response failed schema validation");
        AnalysisError::MalformedResponse(e)
    })?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::USER_FACING_FAILURE;
    use crate::types::VerificationStatus;
    use anyhow::anyhow;

    struct FakeProvider {
        // maps each request to a provider reply
        reply: Box<dyn Fn(&GenerateRequest) -> anyhow::Result<Option<String>> + Send + Sync>,
    }

    #[async_trait::async_trait]
    impl Provider for FakeProvider {
        async fn generate(&self, req: GenerateRequest) -> anyhow::Result<Option<String>> {
            (self.reply)(&req)
        }
    }

    #[tokio::test]
    async fn valid_reply_comes_back_unchanged() {
        let fake = FakeProvider {
            reply: Box::new(|_| {
                Ok(Some(
                    r#"{"status":"VERIFIED","confidenceScore":97,"riskFactors":[],"summary":"Looks authentic"}"#
                        .into(),
                ))
            }),
        };
        let r = analyze_document(&fake, "aGVsbG8=", "image/jpeg").await.unwrap();
        assert_eq!(r.status, VerificationStatus::Verified);
        assert_eq!(r.confidence_score, 97.0);
        assert_eq!(r.summary, "Looks authentic");
    }

    #[tokio::test]
    async fn request_carries_payload_instruction_and_schema() {
        let fake = FakeProvider {
            reply: Box::new(|req| {
                assert_eq!(req.image_base64, "aGVsbG8=");
                assert_eq!(req.mime_type, "image/png");
                assert!(req.instruction.contains("identity document"));
                assert_eq!(req.temperature, 0.1);
                assert_eq!(req.response_schema["required"][0], "status");
                Err(anyhow!("stop here"))
            }),
        };
        let _ = analyze_document(&fake, "aGVsbG8=", "image/png").await;
    }

    #[tokio::test]
    async fn empty_reply_is_empty_response() {
        let fake = FakeProvider { reply: Box::new(|_| Ok(None)) };
        let err = analyze_document(&fake, "x", "image/jpeg").await.unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyResponse));
        assert_eq!(err.user_message(), USER_FACING_FAILURE);
    }

    #[tokio::test]
    async fn malformed_reply_is_malformed_response() {
        let fake = FakeProvider { reply: Box::new(|_| Ok(Some("not json".into()))) };
        let err = analyze_document(&fake, "x", "image/jpeg").await.unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn out_of_enum_status_is_not_coerced() {
        let fake = FakeProvider {
            reply: Box::new(|_| {
                Ok(Some(
                    r#"{"status":"MAYBE","confidenceScore":50,"riskFactors":[],"summary":"s"}"#.into(),
                ))
            }),
        };
        let err = analyze_document(&fake, "x", "image/jpeg").await.unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn transport_failure_keeps_user_message_fixed() {
        let fake = FakeProvider { reply: Box::new(|_| Err(anyhow!("401 invalid api key"))) };
        let err = analyze_document(&fake, "x", "image/jpeg").await.unwrap_err();
        assert!(matches!(err, AnalysisError::Transport(_)));
        assert_eq!(err.user_message(), "Failed to analyze document. Please try again.");
    }
}
