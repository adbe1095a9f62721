//! The response contract: the schema descriptor sent to the provider to
//! constrain its output, and the validator applied to what comes back.

use crate::types::VerificationResult;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("response is not valid JSON conforming to the result schema: {0}")]
    Json(#[from] serde_json::Error),
    #[error("confidenceScore is not a finite number")]
    NonFiniteScore,
}

/// Structured-output schema for the provider's generation config, mirroring
/// the shape of [`VerificationResult`]. `extractedData` entries are
/// individually optional; the other top-level fields are required.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "status": {
                "type": "STRING",
                "enum": ["VERIFIED", "REJECTED", "SUSPICIOUS", "PENDING"],
                "description": "The overall verification status of the document."
            },
            "confidenceScore": {
                "type": "NUMBER",
                "description": "A score from 0 to 100 indicating confidence in the document's authenticity."
            },
            "extractedData": {
                "type": "OBJECT",
                "properties": {
                    "name": { "type": "STRING", "description": "Full name found on the document" },
                    "documentType": { "type": "STRING", "description": "Type of document (e.g., Passport, ID Card)" },
                    "expiryDate": { "type": "STRING", "description": "Expiration date if present" },
                    "issueDate": { "type": "STRING", "description": "Date of issue if present" },
                    "documentNumber": { "type": "STRING", "description": "Unique document identifier" }
                }
            },
            "riskFactors": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of potential issues or risk factors detected (e.g., 'blur', 'mismatched fonts')."
            },
            "summary": {
                "type": "STRING",
                "description": "A brief executive summary of the analysis."
            }
        },
        "required": ["status", "confidenceScore", "riskFactors", "summary"]
    })
}

/// Parses provider text into a [`VerificationResult`]. Rejects anything that
/// is not JSON, is missing a required field, or carries a status outside the
/// four-value enumeration. The confidence score is clamped to [0, 100]
/// rather than rejected; provider output is best-effort on range.
pub fn validate(raw: &str) -> Result<VerificationResult, SchemaError> {
    let mut result: VerificationResult = serde_json::from_str(raw)?;
    if !result.confidence_score.is_finite() {
        return Err(SchemaError::NonFiniteScore);
    }
    result.confidence_score = result.confidence_score.clamp(0.0, 100.0);
    Ok(result)
}
