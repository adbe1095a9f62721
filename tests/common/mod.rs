use anyhow::Result;
use async_trait::async_trait;
use veridoc::provider::{GenerateRequest, Provider};

/// Scriptable provider double: maps each request to a reply, with an
/// optional delay to exercise in-flight states.
pub struct FakeProvider {
    pub handler: Box<dyn Fn(&GenerateRequest) -> Result<Option<String>> + Send + Sync>,
    pub delay_ms: u64,
}

impl FakeProvider {
    pub fn replying(json: &str) -> Self {
        let json = json.to_string();
        Self {
            handler: Box::new(move |_| Ok(Some(json.clone()))),
            delay_ms: 0,
        }
    }
}

#[async_trait]
impl Provider for FakeProvider {
    async fn generate(&self, req: GenerateRequest) -> Result<Option<String>> {
        if self.delay_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.delay_ms)).await;
        }
        (self.handler)(&req)
    }
}

pub const VERIFIED_JSON: &str = r#"{
    "status": "VERIFIED",
    "confidenceScore": 97,
    "extractedData": { "name": "Jane Citizen", "documentType": "Passport", "documentNumber": "X1234567" },
    "riskFactors": [],
    "summary": "Looks authentic"
}"#;
