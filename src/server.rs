//! HTTP surface for the dashboard: one endpoint that accepts an encoded
//! document image and returns the structured verdict.

use crate::analysis;
use crate::provider::Provider;
use crate::types::VerificationResult;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Engine {
    pub provider: Arc<dyn Provider>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// Raw base64 payload, without a data-URI prefix.
    pub data: String,
    pub mime_type: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    error: &'static str,
}

pub async fn verify(
    State(engine): State<Arc<Engine>>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<VerificationResult>, (StatusCode, Json<ErrorBody>)> {
    match analysis::analyze_document(engine.provider.as_ref(), &req.data, &req.mime_type).await {
        Ok(result) => Ok(Json(result)),
        // detail already logged by the analysis client; the body carries
        // only the fixed user-safe message
        Err(e) => Err((
            StatusCode::BAD_GATEWAY,
            Json(ErrorBody { error: e.user_message() }),
        )),
    }
}

pub fn router(engine: Arc<Engine>) -> Router {
    Router::new().route("/api/verify", post(verify)).with_state(engine)
}

pub async fn run_server(engine: Engine, addr: &str) -> anyhow::Result<()> {
    let app = router(Arc::new(engine));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "verification server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
