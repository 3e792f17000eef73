//! Webhook routes.

use {
    axum::{
        Router,
        body::Bytes,
        extract::State,
        http::StatusCode,
        routing::{get, post},
    },
    std::sync::Arc,
    tracing::warn,
};

use {hearsay_pipeline::Pipeline, hearsay_telegram::Update};

/// Build the gateway router.
pub fn router(pipeline: Arc<Pipeline>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/webhook", post(webhook_handler))
        .with_state(pipeline)
}

async fn health_handler() -> &'static str {
    "ok"
}

/// Inbound webhook endpoint.
///
/// Always acknowledges with 200 regardless of the internal outcome, so
/// Telegram never redelivers an update; failure signaling happens via the
/// outbound reply, never via this status. Undecodable bodies are logged and
/// acknowledged too.
async fn webhook_handler(State(pipeline): State<Arc<Pipeline>>, body: Bytes) -> StatusCode {
    match serde_json::from_slice::<Update>(&body) {
        Ok(update) => pipeline.handle_update(&update).await,
        Err(e) => warn!(error = %e, "acknowledging undecodable webhook payload"),
    }
    StatusCode::OK
}
