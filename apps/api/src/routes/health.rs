use axum::Json;
use serde_json::{json, Value};

/// GET /health
///
/// Liveness only: answers without touching the generative-text API or the font CDN.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "spark-api"
    }))
}
