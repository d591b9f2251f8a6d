use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
/// Returns 200 OK if the process is alive; never touches the relay.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// The site serves pages without the relay, so a missing relay config is
/// reported but does not flip readiness.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let relay_configured = !state.config.relay.public_key.is_empty()
        && !state.config.relay.service_id.is_empty()
        && !state.config.relay.template_id.is_empty();

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "relay_configured": relay_configured,
        })),
    )
}
