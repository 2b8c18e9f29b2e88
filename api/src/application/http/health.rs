use axum::{Router, routing::get};

use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/health/live",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = String, description = "Process is up")
    )
)]
pub async fn health_live() -> &'static str {
    "ok"
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/health/live", root_path), get(health_live))
}
