//! HTTP request handlers

use super::AppState;
use crate::bot;
use crate::telegram::Update;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Inbound Telegram updates
        .route("/webhook", post(telegram_webhook))
        // Liveness probes
        .route("/", get(root))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================
// Webhook
// ============================================================

async fn telegram_webhook(
    State(state): State<AppState>,
    Json(update): Json<Update>,
) -> Result<Json<Value>, AppError> {
    tracing::debug!(update_id = update.update_id, "webhook update received");

    bot::handle_update(&state.store, &state.telegram, update)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!({ "ok": true })))
}

// ============================================================
// Liveness
// ============================================================

async fn root() -> Json<Value> {
    Json(json!({ "status": "Bot is running" }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        tracing::error!(%status, message, "request failed");
        let body = Json(json!({ "ok": false, "error": message }));
        (status, body).into_response()
    }
}
