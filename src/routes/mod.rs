//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three endpoints under one Axum router: `/` describes the API, `/health`
//! reports liveness without touching the LLM, and `/chat` relays messages.
//! CORS is wide open because the web client is served from another origin.

pub mod chat;

use axum::Router;
use axum::extract::{DefaultBodyLimit, State};
use axum::response::Json;
use axum::routing::{get, post};
use serde_json::{Value, json};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        // Upload content is ignored, so no body cap.
        .route("/chat", post(chat::chat).layer(DefaultBodyLimit::disable()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Current UTC time as an RFC 3339 timestamp.
pub(crate) fn now_iso8601() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

/// `GET /` — list the available endpoints.
async fn index(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": format!("{} is running!", state.service_name),
        "endpoints": {
            "chat": "/chat (POST)",
            "health": "/health (GET)",
        },
    }))
}

/// `GET /health` — always healthy; the LLM is not probed.
async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": &*state.service_name,
        "timestamp": now_iso8601(),
    }))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
