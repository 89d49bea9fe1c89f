pub mod chat;

pub use chat::{chat_routes, AppState};

use crate::error::panic_response;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;

/// API routes with their state applied. Panics in a handler become a 500 chat error.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(chat_routes())
        .route("/health", get(health))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
