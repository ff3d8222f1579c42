// src/routes/mod.rs
pub mod session;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use session::{create_session_handler, session_handler};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/api/create-session", post(create_session_handler))
        .route("/api/session", get(session_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}
