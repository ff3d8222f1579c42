// src/routes/session.rs
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use crate::error::RelayError;
use crate::message::{SessionRequest, SessionResponse};
use crate::state::SharedState;

/// POST /api/create-session — body is optional JSON `{"userId": "..."}`.
/// A missing or unparseable body is fine; the relay falls back to the
/// anonymous user id rather than rejecting the request.
pub async fn create_session_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<SessionResponse>, RelayError> {
    let user_id = user_id_from_body(&body);
    let session = state.relay.create_session(user_id.as_deref()).await?;
    Ok(Json(session))
}

/// GET /api/session — parameterless variant, always the anonymous user.
pub async fn session_handler(
    State(state): State<SharedState>,
) -> Result<Json<SessionResponse>, RelayError> {
    let session = state.relay.create_session(None).await?;
    Ok(Json(session))
}

fn user_id_from_body(body: &[u8]) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    serde_json::from_slice::<SessionRequest>(body)
        .ok()
        .and_then(|request| request.user_id)
}
