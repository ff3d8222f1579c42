// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::message::ErrorBody;

/// Everything that can go wrong while exchanging the server credential for
/// an ephemeral client secret. Missing optional input is not an error; it
/// degrades to defaults before this enum is ever involved.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("OpenAI API key not configured")]
    MissingApiKey,
    #[error("ChatKit workflow ID not configured")]
    MissingWorkflowId,
    /// The provider rejected the session request.
    #[error("upstream returned status {status}")]
    Upstream { status: u16, body: String },
    /// Transport-level success, but no usable credential in the payload.
    #[error("no client secret in upstream response")]
    MissingClientSecret,
    #[error("failed to reach upstream: {0}")]
    Network(#[from] reqwest::Error),
}

impl RelayError {
    /// The one place an error kind becomes an HTTP surface. Upstream statuses
    /// are mirrored; everything the relay itself broke is a 5xx. The server
    /// credential never appears in any branch.
    pub fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        match self {
            RelayError::MissingApiKey | RelayError::MissingWorkflowId => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(self.to_string()),
            ),
            RelayError::Upstream { status, body } => {
                let status =
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let message = match status {
                    StatusCode::UNAUTHORIZED => "Invalid OpenAI API key",
                    StatusCode::NOT_FOUND => "Workflow not found. Please check your workflow ID.",
                    _ => "Failed to create session",
                };
                (status, ErrorBody::with_details(message, body.clone()))
            }
            RelayError::MissingClientSecret => (
                StatusCode::BAD_GATEWAY,
                ErrorBody::new("No client secret from ChatKit"),
            ),
            RelayError::Network(err) => (
                StatusCode::BAD_GATEWAY,
                ErrorBody::with_details("Failed to reach ChatKit", err.to_string()),
            ),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match &self {
            RelayError::MissingApiKey | RelayError::MissingWorkflowId => {
                tracing::error!(error = %self, "session relay is not configured");
            }
            _ => tracing::warn!(error = %self, "session creation failed"),
        }
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}
