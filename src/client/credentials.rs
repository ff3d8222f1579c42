// src/client/credentials.rs
use uuid::Uuid;

use super::ClientError;
use crate::message::{SessionRequest, SessionResponse};

/// Fetches ephemeral client secrets from the relay. This is the provider the
/// widget calls on startup and whenever its credential expires: a still-valid
/// credential comes straight back, anything else costs one relay round trip.
#[derive(Clone)]
pub struct RelayCredentials {
    http: reqwest::Client,
    session_url: String,
}

impl RelayCredentials {
    /// `session_url` is the relay's session-creation endpoint, e.g.
    /// `http://localhost:3000/api/create-session`.
    pub fn new(session_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            session_url: session_url.into(),
        }
    }

    /// The widget hands over the credential it already holds once it has
    /// judged it still valid; that exact value is returned with zero network
    /// traffic. Otherwise a fresh secret is minted under a new visitor id.
    pub async fn get_client_secret(&self, existing: Option<&str>) -> Result<String, ClientError> {
        if let Some(secret) = existing.filter(|s| !s.is_empty()) {
            return Ok(secret.to_string());
        }

        let request = SessionRequest {
            user_id: Some(format!("visitor-{}", Uuid::new_v4())),
        };
        let response = self
            .http
            .post(&self.session_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::CredentialExchange {
                status: status.as_u16(),
                body,
            });
        }

        let session: SessionResponse = response
            .json()
            .await
            .map_err(|_| ClientError::MissingClientSecret)?;
        if session.client_secret.is_empty() {
            return Err(ClientError::MissingClientSecret);
        }
        Ok(session.client_secret)
    }
}
