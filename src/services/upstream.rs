// src/services/upstream.rs
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::RelayError;

pub const SESSIONS_PATH: &str = "/v1/chatkit/sessions";
const BETA_HEADER: &str = "OpenAI-Beta";
const BETA_FLAG: &str = "chatkit_beta=v1";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Async client for the ChatKit sessions endpoint.
#[derive(Clone)]
pub struct ChatKitClient {
    client: Client,
    base_url: String,
}

// ── Wire types (only what the sessions call needs) ─────────────────────────

#[derive(Serialize)]
struct SessionPayload<'a> {
    workflow: WorkflowRef<'a>,
    user: &'a str,
    chatkit_configuration: ChatKitConfiguration,
}

#[derive(Serialize)]
struct WorkflowRef<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct ChatKitConfiguration {
    file_upload: FileUpload,
}

#[derive(Serialize)]
struct FileUpload {
    enabled: bool,
}

/// Raw success payload. `client_secret` is the documented field;
/// `clientSecret` is accepted as a fallback and snake_case wins when both
/// are present.
#[derive(Debug, Default, Deserialize)]
pub struct SessionEnvelope {
    #[serde(default)]
    client_secret: Option<String>,
    #[serde(default, rename = "clientSecret")]
    client_secret_camel: Option<String>,
}

impl SessionEnvelope {
    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret
            .as_deref()
            .or(self.client_secret_camel.as_deref())
    }
}

impl ChatKitClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Exchange the server credential for an ephemeral client secret.
    /// Exactly one outbound call; failures are surfaced, never retried.
    pub async fn create_session(
        &self,
        api_key: &str,
        workflow_id: &str,
        user: &str,
    ) -> Result<String, RelayError> {
        let url = format!("{}{}", self.base_url, SESSIONS_PATH);
        let payload = SessionPayload {
            workflow: WorkflowRef { id: workflow_id },
            user,
            chatkit_configuration: ChatKitConfiguration {
                // Attachments stay off; the widget has no upload surface here.
                file_upload: FileUpload { enabled: false },
            },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .header(BETA_HEADER, BETA_FLAG)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        // A 2xx with an undecodable body has no credential either; both
        // collapse into the same failure.
        let envelope: SessionEnvelope = response.json().await.unwrap_or_default();
        match envelope.client_secret() {
            Some(secret) => Ok(secret.to_string()),
            None => Err(RelayError::MissingClientSecret),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_secret_wins_over_camel() {
        let envelope: SessionEnvelope =
            serde_json::from_str(r#"{"client_secret":"snake","clientSecret":"camel"}"#).unwrap();
        assert_eq!(envelope.client_secret(), Some("snake"));
    }

    #[test]
    fn camel_case_secret_is_accepted_alone() {
        let envelope: SessionEnvelope =
            serde_json::from_str(r#"{"clientSecret":"camel"}"#).unwrap();
        assert_eq!(envelope.client_secret(), Some("camel"));
    }

    #[test]
    fn envelope_without_secret_yields_none() {
        let envelope: SessionEnvelope =
            serde_json::from_str(r#"{"id":"cksess_123","expires_after":600}"#).unwrap();
        assert_eq!(envelope.client_secret(), None);
    }

    #[test]
    fn payload_carries_workflow_user_and_upload_flag() {
        let payload = SessionPayload {
            workflow: WorkflowRef { id: "wf_123" },
            user: "anonymous",
            chatkit_configuration: ChatKitConfiguration {
                file_upload: FileUpload { enabled: false },
            },
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["workflow"]["id"], "wf_123");
        assert_eq!(value["user"], "anonymous");
        assert_eq!(value["chatkit_configuration"]["file_upload"]["enabled"], false);
    }

    #[tokio::test]
    async fn sends_bearer_auth_and_beta_header() {
        let server = httpmock::MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::POST)
                    .path(SESSIONS_PATH)
                    .header("authorization", "Bearer sk-test")
                    .header("OpenAI-Beta", BETA_FLAG);
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"client_secret":"ck_abc"}"#);
            })
            .await;

        let client = ChatKitClient::new(server.base_url());
        let secret = client
            .create_session("sk-test", "wf_123", "anonymous")
            .await
            .unwrap();

        assert_eq!(secret, "ck_abc");
        assert_eq!(mock.hits(), 1);
    }

    #[tokio::test]
    async fn non_success_status_carries_the_upstream_body() {
        let server = httpmock::MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(httpmock::Method::POST).path(SESSIONS_PATH);
                then.status(404).body(r#"{"error":"workflow missing"}"#);
            })
            .await;

        let client = ChatKitClient::new(server.base_url());
        let err = client
            .create_session("sk-test", "wf_nope", "anonymous")
            .await
            .unwrap_err();

        match err {
            RelayError::Upstream { status, body } => {
                assert_eq!(status, 404);
                assert!(body.contains("workflow missing"));
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn success_without_secret_is_an_error() {
        let server = httpmock::MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(httpmock::Method::POST).path(SESSIONS_PATH);
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"id":"cksess_123"}"#);
            })
            .await;

        let client = ChatKitClient::new(server.base_url());
        let err = client
            .create_session("sk-test", "wf_123", "anonymous")
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::MissingClientSecret));
    }
}
