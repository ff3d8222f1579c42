// src/services/relay.rs
use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::message::{SessionResponse, resolve_user_id};
use crate::services::upstream::ChatKitClient;

/// Stateless exchange of the server credential for a per-session client
/// secret. Every call re-validates configuration and makes at most one
/// upstream request; nothing is cached between calls.
pub struct SessionRelay {
    config: RelayConfig,
    upstream: ChatKitClient,
}

impl SessionRelay {
    pub fn new(config: RelayConfig) -> Self {
        let upstream = ChatKitClient::new(config.api_base());
        Self { config, upstream }
    }

    /// Create one chat session upstream and hand back its client secret.
    /// Configuration gaps surface before anything goes on the wire.
    pub async fn create_session(
        &self,
        user_id: Option<&str>,
    ) -> Result<SessionResponse, RelayError> {
        let (api_key, workflow_id) = self.config.credentials()?;
        let user = resolve_user_id(user_id);

        let client_secret = self
            .upstream
            .create_session(api_key, workflow_id, user)
            .await?;

        tracing::debug!(user, "issued chatkit client secret");
        Ok(SessionResponse { client_secret })
    }
}
