// src/config.rs
use std::env;
use std::fmt;

use crate::error::RelayError;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const WORKFLOW_ID_ENV: &str = "CHATKIT_WORKFLOW_ID";
pub const API_BASE_ENV: &str = "CHATKIT_API_BASE";
pub const PORT_ENV: &str = "PORT";

const DEFAULT_API_BASE: &str = "https://api.openai.com";
const DEFAULT_PORT: u16 = 3000;

/// Immutable relay configuration, built once at startup and handed to the
/// relay. Credentials may legitimately be absent at process start; their
/// absence becomes a per-request error, never a crash.
#[derive(Clone)]
pub struct RelayConfig {
    api_key: Option<String>,
    workflow_id: Option<String>,
    api_base: String,
    port: u16,
}

impl RelayConfig {
    /// Build a config from explicit values. Empty or whitespace-only
    /// credentials count as missing.
    pub fn new(api_key: Option<String>, workflow_id: Option<String>) -> Self {
        Self {
            api_key: non_blank(api_key),
            workflow_id: non_blank(workflow_id),
            api_base: DEFAULT_API_BASE.to_string(),
            port: DEFAULT_PORT,
        }
    }

    /// Read the process environment (`OPENAI_API_KEY`, `CHATKIT_WORKFLOW_ID`,
    /// optionally `CHATKIT_API_BASE` and `PORT`).
    pub fn from_env() -> Self {
        let mut config = Self::new(env::var(API_KEY_ENV).ok(), env::var(WORKFLOW_ID_ENV).ok());
        if let Some(base) = non_blank(env::var(API_BASE_ENV).ok()) {
            config = config.with_api_base(base);
        }
        if let Some(port) = env::var(PORT_ENV).ok().and_then(|p| p.parse().ok()) {
            config = config.with_port(port);
        }
        config
    }

    /// Override the upstream base URL (tests point this at a mock server).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = trim_trailing_slash(api_base.into());
        self
    }

    /// Override the TCP port the relay listens on.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// The configured credentials, validated in a fixed order: the API key
    /// is checked before the workflow id, and the first gap wins.
    pub fn credentials(&self) -> Result<(&str, &str), RelayError> {
        let api_key = self.api_key.as_deref().ok_or(RelayError::MissingApiKey)?;
        let workflow_id = self
            .workflow_id
            .as_deref()
            .ok_or(RelayError::MissingWorkflowId)?;
        Ok((api_key, workflow_id))
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

// The API key must never show up in logs, so Debug prints presence only.
impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("workflow_id", &self.workflow_id)
            .field("api_base", &self.api_base)
            .field("port", &self.port)
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn trim_trailing_slash(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}
