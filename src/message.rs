// src/message.rs
use serde::{Deserialize, Serialize};

/// User id applied when the caller supplies none (or supplies junk).
pub const DEFAULT_USER_ID: &str = "anonymous";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SessionRequest {
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub client_secret: String,
}

/// Failure body returned by the relay API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        let details: String = details.into();
        Self {
            error: error.into(),
            details: (!details.is_empty()).then_some(details),
        }
    }
}

/// Resolve the caller-supplied user id. Anything missing or blank degrades
/// to [`DEFAULT_USER_ID`]; this is a correlation hint, not an identity.
pub fn resolve_user_id(raw: Option<&str>) -> &str {
    match raw {
        Some(id) if !id.trim().is_empty() => id,
        _ => DEFAULT_USER_ID,
    }
}
