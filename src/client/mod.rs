//! Headless session client for hosts that embed the ChatKit widget natively
//! (webview shells, kiosks, test harnesses). It mirrors what the served page
//! does in the browser: fetch a client secret from the relay, wait for the
//! vendor script capability, and only then hand the widget its credential.

pub mod bootstrap;
pub mod credentials;
pub mod widget;

pub use bootstrap::{ChatClient, ClientPhase};
pub use credentials::RelayCredentials;
pub use widget::{ScriptStatus, WidgetHandle, WidgetScript, await_script};

use thiserror::Error;

/// Failures surfaced to the embedding UI. Each carries a distinct
/// human-readable message; recovery is always a full re-attempt.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The vendor script never installed its constructor within the bounded
    /// wait.
    #[error("chat widget script failed to load")]
    ScriptUnavailable,
    /// The relay refused to mint a credential.
    #[error("session request was rejected (status {status})")]
    CredentialExchange { status: u16, body: String },
    /// The relay claimed success but sent no usable credential.
    #[error("session response carried no client secret")]
    MissingClientSecret,
    #[error("could not reach the session endpoint: {0}")]
    Transport(#[from] reqwest::Error),
    /// The widget itself reported a problem after instantiation.
    #[error("chat widget error: {0}")]
    WidgetRuntime(String),
}
