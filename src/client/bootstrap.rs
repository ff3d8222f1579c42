// src/client/bootstrap.rs
use std::time::Duration;

use super::ClientError;
use super::credentials::RelayCredentials;
use super::widget::{
    MAX_POLL_ATTEMPTS, POLL_INTERVAL, ScriptStatus, WidgetHandle, WidgetScript, await_script,
};

/// What the surrounding UI should currently render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientPhase {
    Loading,
    Ready,
    Error { message: String },
}

impl ClientPhase {
    pub fn is_error(&self) -> bool {
        matches!(self, ClientPhase::Error { .. })
    }
}

/// Drives the widget bootstrap for an embedding host: request a credential
/// and wait for the vendor script concurrently, instantiate the widget once
/// both are in hand, and track the phase the UI should show. There is no
/// partial recovery; [`ChatClient::reload`] redoes the whole startup.
pub struct ChatClient<S: WidgetScript> {
    script: S,
    credentials: RelayCredentials,
    poll_interval: Duration,
    max_poll_attempts: u32,
    phase: ClientPhase,
    widget: Option<Box<dyn WidgetHandle>>,
}

impl<S: WidgetScript> ChatClient<S> {
    pub fn new(script: S, credentials: RelayCredentials) -> Self {
        Self {
            script,
            credentials,
            poll_interval: POLL_INTERVAL,
            max_poll_attempts: MAX_POLL_ATTEMPTS,
            phase: ClientPhase::Loading,
            widget: None,
        }
    }

    /// Override the script-poll cadence and bound.
    pub fn with_poll(mut self, interval: Duration, max_attempts: u32) -> Self {
        self.poll_interval = interval;
        self.max_poll_attempts = max_attempts;
        self
    }

    pub fn phase(&self) -> &ClientPhase {
        &self.phase
    }

    /// Run the startup round trip. On success the widget is live and the
    /// phase is `Ready`; on any failure the phase carries the message the UI
    /// must show instead of a blank or perpetually loading widget.
    pub async fn start(&mut self) -> Result<(), ClientError> {
        self.phase = ClientPhase::Loading;
        self.widget = None;

        // Script readiness and the credential fetch are independent, so they
        // overlap. The widget is only instantiated once both have resolved.
        let (script_status, secret) = tokio::join!(
            await_script(&self.script, self.poll_interval, self.max_poll_attempts),
            self.credentials.get_client_secret(None),
        );

        let outcome = match (script_status, secret) {
            (ScriptStatus::TimedOut, _) => Err(ClientError::ScriptUnavailable),
            (ScriptStatus::Ready, Err(err)) => Err(err),
            (ScriptStatus::Ready, Ok(secret)) => self
                .script
                .instantiate(&secret)
                .map_err(ClientError::WidgetRuntime),
        };

        match outcome {
            Ok(widget) => {
                self.widget = Some(widget);
                self.phase = ClientPhase::Ready;
                Ok(())
            }
            Err(err) => {
                self.phase = ClientPhase::Error {
                    message: err.to_string(),
                };
                Err(err)
            }
        }
    }

    /// The recovery affordance: drop everything and run the startup again.
    pub async fn reload(&mut self) -> Result<(), ClientError> {
        self.start().await
    }

    /// Route a runtime error the live widget reported; the UI flips to the
    /// error state and keeps its retry control.
    pub fn report_widget_error(&mut self, message: impl Into<String>) {
        self.widget = None;
        self.phase = ClientPhase::Error {
            message: ClientError::WidgetRuntime(message.into()).to_string(),
        };
    }

    /// Whether a widget is currently live.
    pub fn is_ready(&self) -> bool {
        self.widget.is_some()
    }
}
