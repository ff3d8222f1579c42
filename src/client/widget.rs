// src/client/widget.rs
use std::time::Duration;

/// Poll cadence for the vendor script capability.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);
/// Attempt bound for the poll; 40 × 250ms gives the script ten seconds.
pub const MAX_POLL_ATTEMPTS: u32 = 40;

/// The construction capability the externally hosted script installs. The
/// widget itself stays opaque: this crate checks that the capability exists
/// and hands it a credential, nothing more. Embedders adapt whatever surface
/// their host exposes (a webview binding, a test double).
pub trait WidgetScript: Send + Sync {
    /// Whether the script has finished loading and installed its constructor.
    fn is_loaded(&self) -> bool;

    /// Build a widget bound to `client_secret`. The error string is the
    /// widget's own render-time failure, verbatim.
    fn instantiate(&self, client_secret: &str) -> Result<Box<dyn WidgetHandle>, String>;
}

/// A live widget. Opaque; the host keeps it alive for the session and drops
/// it to tear the chat down.
pub trait WidgetHandle: Send {}

/// Outcome of the bounded wait for the vendor script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStatus {
    Ready,
    TimedOut,
}

/// Poll for the script capability on a fixed interval, a fixed number of
/// times. There is no load event to trust, so this is the only wait in the
/// client and it always terminates.
pub async fn await_script(
    script: &dyn WidgetScript,
    interval: Duration,
    max_attempts: u32,
) -> ScriptStatus {
    for attempt in 0..max_attempts {
        if script.is_loaded() {
            return ScriptStatus::Ready;
        }
        if attempt + 1 < max_attempts {
            tokio::time::sleep(interval).await;
        }
    }
    ScriptStatus::TimedOut
}
