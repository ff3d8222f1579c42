// src/state.rs
use std::sync::Arc;

use crate::config::RelayConfig;
use crate::services::relay::SessionRelay;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub relay: SessionRelay,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            relay: SessionRelay::new(config),
        }
    }
}
