//! Backend relay and embeddable session client for the hosted ChatKit widget.

pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
