//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Outbound HTTP adapters (NASA APOD, OpenAI chat completions, offline mock)
//! - Inbound HTTP surface (axum router, dependency container, error mapping)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
