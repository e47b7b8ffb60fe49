use serde::{Deserialize, Serialize};

/// Request payload for `POST /api/query`.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

/// Response payload for the liveness endpoint.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub version: &'static str,
}

impl WelcomeResponse {
    pub fn new() -> Self {
        Self {
            message: "Welcome to the CosmicQuery API",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self::new()
    }
}
