use async_trait::async_trait;

use crate::domain::DomainError;

/// Fetches the Astronomy Picture of the Day from an upstream provider.
///
/// The payload is treated as an opaque JSON document: the system forwards it
/// verbatim and never interprets its fields.
#[async_trait]
pub trait ApodService: Send + Sync {
    async fn fetch_picture_of_day(&self) -> Result<serde_json::Value, DomainError>;
}
