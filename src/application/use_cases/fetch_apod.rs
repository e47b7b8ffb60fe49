use std::sync::Arc;

use tracing::{debug, info};

use crate::application::ApodService;
use crate::domain::DomainError;

/// Fetches the Astronomy Picture of the Day and passes the upstream document
/// through unmodified.
pub struct FetchApodUseCase {
    apod_service: Arc<dyn ApodService>,
}

impl FetchApodUseCase {
    pub fn new(apod_service: Arc<dyn ApodService>) -> Self {
        Self { apod_service }
    }

    pub async fn execute(&self) -> Result<serde_json::Value, DomainError> {
        info!("Fetching astronomy picture of the day");

        let body = self.apod_service.fetch_picture_of_day().await?;
        debug!(
            "APOD response received ({} top-level fields)",
            body.as_object().map(|o| o.len()).unwrap_or(0)
        );

        Ok(body)
    }
}
