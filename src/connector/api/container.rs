use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::application::{AnswerQuestionUseCase, ApodService, ChatClient, FetchApodUseCase};
use crate::connector::{MockChatClient, NasaApodClient, OpenAiChatClient, DEFAULT_MODEL};

pub struct ContainerConfig {
    /// Override the NASA API base URL. `None` falls back to `NASA_BASE_URL`
    /// or the production endpoint.
    pub nasa_base_url: Option<String>,
    /// Override the OpenAI-compatible base URL. `None` falls back to
    /// `OPENAI_BASE_URL` or the production endpoint.
    pub openai_base_url: Option<String>,
    /// Override the completion model. `None` falls back to `OPENAI_MODEL`
    /// or the default.
    pub openai_model: Option<String>,
    /// Answer questions with a deterministic offline mock instead of the
    /// language-model provider.
    pub mock_llm: bool,
    /// Timeout applied to each outbound call. No retry behind it.
    pub upstream_timeout: Duration,
    /// Browser origins allowed by the CORS layer.
    pub cors_origins: Vec<String>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            nasa_base_url: None,
            openai_base_url: None,
            openai_model: None,
            mock_llm: false,
            upstream_timeout: Duration::from_secs(30),
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(),
            ],
        }
    }
}

/// Explicitly constructed dependency container handed to the router at
/// startup. No module-level singletons: tests substitute mock services via
/// [`Container::with_services`].
pub struct Container {
    apod_service: Arc<dyn ApodService>,
    chat_client: Arc<dyn ChatClient>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let timeout = config.upstream_timeout;

        let apod_service: Arc<dyn ApodService> = match config.nasa_base_url.as_deref() {
            Some(base) => Arc::new(NasaApodClient::new(base, timeout)),
            None => Arc::new(NasaApodClient::from_env(timeout)),
        };

        let chat_client: Arc<dyn ChatClient> = if config.mock_llm {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::new())
        } else if let Some(base) = config.openai_base_url.as_deref() {
            let model = config
                .openai_model
                .clone()
                .or_else(|| std::env::var("OPENAI_MODEL").ok())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string());
            Arc::new(OpenAiChatClient::new(model, base, timeout))
        } else {
            Arc::new(OpenAiChatClient::from_env(timeout))
        };

        Self {
            apod_service,
            chat_client,
            config,
        }
    }

    /// Build a container around externally constructed services.
    pub fn with_services(
        apod_service: Arc<dyn ApodService>,
        chat_client: Arc<dyn ChatClient>,
        config: ContainerConfig,
    ) -> Self {
        Self {
            apod_service,
            chat_client,
            config,
        }
    }

    pub fn apod_use_case(&self) -> FetchApodUseCase {
        FetchApodUseCase::new(self.apod_service.clone())
    }

    pub fn query_use_case(&self) -> AnswerQuestionUseCase {
        AnswerQuestionUseCase::new(self.chat_client.clone())
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.config.cors_origins
    }
}
