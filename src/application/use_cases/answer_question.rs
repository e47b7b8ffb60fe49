use std::sync::Arc;

use tracing::{debug, info};

use crate::application::ChatClient;
use crate::domain::{Answer, DomainError, Question};

/// System prompt fixing the assistant's persona for every question.
const SYSTEM_PROMPT: &str = "You are an expert astronomer and space science educator. \
Provide accurate, engaging answers about space, astronomy, and related topics. \
Use simple language but maintain scientific accuracy.";

/// Answers a free-text astronomy question through a [`ChatClient`].
///
/// Owns the fixed system prompt; the client owns transport and provider
/// details. One completion call per invocation, no retry.
pub struct AnswerQuestionUseCase {
    chat_client: Arc<dyn ChatClient>,
}

impl AnswerQuestionUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub async fn execute(&self, question: Question) -> Result<Answer, DomainError> {
        info!("Answering question ({} chars)", question.as_str().len());

        let text = self
            .chat_client
            .complete(SYSTEM_PROMPT, question.as_str())
            .await?;
        debug!("Provider returned {} chars", text.len());

        Ok(Answer::new(text))
    }
}
