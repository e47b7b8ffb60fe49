use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::DomainError;

/// Offline stand-in for [`crate::connector::OpenAiChatClient`], selected with
/// `--mock-llm`. Produces a deterministic reply without any network I/O or
/// credential, which keeps local development and tests independent of the
/// provider.
pub struct MockChatClient {
    canned_reply: Option<String>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self { canned_reply: None }
    }

    /// Always reply with a fixed string, regardless of the question.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            canned_reply: Some(reply.into()),
        }
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, _system: &str, user: &str) -> Result<String, DomainError> {
        debug!("MockChatClient answering without provider call");
        match &self.canned_reply {
            Some(reply) => Ok(reply.clone()),
            None => Ok(format!(
                "This is a mock answer. You asked: \"{user}\". Run without --mock-llm \
                 to get a real answer from the language-model provider."
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echoes_the_question_by_default() {
        let client = MockChatClient::new();
        let reply = client.complete("system", "What is a quasar?").await.unwrap();
        assert!(reply.contains("What is a quasar?"));
    }

    #[tokio::test]
    async fn canned_reply_is_returned_verbatim() {
        let client = MockChatClient::with_reply("A black hole is...");
        let reply = client.complete("system", "anything").await.unwrap();
        assert_eq!(reply, "A black hole is...");
    }
}
