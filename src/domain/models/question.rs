use serde::{Deserialize, Serialize};

use super::super::DomainError;

/// A free-text question bound for the language-model provider.
///
/// Owned by a single inbound request; nothing outlives the request that
/// created it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question(String);

impl Question {
    /// Build a question, rejecting blank input.
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::invalid_input("question must not be empty"));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
