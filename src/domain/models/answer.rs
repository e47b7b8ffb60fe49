use serde::{Deserialize, Serialize};

/// The assistant's reply to a [`super::Question`], built from the first
/// completion choice returned by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    answer: String,
}

impl Answer {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.answer
    }
}
