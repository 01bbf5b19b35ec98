//! Text Generation
//!
//! The generative text model is reached through the `TextGenerator` trait so
//! the content service and the budget enforcer can be driven by a scripted
//! generator in tests.

use async_trait::async_trait;
use genai::chat::{ChatMessage, ChatRequest};
use genai::Client;
use thiserror::Error;

/// Failure reported by a text generator
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The provider call failed
    #[error("provider error: {0}")]
    Provider(String),

    /// The provider answered without any text
    #[error("empty response from model")]
    EmptyResponse,

    /// The call did not finish in time
    #[error("generation timed out after {0:?}")]
    Timeout(std::time::Duration),
}

/// A capability that turns a free-form prompt into text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Model identifier recorded with generated posts
    fn model_name(&self) -> &str;
}

/// Gemini-backed generator
///
/// The API key is read by `genai` from `GEMINI_API_KEY`.
pub struct GeminiGenerator {
    client: Client,
    model: String,
}

impl GeminiGenerator {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: Client::default(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);

        let response = self
            .client
            .exec_chat(&self.model, request, None)
            .await
            .map_err(|e| {
                tracing::error!("Gemini content generation failed: {}", e);
                GenerationError::Provider(e.to_string())
            })?;

        let text = response
            .first_text()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        tracing::debug!("Generated {} chars with {}", text.chars().count(), self.model);
        Ok(text.to_string())
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted generator shared by unit tests in this crate

    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    /// One scripted reply
    pub enum Reply {
        Text(String),
        Fail,
        Delay(Duration, String),
    }

    /// Generator that replays scripted replies and records every prompt
    pub struct ScriptedGenerator {
        replies: Mutex<VecDeque<Reply>>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        pub fn new(replies: Vec<Reply>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            let reply = self.replies.lock().unwrap().pop_front();
            match reply {
                Some(Reply::Text(text)) => Ok(text),
                Some(Reply::Delay(delay, text)) => {
                    tokio::time::sleep(delay).await;
                    Ok(text)
                }
                Some(Reply::Fail) | None => {
                    Err(GenerationError::Provider("scripted failure".to_string()))
                }
            }
        }

        fn model_name(&self) -> &str {
            "scripted"
        }
    }
}
