mod openai;

use async_trait::async_trait;
use thiserror::Error;

use crate::web::models::Message;

pub use openai::OpenAiGateway;

/// Sampling settings plus the conversation sent to the completion provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(messages: Vec<Message>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            messages,
            max_tokens,
            temperature,
        }
    }
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Request to completion provider failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Completion provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to extract content from response")]
    MissingContent,
}

/// The outbound completion capability shared by every handler.
///
/// One call to `complete` is one provider request: no retries, no caching.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;
}
