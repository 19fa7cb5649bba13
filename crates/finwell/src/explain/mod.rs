//! Natural-language explanations of a computed plan.
//!
//! The model is a read-only collaborator: it receives the finished plan as JSON context and
//! returns prose. Nothing it produces flows back into a numeric field.

mod chat;
mod client;
mod prompt;

pub use chat::{
    build_chat_context, goal_timeline_reply, is_goal_timeline_question,
    strip_allocation_visual, ChatRequest, ChatResponse,
};
pub use client::ChatCompletionsExplainer;
pub use prompt::{chat_prompt, clean_model_text, explanation_prompt, SYSTEM_PROMPT};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One message in a conversation with the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// System instructions plus the conversation to complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub turns: Vec<ChatTurn>,
}

/// Capability that turns a prompt into text. Production uses a hosted chat-completions
/// model; tests inject a stub.
#[async_trait]
pub trait Explainer: Send + Sync {
    async fn complete(&self, prompt: &Prompt) -> Result<String, ExplainerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExplainerError {
    #[error("explanation service is not configured (set LLM_API_KEY or GROQ_API_KEY)")]
    Disabled,
    #[error("request to explanation service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("explanation service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("explanation service returned no text")]
    EmptyResponse,
    #[error("explanation service did not answer within {0:?}")]
    Timeout(Duration),
}
