use super::{Explainer, ExplainerError, Prompt};
use crate::config::ExplainerConfig;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Client for an OpenAI-compatible `/chat/completions` endpoint (Groq by default).
#[derive(Clone)]
pub struct ChatCompletionsExplainer {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatCompletionsExplainer {
    pub fn from_config(config: &ExplainerConfig) -> Result<Self, ExplainerError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl Explainer for ChatCompletionsExplainer {
    async fn complete(&self, prompt: &Prompt) -> Result<String, ExplainerError> {
        let key = self.api_key.as_deref().ok_or(ExplainerError::Disabled)?;

        let mut messages = Vec::with_capacity(prompt.turns.len() + 1);
        messages.push(Message {
            role: "system",
            content: &prompt.system,
        });
        messages.extend(prompt.turns.iter().map(|turn| Message {
            role: &turn.role,
            content: &turn.content,
        }));

        let body = CompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };

        debug!(model = %self.model, turns = prompt.turns.len(), "requesting completion");

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {key}"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExplainerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .filter_map(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .find(|content| !content.is_empty())
            .ok_or(ExplainerError::EmptyResponse)
    }
}
