use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{InputError, PlanRequest};
use super::report::{explanation_context, PlanSnapshot, PlanningEngine};
use super::scoring::ScoreResult;
use crate::explain::{
    build_chat_context, chat_prompt, clean_model_text, explanation_prompt, goal_timeline_reply,
    is_goal_timeline_question, ChatRequest, ChatResponse, Explainer, ExplainerError, Prompt,
};

/// Plan plus the model's prose. The explanation sits beside the plan and never alters it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResponse {
    #[serde(flatten)]
    pub plan: PlanSnapshot,
    pub llm_explanation: String,
}

/// Service composing the deterministic engine with the explanation capability.
pub struct PlanningService<E> {
    engine: PlanningEngine,
    explainer: Arc<E>,
    explain_timeout: Duration,
}

impl<E> PlanningService<E>
where
    E: Explainer + 'static,
{
    pub fn new(explainer: Arc<E>, explain_timeout: Duration) -> Self {
        Self {
            engine: PlanningEngine::new(),
            explainer,
            explain_timeout,
        }
    }

    pub fn engine(&self) -> &PlanningEngine {
        &self.engine
    }

    /// Score only, without budget, advice, or explanation.
    pub fn score(&self, request: &PlanRequest) -> Result<ScoreResult, InputError> {
        self.engine.score(request)
    }

    /// Compute the full plan, then ask the model to explain it.
    pub async fn generate(&self, request: PlanRequest) -> Result<PlanResponse, InputError> {
        let plan = self.engine.evaluate(&request)?;
        info!(
            plan_id = %plan.plan_id,
            state = plan.score.state.label(),
            score = plan.score.score,
            mode = plan.budget.mode.label(),
            "plan computed"
        );

        let prompt = explanation_prompt(&explanation_context(&request, &plan));
        let llm_explanation = match self.complete(&prompt).await {
            Ok(text) => clean_model_text(&text),
            Err(err) => {
                warn!(plan_id = %plan.plan_id, error = %err, "explanation unavailable");
                explanation_placeholder(&err)
            }
        };

        Ok(PlanResponse {
            plan,
            llm_explanation,
        })
    }

    /// Answer a question about an existing plan. The plan is context only; nothing is
    /// recomputed here.
    pub async fn chat(&self, request: ChatRequest) -> ChatResponse {
        let message = request.message.trim();
        if message.is_empty() {
            return ChatResponse {
                response: "Please enter a message.".to_string(),
            };
        }

        let savings_goal = &request.financial_data["savings_goal"];
        let goal_enabled = savings_goal["enabled"].as_bool().unwrap_or(false);
        if goal_enabled && is_goal_timeline_question(message) {
            return ChatResponse {
                response: goal_timeline_reply(savings_goal),
            };
        }

        let context = build_chat_context(&request.financial_data, request.plan_id.as_deref());
        let prompt = chat_prompt(message, &context, &request.history);

        let response = match self.complete(&prompt).await {
            Ok(text) => clean_model_text(&text),
            Err(err) => {
                warn!(error = %err, "chat reply unavailable");
                format!("I couldn't reach the explanation service. Error: {err}")
            }
        };

        ChatResponse { response }
    }

    async fn complete(&self, prompt: &Prompt) -> Result<String, ExplainerError> {
        match tokio::time::timeout(self.explain_timeout, self.explainer.complete(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(ExplainerError::Timeout(self.explain_timeout)),
        }
    }
}

fn explanation_placeholder(err: &ExplainerError) -> String {
    format!(
        "A written explanation is not available right now ({err}). \
         Your score, budget, investing, and savings goal figures are complete and unaffected."
    )
}
