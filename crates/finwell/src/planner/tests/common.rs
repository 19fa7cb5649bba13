use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::explain::{Explainer, ExplainerError, Prompt};
use crate::planner::domain::{BudgetMode, FinancialInputs, PlanRequest};
use crate::planner::service::PlanningService;

/// Reference household: 4000 income, 1200 fixed, 500 variable, 200 debt, 400/6000 savings.
pub(super) fn reference_request() -> PlanRequest {
    PlanRequest {
        monthly_income: 4000.0,
        fixed_expenses: 1200.0,
        variable_expenses: 500.0,
        debt_monthly_payment: 200.0,
        debt_total_balance: 0.0,
        savings_monthly: 400.0,
        savings_total: 6000.0,
        budget_mode: BudgetMode::Normal,
        ..PlanRequest::default()
    }
}

pub(super) fn reference_inputs() -> FinancialInputs {
    reference_request()
        .financial_inputs()
        .expect("reference inputs are valid")
}

/// Household with little runway, heavy debt, and housing above half of income.
pub(super) fn strained_request() -> PlanRequest {
    PlanRequest {
        monthly_income: 2000.0,
        fixed_expenses: 1100.0,
        variable_expenses: 600.0,
        debt_monthly_payment: 700.0,
        debt_total_balance: 15000.0,
        savings_monthly: 0.0,
        savings_total: 300.0,
        ..PlanRequest::default()
    }
}

pub(super) fn approx(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-6
}

/// Explainer stub that records prompts and returns a canned reply or error.
#[derive(Default)]
pub(super) struct RecordingExplainer {
    reply: Option<String>,
    prompts: Mutex<Vec<Prompt>>,
}

impl RecordingExplainer {
    pub(super) fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn failing() -> Self {
        Self::default()
    }

    pub(super) fn prompts(&self) -> Vec<Prompt> {
        self.prompts.lock().expect("prompt mutex poisoned").clone()
    }
}

#[async_trait]
impl Explainer for RecordingExplainer {
    async fn complete(&self, prompt: &Prompt) -> Result<String, ExplainerError> {
        self.prompts
            .lock()
            .expect("prompt mutex poisoned")
            .push(prompt.clone());
        self.reply.clone().ok_or(ExplainerError::EmptyResponse)
    }
}

/// Explainer that never answers within the service timeout.
pub(super) struct StalledExplainer;

#[async_trait]
impl Explainer for StalledExplainer {
    async fn complete(&self, _prompt: &Prompt) -> Result<String, ExplainerError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok("too late".to_string())
    }
}

pub(super) fn service_with<E: Explainer + 'static>(explainer: Arc<E>) -> PlanningService<E> {
    PlanningService::new(explainer, Duration::from_millis(200))
}

pub(super) async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}
