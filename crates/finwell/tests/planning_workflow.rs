//! Integration scenarios for the planning workflow.
//!
//! Each scenario drives the public engine, service, and router the way a client would, so the
//! score, budget, investing, and goal outputs are checked together rather than stage by stage.

mod common {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;

    use finwell::explain::{Explainer, ExplainerError, Prompt};
    use finwell::planner::{BudgetMode, PlanRequest, PlanningService, VariableItem};

    pub(super) struct CannedExplainer(pub(super) Option<&'static str>);

    #[async_trait]
    impl Explainer for CannedExplainer {
        async fn complete(&self, _prompt: &Prompt) -> Result<String, ExplainerError> {
            self.0
                .map(str::to_string)
                .ok_or(ExplainerError::Disabled)
        }
    }

    pub(super) fn service(reply: Option<&'static str>) -> Arc<PlanningService<CannedExplainer>> {
        Arc::new(PlanningService::new(
            Arc::new(CannedExplainer(reply)),
            Duration::from_secs(1),
        ))
    }

    /// Young professional renting in the UK with a few named spending lines and a holiday goal.
    pub(super) fn renter() -> PlanRequest {
        PlanRequest {
            currency: "GBP (£)".to_string(),
            country: Some("United Kingdom".to_string()),
            monthly_income: 3200.0,
            fixed_expenses: 1100.0,
            variable_expenses: 0.0,
            variable_breakdown: vec![
                VariableItem {
                    name: "Groceries".to_string(),
                    amount: 320.0,
                },
                VariableItem {
                    name: "Eating out".to_string(),
                    amount: 180.0,
                },
            ],
            debt_monthly_payment: 150.0,
            debt_total_balance: 2400.0,
            savings_monthly: 250.0,
            savings_total: 1500.0,
            budget_mode: BudgetMode::Super,
            savings_goal_cost: Some(1800.0),
            savings_goal_months: Some(6),
            savings_goal_name: Some("Holiday".to_string()),
            ..PlanRequest::default()
        }
    }
}

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::*;
use finwell::explain::ChatRequest;
use finwell::planner::{planner_router, GoalStatus, PlanningEngine, Region, ScoreState};

#[test]
fn renter_plan_flows_through_every_stage() {
    let plan = PlanningEngine::new()
        .evaluate(&renter())
        .expect("renter request is valid");

    // 500 of breakdown replaces the zero variable total, leaving under a month of runway.
    assert_eq!(plan.score.components.savings_rate_pct, 7.82);
    assert_eq!(plan.score.components.emergency_fund_months, 0.94);
    assert_eq!(plan.score.state, ScoreState::Stable);

    // Pool 1950 covers the 30% target of 960.
    assert_eq!(plan.budget.meta.flexible_pool, 1950.0);
    assert_eq!(plan.budget.totals.recommended_savings, 960.0);
    assert_eq!(plan.budget.totals.recommended_variable, 990.0);
    assert_eq!(plan.budget.deltas.variable_change, 490.0);

    assert_eq!(plan.investing.region, Region::UnitedKingdom);
    assert!(!plan.investing.readiness.ready);
    assert_eq!(plan.investing.allocation_example.cash_pct, 10);

    let goal = &plan.savings_goal;
    assert_eq!(goal.goal_name.as_deref(), Some("Holiday"));
    assert_eq!(goal.ideal_months_using_planned_savings, Some(2));
    assert_eq!(goal.ideal_months_using_current_savings, Some(8));
    let target = goal.target.as_ref().expect("timeframe supplied");
    assert_eq!(target.required_monthly, 300.0);
    assert_eq!(target.status, GoalStatus::NeedsIncrease);
}

#[tokio::test]
async fn unavailable_explainer_still_returns_the_plan() {
    let service = service(None);

    let response = service.generate(renter()).await.expect("valid request");

    assert!(response.llm_explanation.contains("not configured"));
    assert_eq!(
        response.plan,
        PlanningEngine::new().evaluate(&renter()).expect("valid")
    );
}

#[tokio::test]
async fn plan_then_chat_over_http() {
    let router = planner_router(service(Some("Build the emergency fund first.")));

    let plan_request = Request::builder()
        .method("POST")
        .uri("/api/v1/plan")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(&renter()).expect("request serializes"),
        ))
        .expect("request builds");
    let response = router
        .clone()
        .oneshot(plan_request)
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let plan: Value = serde_json::from_slice(&bytes).expect("json plan");
    assert_eq!(plan["investing"]["region"], "UK");
    assert!(plan["investing"]["allocation_visual"]
        .as_str()
        .is_some_and(|visual| visual.starts_with("Stocks")));

    let chat = ChatRequest {
        message: "When can I reach my goal?".to_string(),
        plan_id: plan["plan_id"].as_str().map(str::to_string),
        financial_data: plan,
        ..ChatRequest::default()
    };
    let chat_request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(json!(chat).to_string()))
        .expect("request builds");
    let response = router.oneshot(chat_request).await.expect("router responds");
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let reply: Value = serde_json::from_slice(&bytes).expect("json reply");

    let text = reply["response"].as_str().expect("response text");
    assert!(text.contains("- Saving for: Holiday"));
    assert!(text.contains("1800.00 GBP (£)"));
    assert!(text.contains("To finish in 6 months you would need 300.00 GBP (£) per month"));
}
