use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::planner::router::planner_router;

fn router() -> axum::Router {
    planner_router(Arc::new(service_with(Arc::new(RecordingExplainer::replying(
        "Explained.",
    )))))
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn reference_body() -> Value {
    json!({
        "currency": "EUR",
        "country": "Germany",
        "monthly_income": 4000,
        "fixed_expenses": 1200,
        "variable_expenses": 500,
        "debt_monthly_payment": 200,
        "savings_monthly": 400,
        "savings_total": 6000,
        "budget_mode": "Normal",
        "savings_goal_cost": 2400,
        "savings_goal_months": 4
    })
}

#[tokio::test]
async fn plan_endpoint_returns_full_snapshot() {
    let response = router()
        .oneshot(post_json("/api/v1/plan", &reference_body()))
        .await
        .expect("router responds");
    let (status, body) = read_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"]["score"], 89.0);
    assert_eq!(body["score"]["state"], "strong");
    assert_eq!(body["budget"]["mode"], "normal");
    assert_eq!(body["budget"]["totals"]["recommended_savings"], 800.0);
    assert_eq!(body["investing"]["region"], "EU");
    assert_eq!(body["investing"]["readiness"]["ready"], true);
    assert_eq!(body["savings_goal"]["ideal_months_using_planned_savings"], 3);
    assert_eq!(body["savings_goal"]["target"]["status"], "needs_increase");
    assert_eq!(body["llm_explanation"], "Explained.");
    assert_eq!(body["plan_id"].as_str().map(str::len), Some(16));
}

#[tokio::test]
async fn generate_alias_matches_plan_endpoint() {
    let primary = router()
        .oneshot(post_json("/api/v1/plan", &reference_body()))
        .await
        .expect("router responds");
    let alias = router()
        .oneshot(post_json("/generate", &reference_body()))
        .await
        .expect("router responds");

    let (_, primary) = read_json(primary).await;
    let (status, alias) = read_json(alias).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(primary, alias);
}

#[tokio::test]
async fn score_endpoint_skips_budget_and_explanation() {
    let response = router()
        .oneshot(post_json("/api/v1/score", &reference_body()))
        .await
        .expect("router responds");
    let (status, body) = read_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"]["score"], 89.0);
    assert_eq!(body["score"]["sub_scores"]["savings_rate_score"], 50.0);
    assert!(body.get("budget").is_none());
    assert!(body.get("llm_explanation").is_none());
}

#[tokio::test]
async fn negative_amounts_are_unprocessable() {
    let mut body = reference_body();
    body["fixed_expenses"] = json!(-10);

    let response = router()
        .oneshot(post_json("/api/v1/plan", &body))
        .await
        .expect("router responds");
    let (status, payload) = read_json(response).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.starts_with("fixed_expenses")));
}

#[tokio::test]
async fn chat_routes_answer_with_response_field() {
    for uri in ["/api/v1/chat", "/chat"] {
        let response = router()
            .oneshot(post_json(
                uri,
                &json!({ "message": "What should I do first?", "financial_data": {} }),
            ))
            .await
            .expect("router responds");
        let (status, body) = read_json(response).await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["response"], "Explained.", "{uri}");
    }
}

#[tokio::test]
async fn non_positive_goal_months_still_return_a_plan() {
    for months in [0, -2] {
        let mut body = reference_body();
        body["savings_goal_months"] = json!(months);

        let response = router()
            .oneshot(post_json("/api/v1/plan", &body))
            .await
            .expect("router responds");
        let (status, payload) = read_json(response).await;

        assert_eq!(status, StatusCode::OK, "{months}");
        assert_eq!(payload["score"]["score"], 89.0);
        assert!(payload["savings_goal"].get("target").is_none());
        assert_eq!(payload["savings_goal"]["ideal_months_using_planned_savings"], 3);
    }
}

#[tokio::test]
async fn enormous_income_serializes_as_numbers() {
    let mut body = reference_body();
    body["monthly_income"] = json!(1e307);

    let response = router()
        .oneshot(post_json("/api/v1/plan", &body))
        .await
        .expect("router responds");
    let (status, payload) = read_json(response).await;

    assert_eq!(status, StatusCode::OK);
    let totals = payload["budget"]["totals"]
        .as_object()
        .expect("totals object");
    assert!(totals.values().all(Value::is_number), "{totals:?}");
    assert!(payload["budget"]["meta"]["flexible_pool"].is_number());
    assert!(payload["score"]["score"].is_number());
}
