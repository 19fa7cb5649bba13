use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

use super::domain::PlanRequest;
use super::service::PlanningService;
use crate::explain::{ChatRequest, Explainer};

/// Router builder exposing the planning, scoring, and chat endpoints.
pub fn planner_router<E>(service: Arc<PlanningService<E>>) -> Router
where
    E: Explainer + 'static,
{
    Router::new()
        .route("/api/v1/plan", post(plan_handler::<E>))
        .route("/generate", post(plan_handler::<E>))
        .route("/api/v1/score", post(score_handler::<E>))
        .route("/api/v1/chat", post(chat_handler::<E>))
        .route("/chat", post(chat_handler::<E>))
        .with_state(service)
}

pub(crate) async fn plan_handler<E>(
    State(service): State<Arc<PlanningService<E>>>,
    Json(request): Json<PlanRequest>,
) -> Response
where
    E: Explainer + 'static,
{
    match service.generate(request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn score_handler<E>(
    State(service): State<Arc<PlanningService<E>>>,
    Json(request): Json<PlanRequest>,
) -> Response
where
    E: Explainer + 'static,
{
    match service.score(&request) {
        Ok(score) => (StatusCode::OK, Json(json!({ "score": score }))).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn chat_handler<E>(
    State(service): State<Arc<PlanningService<E>>>,
    Json(request): Json<ChatRequest>,
) -> Response
where
    E: Explainer + 'static,
{
    let reply = service.chat(request).await;
    (StatusCode::OK, Json(reply)).into_response()
}
