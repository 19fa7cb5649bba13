use finwell::config::ExplainerConfig;
use finwell::error::AppError;
use finwell::explain::ChatCompletionsExplainer;
use finwell::planner::PlanningService;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type HostedPlanningService = PlanningService<ChatCompletionsExplainer>;

/// Planning service backed by the configured chat-completions endpoint. Without an API key
/// the service still runs and every explanation is a placeholder.
pub(crate) fn build_planning_service(
    config: &ExplainerConfig,
) -> Result<Arc<HostedPlanningService>, AppError> {
    let explainer = ChatCompletionsExplainer::from_config(config)?;
    if !explainer.is_enabled() {
        warn!("no LLM_API_KEY or GROQ_API_KEY set; explanations will be placeholders");
    }

    Ok(Arc::new(PlanningService::new(
        Arc::new(explainer),
        config.timeout,
    )))
}
