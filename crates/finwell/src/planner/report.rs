use super::budget::{allocate, BudgetPlan};
use super::domain::{FinancialInputs, InputError, PlanRequest};
use super::goal::{goal_timeline, SavingsGoalPlan};
use super::investing::{assess, infer_region, AllocationSignals, InvestingAssessment, ReadinessSignals};
use super::ratios::{normalize, RatioSet};
use super::scoring::{score, ScoreResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sha2::{Digest, Sha256};

const PLAN_ID_HEX_LEN: usize = 16;

/// Every computed figure for one request. This is the authoritative record: the
/// explanation text is attached next to it, never merged into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub plan_id: String,
    pub currency: String,
    pub score: ScoreResult,
    pub budget: BudgetPlan,
    pub investing: InvestingAssessment,
    pub savings_goal: SavingsGoalPlan,
}

/// Stateless pipeline: normalize, score, allocate, then advise.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanningEngine;

impl PlanningEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, request: &PlanRequest) -> Result<ScoreResult, InputError> {
        let inputs = request.financial_inputs()?;
        let ratios = normalize(&inputs);
        Ok(score(&ratios, inputs.emergency_months_target))
    }

    pub fn evaluate(&self, request: &PlanRequest) -> Result<PlanSnapshot, InputError> {
        let inputs = request.financial_inputs()?;
        Ok(self.evaluate_inputs(request, &inputs))
    }

    fn evaluate_inputs(&self, request: &PlanRequest, inputs: &FinancialInputs) -> PlanSnapshot {
        let ratios = normalize(inputs);
        let score_result = score(&ratios, inputs.emergency_months_target);
        let budget = allocate(inputs, inputs.budget_mode);

        let investing = advise_investing(request, &ratios, &score_result, &budget);
        let savings_goal = goal_timeline(
            &request.savings_goal(),
            &request.currency,
            budget.totals.recommended_savings,
            budget.totals.leftover,
            inputs.savings_monthly,
        );

        PlanSnapshot {
            plan_id: plan_id(request, inputs),
            currency: request.currency.clone(),
            score: score_result,
            budget,
            investing,
            savings_goal,
        }
    }
}

// Readiness looks at the reported (rounded) figures so it judges exactly what callers see.
fn advise_investing(
    request: &PlanRequest,
    ratios: &RatioSet,
    score_result: &ScoreResult,
    budget: &BudgetPlan,
) -> InvestingAssessment {
    let region = infer_region(request.country.as_deref(), &request.currency);
    let emergency_months = score_result.components.emergency_fund_months;

    let readiness = ReadinessSignals {
        score_state: score_result.state,
        emergency_months,
        leftover: budget.totals.leftover,
        recommended_savings: budget.totals.recommended_savings,
    };
    let allocation = AllocationSignals {
        score_state: score_result.state,
        emergency_months,
        debt_to_income: ratios.debt_to_income,
        savings_rate: ratios.savings_rate,
    };

    assess(region, &readiness, &allocation)
}

/// Stable 16-hex-char digest of the inputs that define a plan. The fingerprint's key
/// order is fixed, so identical inputs always hash identically.
pub fn plan_id(request: &PlanRequest, inputs: &FinancialInputs) -> String {
    let fingerprint = json!({
        "currency": request.currency,
        "country": request.country,
        "mode": inputs.budget_mode.label(),
        "income": inputs.monthly_income,
        "fixed": inputs.fixed_expenses,
        "variable": inputs.variable_expenses,
        "debt": inputs.debt_monthly_payment,
        "savings": inputs.savings_monthly,
        "savings_total": inputs.savings_total,
        "goal_cost": request.savings_goal_cost,
    });

    let digest = Sha256::digest(fingerprint.to_string().as_bytes());
    let mut encoded = hex::encode(digest);
    encoded.truncate(PLAN_ID_HEX_LEN);
    encoded
}

/// Read-only context handed to the explanation model alongside the plan.
pub fn explanation_context(request: &PlanRequest, snapshot: &PlanSnapshot) -> Value {
    let breakdown: Vec<Value> = request
        .variable_breakdown
        .iter()
        .map(|item| json!({ "name": item.name, "amount": item.amount }))
        .collect();

    json!({
        "plan_id": snapshot.plan_id,
        "currency": snapshot.currency,
        "region": snapshot.investing.region,
        "inputs": {
            "monthly_income": request.monthly_income,
            "fixed_expenses": request.fixed_expenses,
            "variable_expenses": request.effective_variable_expenses(),
            "debt_monthly_payment": request.debt_monthly_payment,
            "debt_total_balance": request.debt_total_balance,
            "savings_monthly": request.savings_monthly,
            "savings_total": request.savings_total,
            "emergency_months_target": request.emergency_months_target,
        },
        "score": snapshot.score,
        "budget_plan": snapshot.budget,
        "budget_mode": snapshot.budget.mode,
        "spending_patterns": {
            "variable_total": request.effective_variable_expenses(),
            "breakdown": breakdown,
        },
        "investing": {
            "readiness": snapshot.investing.readiness,
            "education": snapshot.investing.education,
            "allocation_example": snapshot.investing.allocation_example,
            "education_only": true,
        },
        "savings_goal": snapshot.savings_goal,
    })
}
