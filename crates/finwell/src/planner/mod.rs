//! Deterministic financial well-being engine.
//!
//! Data flows one way: raw inputs are normalized into ratios, the ratios are scored, the
//! budget is allocated, and the investing and goal advisors read the results of those
//! stages. Every stage is a pure function; the service layer adds the explanation call.

pub mod budget;
pub mod domain;
pub mod goal;
pub mod investing;
pub mod ratios;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use budget::{allocate, BudgetDeltas, BudgetMeta, BudgetPlan, BudgetTotals};
pub use domain::{
    BudgetMode, FinancialInputs, InputError, PlanRequest, SavingsGoal, ScoreState, VariableItem,
};
pub use goal::{goal_timeline, GoalSplit, GoalStatus, GoalTarget, SavingsGoalPlan};
pub use investing::{
    allocation_example, assess_readiness, infer_region, region_education, AllocationExample,
    AllocationSignals, InvestingAssessment, InvestingEducation, InvestingReadiness,
    ReadinessSignals, Region,
};
pub use ratios::{normalize, round2, safe_div, RatioSet};
pub use report::{explanation_context, plan_id, PlanSnapshot, PlanningEngine};
pub use router::planner_router;
pub use scoring::{score, state_for_score, ScoreComponents, ScoreResult, SubScores};
pub use service::{PlanResponse, PlanningService};
