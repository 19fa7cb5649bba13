use super::domain::{BudgetMode, FinancialInputs};
use super::ratios::{clamp, percent, round2};
use serde::{Deserialize, Serialize};

/// Share of the flexible pool routed to savings when the mode's target rate is out of reach.
const UNAFFORDABLE_TARGET_SAVINGS_SHARE: f64 = 0.60;

impl BudgetMode {
    pub fn target_savings_rate(self) -> f64 {
        match self {
            BudgetMode::Super => 0.30,
            BudgetMode::Normal => 0.20,
            BudgetMode::Relaxed => 0.10,
        }
    }
}

/// Recommended monthly split, rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetPlan {
    pub mode: BudgetMode,
    pub totals: BudgetTotals,
    pub deltas: BudgetDeltas,
    pub meta: BudgetMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetTotals {
    pub income: f64,
    pub fixed: f64,
    pub debt: f64,
    pub recommended_savings: f64,
    pub recommended_variable: f64,
    pub leftover: f64,
}

/// Signed change against what the household reports today; positive means "increase".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetDeltas {
    pub savings_change: f64,
    pub variable_change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetMeta {
    pub flexible_pool: f64,
    pub target_savings_rate_pct: f64,
    pub monthly_goal_capacity: f64,
}

pub fn allocate(inputs: &FinancialInputs, mode: BudgetMode) -> BudgetPlan {
    let income = inputs.monthly_income;
    let fixed = inputs.fixed_expenses;
    let debt = inputs.debt_monthly_payment;

    let flexible_pool = (income - fixed - debt).max(0.0);
    let target_rate = mode.target_savings_rate();
    let ideal_savings = income * target_rate;

    let recommended_savings = if ideal_savings > flexible_pool {
        flexible_pool * UNAFFORDABLE_TARGET_SAVINGS_SHARE
    } else {
        ideal_savings
    };
    let recommended_savings = clamp(recommended_savings, 0.0, flexible_pool);
    let recommended_variable = (flexible_pool - recommended_savings).max(0.0);

    // Absorbs floating-point drift; zero whenever the pool is fully allocated.
    let planned = fixed + debt + recommended_savings + recommended_variable;
    let leftover = (income - planned).max(0.0);

    let monthly_goal_capacity = recommended_savings.max(0.0) + leftover.max(0.0);

    BudgetPlan {
        mode,
        totals: BudgetTotals {
            income: round2(income),
            fixed: round2(fixed),
            debt: round2(debt),
            recommended_savings: round2(recommended_savings),
            recommended_variable: round2(recommended_variable),
            leftover: round2(leftover),
        },
        deltas: BudgetDeltas {
            savings_change: round2(recommended_savings - inputs.savings_monthly),
            variable_change: round2(recommended_variable - inputs.variable_expenses),
        },
        meta: BudgetMeta {
            flexible_pool: round2(flexible_pool),
            target_savings_rate_pct: round2(percent(target_rate)),
            monthly_goal_capacity: round2(monthly_goal_capacity),
        },
    }
}
