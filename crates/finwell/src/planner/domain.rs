use serde::{Deserialize, Serialize};

const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_EMERGENCY_MONTHS_TARGET: f64 = 3.0;

/// Budgeting style selecting the target savings rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum BudgetMode {
    Super,
    #[default]
    Normal,
    Relaxed,
}

impl BudgetMode {
    /// Case-insensitive lookup; anything unrecognized is treated as `Normal`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "super" => Self::Super,
            "relaxed" => Self::Relaxed,
            _ => Self::Normal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetMode::Super => "super",
            BudgetMode::Normal => "normal",
            BudgetMode::Relaxed => "relaxed",
        }
    }
}

impl From<String> for BudgetMode {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Categorical reading of the overall score, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreState {
    Critical,
    Vulnerable,
    Stable,
    Strong,
}

impl ScoreState {
    pub fn label(self) -> &'static str {
        match self {
            ScoreState::Critical => "critical",
            ScoreState::Vulnerable => "vulnerable",
            ScoreState::Stable => "stable",
            ScoreState::Strong => "strong",
        }
    }

    /// States in which investing is off the table until the budget stabilizes.
    pub fn is_unsettled(self) -> bool {
        matches!(self, ScoreState::Critical | ScoreState::Vulnerable)
    }
}

/// One named line of discretionary spending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableItem {
    pub name: String,
    pub amount: f64,
}

/// Request body accepted by the planner. Monetary fields that are absent default to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub monthly_income: f64,
    #[serde(default)]
    pub fixed_expenses: f64,
    #[serde(default)]
    pub variable_expenses: f64,
    #[serde(default)]
    pub variable_breakdown: Vec<VariableItem>,
    #[serde(default)]
    pub debt_monthly_payment: f64,
    #[serde(default)]
    pub debt_total_balance: f64,
    #[serde(default)]
    pub savings_monthly: f64,
    #[serde(default)]
    pub savings_total: f64,
    #[serde(default)]
    pub budget_mode: BudgetMode,
    #[serde(default = "default_emergency_months_target")]
    pub emergency_months_target: f64,
    #[serde(default)]
    pub savings_goal_cost: Option<f64>,
    #[serde(default)]
    pub savings_goal_months: Option<i64>,
    #[serde(default)]
    pub savings_goal_name: Option<String>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_emergency_months_target() -> f64 {
    DEFAULT_EMERGENCY_MONTHS_TARGET
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            country: None,
            monthly_income: 0.0,
            fixed_expenses: 0.0,
            variable_expenses: 0.0,
            variable_breakdown: Vec::new(),
            debt_monthly_payment: 0.0,
            debt_total_balance: 0.0,
            savings_monthly: 0.0,
            savings_total: 0.0,
            budget_mode: BudgetMode::Normal,
            emergency_months_target: DEFAULT_EMERGENCY_MONTHS_TARGET,
            savings_goal_cost: None,
            savings_goal_months: None,
            savings_goal_name: None,
        }
    }
}

impl PlanRequest {
    /// Total discretionary spending: the breakdown wins when it sums to something positive.
    pub fn effective_variable_expenses(&self) -> f64 {
        let breakdown_total: f64 = self.variable_breakdown.iter().map(|item| item.amount).sum();
        if breakdown_total > 0.0 {
            breakdown_total
        } else {
            self.variable_expenses
        }
    }

    /// Validate the boundary constraints and produce the engine's numeric inputs.
    pub fn financial_inputs(&self) -> Result<FinancialInputs, InputError> {
        let amounts = [
            ("monthly_income", self.monthly_income),
            ("fixed_expenses", self.fixed_expenses),
            ("variable_expenses", self.variable_expenses),
            ("debt_monthly_payment", self.debt_monthly_payment),
            ("debt_total_balance", self.debt_total_balance),
            ("savings_monthly", self.savings_monthly),
            ("savings_total", self.savings_total),
        ];
        for (field, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(InputError::NegativeAmount { field, value });
            }
        }

        for item in &self.variable_breakdown {
            if !item.amount.is_finite() || item.amount < 0.0 {
                return Err(InputError::BreakdownAmount {
                    name: item.name.clone(),
                    value: item.amount,
                });
            }
        }

        if !self.emergency_months_target.is_finite() || self.emergency_months_target <= 0.0 {
            return Err(InputError::EmergencyTarget(self.emergency_months_target));
        }

        if let Some(cost) = self.savings_goal_cost {
            if !cost.is_finite() {
                return Err(InputError::GoalCost(cost));
            }
        }

        Ok(FinancialInputs {
            monthly_income: self.monthly_income,
            fixed_expenses: self.fixed_expenses,
            variable_expenses: self.effective_variable_expenses(),
            debt_monthly_payment: self.debt_monthly_payment,
            debt_total_balance: self.debt_total_balance,
            savings_monthly: self.savings_monthly,
            savings_total: self.savings_total,
            emergency_months_target: self.emergency_months_target,
            budget_mode: self.budget_mode,
        })
    }

    pub fn savings_goal(&self) -> SavingsGoal {
        SavingsGoal {
            cost: self.savings_goal_cost,
            months: self.savings_goal_months,
            name: self
                .savings_goal_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
        }
    }
}

/// Validated numeric snapshot consumed by the engine components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialInputs {
    pub monthly_income: f64,
    pub fixed_expenses: f64,
    pub variable_expenses: f64,
    pub debt_monthly_payment: f64,
    pub debt_total_balance: f64,
    pub savings_monthly: f64,
    pub savings_total: f64,
    pub emergency_months_target: f64,
    pub budget_mode: BudgetMode,
}

/// Optional savings target supplied alongside the monthly figures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavingsGoal {
    pub cost: Option<f64>,
    /// Raw timeframe; values below one month leave the goal without a target block.
    pub months: Option<i64>,
    pub name: Option<String>,
}

/// Boundary validation failures; nothing inside the engine itself can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be a finite number greater than or equal to zero (got {value})")]
    NegativeAmount { field: &'static str, value: f64 },
    #[error("variable_breakdown item '{name}' must have a finite, non-negative amount (got {value})")]
    BreakdownAmount { name: String, value: f64 },
    #[error("emergency_months_target must be greater than zero (got {0})")]
    EmergencyTarget(f64),
    #[error("savings_goal_cost must be a finite number (got {0})")]
    GoalCost(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_mode_normalizes_unknown_values() {
        assert_eq!(BudgetMode::parse("Super"), BudgetMode::Super);
        assert_eq!(BudgetMode::parse(" RELAXED "), BudgetMode::Relaxed);
        assert_eq!(BudgetMode::parse("aggressive"), BudgetMode::Normal);
        assert_eq!(BudgetMode::parse(""), BudgetMode::Normal);
    }

    #[test]
    fn request_fields_default_to_zero() {
        let request: PlanRequest =
            serde_json::from_str(r#"{"monthly_income": 2500}"#).expect("request parses");
        assert_eq!(request.currency, "USD");
        assert_eq!(request.fixed_expenses, 0.0);
        assert_eq!(request.budget_mode, BudgetMode::Normal);
        assert_eq!(request.emergency_months_target, 3.0);
        assert!(request.savings_goal_cost.is_none());
    }

    #[test]
    fn unknown_budget_mode_deserializes_as_normal() {
        let request: PlanRequest =
            serde_json::from_str(r#"{"budget_mode": "yolo"}"#).expect("request parses");
        assert_eq!(request.budget_mode, BudgetMode::Normal);
    }

    #[test]
    fn breakdown_overrides_variable_total_when_positive() {
        let mut request = PlanRequest {
            variable_expenses: 500.0,
            ..PlanRequest::default()
        };
        assert_eq!(request.effective_variable_expenses(), 500.0);

        request.variable_breakdown = vec![
            VariableItem {
                name: "Groceries".to_string(),
                amount: 300.0,
            },
            VariableItem {
                name: "Coffee".to_string(),
                amount: 45.5,
            },
        ];
        assert_eq!(request.effective_variable_expenses(), 345.5);

        request.variable_breakdown = vec![VariableItem {
            name: "Hobbies".to_string(),
            amount: 0.0,
        }];
        assert_eq!(request.effective_variable_expenses(), 500.0);
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let request = PlanRequest {
            savings_total: -10.0,
            ..PlanRequest::default()
        };
        match request.financial_inputs() {
            Err(InputError::NegativeAmount { field, value }) => {
                assert_eq!(field, "savings_total");
                assert_eq!(value, -10.0);
            }
            other => panic!("expected negative amount error, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_goal_months_do_not_block_the_plan() {
        for months in [0, -3, 5_000_000_000] {
            let request = PlanRequest {
                savings_goal_cost: Some(1200.0),
                savings_goal_months: Some(months),
                ..PlanRequest::default()
            };
            assert!(request.financial_inputs().is_ok(), "{months}");
            assert_eq!(request.savings_goal().months, Some(months));
        }
    }

    #[test]
    fn blank_goal_names_are_dropped() {
        let request = PlanRequest {
            savings_goal_cost: Some(900.0),
            savings_goal_name: Some("   ".to_string()),
            ..PlanRequest::default()
        };
        assert_eq!(request.savings_goal().name, None);
    }
}
