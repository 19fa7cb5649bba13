use super::domain::SavingsGoal;
use super::ratios::{round2, safe_div};
use serde::{Deserialize, Serialize};

/// Timeline projection for an optional savings goal.
///
/// The two month estimates are computed independently: one from the plan's savings
/// capacity (recommended savings plus leftover), one from what the household says it saves
/// today. Either is `None` when its capacity is zero; neither stands in for the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoalPlan {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_name: Option<String>,
    #[serde(default)]
    pub currency: String,
    pub goal_cost: Option<f64>,
    pub planned_monthly_capacity: Option<f64>,
    pub current_monthly_savings: Option<f64>,
    pub ideal_months_using_planned_savings: Option<u64>,
    pub ideal_months_using_current_savings: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<GoalTarget>,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Present only when the caller also names a timeframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalTarget {
    pub target_months: u64,
    pub required_monthly: f64,
    pub gap_vs_current: f64,
    pub status: GoalStatus,
    pub suggested_split: GoalSplit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    OnTrack,
    NeedsIncrease,
}

/// How the plan's savings capacity divides between the goal and general savings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalSplit {
    pub goal_funding: f64,
    pub general_savings: f64,
}

/// Months needed at `capacity` per month, rounded up; `None` without capacity.
fn months_to_reach(goal_cost: f64, capacity: f64) -> Option<u64> {
    if capacity > 0.0 {
        Some((goal_cost / capacity).ceil() as u64)
    } else {
        None
    }
}

pub fn goal_timeline(
    goal: &SavingsGoal,
    currency: &str,
    recommended_savings: f64,
    leftover: f64,
    current_monthly_savings: f64,
) -> SavingsGoalPlan {
    let goal_cost = match goal.cost {
        Some(cost) if cost > 0.0 => cost,
        other => {
            return SavingsGoalPlan {
                enabled: false,
                goal_name: None,
                currency: currency.to_string(),
                goal_cost: other,
                planned_monthly_capacity: None,
                current_monthly_savings: None,
                ideal_months_using_planned_savings: None,
                ideal_months_using_current_savings: None,
                target: None,
                notes: vec!["Add a goal amount to estimate an ideal timeline.".to_string()],
            }
        }
    };

    let planned_capacity = recommended_savings.max(0.0) + leftover.max(0.0);
    let current_capacity = current_monthly_savings.max(0.0);

    let months_planned = months_to_reach(goal_cost, planned_capacity);
    let months_current = months_to_reach(goal_cost, current_capacity);

    let mut notes = Vec::with_capacity(2);
    match months_planned {
        Some(months) => notes.push(format!(
            "Using your planned savings capacity, you could reach the goal in about {months} months."
        )),
        None => notes.push(
            "Your planned savings capacity is 0, so a timeline can't be estimated until savings increases."
                .to_string(),
        ),
    }
    match months_current {
        Some(months) => notes.push(format!(
            "Using your current monthly savings input, you could reach the goal in about {months} months."
        )),
        None => notes.push(
            "Your current monthly savings input is 0, so a timeline can't be estimated from current savings."
                .to_string(),
        ),
    }

    let target = match goal.months {
        Some(months) if months > 0 => Some(goal_target(
            goal_cost,
            months.unsigned_abs(),
            planned_capacity,
            current_capacity,
        )),
        Some(_) => {
            notes.push(
                "A target timeframe needs at least 1 month, so no monthly target was set.".to_string(),
            );
            None
        }
        None => None,
    };

    SavingsGoalPlan {
        enabled: true,
        goal_name: goal.name.clone(),
        currency: currency.to_string(),
        goal_cost: Some(round2(goal_cost)),
        planned_monthly_capacity: Some(round2(planned_capacity)),
        current_monthly_savings: Some(round2(current_capacity)),
        ideal_months_using_planned_savings: months_planned,
        ideal_months_using_current_savings: months_current,
        target,
        notes,
    }
}

fn goal_target(
    goal_cost: f64,
    months: u64,
    planned_capacity: f64,
    current_capacity: f64,
) -> GoalTarget {
    let required_monthly = safe_div(goal_cost, months as f64);
    let goal_funding = required_monthly.min(planned_capacity);
    let general_savings = (planned_capacity - goal_funding).max(0.0);

    let status = if current_capacity >= required_monthly {
        GoalStatus::OnTrack
    } else {
        GoalStatus::NeedsIncrease
    };

    GoalTarget {
        target_months: months,
        required_monthly: round2(required_monthly),
        gap_vs_current: round2(required_monthly - current_capacity),
        status,
        suggested_split: GoalSplit {
            goal_funding: round2(goal_funding),
            general_savings: round2(general_savings),
        },
    }
}
