use super::ChatTurn;
use crate::planner::SavingsGoalPlan;
use regex::RegexSet;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::sync::OnceLock;

/// Free-text question about a previously computed plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    /// The last plan returned to the client, treated strictly as read-only context.
    #[serde(default)]
    pub financial_data: Value,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    #[serde(default)]
    pub plan_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Drop the ASCII allocation bars so the model cannot echo or mangle them.
pub fn strip_allocation_visual(financial_data: &Value) -> Value {
    let mut data = financial_data.clone();
    if let Some(investing) = data.get_mut("investing").and_then(Value::as_object_mut) {
        investing.remove("allocation_visual");
    }
    data
}

fn section<'a>(data: &'a Value, key: &str) -> &'a Value {
    data.get(key).filter(|value| value.is_object()).unwrap_or(&Value::Null)
}

fn object_or_empty(value: &Value) -> Value {
    if value.is_object() {
        value.clone()
    } else {
        Value::Object(Map::new())
    }
}

/// Compact context for a chat turn: only the sections the assistant may restate.
pub fn build_chat_context(financial_data: &Value, plan_id: Option<&str>) -> Value {
    let data = strip_allocation_visual(financial_data);

    let budget = section(&data, "budget");
    let investing = section(&data, "investing");
    let spending = section(&data, "spending_patterns");

    let breakdown = spending
        .get("breakdown")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let breakdown_text = breakdown
        .iter()
        .filter_map(|item| {
            let name = item.get("name")?.as_str()?.trim();
            let amount = item.get("amount").filter(|amount| amount.is_number())?;
            if name.is_empty() {
                None
            } else {
                Some(format!("- {name}: {amount}"))
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    json!({
        "plan_id": plan_id.or_else(|| data.get("plan_id").and_then(Value::as_str)),
        "currency": data.get("currency").cloned().unwrap_or(Value::Null),
        "region": investing.get("region").cloned().unwrap_or(Value::Null),
        "budget_totals": object_or_empty(budget.get("totals").unwrap_or(&Value::Null)),
        "budget_deltas": object_or_empty(budget.get("deltas").unwrap_or(&Value::Null)),
        "investing": {
            "readiness": object_or_empty(investing.get("readiness").unwrap_or(&Value::Null)),
            "education": object_or_empty(investing.get("education").unwrap_or(&Value::Null)),
            "allocation_example": investing.get("allocation_example").cloned().unwrap_or(Value::Null),
        },
        "spending_patterns": {
            "variable_total": spending.get("variable_total").cloned().unwrap_or(Value::Null),
            "breakdown": breakdown,
            "breakdown_text": breakdown_text,
        },
        "savings_goal": data.get("savings_goal").cloned().unwrap_or(Value::Null),
    })
}

fn timeline_patterns() -> &'static RegexSet {
    static PATTERNS: OnceLock<RegexSet> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        RegexSet::new([
            r"\bhow long\b",
            r"\bhow many months\b",
            r"\bhow fast\b",
            r"\btime to\b",
            r"\bsave up\b",
            r"\breach (my )?goal\b",
            r"\bwhen can i\b",
        ])
        .unwrap_or_else(|_| RegexSet::empty())
    })
}

/// Questions about reaching the savings goal are answered from the plan, not the model.
pub fn is_goal_timeline_question(message: &str) -> bool {
    let message = message.trim().to_lowercase();
    !message.is_empty() && timeline_patterns().is_match(&message)
}

/// Restate the goal timeline already present in the plan without deriving new figures.
pub fn goal_timeline_reply(savings_goal: &Value) -> String {
    let claims_enabled = savings_goal["enabled"].as_bool().unwrap_or(false);
    let plan = match serde_json::from_value::<SavingsGoalPlan>(savings_goal.clone()) {
        Ok(plan) if plan.enabled => plan,
        Err(_) if claims_enabled => {
            return "I couldn't read the savings goal from this plan. Generate your plan again and ask once more."
                .to_string();
        }
        _ => {
            return "To estimate a timeline, enter a savings goal amount in the Savings Goal section and generate your plan again."
                .to_string();
        }
    };

    let currency = plan.currency.as_str();
    let amount = |value: Option<f64>| format!("{:.2} {currency}", value.unwrap_or(0.0));

    let mut lines = vec!["Savings goal timeline (estimated using your computed plan):".to_string()];
    if let Some(name) = &plan.goal_name {
        lines.push(format!("- Saving for: {name}"));
    }
    lines.push(format!("- Goal amount: {}", amount(plan.goal_cost)));
    lines.push(format!(
        "- Planned savings capacity per month (recommended savings + leftover): {}",
        amount(plan.planned_monthly_capacity)
    ));
    lines.push(match plan.ideal_months_using_planned_savings {
        Some(months) => format!("- Ideal time using planned savings: about {months} months"),
        None => "- Ideal time using planned savings: not available (capacity is 0)".to_string(),
    });
    lines.push(format!(
        "- Your current monthly savings input: {}",
        amount(plan.current_monthly_savings)
    ));
    lines.push(match plan.ideal_months_using_current_savings {
        Some(months) => format!("- Ideal time using current savings: about {months} months"),
        None => "- Ideal time using current savings: not available (current savings is 0)".to_string(),
    });
    if let Some(target) = &plan.target {
        lines.push(format!(
            "- To finish in {} months you would need {:.2} {currency} per month",
            target.target_months, target.required_monthly
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_timeline_questions() {
        assert!(is_goal_timeline_question("How long until I can buy the laptop?"));
        assert!(is_goal_timeline_question("when can I reach my goal"));
        assert!(!is_goal_timeline_question("Should I pay off debt first?"));
        assert!(!is_goal_timeline_question("   "));
    }

    #[test]
    fn strips_visual_but_keeps_allocation_numbers() {
        let data = json!({
            "investing": {
                "allocation_example": { "stocks_pct": 80, "bonds_pct": 20, "cash_pct": 0 },
                "allocation_visual": "Stocks  80% |████|"
            }
        });
        let stripped = strip_allocation_visual(&data);
        assert!(stripped["investing"].get("allocation_visual").is_none());
        assert_eq!(stripped["investing"]["allocation_example"]["stocks_pct"], 80);
    }

    #[test]
    fn chat_context_formats_breakdown_bullets() {
        let data = json!({
            "currency": "EUR",
            "spending_patterns": {
                "variable_total": 320.0,
                "breakdown": [
                    { "name": "Groceries", "amount": 250.0 },
                    { "name": "  ", "amount": 10.0 },
                    { "name": "Coffee", "amount": 70.0 }
                ]
            }
        });
        let context = build_chat_context(&data, Some("plan-1"));
        assert_eq!(context["plan_id"], "plan-1");
        assert_eq!(context["currency"], "EUR");
        assert_eq!(
            context["spending_patterns"]["breakdown_text"],
            "- Groceries: 250.0\n- Coffee: 70.0"
        );
        assert!(context["budget_totals"].is_object());
    }

    #[test]
    fn timeline_reply_without_goal_asks_for_amount() {
        let reply = goal_timeline_reply(&Value::Null);
        assert!(reply.starts_with("To estimate a timeline"));
    }

    #[test]
    fn unreadable_enabled_goal_is_reported_as_such() {
        let goal = json!({
            "enabled": true,
            "currency": "USD",
            "goal_cost": 1200.0,
            "planned_monthly_capacity": 100.0,
            "current_monthly_savings": 0.0,
            "ideal_months_using_planned_savings": 12.5,
            "ideal_months_using_current_savings": null
        });

        let reply = goal_timeline_reply(&goal);
        assert!(reply.starts_with("I couldn't read the savings goal"));
    }
}
