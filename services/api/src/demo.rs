use crate::infra::build_planning_service;
use clap::Args;
use finwell::config::AppConfig;
use finwell::error::AppError;
use finwell::planner::{
    BudgetMode, PlanRequest, PlanSnapshot, PlanningEngine, ScoreState, VariableItem,
};
use serde::Serialize;

#[derive(Args, Debug, Default)]
pub(crate) struct PlanArgs {
    /// Monthly take-home income
    #[arg(long, default_value_t = 0.0)]
    pub(crate) income: f64,
    /// Rent, utilities, and other fixed monthly costs
    #[arg(long, default_value_t = 0.0)]
    pub(crate) fixed: f64,
    /// Discretionary monthly spending
    #[arg(long, default_value_t = 0.0)]
    pub(crate) variable: f64,
    /// Named variable expense as NAME=AMOUNT; repeatable and overrides --variable
    #[arg(long = "expense", value_parser = parse_variable_item)]
    pub(crate) expenses: Vec<VariableItem>,
    /// Minimum monthly debt payments
    #[arg(long, default_value_t = 0.0)]
    pub(crate) debt_payment: f64,
    /// Outstanding debt balance
    #[arg(long, default_value_t = 0.0)]
    pub(crate) debt_balance: f64,
    /// Amount currently saved each month
    #[arg(long, default_value_t = 0.0)]
    pub(crate) savings_monthly: f64,
    /// Savings already accumulated
    #[arg(long, default_value_t = 0.0)]
    pub(crate) savings_total: f64,
    /// Budget mode: super, normal, or relaxed
    #[arg(long, default_value = "normal")]
    pub(crate) mode: String,
    /// Currency label shown next to amounts
    #[arg(long, default_value = "USD")]
    pub(crate) currency: String,
    /// Country used to pick familiar investing account types
    #[arg(long)]
    pub(crate) country: Option<String>,
    /// Months of expenses that count as a full emergency fund
    #[arg(long, default_value_t = 3.0)]
    pub(crate) emergency_target: f64,
    /// Savings goal amount
    #[arg(long)]
    pub(crate) goal_cost: Option<f64>,
    /// Months in which to reach the savings goal
    #[arg(long)]
    pub(crate) goal_months: Option<i64>,
    /// What the savings goal is for
    #[arg(long)]
    pub(crate) goal_name: Option<String>,
    /// Print the plan as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// Ask the configured model for a written explanation
    #[arg(long)]
    pub(crate) explain: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Only show this budget mode instead of comparing all three
    #[arg(long)]
    pub(crate) mode: Option<String>,
}

fn parse_variable_item(raw: &str) -> Result<VariableItem, String> {
    let (name, amount) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=AMOUNT, got '{raw}'"))?;
    let amount = amount
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid amount in '{raw}' ({err})"))?;

    Ok(VariableItem {
        name: name.trim().to_string(),
        amount,
    })
}

impl PlanArgs {
    fn to_request(&self) -> PlanRequest {
        PlanRequest {
            currency: self.currency.clone(),
            country: self.country.clone(),
            monthly_income: self.income,
            fixed_expenses: self.fixed,
            variable_expenses: self.variable,
            variable_breakdown: self.expenses.clone(),
            debt_monthly_payment: self.debt_payment,
            debt_total_balance: self.debt_balance,
            savings_monthly: self.savings_monthly,
            savings_total: self.savings_total,
            budget_mode: BudgetMode::parse(&self.mode),
            emergency_months_target: self.emergency_target,
            savings_goal_cost: self.goal_cost,
            savings_goal_months: self.goal_months,
            savings_goal_name: self.goal_name.clone(),
        }
    }
}

pub(crate) async fn run_plan(args: PlanArgs) -> Result<(), AppError> {
    let request = args.to_request();

    if args.explain {
        let config = AppConfig::load()?;
        let service = build_planning_service(&config.explainer)?;
        let response = service.generate(request).await?;
        if args.json {
            print_json(&response)?;
        } else {
            render_plan(&response.plan);
            println!("\nExplanation");
            println!("{}", response.llm_explanation);
        }
        return Ok(());
    }

    let plan = PlanningEngine::new().evaluate(&request)?;
    if args.json {
        print_json(&plan)?;
    } else {
        render_plan(&plan);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let modes = match args.mode.as_deref() {
        Some(mode) => vec![BudgetMode::parse(mode)],
        None => vec![BudgetMode::Super, BudgetMode::Normal, BudgetMode::Relaxed],
    };

    println!("Financial well-being demo");
    println!("Household: 4000 income, 1200 fixed, 500 variable, 200 debt, 400 saved monthly, 6000 saved");

    let engine = PlanningEngine::new();
    for mode in modes {
        let plan = engine.evaluate(&demo_request(mode))?;
        println!("\n=== {} mode ===", mode.label());
        render_plan(&plan);
    }

    Ok(())
}

fn demo_request(mode: BudgetMode) -> PlanRequest {
    PlanRequest {
        currency: "USD".to_string(),
        country: Some("United States".to_string()),
        monthly_income: 4000.0,
        fixed_expenses: 1200.0,
        variable_expenses: 500.0,
        variable_breakdown: vec![
            VariableItem {
                name: "Groceries".to_string(),
                amount: 300.0,
            },
            VariableItem {
                name: "Transport".to_string(),
                amount: 120.0,
            },
            VariableItem {
                name: "Streaming".to_string(),
                amount: 80.0,
            },
        ],
        debt_monthly_payment: 200.0,
        debt_total_balance: 3500.0,
        savings_monthly: 400.0,
        savings_total: 6000.0,
        budget_mode: mode,
        savings_goal_cost: Some(2400.0),
        savings_goal_months: Some(6),
        savings_goal_name: Some("Laptop".to_string()),
        ..PlanRequest::default()
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

fn render_plan(plan: &PlanSnapshot) {
    for line in plan_lines(plan) {
        println!("{line}");
    }
}

fn state_marker(state: ScoreState) -> &'static str {
    match state {
        ScoreState::Strong => "[++]",
        ScoreState::Stable => "[+ ]",
        ScoreState::Vulnerable => "[- ]",
        ScoreState::Critical => "[--]",
    }
}

pub(crate) fn plan_lines(plan: &PlanSnapshot) -> Vec<String> {
    let currency = plan.currency.as_str();
    let score = &plan.score;
    let totals = &plan.budget.totals;
    let mut lines = Vec::new();

    lines.push(format!("Plan {}", plan.plan_id));
    lines.push(format!(
        "Score {:.2} {} {}",
        score.score,
        state_marker(score.state),
        score.state.label()
    ));
    lines.push(format!(
        "- Savings rate {:.2}% (sub-score {:.2})",
        score.components.savings_rate_pct, score.sub_scores.savings_rate_score
    ));
    lines.push(format!(
        "- Debt to income {:.2}% (sub-score {:.2})",
        score.components.debt_to_income_pct, score.sub_scores.debt_score
    ));
    lines.push(format!(
        "- Housing {:.2}% of income (sub-score {:.2})",
        score.components.housing_pct, score.sub_scores.housing_score
    ));
    lines.push(format!(
        "- Emergency fund {:.2} months (sub-score {:.2})",
        score.components.emergency_fund_months, score.sub_scores.emergency_score
    ));

    lines.push(format!(
        "\nBudget ({} mode, {:.0}% savings target)",
        plan.budget.mode.label(),
        plan.budget.meta.target_savings_rate_pct
    ));
    lines.push(format!("- Income {:.2} {currency}", totals.income));
    lines.push(format!("- Fixed {:.2} {currency}", totals.fixed));
    lines.push(format!("- Debt {:.2} {currency}", totals.debt));
    lines.push(format!(
        "- Savings {:.2} {currency} ({:+.2})",
        totals.recommended_savings, plan.budget.deltas.savings_change
    ));
    lines.push(format!(
        "- Variable {:.2} {currency} ({:+.2})",
        totals.recommended_variable, plan.budget.deltas.variable_change
    ));
    lines.push(format!("- Leftover {:.2} {currency}", totals.leftover));

    let investing = &plan.investing;
    lines.push(format!(
        "\nInvesting ({}): {}",
        investing.region.code(),
        if investing.readiness.ready {
            "ready to start"
        } else {
            "not yet"
        }
    ));
    for blocker in &investing.readiness.blockers {
        lines.push(format!("- blocker: {blocker}"));
    }
    for reason in &investing.readiness.reasons {
        lines.push(format!("- {reason}"));
    }
    lines.push(investing.allocation_visual.clone());
    lines.push(format!(
        "Accounts: {}",
        investing.education.wrappers.join(", ")
    ));

    let goal = &plan.savings_goal;
    if goal.enabled {
        lines.push(format!(
            "\nSavings goal{}",
            goal.goal_name
                .as_deref()
                .map(|name| format!(": {name}"))
                .unwrap_or_default()
        ));
        if let Some(target) = &goal.target {
            lines.push(format!(
                "- {:.2} {currency}/month needed to finish in {} months ({:?})",
                target.required_monthly, target.target_months, target.status
            ));
        }
    } else {
        lines.push("\nSavings goal".to_string());
    }
    for note in &goal.notes {
        lines.push(format!("- {note}"));
    }

    lines
}
