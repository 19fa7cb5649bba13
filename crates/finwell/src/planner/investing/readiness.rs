use super::super::domain::ScoreState;
use serde::{Deserialize, Serialize};

/// Runway below this many months blocks investing outright.
const MINIMUM_EMERGENCY_MONTHS: f64 = 1.0;
/// Runway at or above this many months counts as a solid foundation.
const COMFORTABLE_EMERGENCY_MONTHS: f64 = 3.0;

/// Whether the household should start investing, with the trail that led there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestingReadiness {
    pub ready: bool,
    pub blockers: Vec<String>,
    pub reasons: Vec<String>,
}

/// Figures the readiness checks look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadinessSignals {
    pub score_state: ScoreState,
    pub emergency_months: f64,
    pub leftover: f64,
    pub recommended_savings: f64,
}

enum Finding {
    Blocker(String),
    Reason(String),
}

type ReadinessCheck = fn(&ReadinessSignals) -> Finding;

/// Evaluated in order; each check contributes exactly one blocker or reason.
const CHECKS: [ReadinessCheck; 3] = [emergency_fund_check, financial_state_check, cash_flow_check];

fn emergency_fund_check(signals: &ReadinessSignals) -> Finding {
    if signals.emergency_months < MINIMUM_EMERGENCY_MONTHS {
        Finding::Blocker("Emergency fund is below 1 month of expenses.".to_string())
    } else if signals.emergency_months < COMFORTABLE_EMERGENCY_MONTHS {
        Finding::Reason(
            "Emergency fund is between 1-3 months (okay to start small, keep building it)."
                .to_string(),
        )
    } else {
        Finding::Reason("Emergency fund is 3+ months (solid foundation).".to_string())
    }
}

fn financial_state_check(signals: &ReadinessSignals) -> Finding {
    let label = signals.score_state.label();
    if signals.score_state.is_unsettled() {
        Finding::Blocker(format!(
            "Financial state is '{label}', stabilize your budget before investing."
        ))
    } else {
        Finding::Reason(format!("Financial state is '{label}' (stable enough)."))
    }
}

fn cash_flow_check(signals: &ReadinessSignals) -> Finding {
    if signals.leftover < 0.0 {
        Finding::Blocker("Your monthly budget is negative (expenses exceed income).".to_string())
    } else if signals.leftover == 0.0 {
        // A planned savings allocation can be redirected, so no buffer alone is not disqualifying.
        if signals.recommended_savings > 0.0 {
            Finding::Reason(
                "You have no extra leftover, but you can invest by redirecting part of your planned savings."
                    .to_string(),
            )
        } else {
            Finding::Blocker(
                "No positive monthly cash flow or savings available to invest.".to_string(),
            )
        }
    } else {
        Finding::Reason("Positive monthly cash flow available.".to_string())
    }
}

pub fn assess_readiness(signals: &ReadinessSignals) -> InvestingReadiness {
    let mut blockers = Vec::new();
    let mut reasons = Vec::new();

    for check in CHECKS {
        match check(signals) {
            Finding::Blocker(text) => blockers.push(text),
            Finding::Reason(text) => reasons.push(text),
        }
    }

    InvestingReadiness {
        ready: blockers.is_empty(),
        blockers,
        reasons,
    }
}
