mod curves;
mod policy;

pub use policy::state_for_score;

use super::domain::ScoreState;
use super::ratios::{clamp, percent, round2, RatioSet};
use curves::{emergency_curve, DEBT_CURVE, HOUSING_CURVE, SAVINGS_RATE_CURVE};
use policy::{ScoreFactor, FACTOR_WEIGHTS};
use serde::{Deserialize, Serialize};

/// Well-being score with the ratios and sub-scores that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: f64,
    pub state: ScoreState,
    pub components: ScoreComponents,
    pub sub_scores: SubScores,
}

/// Underlying ratios as reported to callers: `_pct` fields are 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub savings_rate_pct: f64,
    pub debt_to_income_pct: f64,
    pub housing_pct: f64,
    pub emergency_fund_months: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub savings_rate_score: f64,
    pub debt_score: f64,
    pub housing_score: f64,
    pub emergency_score: f64,
}

impl SubScores {
    fn factor(&self, factor: ScoreFactor) -> f64 {
        match factor {
            ScoreFactor::EmergencyFund => self.emergency_score,
            ScoreFactor::DebtLoad => self.debt_score,
            ScoreFactor::SavingsRate => self.savings_rate_score,
            ScoreFactor::Housing => self.housing_score,
        }
    }

    fn rounded(self) -> Self {
        Self {
            savings_rate_score: round2(self.savings_rate_score),
            debt_score: round2(self.debt_score),
            housing_score: round2(self.housing_score),
            emergency_score: round2(self.emergency_score),
        }
    }
}

/// Map ratios through the scoring curves and fold them into the weighted score.
pub fn score(ratios: &RatioSet, emergency_target_months: f64) -> ScoreResult {
    let sub_scores = SubScores {
        savings_rate_score: SAVINGS_RATE_CURVE.evaluate(ratios.savings_rate),
        debt_score: DEBT_CURVE.evaluate(ratios.debt_to_income),
        housing_score: HOUSING_CURVE.evaluate(ratios.housing_pct),
        emergency_score: emergency_curve(emergency_target_months)
            .evaluate(ratios.emergency_months),
    };

    let weighted: f64 = FACTOR_WEIGHTS
        .iter()
        .map(|(factor, weight)| sub_scores.factor(*factor) * weight)
        .sum();
    let overall = round2(clamp(weighted, 0.0, 100.0));

    ScoreResult {
        score: overall,
        state: state_for_score(overall),
        components: ScoreComponents {
            savings_rate_pct: round2(percent(ratios.savings_rate)),
            debt_to_income_pct: round2(percent(ratios.debt_to_income)),
            housing_pct: round2(percent(ratios.housing_pct)),
            emergency_fund_months: round2(ratios.emergency_months),
        },
        sub_scores: sub_scores.rounded(),
    }
}
