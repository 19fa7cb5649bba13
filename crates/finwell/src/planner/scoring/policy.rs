use super::super::domain::ScoreState;

/// Named sub-scores that feed the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScoreFactor {
    EmergencyFund,
    DebtLoad,
    SavingsRate,
    Housing,
}

/// Aggregate weights; they sum to 1.0.
pub(crate) const FACTOR_WEIGHTS: [(ScoreFactor, f64); 4] = [
    (ScoreFactor::EmergencyFund, 0.30),
    (ScoreFactor::DebtLoad, 0.28),
    (ScoreFactor::SavingsRate, 0.22),
    (ScoreFactor::Housing, 0.20),
];

/// Lower bounds (inclusive) for each state, strongest first. Anything below the last
/// bound is critical.
pub(crate) const STATE_THRESHOLDS: [(f64, ScoreState); 3] = [
    (80.0, ScoreState::Strong),
    (60.0, ScoreState::Stable),
    (40.0, ScoreState::Vulnerable),
];

pub fn state_for_score(score: f64) -> ScoreState {
    STATE_THRESHOLDS
        .iter()
        .find(|(floor, _)| score >= *floor)
        .map(|(_, state)| *state)
        .unwrap_or(ScoreState::Critical)
}
