use super::domain::FinancialInputs;
use serde::{Deserialize, Serialize};

/// Division that never raises and never lets NaN or infinity escape: a zero
/// denominator or a non-finite quotient yields exactly `0.0`.
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let quotient = numerator / denominator;
    if quotient.is_finite() {
        quotient
    } else {
        0.0
    }
}

/// Clamp into `[lo, hi]`, mapping NaN to `lo`.
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        lo
    } else {
        value.clamp(lo, hi)
    }
}

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let scaled = value * 100.0;
    // Magnitudes this large carry no fractional cents to round.
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// Ratio (0.2) to percentage (20.0).
pub fn percent(ratio: f64) -> f64 {
    ratio * 100.0
}

/// Dimensionless view of the household's month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioSet {
    pub savings_rate: f64,
    pub debt_to_income: f64,
    pub housing_pct: f64,
    pub emergency_months: f64,
}

pub fn normalize(inputs: &FinancialInputs) -> RatioSet {
    let income = inputs.monthly_income;
    // A zero-expense household still divides by one month, not by zero.
    let monthly_expenses = (inputs.fixed_expenses + inputs.variable_expenses).max(1.0);

    RatioSet {
        savings_rate: safe_div(inputs.savings_monthly, income),
        debt_to_income: safe_div(inputs.debt_monthly_payment, income),
        housing_pct: safe_div(inputs.fixed_expenses, income),
        emergency_months: safe_div(inputs.savings_total, monthly_expenses),
    }
}
