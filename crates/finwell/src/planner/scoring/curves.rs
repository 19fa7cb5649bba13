use super::super::ratios::{clamp, safe_div};

/// Piecewise-linear mapping from a ratio onto a 0-100 sub-score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ScoringCurve {
    /// Zero at zero, rising linearly to 100 at `full` and flat beyond it.
    Rising { full: f64 },
    /// 100 at or below `best`, zero at or above `worst`, linear in between.
    Falling { best: f64, worst: f64 },
}

impl ScoringCurve {
    pub(crate) fn evaluate(&self, value: f64) -> f64 {
        let raw = match *self {
            ScoringCurve::Rising { full } => {
                if value >= full {
                    100.0
                } else {
                    safe_div(value, full) * 100.0
                }
            }
            ScoringCurve::Falling { best, worst } => {
                if value <= best {
                    100.0
                } else if value >= worst {
                    0.0
                } else {
                    (1.0 - safe_div(value - best, worst - best)) * 100.0
                }
            }
        };
        clamp(raw, 0.0, 100.0)
    }
}

pub(crate) const SAVINGS_RATE_CURVE: ScoringCurve = ScoringCurve::Rising { full: 0.20 };
pub(crate) const DEBT_CURVE: ScoringCurve = ScoringCurve::Falling {
    best: 0.10,
    worst: 0.40,
};
pub(crate) const HOUSING_CURVE: ScoringCurve = ScoringCurve::Falling {
    best: 0.30,
    worst: 0.50,
};

/// The runway curve saturates at the household's own target.
pub(crate) fn emergency_curve(target_months: f64) -> ScoringCurve {
    ScoringCurve::Rising {
        full: target_months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn savings_curve_saturates_at_twenty_percent() {
        assert_eq!(SAVINGS_RATE_CURVE.evaluate(0.0), 0.0);
        assert!(approx(SAVINGS_RATE_CURVE.evaluate(0.10), 50.0));
        assert_eq!(SAVINGS_RATE_CURVE.evaluate(0.20), 100.0);
        assert_eq!(SAVINGS_RATE_CURVE.evaluate(0.75), 100.0);
    }

    #[test]
    fn debt_curve_hits_documented_anchor_points() {
        assert_eq!(DEBT_CURVE.evaluate(0.0), 100.0);
        assert_eq!(DEBT_CURVE.evaluate(0.10), 100.0);
        assert!(approx(DEBT_CURVE.evaluate(0.25), 50.0));
        assert_eq!(DEBT_CURVE.evaluate(0.40), 0.0);
        assert_eq!(DEBT_CURVE.evaluate(3.0), 0.0);
    }

    #[test]
    fn debt_curve_is_monotonically_decreasing_between_thresholds() {
        let mut previous = DEBT_CURVE.evaluate(0.10);
        let mut dti = 0.10;
        while dti <= 0.40 {
            let current = DEBT_CURVE.evaluate(dti);
            assert!(current <= previous + 1e-9, "score rose at dti {dti}");
            previous = current;
            dti += 0.01;
        }
    }

    #[test]
    fn housing_curve_interpolates_between_thirty_and_fifty_percent() {
        assert_eq!(HOUSING_CURVE.evaluate(0.30), 100.0);
        assert!(approx(HOUSING_CURVE.evaluate(0.40), 50.0));
        assert_eq!(HOUSING_CURVE.evaluate(0.50), 0.0);
    }

    #[test]
    fn emergency_curve_scales_to_target() {
        let curve = emergency_curve(6.0);
        assert!(approx(curve.evaluate(3.0), 50.0));
        assert_eq!(curve.evaluate(6.0), 100.0);
        assert_eq!(curve.evaluate(0.0), 0.0);
    }
}
