use super::super::domain::ScoreState;
use serde::{Deserialize, Serialize};

const BAR_CELLS: u8 = 20;
const PERCENT_PER_CELL: u8 = 5;

/// Illustrative stocks/bonds/cash split; the three shares always sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationExample {
    pub stocks_pct: u8,
    pub bonds_pct: u8,
    pub cash_pct: u8,
}

impl AllocationExample {
    const fn new(stocks_pct: u8, bonds_pct: u8, cash_pct: u8) -> Self {
        Self {
            stocks_pct,
            bonds_pct,
            cash_pct,
        }
    }

    /// Fixed-width text bars, one filled cell per 5%.
    pub fn visual(&self) -> String {
        [
            ("Stocks", self.stocks_pct),
            ("Bonds", self.bonds_pct),
            ("Cash", self.cash_pct),
        ]
        .iter()
        .map(|(label, pct)| format!("{label:<7} {pct:>3}% |{}|", bar(*pct)))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

fn bar(pct: u8) -> String {
    let filled = (pct / PERCENT_PER_CELL).min(BAR_CELLS) as usize;
    let empty = BAR_CELLS as usize - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Figures the allocation table is keyed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationSignals {
    pub score_state: ScoreState,
    pub emergency_months: f64,
    pub debt_to_income: f64,
    pub savings_rate: f64,
}

struct AllocationRule {
    applies: fn(&AllocationSignals) -> bool,
    allocation: AllocationExample,
}

fn unsettled_state(signals: &AllocationSignals) -> bool {
    signals.score_state.is_unsettled()
}

fn thin_runway_or_heavy_debt(signals: &AllocationSignals) -> bool {
    signals.emergency_months < 3.0 || signals.debt_to_income > 0.30
}

fn low_savings_rate(signals: &AllocationSignals) -> bool {
    signals.savings_rate < 0.15
}

fn always(_: &AllocationSignals) -> bool {
    true
}

/// Ordered decision list; the first matching row wins and the last row always matches.
const ALLOCATION_RULES: [AllocationRule; 4] = [
    AllocationRule {
        applies: unsettled_state,
        allocation: AllocationExample::new(0, 0, 100),
    },
    AllocationRule {
        applies: thin_runway_or_heavy_debt,
        allocation: AllocationExample::new(40, 50, 10),
    },
    AllocationRule {
        applies: low_savings_rate,
        allocation: AllocationExample::new(60, 35, 5),
    },
    AllocationRule {
        applies: always,
        allocation: AllocationExample::new(80, 20, 0),
    },
];

pub fn allocation_example(signals: &AllocationSignals) -> AllocationExample {
    ALLOCATION_RULES
        .iter()
        .find(|rule| (rule.applies)(signals))
        .map(|rule| rule.allocation)
        .unwrap_or(AllocationExample::new(0, 0, 100))
}
