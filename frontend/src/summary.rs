//! Figures derived from the budget state. Everything here is a pure function
//! of [`BudgetState`] and is recomputed on every render.

use crate::model::BudgetState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Debt,
    Dry,
    Danger,
    Fair,
    Flush,
}

impl Status {
    /// Bands are checked in order: a negative balance wins over any fill level.
    pub fn classify(current_balance: f64, fill_percentage: f64) -> Self {
        if current_balance < 0.0 {
            Status::Debt
        } else if fill_percentage < 20.0 {
            Status::Dry
        } else if fill_percentage < 50.0 {
            Status::Danger
        } else if fill_percentage < 80.0 {
            Status::Fair
        } else {
            Status::Flush
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Status::Debt => "DROWNING IN DEBT. Congratulations.",
            Status::Dry => "Bone dry, boss. Fasting season again?",
            Status::Danger => "Danger zone. One sick day and it's game over.",
            Status::Fair => "Not bad. You can breathe a little.",
            Status::Flush => "Living large. The tank is overflowing!",
        }
    }

    /// Tailwind gradient stops for the water column.
    pub fn water_gradient(self) -> &'static str {
        match self {
            Status::Debt | Status::Dry => "from-red-600 to-red-900",
            Status::Danger => "from-yellow-600 to-yellow-900",
            Status::Fair | Status::Flush => "from-cyan-500 to-blue-600",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TankSummary {
    pub total_leaks: f64,
    pub total_saved: f64,
    pub current_balance: f64,
    pub fill_percentage: f64,
    pub status: Status,
}

impl TankSummary {
    pub fn of(state: &BudgetState) -> Self {
        let total_leaks = total_leaks(state);
        let current_balance = state.income - total_leaks;
        let fill_percentage = fill_percentage(state.income, current_balance);

        TankSummary {
            total_leaks,
            total_saved: total_saved(state),
            current_balance,
            fill_percentage,
            status: Status::classify(current_balance, fill_percentage),
        }
    }

    pub fn is_low(&self) -> bool {
        self.fill_percentage < 20.0
    }

    pub fn has_bubbles(&self) -> bool {
        self.fill_percentage > 10.0
    }
}

pub fn total_leaks(state: &BudgetState) -> f64 {
    state
        .expenses
        .iter()
        .filter(|e| !e.is_patched)
        .map(|e| e.amount)
        .sum()
}

pub fn total_saved(state: &BudgetState) -> f64 {
    state
        .expenses
        .iter()
        .filter(|e| e.is_patched)
        .map(|e| e.amount)
        .sum()
}

/// Remaining balance as a share of income, clamped to `0..=100`.
/// Zero or negative income always yields an empty tank.
pub fn fill_percentage(income: f64, current_balance: f64) -> f64 {
    if income > 0.0 {
        (current_balance / income * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}
