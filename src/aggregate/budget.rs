use serde::Serialize;

const WARNING_THRESHOLD: f64 = 70.0;
const DANGER_THRESHOLD: f64 = 90.0;

/// Display tier for the budget progress widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Normal,
    Warning,
    Danger,
}

/// Consumption of the configured monthly budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetUsage {
    /// Unclamped percentage; exceeds 100 on overspend so the numeric label
    /// can signal it.
    pub percentage: f64,
    pub tier: BudgetTier,
}

impl BudgetUsage {
    pub fn of(monthly_budget: f64, total_expense: f64) -> Self {
        let percentage = if monthly_budget > 0.0 {
            total_expense / monthly_budget * 100.0
        } else {
            0.0
        };
        let tier = if percentage > DANGER_THRESHOLD {
            BudgetTier::Danger
        } else if percentage > WARNING_THRESHOLD {
            BudgetTier::Warning
        } else {
            BudgetTier::Normal
        };
        Self { percentage, tier }
    }

    /// Progress-bar width in percent, capped so overspend does not overflow
    /// the track.
    pub fn bar_width(&self) -> f64 {
        self.percentage.min(100.0)
    }
}
