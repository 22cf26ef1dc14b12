use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::records::{GoalRecord, TransactionRecord};

use super::{
    budget::BudgetUsage,
    category::{category_options, rank_categories, top_spending, CategoryShare},
    goals::{goal_progress, GoalProgress},
    monthly::{monthly_flow, MonthlyFlow},
    totals::Totals,
    trend::{trend_series, TrendFilter, TrendPoint},
};

/// Immutable bundle of everything the presentation layer renders, rebuilt
/// from the current snapshot on every feed delivery or filter change.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub totals: Totals,
    pub trend: Vec<TrendPoint>,
    pub trend_filter: TrendFilter,
    pub ranking: Vec<CategoryShare>,
    pub top_spending: Vec<CategoryShare>,
    /// Six-month income/expense buckets for the cash-flow chart.
    pub monthly_flow: Vec<MonthlyFlow>,
    pub budget: BudgetUsage,
    pub goals: Vec<GoalProgress>,
    pub category_options: Vec<String>,
}

impl DashboardView {
    /// Recomputes with the monthly window anchored at the current month.
    pub fn compute(
        transactions: &[TransactionRecord],
        goals: &[GoalRecord],
        monthly_budget: f64,
        trend_filter: TrendFilter,
    ) -> Self {
        Self::compute_at(transactions, goals, monthly_budget, trend_filter, Utc::now())
    }

    pub fn compute_at(
        transactions: &[TransactionRecord],
        goals: &[GoalRecord],
        monthly_budget: f64,
        trend_filter: TrendFilter,
        reference: DateTime<Utc>,
    ) -> Self {
        let totals = Totals::of(transactions);
        Self {
            totals,
            trend: trend_series(transactions, trend_filter),
            trend_filter,
            ranking: rank_categories(transactions),
            top_spending: top_spending(transactions),
            monthly_flow: monthly_flow(transactions, reference),
            budget: BudgetUsage::of(monthly_budget, totals.total_expense),
            goals: goal_progress(goals),
            category_options: category_options(transactions),
        }
    }

    pub fn empty() -> Self {
        Self::compute(&[], &[], 0.0, TrendFilter::All)
    }
}
