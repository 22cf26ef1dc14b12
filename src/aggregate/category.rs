use std::cmp::Ordering;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::records::{TransactionKind, TransactionRecord};

/// Categories offered before the user has recorded anything; observed custom
/// labels are appended on top of these.
pub static PRESET_CATEGORIES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "General",
        "Food",
        "Transport",
        "Shopping",
        "Entertainment",
        "Bills",
        "Health",
        "Savings",
    ]
});

const TOP_SPENDING_LIMIT: usize = 3;

/// One entry of the expense breakdown, ranked by summed amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub label: String,
    pub total: f64,
    /// Share of the total expense in percent; zero when there is no expense.
    pub share_pct: f64,
}

/// Groups expense records by category label and ranks them by descending
/// total. Grouping preserves first-seen order and the sort is stable, so
/// ties keep that relative order; there is no secondary tie-break key.
/// Labels are compared verbatim, without case normalization.
pub fn rank_categories(transactions: &[TransactionRecord]) -> Vec<CategoryShare> {
    let mut groups: Vec<(String, f64)> = Vec::new();
    for tx in transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Expense)
    {
        let label = tx.category_label();
        match groups.iter_mut().find(|(name, _)| name == label) {
            Some((_, total)) => *total += tx.amount,
            None => groups.push((label.to_string(), tx.amount)),
        }
    }

    let total_expense: f64 = groups.iter().map(|(_, total)| total).sum();
    groups.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    groups
        .into_iter()
        .map(|(label, total)| CategoryShare {
            label,
            total,
            share_pct: if total_expense > 0.0 {
                total / total_expense * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// The top spending categories shown on the dashboard.
pub fn top_spending(transactions: &[TransactionRecord]) -> Vec<CategoryShare> {
    let mut ranked = rank_categories(transactions);
    ranked.truncate(TOP_SPENDING_LIMIT);
    ranked
}

/// Union of the preset list with every distinct category observed in the
/// snapshot, for the category picker. Derived state, recomputed per
/// snapshot, never persisted.
pub fn category_options(transactions: &[TransactionRecord]) -> Vec<String> {
    let mut options: Vec<String> = PRESET_CATEGORIES.iter().map(|c| c.to_string()).collect();
    for tx in transactions {
        let label = tx.category_label();
        if !options.iter().any(|existing| existing == label) {
            options.push(label.to_string());
        }
    }
    options
}
