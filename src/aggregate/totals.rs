use serde::Serialize;

use crate::records::{TransactionKind, TransactionRecord};

/// Headline figures for the dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

impl Totals {
    /// Order-independent fold over the snapshot. A malformed record with a
    /// missing amount contributes zero (the field deserializes as such)
    /// rather than failing the pass.
    pub fn of(transactions: &[TransactionRecord]) -> Self {
        let mut totals = Totals::default();
        for tx in transactions {
            match tx.kind {
                TransactionKind::Income => totals.total_income += tx.amount,
                TransactionKind::Expense => totals.total_expense += tx.amount,
            }
        }
        totals.balance = totals.total_income - totals.total_expense;
        totals
    }
}
