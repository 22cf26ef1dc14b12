use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserId;

/// Label applied in aggregations when a record carries no category.
pub const DEFAULT_CATEGORY: &str = "General";

/// Reserved category for transactions that compensate goal deposits and
/// withdrawals.
pub const SAVINGS_CATEGORY: &str = "Savings";

/// A single income or expense entry. Created once, never edited in place;
/// removal is a hard delete.
///
/// `amount` is a non-negative magnitude; the direction lives in `kind` alone.
/// The serde defaults keep one malformed feed record from poisoning an
/// aggregation pass: a missing amount reads as zero, a missing category falls
/// back to [`DEFAULT_CATEGORY`] and a missing timestamp sorts before
/// everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub user_id: UserId,
    pub title: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl TransactionRecord {
    /// Category label used for grouping; blank and missing values collapse to
    /// the default label. Casing is deliberately left untouched, so `Food`
    /// and `food` remain distinct buckets.
    pub fn category_label(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
    }

    /// Effect of this record on a running balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Chronological ordering key; records without a store-assigned
    /// timestamp sort first.
    pub fn sort_key(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

/// Client-side payload for a new transaction; the store assigns `id` and
/// `created_at`.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub title: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: Option<String>,
}

impl TransactionDraft {
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            kind,
            category,
        }
    }
}
