use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::{TransactionKind, TransactionRecord};

/// Which slice of the history the trend chart shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TrendFilter {
    fn matches(&self, kind: TransactionKind) -> bool {
        match self {
            TrendFilter::All => true,
            TrendFilter::Income => kind == TransactionKind::Income,
            TrendFilter::Expense => kind == TransactionKind::Expense,
        }
    }
}

/// One point of the cash-flow chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub sort_key: DateTime<Utc>,
    /// Human-readable label like `Jan 18`.
    pub date_label: String,
    pub title: String,
    /// The record's own unsigned magnitude.
    pub amount: f64,
    pub kind: TransactionKind,
    /// Plotted value: the running cumulative balance under
    /// [`TrendFilter::All`], the raw amount under a narrowed filter.
    pub value: f64,
}

/// Walks the history in chronological order, carrying a running balance, and
/// emits one point per matching record.
///
/// The running balance is always computed over the complete history before
/// the filter drops non-matching points, so narrowing to one kind and
/// switching back to `All` reproduces the unfiltered series exactly.
pub fn trend_series(transactions: &[TransactionRecord], filter: TrendFilter) -> Vec<TrendPoint> {
    let mut ordered: Vec<&TransactionRecord> = transactions.iter().collect();
    ordered.sort_by_key(|tx| tx.sort_key());

    let mut running = 0.0;
    let mut points = Vec::with_capacity(ordered.len());
    for tx in ordered {
        running += tx.signed_amount();
        if !filter.matches(tx.kind) {
            continue;
        }
        points.push(TrendPoint {
            sort_key: tx.sort_key(),
            date_label: date_label(tx.sort_key()),
            title: tx.title.clone(),
            amount: tx.amount,
            kind: tx.kind,
            value: match filter {
                TrendFilter::All => running,
                TrendFilter::Income | TrendFilter::Expense => tx.amount,
            },
        });
    }
    points
}

fn date_label(at: DateTime<Utc>) -> String {
    at.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::UserId;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn tx(kind: TransactionKind, amount: f64, day: u32) -> TransactionRecord {
        TransactionRecord {
            id: Uuid::new_v4(),
            user_id: UserId::new("u1"),
            title: format!("tx-{day}"),
            amount,
            kind,
            category: None,
            created_at: Some(Utc.with_ymd_and_hms(2026, 1, day, 12, 0, 0).unwrap()),
        }
    }

    fn sample() -> Vec<TransactionRecord> {
        vec![
            tx(TransactionKind::Income, 1000.0, 5),
            tx(TransactionKind::Expense, 300.0, 10),
            tx(TransactionKind::Expense, 200.0, 15),
        ]
    }

    #[test]
    fn unfiltered_series_ends_at_the_balance() {
        let series = trend_series(&sample(), TrendFilter::All);
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].value, 1000.0);
        assert_eq!(series[1].value, 700.0);
        assert_eq!(series[2].value, 500.0);
    }

    #[test]
    fn series_sorts_delivery_order_chronologically() {
        let mut records = sample();
        records.reverse();
        let series = trend_series(&records, TrendFilter::All);
        assert_eq!(series[0].title, "tx-5");
        assert_eq!(series[2].value, 500.0);
    }

    #[test]
    fn narrowed_filter_emits_raw_amounts_only_for_matches() {
        let series = trend_series(&sample(), TrendFilter::Expense);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].value, 300.0);
        assert_eq!(series[1].value, 200.0);
        assert!(series.iter().all(|p| p.kind == TransactionKind::Expense));
    }

    #[test]
    fn refiltering_reproduces_the_unfiltered_series() {
        let records = sample();
        let original = trend_series(&records, TrendFilter::All);
        let _ = trend_series(&records, TrendFilter::Income);
        let _ = trend_series(&records, TrendFilter::Expense);
        assert_eq!(trend_series(&records, TrendFilter::All), original);
    }

    #[test]
    fn date_labels_are_short_form() {
        let series = trend_series(&sample(), TrendFilter::All);
        assert_eq!(series[0].date_label, "Jan 5");
    }

    #[test]
    fn record_without_timestamp_sorts_first() {
        let mut records = sample();
        records.push(TransactionRecord {
            created_at: None,
            ..tx(TransactionKind::Income, 50.0, 1)
        });
        let series = trend_series(&records, TrendFilter::All);
        assert_eq!(series[0].amount, 50.0);
        assert_eq!(series[3].value, 550.0);
    }
}
