use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::records::{TransactionKind, TransactionRecord};

const WINDOW_MONTHS: i32 = 6;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Income and expense sums for one calendar month of the cash-flow chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyFlow {
    /// Three-letter month name.
    pub label: String,
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    pub income: f64,
    pub expense: f64,
}

/// Buckets the history into the six calendar months ending at `reference`,
/// oldest first, summing income and expense per month. Records without a
/// timestamp, or dated outside the window, are skipped rather than
/// misfiled; an empty month stays in the series with zero sums.
pub fn monthly_flow(transactions: &[TransactionRecord], reference: DateTime<Utc>) -> Vec<MonthlyFlow> {
    let anchor = reference.year() * 12 + reference.month0() as i32;
    let mut months: Vec<MonthlyFlow> = (0..WINDOW_MONTHS)
        .map(|back| {
            let index = anchor - (WINDOW_MONTHS - 1 - back);
            let month0 = index.rem_euclid(12) as usize;
            MonthlyFlow {
                label: MONTH_NAMES[month0].to_string(),
                year: index.div_euclid(12),
                month: month0 as u32 + 1,
                income: 0.0,
                expense: 0.0,
            }
        })
        .collect();

    for tx in transactions {
        let Some(at) = tx.created_at else {
            continue;
        };
        let Some(bucket) = months
            .iter_mut()
            .find(|m| m.year == at.year() && m.month == at.month())
        else {
            continue;
        };
        match tx.kind {
            TransactionKind::Income => bucket.income += tx.amount,
            TransactionKind::Expense => bucket.expense += tx.amount,
        }
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::UserId;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn tx(kind: TransactionKind, amount: f64, year: i32, month: u32) -> TransactionRecord {
        TransactionRecord {
            id: Uuid::new_v4(),
            user_id: UserId::new("u1"),
            title: "t".into(),
            amount,
            kind,
            category: None,
            created_at: Some(Utc.with_ymd_and_hms(year, month, 10, 8, 0, 0).unwrap()),
        }
    }

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn window_covers_six_months_oldest_first() {
        let months = monthly_flow(&[], reference());
        assert_eq!(months.len(), 6);
        assert_eq!((months[0].label.as_str(), months[0].month), ("Jan", 1));
        assert_eq!((months[5].label.as_str(), months[5].month), ("Jun", 6));
        assert!(months.iter().all(|m| m.year == 2026));
        assert!(months.iter().all(|m| m.income == 0.0 && m.expense == 0.0));
    }

    #[test]
    fn window_wraps_across_a_year_boundary() {
        let jan = Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap();
        let months = monthly_flow(&[], jan);
        assert_eq!((months[0].label.as_str(), months[0].year), ("Aug", 2025));
        assert_eq!((months[5].label.as_str(), months[5].year), ("Jan", 2026));
    }

    #[test]
    fn sums_land_in_their_calendar_month() {
        let records = vec![
            tx(TransactionKind::Income, 1000.0, 2026, 5),
            tx(TransactionKind::Income, 200.0, 2026, 5),
            tx(TransactionKind::Expense, 300.0, 2026, 5),
            tx(TransactionKind::Expense, 50.0, 2026, 6),
        ];
        let months = monthly_flow(&records, reference());
        let may = &months[4];
        assert_eq!((may.income, may.expense), (1200.0, 300.0));
        let jun = &months[5];
        assert_eq!((jun.income, jun.expense), (0.0, 50.0));
    }

    #[test]
    fn records_outside_the_window_are_skipped() {
        let records = vec![
            tx(TransactionKind::Expense, 75.0, 2025, 12),
            tx(TransactionKind::Expense, 99.0, 2026, 7),
        ];
        let months = monthly_flow(&records, reference());
        assert!(months.iter().all(|m| m.expense == 0.0));
    }

    #[test]
    fn undated_records_are_skipped_not_misfiled() {
        let mut broken = tx(TransactionKind::Income, 500.0, 2026, 6);
        broken.created_at = None;
        let months = monthly_flow(&[broken], reference());
        assert!(months.iter().all(|m| m.income == 0.0));
    }
}
