use std::collections::BTreeMap;

use crate::core::summary::MonthlySpending;
use crate::ledger::{Transaction, YearMonth};

use super::SummaryService;

pub struct TrendService;

impl TrendService {
    /// Builds the month-by-month spending series ending at `current`.
    ///
    /// Months before `current` are bucketed from transaction dates; a `history`
    /// entry only fills a month that has no transactions. The final point is
    /// `current` carrying the live total of every transaction.
    pub fn monthly_trend(
        transactions: &[Transaction],
        history: &[MonthlySpending],
        current: YearMonth,
    ) -> Vec<MonthlySpending> {
        let mut buckets: BTreeMap<YearMonth, f64> = BTreeMap::new();
        for txn in transactions {
            let month = YearMonth::from_date(txn.date);
            if month < current {
                *buckets.entry(month).or_insert(0.0) += txn.amount;
            }
        }
        for seed in history.iter().filter(|seed| seed.month < current) {
            buckets.entry(seed.month).or_insert(seed.expenses);
        }

        let mut series: Vec<MonthlySpending> = buckets
            .into_iter()
            .map(|(month, expenses)| MonthlySpending::new(month, expenses))
            .collect();
        series.push(MonthlySpending::new(
            current,
            SummaryService::total_spent(transactions),
        ));
        series
    }

    /// Keeps the last `months` points of a series, never fewer than the final one.
    pub fn trailing(series: Vec<MonthlySpending>, months: usize) -> Vec<MonthlySpending> {
        let skip = series.len().saturating_sub(months.max(1));
        series.into_iter().skip(skip).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::PaymentType;
    use chrono::NaiveDate;

    fn month(raw: &str) -> YearMonth {
        raw.parse().unwrap()
    }

    fn txn(amount: f64, y: i32, m: u32, d: u32) -> Transaction {
        Transaction {
            id: format!("{y}-{m}-{d}-{amount}"),
            title: "Expense".into(),
            amount,
            category_id: "food".into(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            payment_type: PaymentType::Cash,
        }
    }

    #[test]
    fn history_only_fills_months_without_transactions() {
        let history = vec![
            MonthlySpending::new(month("2024-05"), 2600.0),
            MonthlySpending::new(month("2024-06"), 3100.0),
        ];
        let transactions = vec![txn(200.0, 2024, 6, 3), txn(50.0, 2024, 6, 20)];
        let trend = TrendService::monthly_trend(&transactions, &history, month("2024-07"));
        assert_eq!(
            trend,
            vec![
                MonthlySpending::new(month("2024-05"), 2600.0),
                MonthlySpending::new(month("2024-06"), 250.0),
                MonthlySpending::new(month("2024-07"), 250.0),
            ]
        );
    }

    #[test]
    fn current_month_always_carries_live_total() {
        let transactions = vec![txn(120.0, 2024, 7, 1), txn(80.0, 2024, 7, 15)];
        let trend = TrendService::monthly_trend(&transactions, &[], month("2024-07"));
        assert_eq!(trend, vec![MonthlySpending::new(month("2024-07"), 200.0)]);
    }

    #[test]
    fn empty_ledger_still_reports_current_month() {
        let history = vec![MonthlySpending::new(month("2024-08"), 999.0)];
        let trend = TrendService::monthly_trend(&[], &history, month("2024-07"));
        assert_eq!(trend, vec![MonthlySpending::new(month("2024-07"), 0.0)]);
    }

    #[test]
    fn trailing_keeps_most_recent_points() {
        let history: Vec<_> = (1..=6)
            .map(|m| MonthlySpending::new(YearMonth::new(2024, m).unwrap(), m as f64))
            .collect();
        let trend = TrendService::monthly_trend(&[], &history, month("2024-07"));
        let last_three = TrendService::trailing(trend, 3);
        let months: Vec<_> = last_three.iter().map(|p| p.month.to_string()).collect();
        assert_eq!(months, vec!["2024-05", "2024-06", "2024-07"]);
    }

    #[test]
    fn trailing_zero_still_keeps_current_month() {
        let history = vec![MonthlySpending::new(month("2024-06"), 300.0)];
        let transactions = vec![txn(150.0, 2024, 7, 2)];
        let trend = TrendService::monthly_trend(&transactions, &history, month("2024-07"));
        assert_eq!(
            TrendService::trailing(trend, 0),
            vec![MonthlySpending::new(month("2024-07"), 150.0)]
        );
        assert!(TrendService::trailing(Vec::new(), 0).is_empty());
    }
}
