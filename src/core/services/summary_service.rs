//! Totals, ratios and rankings computed over transaction snapshots.

use std::collections::HashMap;

use crate::core::summary::{CategorySpending, TopCategory};
use crate::errors::{LedgerError, LedgerResult};
use crate::ledger::{Category, Transaction};

/// Stateless aggregation helpers. Inputs are never modified.
pub struct SummaryService;

impl SummaryService {
    pub fn total_spent(transactions: &[Transaction]) -> f64 {
        transactions.iter().map(|txn| txn.amount).sum()
    }

    /// Income left after spending; negative once spending exceeds income.
    pub fn remaining_budget(total_income: f64, total_spent: f64) -> f64 {
        total_income - total_spent
    }

    /// Share of income already spent, in percent.
    ///
    /// A zero or non-finite income has no meaningful ratio and yields
    /// [`LedgerError::UndefinedRatio`] instead of `NaN` or infinity.
    pub fn usage_percentage(total_spent: f64, total_income: f64) -> LedgerResult<f64> {
        if total_income == 0.0 || !total_income.is_finite() {
            return Err(LedgerError::UndefinedRatio);
        }
        Ok((total_spent / total_income) * 100.0)
    }

    /// One entry per category, in category order, including zero totals.
    pub fn category_spending(
        categories: &[Category],
        transactions: &[Transaction],
    ) -> Vec<CategorySpending> {
        let mut totals: HashMap<&str, f64> = HashMap::new();
        for txn in transactions {
            *totals.entry(txn.category_id.as_str()).or_insert(0.0) += txn.amount;
        }
        categories
            .iter()
            .map(|category| {
                let total = totals.get(category.id.as_str()).copied().unwrap_or(0.0);
                CategorySpending::new(category, total)
            })
            .collect()
    }

    /// Highest total wins; on ties the earliest entry is kept.
    pub fn top_spending_category(spending: &[CategorySpending]) -> TopCategory {
        let mut entries = spending.iter();
        let Some(first) = entries.next() else {
            return TopCategory::none();
        };
        let top = entries.fold(first, |top, current| {
            if current.total > top.total {
                current
            } else {
                top
            }
        });
        TopCategory {
            name: top.name.clone(),
            total: top.total,
        }
    }

    /// Most recent transactions first, keeping the snapshot order for equal dates.
    pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
        let mut sorted = transactions.to_vec();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.truncate(limit);
        sorted
    }

    /// Transactions whose category id does not resolve against `categories`.
    pub fn orphaned_transactions<'a>(
        categories: &[Category],
        transactions: &'a [Transaction],
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|txn| !categories.iter().any(|c| c.id == txn.category_id))
            .collect()
    }
}
