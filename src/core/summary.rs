//! Derived view types produced by the aggregation services.

use serde::{Deserialize, Serialize};

use crate::ledger::{Category, YearMonth};

/// Label reported when there is no category to rank.
pub const NO_CATEGORY_LABEL: &str = "N/A";
/// Name substituted for a budget whose category does not resolve.
pub const UNKNOWN_CATEGORY_NAME: &str = "Unknown";
/// Color substituted for a budget whose category does not resolve.
pub const UNKNOWN_CATEGORY_COLOR: &str = "#888888";

/// A category together with the summed amount of its transactions.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategorySpending {
    pub id: String,
    pub name: String,
    pub color: String,
    pub total: f64,
}

impl CategorySpending {
    pub fn new(category: &Category, total: f64) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            color: category.color.clone(),
            total,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TopCategory {
    pub name: String,
    pub total: f64,
}

impl TopCategory {
    /// Sentinel returned when the category set is empty.
    pub fn none() -> Self {
        Self {
            name: NO_CATEGORY_LABEL.into(),
            total: 0.0,
        }
    }
}

/// Spending limit compared against the actual spend of its category.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetGoal {
    pub id: String,
    pub category_name: String,
    pub category_color: String,
    pub limit: f64,
    pub spent: f64,
}

impl BudgetGoal {
    /// Exact share of the limit already spent, uncapped. `None` for a zero limit.
    pub fn percentage_used(&self) -> Option<f64> {
        (self.limit > 0.0).then(|| (self.spent / self.limit) * 100.0)
    }

    pub fn remaining(&self) -> f64 {
        self.limit - self.spent
    }
}

/// Total spending for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySpending {
    pub month: YearMonth,
    pub expenses: f64,
}

impl MonthlySpending {
    pub fn new(month: YearMonth, expenses: f64) -> Self {
        Self { month, expenses }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(limit: f64, spent: f64) -> BudgetGoal {
        BudgetGoal {
            id: "b1".into(),
            category_name: "Food".into(),
            category_color: "#f00".into(),
            limit,
            spent,
        }
    }

    #[test]
    fn percentage_used_is_uncapped() {
        assert_eq!(goal(200.0, 300.0).percentage_used(), Some(150.0));
        assert_eq!(goal(200.0, 300.0).remaining(), -100.0);
    }

    #[test]
    fn zero_limit_has_no_percentage() {
        assert_eq!(goal(0.0, 10.0).percentage_used(), None);
    }
}
