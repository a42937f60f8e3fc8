//! Display-ready projections of the aggregation output.
//!
//! Nothing here computes business values; it formats money, caps progress
//! percentages and picks status tokens for presentation collaborators.

pub mod status;

use serde::Serialize;

pub use status::UsageStatus;

use crate::core::{BudgetGoal, CategorySpending, Dashboard, MonthlySpending};
use crate::currency::MoneyFormatter;
use crate::ledger::{Category, Transaction};

/// Category label shown for transactions whose category does not resolve.
pub const MISSING_CATEGORY_LABEL: &str = "N/A";
/// Slices smaller than this share of the pie do not get an inline label.
pub const SLICE_LABEL_MIN_SHARE: f64 = 0.05;
const UNDEFINED_RATIO_LABEL: &str = "n/a";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetGoalView {
    pub id: String,
    pub category_name: String,
    pub category_color: String,
    pub spent_label: String,
    pub limit_label: String,
    /// Progress bar fill, capped at 100.
    pub progress: f64,
    pub status: UsageStatus,
    /// Theme token for the progress bar, from `UsageStatus::color_token`.
    pub status_color: String,
    pub over_budget: bool,
    pub remaining_label: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TransactionRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub amount: String,
    pub payment: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySlice {
    pub id: String,
    pub name: String,
    pub color: String,
    pub total: f64,
    pub total_label: String,
    /// Fraction of all charted spending, between 0 and 1.
    pub share: f64,
    pub show_label: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub label: String,
    pub month: String,
    pub value: f64,
    pub value_label: String,
}

/// Live preview of the totals if a pending expense were added.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePreview {
    pub adding: String,
    pub new_total: String,
    pub new_balance: String,
    pub balance_positive: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub cards: Vec<StatCard>,
    pub usage_status: Option<UsageStatus>,
    pub budget_goals: Vec<BudgetGoalView>,
    pub category_slices: Vec<CategorySlice>,
    pub recent_transactions: Vec<TransactionRow>,
    pub trend: Vec<TrendPoint>,
}

/// Maps engine output to display shapes using one money formatter.
#[derive(Debug, Clone, Default)]
pub struct ViewProjector {
    money: MoneyFormatter,
}

impl ViewProjector {
    pub fn new(money: MoneyFormatter) -> Self {
        Self { money }
    }

    pub fn dashboard(&self, dashboard: &Dashboard, categories: &[Category]) -> DashboardView {
        DashboardView {
            cards: self.stat_cards(dashboard),
            usage_status: dashboard.usage_percentage.map(UsageStatus::for_percentage),
            budget_goals: dashboard
                .budget_goals
                .iter()
                .map(|goal| self.budget_goal(goal))
                .collect(),
            category_slices: self.category_slices(&dashboard.category_spending),
            recent_transactions: self.transaction_rows(&dashboard.recent_transactions, categories),
            trend: self.trend_points(&dashboard.monthly_trend),
        }
    }

    pub fn stat_cards(&self, dashboard: &Dashboard) -> Vec<StatCard> {
        let (spent_change, remaining_change) = match dashboard.usage_percentage {
            Some(usage) => (
                format!("-{} from budget", self.money.format_percent(usage)),
                format!("+{} of budget", self.money.format_percent(100.0 - usage)),
            ),
            None => (
                UNDEFINED_RATIO_LABEL.to_string(),
                UNDEFINED_RATIO_LABEL.to_string(),
            ),
        };
        vec![
            StatCard {
                title: "Total Income".into(),
                value: self.money.format(dashboard.total_income),
                change: None,
            },
            StatCard {
                title: "Total Expenses".into(),
                value: self.money.format(dashboard.total_spent),
                change: Some(spent_change),
            },
            StatCard {
                title: "Remaining Budget".into(),
                value: self.money.format(dashboard.remaining_budget),
                change: Some(remaining_change),
            },
            StatCard {
                title: "Top Spending".into(),
                value: dashboard.top_category.name.clone(),
                change: Some(self.money.format(dashboard.top_category.total)),
            },
        ]
    }

    pub fn budget_goal(&self, goal: &BudgetGoal) -> BudgetGoalView {
        let progress = progress_percentage(goal);
        let status = UsageStatus::for_percentage(progress);
        let remaining = goal.remaining();
        let remaining_label = if remaining >= 0.0 {
            format!("{} left", self.money.format(remaining))
        } else {
            format!("{} over", self.money.format(remaining.abs()))
        };
        BudgetGoalView {
            id: goal.id.clone(),
            category_name: goal.category_name.clone(),
            category_color: goal.category_color.clone(),
            spent_label: self.money.format(goal.spent),
            limit_label: self.money.format(goal.limit),
            progress,
            status,
            status_color: status.color_token().to_string(),
            over_budget: remaining < 0.0,
            remaining_label,
        }
    }

    /// Pie-chart slices for categories with spending; empty when nothing was spent.
    pub fn category_slices(&self, spending: &[CategorySpending]) -> Vec<CategorySlice> {
        let charted: Vec<&CategorySpending> =
            spending.iter().filter(|entry| entry.total > 0.0).collect();
        let sum: f64 = charted.iter().map(|entry| entry.total).sum();
        charted
            .into_iter()
            .map(|entry| {
                let share = entry.total / sum;
                CategorySlice {
                    id: entry.id.clone(),
                    name: entry.name.clone(),
                    color: entry.color.clone(),
                    total: entry.total,
                    total_label: self.money.format(entry.total),
                    share,
                    show_label: share >= SLICE_LABEL_MIN_SHARE,
                }
            })
            .collect()
    }

    pub fn transaction_rows(
        &self,
        transactions: &[Transaction],
        categories: &[Category],
    ) -> Vec<TransactionRow> {
        transactions
            .iter()
            .map(|txn| TransactionRow {
                id: txn.id.clone(),
                title: txn.title.clone(),
                category: categories
                    .iter()
                    .find(|c| c.id == txn.category_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| MISSING_CATEGORY_LABEL.into()),
                date: self.money.format_date(txn.date),
                amount: self.money.format(txn.amount),
                payment: txn.payment_type.to_string(),
            })
            .collect()
    }

    pub fn trend_points(&self, series: &[MonthlySpending]) -> Vec<TrendPoint> {
        series
            .iter()
            .map(|point| TrendPoint {
                label: point.month.short_label().to_string(),
                month: point.month.to_string(),
                value: point.expenses,
                value_label: self.money.format(point.expenses),
            })
            .collect()
    }

    /// Previews totals for a pending `amount` without touching the ledger.
    pub fn expense_preview(&self, dashboard: &Dashboard, amount: f64) -> ExpensePreview {
        let new_balance = dashboard.remaining_budget - amount;
        ExpensePreview {
            adding: self.money.format(amount),
            new_total: self.money.format(dashboard.total_spent + amount),
            new_balance: self.money.format(new_balance),
            balance_positive: new_balance >= 0.0,
        }
    }
}

/// `min(spent / limit * 100, 100)`; a zero limit is full once anything is spent.
pub fn progress_percentage(goal: &BudgetGoal) -> f64 {
    match goal.percentage_used() {
        Some(percent) => percent.min(100.0),
        None if goal.spent > 0.0 => 100.0,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(limit: f64, spent: f64) -> BudgetGoal {
        BudgetGoal {
            id: "b1".into(),
            category_name: "Food".into(),
            category_color: "#e11d48".into(),
            limit,
            spent,
        }
    }

    #[test]
    fn progress_is_capped_and_status_follows_thresholds() {
        let projector = ViewProjector::default();
        let over = projector.budget_goal(&goal(200.0, 300.0));
        assert_eq!(over.progress, 100.0);
        assert!(over.over_budget);
        assert_eq!(over.status, UsageStatus::Critical);
        assert_eq!(over.status_color, "destructive");
        assert_eq!(over.remaining_label, "₹100.00 over");

        let warning = projector.budget_goal(&goal(100.0, 80.0));
        assert_eq!(warning.status, UsageStatus::Warning);
        assert_eq!(warning.status_color, "accent");
        assert_eq!(warning.remaining_label, "₹20.00 left");

        let calm = projector.budget_goal(&goal(100.0, 10.0));
        assert_eq!(calm.status, UsageStatus::Normal);
        assert_eq!(calm.status_color, "primary");
        assert!(!calm.over_budget);
    }

    #[test]
    fn zero_limit_progress() {
        assert_eq!(progress_percentage(&goal(0.0, 0.0)), 0.0);
        assert_eq!(progress_percentage(&goal(0.0, 5.0)), 100.0);
    }

    #[test]
    fn slices_skip_empty_categories_and_hide_small_labels() {
        let food = Category::new("food", "Food", "#e11d48");
        let rent = Category::new("rent", "Rent", "#2563eb");
        let misc = Category::new("misc", "Misc", "#888888");
        let spending = vec![
            CategorySpending::new(&food, 960.0),
            CategorySpending::new(&rent, 0.0),
            CategorySpending::new(&misc, 40.0),
        ];
        let slices = ViewProjector::default().category_slices(&spending);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].share, 0.96);
        assert!(slices[0].show_label);
        assert!(!slices[1].show_label);
    }

    #[test]
    fn rows_fall_back_for_unknown_categories() {
        use crate::ledger::PaymentType;
        use chrono::NaiveDate;

        let txn = Transaction {
            id: "e1".into(),
            title: "Mystery".into(),
            amount: 12.0,
            category_id: "ghost".into(),
            date: NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
            payment_type: PaymentType::Upi,
        };
        let rows = ViewProjector::default().transaction_rows(&[txn], &[]);
        assert_eq!(rows[0].category, MISSING_CATEGORY_LABEL);
        assert_eq!(rows[0].payment, "UPI");
        assert_eq!(rows[0].date, "04 Jul 2024");
        assert_eq!(rows[0].amount, "₹12.00");
    }
}
