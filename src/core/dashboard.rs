//! Bundles every derived view for one snapshot and caches it by snapshot identity.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::services::{BudgetService, SummaryService, TrendService};
use super::summary::{BudgetGoal, CategorySpending, MonthlySpending, TopCategory};
use crate::ledger::{LedgerStore, ReferenceData, Snapshot, Transaction, YearMonth};

pub const DEFAULT_RECENT_LIMIT: usize = 5;
pub const DEFAULT_TREND_MONTHS: usize = 7;

/// Static inputs to the dashboard that do not live in the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSettings {
    pub total_income: f64,
    pub current_month: YearMonth,
    pub recent_limit: usize,
    pub trend_months: usize,
    pub history: Vec<MonthlySpending>,
}

impl DashboardSettings {
    pub fn new(total_income: f64, current_month: YearMonth) -> Self {
        Self {
            total_income,
            current_month,
            recent_limit: DEFAULT_RECENT_LIMIT,
            trend_months: DEFAULT_TREND_MONTHS,
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<MonthlySpending>) -> Self {
        self.history = history;
        self
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub snapshot_version: u64,
    pub total_income: f64,
    pub total_spent: f64,
    pub remaining_budget: f64,
    /// `None` when the income is zero and the ratio is undefined.
    pub usage_percentage: Option<f64>,
    pub category_spending: Vec<CategorySpending>,
    pub top_category: TopCategory,
    pub budget_goals: Vec<BudgetGoal>,
    pub recent_transactions: Vec<Transaction>,
    pub monthly_trend: Vec<MonthlySpending>,
}

impl Dashboard {
    pub fn compute(
        snapshot: &Snapshot,
        reference: &ReferenceData,
        settings: &DashboardSettings,
    ) -> Self {
        let transactions = snapshot.transactions();
        let total_spent = SummaryService::total_spent(transactions);
        let category_spending =
            SummaryService::category_spending(reference.categories(), transactions);
        let top_category = SummaryService::top_spending_category(&category_spending);
        let budget_goals = BudgetService::budget_goals(
            reference.budgets(),
            reference.categories(),
            &category_spending,
        );
        let trend =
            TrendService::monthly_trend(transactions, &settings.history, settings.current_month);

        Self {
            snapshot_version: snapshot.version(),
            total_income: settings.total_income,
            total_spent,
            remaining_budget: SummaryService::remaining_budget(settings.total_income, total_spent),
            usage_percentage: SummaryService::usage_percentage(total_spent, settings.total_income)
                .ok(),
            category_spending,
            top_category,
            budget_goals,
            recent_transactions: SummaryService::recent_transactions(
                transactions,
                settings.recent_limit,
            ),
            monthly_trend: TrendService::trailing(trend, settings.trend_months),
        }
    }
}

/// Memoizes the dashboard for the most recent snapshot.
///
/// The cached value is reused while the store keeps publishing the same
/// snapshot and recomputed as soon as a mutation publishes a new one.
#[derive(Debug)]
pub struct DashboardCache {
    settings: DashboardSettings,
    entry: Option<(Snapshot, Arc<Dashboard>)>,
    computations: u64,
}

impl DashboardCache {
    pub fn new(settings: DashboardSettings) -> Self {
        Self {
            settings,
            entry: None,
            computations: 0,
        }
    }

    pub fn get(&mut self, store: &LedgerStore) -> Arc<Dashboard> {
        let snapshot = store.snapshot();
        if let Some((cached, dashboard)) = &self.entry {
            if cached.same_as(&snapshot) {
                return Arc::clone(dashboard);
            }
        }
        let dashboard = Arc::new(Dashboard::compute(
            &snapshot,
            store.reference(),
            &self.settings,
        ));
        self.computations += 1;
        debug!(
            version = snapshot.version(),
            computations = self.computations,
            "dashboard recomputed"
        );
        self.entry = Some((snapshot, Arc::clone(&dashboard)));
        dashboard
    }

    /// Number of times the dashboard has been recomputed.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}
