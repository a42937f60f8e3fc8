//! Aggregation engine: pure services over ledger snapshots plus the dashboard bundle.

pub mod dashboard;
pub mod services;
pub mod summary;

pub use dashboard::{Dashboard, DashboardCache, DashboardSettings};
pub use summary::{BudgetGoal, CategorySpending, MonthlySpending, TopCategory};
