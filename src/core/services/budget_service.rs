//! Budget goal resolution against category spending.

use std::collections::HashMap;

use tracing::debug;

use crate::core::summary::{
    BudgetGoal, CategorySpending, UNKNOWN_CATEGORY_COLOR, UNKNOWN_CATEGORY_NAME,
};
use crate::ledger::{Budget, Category};

/// Stateless budgeting utilities that operate over ledger snapshots.
pub struct BudgetService;

impl BudgetService {
    /// Resolves every budget's category and actual spend, in budget order.
    ///
    /// Budgets pointing at a missing category get the fallback name and color;
    /// categories absent from `spending` count as zero spent.
    pub fn budget_goals(
        budgets: &[Budget],
        categories: &[Category],
        spending: &[CategorySpending],
    ) -> Vec<BudgetGoal> {
        let mut spent_by_category: HashMap<&str, f64> = HashMap::new();
        for entry in spending {
            spent_by_category.entry(entry.id.as_str()).or_insert(entry.total);
        }

        budgets
            .iter()
            .map(|budget| {
                let category = categories.iter().find(|c| c.id == budget.category_id);
                if category.is_none() {
                    debug!(
                        budget = %budget.id,
                        category = %budget.category_id,
                        "budget references unknown category"
                    );
                }
                BudgetGoal {
                    id: budget.id.clone(),
                    category_name: category
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| UNKNOWN_CATEGORY_NAME.into()),
                    category_color: category
                        .map(|c| c.color.clone())
                        .unwrap_or_else(|| UNKNOWN_CATEGORY_COLOR.into()),
                    limit: budget.limit,
                    spent: spent_by_category
                        .get(budget.category_id.as_str())
                        .copied()
                        .unwrap_or(0.0),
                }
            })
            .collect()
    }
}
