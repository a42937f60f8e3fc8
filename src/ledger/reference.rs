use std::collections::HashSet;

use super::{budget::Budget, category::Category};
use crate::errors::{LedgerError, LedgerResult};

/// Static categories and budgets loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    categories: Vec<Category>,
    budgets: Vec<Budget>,
}

impl ReferenceData {
    /// Checks the shape of the loaded records: unique ids and non-negative limits.
    pub fn new(categories: Vec<Category>, budgets: Vec<Budget>) -> LedgerResult<Self> {
        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.id.as_str()) {
                return Err(LedgerError::InvalidReference(format!(
                    "duplicate category id `{}`",
                    category.id
                )));
            }
        }
        let mut seen = HashSet::new();
        for budget in &budgets {
            if !seen.insert(budget.id.as_str()) {
                return Err(LedgerError::InvalidReference(format!(
                    "duplicate budget id `{}`",
                    budget.id
                )));
            }
            if !(budget.limit >= 0.0 && budget.limit.is_finite()) {
                return Err(LedgerError::InvalidReference(format!(
                    "budget `{}` has an invalid limit {}",
                    budget.id, budget.limit
                )));
            }
        }
        Ok(Self {
            categories,
            budgets,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn has_category(&self, id: &str) -> bool {
        self.category(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_category_ids() {
        let err = ReferenceData::new(
            vec![
                Category::new("food", "Food", "#f00"),
                Category::new("food", "Dining", "#0f0"),
            ],
            Vec::new(),
        )
        .expect_err("duplicate ids must be rejected");
        assert!(matches!(err, LedgerError::InvalidReference(ref msg) if msg.contains("food")));
    }

    #[test]
    fn rejects_negative_budget_limits() {
        let result = ReferenceData::new(
            vec![Category::new("food", "Food", "#f00")],
            vec![Budget::new("b1", "food", -5.0, "2024-07")],
        );
        assert!(result.is_err());
    }

    #[test]
    fn looks_up_categories_by_id() {
        let reference =
            ReferenceData::new(vec![Category::new("food", "Food", "#f00")], Vec::new()).unwrap();
        assert_eq!(reference.category("food").map(|c| c.name.as_str()), Some("Food"));
        assert!(!reference.has_category("rent"));
    }
}
