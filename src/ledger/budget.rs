use serde::{Deserialize, Serialize};

/// A spending guardrail for a specific category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category_id: String,
    pub limit: f64,
    pub month: String,
}

impl Budget {
    pub fn new(
        id: impl Into<String>,
        category_id: impl Into<String>,
        limit: f64,
        month: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            limit,
            month: month.into(),
        }
    }
}
