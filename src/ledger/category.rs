use serde::{Deserialize, Serialize};

/// Groups transactions for spending breakdowns and budget goals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Presentation color token, e.g. `hsl(var(--chart-1))` or `#ff8800`.
    pub color: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}
