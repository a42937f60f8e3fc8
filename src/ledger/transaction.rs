use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single recorded expense owned by the ledger store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category_id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
}

impl Transaction {
    pub(crate) fn from_draft(id: String, draft: TransactionDraft) -> Self {
        Self {
            id,
            title: draft.title,
            amount: draft.amount,
            category_id: draft.category_id,
            date: draft.date,
            payment_type: draft.payment_type,
        }
    }

    /// Returns a copy with every field present in `patch` replaced.
    pub fn merged(&self, patch: TransactionPatch) -> Self {
        Self {
            id: self.id.clone(),
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            amount: patch.amount.unwrap_or(self.amount),
            category_id: patch.category_id.unwrap_or_else(|| self.category_id.clone()),
            date: patch.date.unwrap_or(self.date),
            payment_type: patch.payment_type.unwrap_or(self.payment_type),
        }
    }
}

/// How an expense was paid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Cash,
    #[default]
    Card,
    Upi,
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentType::Cash => "Cash",
            PaymentType::Card => "Card",
            PaymentType::Upi => "UPI",
        };
        f.write_str(label)
    }
}

/// Input for creating a transaction; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub title: String,
    pub amount: f64,
    pub category_id: String,
    pub date: NaiveDate,
    #[serde(rename = "type", default)]
    pub payment_type: PaymentType,
}

impl TransactionDraft {
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        category_id: impl Into<String>,
        date: NaiveDate,
        payment_type: PaymentType,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            category_id: category_id.into(),
            date,
            payment_type,
        }
    }
}

/// Partial field replacement applied by `LedgerStore::update`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
}

impl TransactionPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn payment_type(mut self, payment_type: PaymentType) -> Self {
        self.payment_type = Some(payment_type);
        self
    }
}
