//! Ledger domain models, reference data and the transaction store.

pub mod budget;
pub mod category;
pub mod month;
pub mod reference;
pub mod store;
pub mod transaction;

pub use budget::Budget;
pub use category::Category;
pub use month::YearMonth;
pub use reference::ReferenceData;
pub use store::{LedgerStore, SharedLedger, Snapshot};
pub use transaction::{PaymentType, Transaction, TransactionDraft, TransactionPatch};
