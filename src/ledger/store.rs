//! Owned transaction store that publishes immutable snapshots.

use std::{
    collections::HashSet,
    ops::Deref,
    sync::{Arc, Mutex},
};

use tracing::{debug, warn};
use uuid::Uuid;

use super::{
    reference::ReferenceData,
    transaction::{Transaction, TransactionDraft, TransactionPatch},
};
use crate::errors::{LedgerError, LedgerResult};

/// Immutable view of the ledger at one point in time.
///
/// Cloning is cheap; every clone shares the same transaction buffer, and a
/// snapshot never observes mutations made after it was taken.
#[derive(Debug, Clone)]
pub struct Snapshot {
    version: u64,
    transactions: Arc<[Transaction]>,
}

impl Snapshot {
    fn new(version: u64, transactions: Vec<Transaction>) -> Self {
        Self {
            version,
            transactions: Arc::from(transactions),
        }
    }

    /// Monotonic counter bumped by every successful mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// True when both handles point at the same published buffer.
    pub fn same_as(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.transactions, &other.transactions)
    }
}

impl Deref for Snapshot {
    type Target = [Transaction];

    fn deref(&self) -> &Self::Target {
        &self.transactions
    }
}

/// Canonical owner of the transaction set.
#[derive(Debug)]
pub struct LedgerStore {
    reference: Arc<ReferenceData>,
    current: Snapshot,
    /// Every id this store has handed out or been seeded with, deleted ones
    /// included. Grows for the store's lifetime so no id is ever reissued.
    issued_ids: HashSet<String>,
}

impl LedgerStore {
    pub fn new(reference: ReferenceData) -> Self {
        Self {
            reference: Arc::new(reference),
            current: Snapshot::new(0, Vec::new()),
            issued_ids: HashSet::new(),
        }
    }

    /// Builds a store pre-populated with `seed`, kept in the given order.
    ///
    /// Seed records keep their ids and are validated like `create` input.
    pub fn with_transactions(
        reference: ReferenceData,
        seed: Vec<Transaction>,
    ) -> LedgerResult<Self> {
        let mut store = Self::new(reference);
        for txn in &seed {
            if txn.id.trim().is_empty() {
                return Err(LedgerError::Validation(
                    "seed transaction id must not be empty".into(),
                ));
            }
            store.validate(&txn.title, txn.amount, &txn.category_id)?;
            if !store.issued_ids.insert(txn.id.clone()) {
                return Err(LedgerError::Validation(format!(
                    "duplicate transaction id `{}`",
                    txn.id
                )));
            }
        }
        store.current = Snapshot::new(0, seed);
        Ok(store)
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn snapshot(&self) -> Snapshot {
        self.current.clone()
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.current.get(id)
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Records a new expense and returns it with its freshly issued id.
    pub fn create(&mut self, draft: TransactionDraft) -> LedgerResult<Transaction> {
        if let Err(err) = self.validate(&draft.title, draft.amount, &draft.category_id) {
            warn!(error = %err, "rejected new transaction");
            return Err(err);
        }
        let id = self.issue_id();
        let transaction = Transaction::from_draft(id, draft);

        let mut next = Vec::with_capacity(self.current.len() + 1);
        next.push(transaction.clone());
        next.extend(self.current.iter().cloned());
        self.publish(next);

        debug!(
            id = %transaction.id,
            version = self.current.version(),
            "transaction created"
        );
        Ok(transaction)
    }

    /// Merges `patch` into the transaction identified by `id`.
    pub fn update(&mut self, id: &str, patch: TransactionPatch) -> LedgerResult<Transaction> {
        let index = self.position(id)?;
        let merged = self.current[index].merged(patch);
        if let Err(err) = self.validate(&merged.title, merged.amount, &merged.category_id) {
            warn!(id, error = %err, "rejected transaction update");
            return Err(err);
        }

        let mut next = self.current.to_vec();
        next[index] = merged.clone();
        self.publish(next);

        debug!(id, version = self.current.version(), "transaction updated");
        Ok(merged)
    }

    /// Removes the transaction identified by `id`, returning the removed instance.
    pub fn delete(&mut self, id: &str) -> LedgerResult<Transaction> {
        let index = self.position(id)?;
        let mut next = self.current.to_vec();
        let removed = next.remove(index);
        self.publish(next);

        debug!(id, version = self.current.version(), "transaction deleted");
        Ok(removed)
    }

    fn position(&self, id: &str) -> LedgerResult<usize> {
        self.current
            .iter()
            .position(|txn| txn.id == id)
            .ok_or_else(|| {
                warn!(id, "transaction not found");
                LedgerError::NotFound(id.to_string())
            })
    }

    fn publish(&mut self, transactions: Vec<Transaction>) {
        self.current = Snapshot::new(self.current.version() + 1, transactions);
    }

    fn issue_id(&mut self) -> String {
        loop {
            let candidate = Uuid::new_v4().to_string();
            if self.issued_ids.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    fn validate(&self, title: &str, amount: f64, category_id: &str) -> LedgerResult<()> {
        if title.trim().is_empty() {
            return Err(LedgerError::Validation("title must not be empty".into()));
        }
        if !(amount > 0.0 && amount.is_finite()) {
            return Err(LedgerError::Validation(format!(
                "amount must be a positive number, got {amount}"
            )));
        }
        if !self.reference.has_category(category_id) {
            return Err(LedgerError::Validation(format!(
                "unknown category `{category_id}`"
            )));
        }
        Ok(())
    }
}

/// Thread-safe handle that serializes mutations through a mutex.
#[derive(Debug, Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<LedgerStore>>,
}

impl SharedLedger {
    pub fn new(store: LedgerStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn create(&self, draft: TransactionDraft) -> LedgerResult<Transaction> {
        self.with_store(|store| store.create(draft))
    }

    pub fn update(&self, id: &str, patch: TransactionPatch) -> LedgerResult<Transaction> {
        self.with_store(|store| store.update(id, patch))
    }

    pub fn delete(&self, id: &str) -> LedgerResult<Transaction> {
        self.with_store(|store| store.delete(id))
    }

    pub fn snapshot(&self) -> LedgerResult<Snapshot> {
        self.with_store(|store| Ok(store.snapshot()))
    }

    fn with_store<T, F>(&self, op: F) -> LedgerResult<T>
    where
        F: FnOnce(&mut LedgerStore) -> LedgerResult<T>,
    {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| LedgerError::Unavailable("ledger lock poisoned".into()))?;
        op(&mut guard)
    }
}
