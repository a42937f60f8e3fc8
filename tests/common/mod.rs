#![allow(dead_code)]

use chrono::NaiveDate;
use expense_ledger::ledger::{
    Budget, Category, LedgerStore, PaymentType, ReferenceData, TransactionDraft,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn categories() -> Vec<Category> {
    vec![
        Category::new("food", "Food", "hsl(var(--chart-1))"),
        Category::new("transport", "Transport", "hsl(var(--chart-2))"),
        Category::new("bills", "Bills", "hsl(var(--chart-3))"),
    ]
}

pub fn reference() -> ReferenceData {
    ReferenceData::new(
        categories(),
        vec![
            Budget::new("b-food", "food", 400.0, "2024-01"),
            Budget::new("b-bills", "bills", 1000.0, "2024-01"),
        ],
    )
    .expect("valid reference data")
}

pub fn draft(title: &str, amount: f64, category: &str, day: u32) -> TransactionDraft {
    TransactionDraft::new(title, amount, category, date(2024, 1, day), PaymentType::Card)
}

/// Store holding the two transactions from the worked dashboard example.
pub fn example_store() -> LedgerStore {
    let mut store = LedgerStore::new(reference());
    store
        .create(draft("Groceries", 100.0, "food", 5))
        .expect("create groceries");
    store
        .create(draft("Takeaway", 50.0, "food", 10))
        .expect("create takeaway");
    store
}

/// A store with a mix of categories and dates.
pub fn busy_store() -> LedgerStore {
    let mut store = LedgerStore::new(reference());
    let entries = [
        ("Rent", 900.0, "bills", 1),
        ("Bus pass", 45.0, "transport", 2),
        ("Market", 62.5, "food", 2),
        ("Electricity", 80.0, "bills", 14),
        ("Cinema snacks", 12.0, "food", 20),
        ("Taxi", 18.0, "transport", 21),
        ("Bakery", 7.5, "food", 9),
        ("Water", 25.0, "bills", 28),
    ];
    for (title, amount, category, day) in entries {
        store
            .create(draft(title, amount, category, day))
            .expect("create busy entry");
    }
    store
}
