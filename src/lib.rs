#![doc(test(attr(deny(warnings))))]

//! Expense Ledger keeps an in-memory ledger of personal expenses and derives
//! the dashboard analytics (totals, category spending, budget goals, recent
//! activity and monthly trend) from immutable ledger snapshots.

pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;
pub mod view;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense ledger tracing initialized.");
    });
}
