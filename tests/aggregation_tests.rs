mod common;

use common::{busy_store, date, draft, example_store, reference};
use expense_ledger::{
    core::{
        services::{SummaryService, TrendService},
        Dashboard, DashboardCache, DashboardSettings, MonthlySpending,
    },
    errors::LedgerError,
    ledger::{LedgerStore, PaymentType, Transaction, TransactionDraft, YearMonth},
};

fn january() -> YearMonth {
    YearMonth::new(2024, 1).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn worked_example_totals() {
    let store = example_store();
    let dashboard = Dashboard::compute(
        &store.snapshot(),
        store.reference(),
        &DashboardSettings::new(1000.0, january()),
    );

    assert_eq!(dashboard.total_spent, 150.0);
    assert_eq!(dashboard.remaining_budget, 850.0);
    assert_eq!(dashboard.usage_percentage, Some(15.0));
    assert_eq!(dashboard.top_category.name, "Food");
    assert_eq!(dashboard.top_category.total, 150.0);
}

#[test]
fn total_spent_ignores_transaction_order() {
    let store = busy_store();
    let forward: Vec<Transaction> = store.snapshot().to_vec();
    let mut reversed = forward.clone();
    reversed.reverse();
    let mut rotated = forward.clone();
    rotated.rotate_left(3);

    let expected = SummaryService::total_spent(&forward);
    assert!(approx(SummaryService::total_spent(&reversed), expected));
    assert!(approx(SummaryService::total_spent(&rotated), expected));
}

#[test]
fn category_totals_partition_the_overall_total() {
    let store = busy_store();
    let snapshot = store.snapshot();
    let spending = SummaryService::category_spending(store.reference().categories(), &snapshot);

    assert_eq!(spending.len(), store.reference().categories().len());
    let partitioned: f64 = spending.iter().map(|entry| entry.total).sum();
    assert!(approx(partitioned, SummaryService::total_spent(&snapshot)));

    let bills = spending.iter().find(|entry| entry.id == "bills").unwrap();
    assert!(approx(bills.total, 1005.0));
}

#[test]
fn recent_transactions_are_the_true_top_five_by_date() {
    let store = busy_store();
    let snapshot = store.snapshot();
    let recent = SummaryService::recent_transactions(&snapshot, 5);

    assert_eq!(recent.len(), 5);
    assert!(recent.windows(2).all(|pair| pair[0].date >= pair[1].date));
    let cutoff = recent.last().unwrap().date;
    let excluded = snapshot
        .iter()
        .filter(|txn| !recent.iter().any(|kept| kept.id == txn.id));
    for txn in excluded {
        assert!(txn.date <= cutoff, "{} should have been listed", txn.title);
    }
    assert_eq!(recent[0].title, "Water");
}

#[test]
fn recent_transactions_with_fewer_than_limit() {
    let store = example_store();
    let recent = SummaryService::recent_transactions(&store.snapshot(), 5);
    let titles: Vec<&str> = recent.iter().map(|txn| txn.title.as_str()).collect();
    assert_eq!(titles, ["Takeaway", "Groceries"]);
}

#[test]
fn zero_income_makes_usage_undefined() {
    assert_eq!(
        SummaryService::usage_percentage(150.0, 0.0),
        Err(LedgerError::UndefinedRatio)
    );
    let store = example_store();
    let dashboard = Dashboard::compute(
        &store.snapshot(),
        store.reference(),
        &DashboardSettings::new(0.0, january()),
    );
    assert_eq!(dashboard.usage_percentage, None);
    assert_eq!(dashboard.remaining_budget, -150.0);
}

#[test]
fn empty_ledger_has_no_top_category() {
    let store = LedgerStore::new(reference());
    let dashboard = Dashboard::compute(
        &store.snapshot(),
        store.reference(),
        &DashboardSettings::new(500.0, january()),
    );
    assert_eq!(dashboard.total_spent, 0.0);
    assert_eq!(dashboard.top_category.name, "N/A");
    assert_eq!(dashboard.top_category.total, 0.0);
    assert!(dashboard.recent_transactions.is_empty());
    assert!(dashboard
        .budget_goals
        .iter()
        .all(|goal| goal.spent == 0.0));
}

#[test]
fn compute_is_idempotent_for_one_snapshot() {
    let store = busy_store();
    let snapshot = store.snapshot();
    let settings = DashboardSettings::new(2500.0, january());
    let first = Dashboard::compute(&snapshot, store.reference(), &settings);
    let second = Dashboard::compute(&snapshot, store.reference(), &settings);
    assert_eq!(first, second);
}

#[test]
fn cache_recomputes_only_after_a_mutation() {
    let mut store = busy_store();
    let mut cache = DashboardCache::new(DashboardSettings::new(2500.0, january()));

    let first = cache.get(&store);
    let again = cache.get(&store);
    assert_eq!(cache.computations(), 1);
    assert!(std::sync::Arc::ptr_eq(&first, &again));

    store.create(draft("Lunch", 20.0, "food", 31)).unwrap();
    let refreshed = cache.get(&store);
    assert_eq!(cache.computations(), 2);
    assert!(approx(refreshed.total_spent, first.total_spent + 20.0));
}

#[test]
fn budget_goals_track_category_spending() {
    let store = busy_store();
    let dashboard = Dashboard::compute(
        &store.snapshot(),
        store.reference(),
        &DashboardSettings::new(2500.0, january()),
    );
    let bills = dashboard
        .budget_goals
        .iter()
        .find(|goal| goal.id == "b-bills")
        .unwrap();
    assert_eq!(bills.category_name, "Bills");
    assert!(approx(bills.spent, 1005.0));
    assert!(bills.remaining() < 0.0);
}

#[test]
fn trend_buckets_past_months_and_ends_with_live_total() {
    let mut store = LedgerStore::new(reference());
    store
        .create(TransactionDraft::new(
            "December rent",
            700.0,
            "bills",
            date(2023, 12, 1),
            PaymentType::Card,
        ))
        .unwrap();
    store.create(draft("Groceries", 100.0, "food", 5)).unwrap();

    let history = vec![
        MonthlySpending::new(YearMonth::new(2023, 11).unwrap(), 640.0),
        MonthlySpending::new(YearMonth::new(2023, 12).unwrap(), 999.0),
    ];
    let series = TrendService::monthly_trend(&store.snapshot(), &history, january());

    let months: Vec<String> = series.iter().map(|point| point.month.to_string()).collect();
    assert_eq!(months, ["2023-11", "2023-12", "2024-01"]);
    assert_eq!(series[0].expenses, 640.0);
    assert_eq!(series[1].expenses, 700.0);
    assert_eq!(series[2].expenses, 800.0);
}
