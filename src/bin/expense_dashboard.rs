use std::{env, path::PathBuf, process};

use chrono::Utc;
use colored::{ColoredString, Colorize};
use thiserror::Error;

use expense_ledger::{
    config::ConfigManager,
    core::Dashboard,
    errors::{ConfigError, LedgerError},
    init,
    ledger::YearMonth,
    view::{DashboardView, ViewProjector},
};

const USAGE: &str = "usage: expense_dashboard [--config PATH] [--month YYYY-MM] [--json]";
const BAR_WIDTH: usize = 20;

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}\n{usage}", usage = USAGE)]
    Usage(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    month: Option<YearMonth>,
    json: bool,
}

fn main() {
    init();

    let result = parse_args(env::args().skip(1)).and_then(run);
    if let Err(err) = result {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, CliError> {
    let mut options = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--config expects a path".into()))?;
                options.config = Some(PathBuf::from(path));
            }
            "--month" => {
                let raw = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--month expects YYYY-MM".into()))?;
                options.month = Some(raw.parse()?);
            }
            "--json" => options.json = true,
            other => return Err(CliError::Usage(format!("unknown argument `{other}`"))),
        }
    }
    Ok(options)
}

fn run(options: Options) -> Result<(), CliError> {
    let manager = options
        .config
        .map(ConfigManager::with_path)
        .unwrap_or_default();
    let config = manager.load()?;
    let store = config.build_store()?;
    let month = options
        .month
        .unwrap_or_else(|| YearMonth::from_date(Utc::now().date_naive()));

    let dashboard = Dashboard::compute(
        &store.snapshot(),
        store.reference(),
        &config.dashboard_settings(month),
    );
    let projector = ViewProjector::new(config.money_formatter());
    let view = projector.dashboard(&dashboard, store.reference().categories());

    if options.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render(&view, month));
    }
    Ok(())
}

fn render(view: &DashboardView, month: YearMonth) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Expense Dashboard ({month}) ===\n"));
    for card in &view.cards {
        match &card.change {
            Some(change) => out.push_str(&format!(
                "{:<18} {:>16}  {}\n",
                card.title,
                card.value,
                change.dimmed()
            )),
            None => out.push_str(&format!("{:<18} {:>16}\n", card.title, card.value)),
        }
    }

    out.push_str("\n--- Budget Goals ---\n");
    if view.budget_goals.is_empty() {
        out.push_str("No budgets configured.\n");
    }
    for goal in &view.budget_goals {
        out.push_str(&format!(
            "{:<18} {} / {}  {}  {}\n",
            goal.category_name,
            goal.spent_label,
            goal.limit_label,
            paint(progress_bar(goal.progress), &goal.status_color),
            goal.remaining_label
        ));
    }

    out.push_str("\n--- Spending by Category ---\n");
    if view.category_slices.is_empty() {
        out.push_str("No spending data available.\n");
    }
    for slice in &view.category_slices {
        out.push_str(&format!(
            "{:<18} {:>14}  {:>5.1}%\n",
            slice.name,
            slice.total_label,
            slice.share * 100.0
        ));
    }

    out.push_str("\n--- Recent Transactions ---\n");
    if view.recent_transactions.is_empty() {
        out.push_str("No transactions yet.\n");
    }
    for row in &view.recent_transactions {
        out.push_str(&format!(
            "{:<12} {:<24} {:<18} {:<5} {:>12}\n",
            row.date, row.title, row.category, row.payment, row.amount
        ));
    }

    out.push_str("\n--- Monthly Trend ---\n");
    for point in &view.trend {
        out.push_str(&format!(
            "{} {} {:>14}\n",
            point.label, point.month, point.value_label
        ));
    }
    out
}

fn progress_bar(progress: f64) -> String {
    let filled = ((progress / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}] {:>5.1}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress
    )
}

/// Maps a theme color token onto a terminal color.
fn paint(text: String, token: &str) -> ColoredString {
    match token {
        "destructive" => text.red(),
        "accent" => text.yellow(),
        _ => text.green(),
    }
}
