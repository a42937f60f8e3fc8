//! Startup configuration: display preferences plus the static reference data.

use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::info;

use crate::{
    core::{
        dashboard::{DEFAULT_RECENT_LIMIT, DEFAULT_TREND_MONTHS},
        DashboardSettings, MonthlySpending,
    },
    currency::{CurrencyCode, LocaleConfig, MoneyFormatter},
    errors::ConfigError,
    ledger::{Budget, Category, LedgerStore, ReferenceData, Transaction, YearMonth},
    utils::paths,
};

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default = "Config::default_total_income")]
    pub total_income: f64,
    #[serde(default = "Config::default_recent_limit")]
    pub recent_limit: usize,
    #[serde(default = "Config::default_trend_months")]
    pub trend_months: usize,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    /// Monthly totals used for past months that have no transactions.
    #[serde(default)]
    pub history: Vec<MonthlySpending>,
    /// Transactions loaded into the store at startup.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Default for Config {
    fn default() -> Self {
        let categories = vec![
            Category::new("food", "Food & Dining", "hsl(var(--chart-1))"),
            Category::new("transport", "Transportation", "hsl(var(--chart-2))"),
            Category::new("shopping", "Shopping", "hsl(var(--chart-3))"),
            Category::new("bills", "Bills & Utilities", "hsl(var(--chart-4))"),
            Category::new("entertainment", "Entertainment", "hsl(var(--chart-5))"),
        ];
        let budgets = vec![
            Budget::new("b1", "food", 8000.0, "2024-07"),
            Budget::new("b2", "transport", 3000.0, "2024-07"),
            Budget::new("b3", "shopping", 5000.0, "2024-07"),
            Budget::new("b4", "bills", 6000.0, "2024-07"),
        ];
        Self {
            currency: Self::default_currency(),
            locale: LocaleConfig::default(),
            total_income: Self::default_total_income(),
            recent_limit: Self::default_recent_limit(),
            trend_months: Self::default_trend_months(),
            categories,
            budgets,
            history: Vec::new(),
            transactions: Vec::new(),
        }
    }
}

impl Config {
    pub fn default_currency() -> String {
        "INR".into()
    }

    pub fn default_total_income() -> f64 {
        50_000.0
    }

    pub fn default_recent_limit() -> usize {
        DEFAULT_RECENT_LIMIT
    }

    pub fn default_trend_months() -> usize {
        DEFAULT_TREND_MONTHS
    }

    /// Validates the categories and budgets into reference data.
    pub fn reference_data(&self) -> Result<ReferenceData, ConfigError> {
        Ok(ReferenceData::new(
            self.categories.clone(),
            self.budgets.clone(),
        )?)
    }

    /// Builds a ledger store seeded with the configured transactions.
    pub fn build_store(&self) -> Result<LedgerStore, ConfigError> {
        let reference = self.reference_data()?;
        Ok(LedgerStore::with_transactions(
            reference,
            self.transactions.clone(),
        )?)
    }

    pub fn dashboard_settings(&self, current_month: YearMonth) -> DashboardSettings {
        let mut settings = DashboardSettings::new(self.total_income, current_month)
            .with_history(self.history.clone());
        settings.recent_limit = self.recent_limit;
        settings.trend_months = self.trend_months;
        settings
    }

    pub fn money_formatter(&self) -> MoneyFormatter {
        MoneyFormatter::new(CurrencyCode::new(&self.currency), self.locale.clone())
    }
}

/// Locates, loads and saves the configuration file.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `$EXPENSE_LEDGER_HOME/config.json`, falling back to the home directory.
    pub fn new() -> Self {
        Self::with_path(paths::config_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the configuration, or the built-in default when the file is absent.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        info!(
            path = %self.path.display(),
            categories = config.categories.len(),
            budgets = config.budgets.len(),
            transactions = config.transactions.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Writes the configuration by staging to a temporary file and renaming it.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
