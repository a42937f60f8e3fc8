//! Locale-aware money and date formatting for display.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ledger::YearMonth;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn symbol(&self) -> &str {
        match self.as_str() {
            "INR" => "₹",
            "USD" => "$",
            "EUR" => "€",
            "GBP" => "£",
            "JPY" => "¥",
            "AUD" => "A$",
            other => other,
        }
    }

    pub fn minor_units(&self) -> usize {
        match self.as_str() {
            "JPY" => 0,
            "KWD" | "BHD" => 3,
            _ => 2,
        }
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("INR")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateFormatStyle {
    Short,
    #[default]
    Medium,
    Long,
}

/// Separators and styles used when rendering numbers and dates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub decimal_separator: char,
    pub grouping_separator: char,
    #[serde(default)]
    pub date_format: DateFormatStyle,
    #[serde(default)]
    pub negative_style: NegativeStyle,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
            date_format: DateFormatStyle::default(),
            negative_style: NegativeStyle::default(),
        }
    }
}

/// Renders amounts in one currency under one locale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoneyFormatter {
    code: CurrencyCode,
    locale: LocaleConfig,
}

impl MoneyFormatter {
    pub fn new(code: CurrencyCode, locale: LocaleConfig) -> Self {
        Self { code, locale }
    }

    /// Formats `amount` as e.g. `₹1,234.50`; negatives follow the locale's style.
    pub fn format(&self, amount: f64) -> String {
        let digits = self.format_number(amount.abs(), self.code.minor_units());
        // Amounts that round to zero never carry a sign.
        let negative = amount < 0.0 && digits.chars().any(|ch| ch.is_ascii_digit() && ch != '0');
        let body = format!("{}{}", self.code.symbol(), digits);
        if negative {
            match self.locale.negative_style {
                NegativeStyle::Sign => format!("-{body}"),
                NegativeStyle::Parentheses => format!("({body})"),
            }
        } else {
            body
        }
    }

    /// Formats a ratio already expressed in percent with one decimal place.
    pub fn format_percent(&self, percent: f64) -> String {
        format!("{}%", self.format_number(percent, 1))
    }

    pub fn format_number(&self, value: f64, precision: usize) -> String {
        let rendered = format!("{:.*}", precision, value);
        let (sign, digits) = match rendered.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", rendered.as_str()),
        };
        let (int_part, fraction) = match digits.split_once('.') {
            Some((int_part, fraction)) => (int_part, Some(fraction)),
            None => (digits, None),
        };
        let mut out = String::from(sign);
        out.push_str(&group_digits(int_part, self.locale.grouping_separator));
        if let Some(fraction) = fraction {
            out.push(self.locale.decimal_separator);
            out.push_str(fraction);
        }
        out
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        let month = YearMonth::from_date(date).short_label();
        match self.locale.date_format {
            DateFormatStyle::Short => date.format("%Y-%m-%d").to_string(),
            DateFormatStyle::Medium => format!("{:02} {} {}", date.day(), month, date.year()),
            DateFormatStyle::Long => {
                format!("{}, {} {} {}", date.weekday(), date.day(), month, date.year())
            }
        }
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
