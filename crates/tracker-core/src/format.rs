//! Presentation-facing projections: table rows and edit-form prefill.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use tracker_domain::Transaction;

use crate::tracker::TransactionPatch;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Display settings for rendered rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
            date_format: DEFAULT_DATE_FORMAT.into(),
        }
    }
}

/// One rendered line of the transaction table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub id: u64,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub category: String,
}

impl TransactionRow {
    pub fn from_transaction(txn: &Transaction, options: &FormatOptions) -> Self {
        Self {
            id: txn.id,
            date: format_date(&txn.date, &options.date_format),
            description: txn.description.clone(),
            amount: format_amount(txn.amount, &options.currency_symbol),
            category: txn.category.clone(),
        }
    }
}

pub fn transaction_rows(
    transactions: &[Transaction],
    options: &FormatOptions,
) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(|txn| TransactionRow::from_transaction(txn, options))
        .collect()
}

/// Renders `date` in UTC with `pattern`, falling back to ISO dates for invalid patterns.
pub fn format_date(date: &DateTime<Utc>, pattern: &str) -> String {
    let mut rendered = String::new();
    if write!(rendered, "{}", date.format(pattern)).is_err() {
        return date.format(DEFAULT_DATE_FORMAT).to_string();
    }
    rendered
}

/// Renders `amount` with two decimals, sign ahead of the currency symbol.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Text values used to prefill and submit the edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub description: String,
    pub amount: String,
    pub category: String,
}

impl EditForm {
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            description: txn.description.clone(),
            amount: format!("{:.2}", txn.amount),
            category: txn.category.clone(),
        }
    }

    /// Turns submitted form text into a sparse update; blank fields stay unchanged.
    pub fn into_patch(self) -> TransactionPatch {
        TransactionPatch::new()
            .description(self.description)
            .amount(self.amount)
            .category(self.category)
    }
}
