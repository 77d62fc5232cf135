//! Transaction display formatting
//!
//! The listing shows rows in insertion order with the amount annotated by a
//! direction arrow: ↑ income, ↓ expense, → saving.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;
use crate::services::CommandOutcome;

/// One formatted row of the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct TransactionListing {
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Date")]
    pub date: String,
}

impl TransactionListing {
    pub fn from_transaction(txn: &Transaction, symbol: &str, date_format: &str) -> Self {
        Self {
            kind: txn.kind.to_string(),
            category: txn.category.clone(),
            amount: format_listing_amount(txn, symbol),
            date: txn
                .date
                .map(|d| format_date(d, date_format))
                .unwrap_or_default(),
        }
    }
}

/// Amount with currency symbol and direction arrow, e.g. "$1000.00 ↑"
pub fn format_listing_amount(txn: &Transaction, symbol: &str) -> String {
    format!("{} {}", txn.amount.format_with_symbol(symbol), txn.kind.arrow())
}

/// Format a date with a strftime pattern, falling back to ISO on a bad pattern
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

pub fn listing_rows(rows: &[Transaction], symbol: &str, date_format: &str) -> Vec<TransactionListing> {
    rows.iter()
        .map(|t| TransactionListing::from_transaction(t, symbol, date_format))
        .collect()
}

/// Format transactions as a table
pub fn format_transaction_table(rows: &[Transaction], symbol: &str, date_format: &str) -> String {
    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut table = Table::new(listing_rows(rows, symbol, date_format));
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Confirmation lines for the rows a command appended
pub fn format_outcome(outcome: &CommandOutcome, symbol: &str) -> String {
    let mut output = String::new();
    for txn in &outcome.appended {
        output.push_str(&format!(
            "Recorded {}: {} {}{}\n",
            txn.kind,
            txn.category,
            format_listing_amount(txn, symbol),
            txn.date
                .map(|d| format!(" on {}", d.format("%Y-%m-%d")))
                .unwrap_or_default()
        ));
    }
    output
}
