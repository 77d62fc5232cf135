//! Transaction model
//!
//! One recorded financial event. Rows carry no identifier: two rows with
//! equal fields are indistinguishable and rows are only ever appended.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Category of the mirrored expense appended with every saving
pub const SAVINGS_DEDUCTION: &str = "Savings Deduction";

/// Category of the income row appended by a savings transfer
pub const SAVINGS_TRANSFER: &str = "Savings Transfer";

/// Category of the negative saving row appended by a savings transfer
pub const SAVINGS_REDUCTION: &str = "Savings Reduction";

/// Kind of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
    Saving,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 3] = [Self::Income, Self::Expense, Self::Saving];

    /// Direction marker used in listings
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Income => "↑",
            Self::Expense => "↓",
            Self::Saving => "→",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Saving => "Saving",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    /// Case-insensitive; accepts the plural forms used on the command line
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "incomes" | "earning" | "earnings" => Ok(Self::Income),
            "expense" | "expenses" => Ok(Self::Expense),
            "saving" | "savings" => Ok(Self::Saving),
            _ => Err(s.to_string()),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,

    pub category: String,

    /// Positive for inflows; negative only for corrective entries
    pub amount: Money,

    /// `None` when the stored date text could not be parsed
    pub date: Option<NaiveDate>,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            category: category.into(),
            amount,
            date: Some(date),
        }
    }

    pub fn income(category: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self::new(TransactionKind::Income, category, amount, date)
    }

    pub fn expense(category: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self::new(TransactionKind::Expense, category, amount, date)
    }

    pub fn saving(category: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self::new(TransactionKind::Saving, category, amount, date)
    }

    /// The expense row that mirrors a saving out of the spendable balance
    pub fn savings_deduction(amount: Money, date: NaiveDate) -> Self {
        Self::expense(SAVINGS_DEDUCTION, amount, date)
    }

    pub fn is_kind(&self, kind: TransactionKind) -> bool {
        self.kind == kind
    }

    /// Check if the row is dated within the given calendar month
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.date
            .map(|d| d.year() == year && d.month() == month)
            .unwrap_or(false)
    }
}
