//! Error types for budget-tracker
//!
//! Domain errors (bad input, missing data) and infrastructure errors
//! (file I/O, CSV, serialization) share one enum so every layer can
//! propagate with `?`.

use thiserror::Error;

use crate::models::Money;

/// The main error type for budget-tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Amount text does not parse as a number
    #[error("Invalid amount: '{0}'. Please enter a valid amount")]
    InvalidAmount(String),

    /// Date text does not parse as a calendar date
    #[error("Invalid date: '{0}'. Please enter a valid date in YYYY-MM-DD format")]
    InvalidDate(String),

    /// Transaction type is not one of Income, Expense, Saving
    #[error("Invalid transaction type: '{0}'. Use Income, Expense or Saving")]
    InvalidType(String),

    /// Category left empty on entry
    #[error("Please enter a category")]
    MissingCategory,

    /// Transfer amount exceeds lifetime savings
    #[error("Insufficient savings: requested {requested}, available {available}")]
    InsufficientSavings { requested: Money, available: Money },

    /// Aggregation requested over an empty (or empty-filtered) table
    #[error("No data available to visualize")]
    NoData,

    /// A total over the table does not fit in the money range
    #[error("Totals are too large to compute")]
    AmountOverflow,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Corrupt or unreadable data file
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BudgetError {
    /// Check if this error came from user input and can be fixed by re-entry
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::InvalidDate(_)
                | Self::InvalidType(_)
                | Self::MissingCategory
                | Self::InsufficientSavings { .. }
        )
    }

    /// Check if this is the empty-data signal
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for BudgetError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for budget-tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;
