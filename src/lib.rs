//! budget-tracker - Personal income, expense and savings tracker
//!
//! This library keeps a table of transactions in a CSV file and computes
//! the figures a budget view needs: this month's income, expenses and
//! balance, lifetime savings, and grouped sums for charts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, transactions, periods and grouping keys
//! - `storage`: CSV-backed transaction store
//! - `reports`: Overview totals, grouped series and chart presets
//! - `services`: Commands that validate input and append rows
//! - `display`: Terminal formatting
//! - `export`: JSON and YAML snapshots
//! - `cli`: Command handlers for the `budget` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::{BudgetPaths, Settings};
//! use budget_tracker::reports::OverviewReport;
//! use budget_tracker::storage::TransactionStore;
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = TransactionStore::open(settings.data_file_path(&paths))?;
//! let overview = OverviewReport::generate(store.rows(), chrono::Local::now().date_naive())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
