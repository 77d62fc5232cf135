//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod chart;
pub mod export;
pub mod report;
pub mod savings;
pub mod transaction;

use chrono::{Local, NaiveDate};

use crate::error::{BudgetError, BudgetResult};
use crate::models::TransactionKind;

pub use chart::{handle_chart_command, ChartCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use report::{handle_overview_command, OverviewArgs};
pub use savings::{handle_transfer_command, TransferArgs};
pub use transaction::{handle_add_command, handle_list_command, AddArgs, ListArgs};

/// Parse a transaction type argument
pub fn parse_kind(text: &str) -> BudgetResult<TransactionKind> {
    text.parse().map_err(BudgetError::InvalidType)
}

/// Today's date on the local clock
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
