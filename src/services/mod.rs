//! Service layer for budget-tracker
//!
//! Every mutation of the table goes through a `Command`. Executing one
//! validates the raw input, appends the resulting rows and persists them,
//! or changes nothing and returns the reason.

pub mod savings;
pub mod transaction;

use chrono::NaiveDate;

use crate::error::BudgetResult;
use crate::models::Transaction;
use crate::storage::TransactionStore;

pub use savings::SavingsService;
pub use transaction::{parse_amount, parse_date, TransactionEntry, TransactionFilter, TransactionService};

/// A request to change the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddTransaction(TransactionEntry),
    TransferSavings { amount: String },
}

/// Rows a successful command appended, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub appended: Vec<Transaction>,
}

/// Run a command against the store, using `today` for undated input
pub fn execute(
    store: &mut TransactionStore,
    command: &Command,
    today: NaiveDate,
) -> BudgetResult<CommandOutcome> {
    match command {
        Command::AddTransaction(entry) => TransactionService::new(store).add(entry, today),
        Command::TransferSavings { amount } => SavingsService::new(store).transfer(amount, today),
    }
}
