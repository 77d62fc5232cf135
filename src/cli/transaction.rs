//! Transaction CLI commands
//!
//! `add` records one transaction; `list` prints the table in insertion order.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_outcome, format_transaction_table};
use crate::error::BudgetResult;
use crate::services::{execute, Command, TransactionEntry, TransactionFilter, TransactionService};
use crate::storage::TransactionStore;

use super::{parse_kind, today};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Transaction type: income, expense or saving
    pub kind: String,
    /// Category name
    pub category: String,
    /// Amount (e.g., "12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show only the most recent N transactions
    #[arg(short, long)]
    pub limit: Option<usize>,
    /// Only show this transaction type
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,
}

pub fn handle_add_command(
    store: &mut TransactionStore,
    settings: &Settings,
    args: AddArgs,
) -> BudgetResult<()> {
    let entry = TransactionEntry::from_text(&args.kind, args.category, args.amount, args.date)?;
    let outcome = execute(store, &Command::AddTransaction(entry), today())?;
    print!("{}", format_outcome(&outcome, &settings.currency_symbol));
    Ok(())
}

pub fn handle_list_command(
    store: &mut TransactionStore,
    settings: &Settings,
    args: ListArgs,
) -> BudgetResult<()> {
    let mut filter = TransactionFilter::new();
    if let Some(kind) = args.kind.as_deref() {
        filter = filter.kind(parse_kind(kind)?);
    }
    if let Some(limit) = args.limit {
        filter = filter.limit(limit);
    }

    let rows = TransactionService::new(store).list(&filter);
    print!(
        "{}",
        format_transaction_table(&rows, &settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}
