//! Savings transfer command

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_outcome;
use crate::error::BudgetResult;
use crate::reports::total_savings;
use crate::services::{execute, Command};
use crate::storage::TransactionStore;

use super::today;

#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Amount to move from savings into the balance
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
}

pub fn handle_transfer_command(
    store: &mut TransactionStore,
    settings: &Settings,
    args: TransferArgs,
) -> BudgetResult<()> {
    let command = Command::TransferSavings {
        amount: args.amount,
    };
    let outcome = execute(store, &command, today())?;
    print!("{}", format_outcome(&outcome, &settings.currency_symbol));
    println!(
        "Remaining savings: {}",
        total_savings(store.rows())?.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}
