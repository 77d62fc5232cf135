//! Overview CLI command

use clap::Args;

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::models::MonthPeriod;
use crate::reports::OverviewReport;
use crate::storage::TransactionStore;

use super::today;

#[derive(Args, Debug)]
pub struct OverviewArgs {
    /// Month to report on (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    pub month: Option<MonthPeriod>,
}

pub fn handle_overview_command(
    store: &TransactionStore,
    settings: &Settings,
    args: OverviewArgs,
) -> BudgetResult<()> {
    let report = match args.month {
        Some(period) => OverviewReport::for_period(store.rows(), period)?,
        None => OverviewReport::generate(store.rows(), today())?,
    };
    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}
