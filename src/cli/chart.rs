//! Chart CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::models::Timeframe;
use crate::reports::{BreakdownChart, TrendChart};
use crate::storage::TransactionStore;

use super::parse_kind;

/// Chart subcommands
#[derive(Subcommand, Debug)]
pub enum ChartCommands {
    /// Totals over time as a bar per day, month or year
    Trend {
        /// Transaction type: income, expense or saving
        kind: String,
        /// daily, monthly or yearly
        #[arg(short, long, default_value = "monthly")]
        timeframe: Timeframe,
    },
    /// Share of the total per category (daily, yearly) or per month (monthly)
    Breakdown {
        /// Transaction type: income, expense or saving
        kind: String,
        /// daily, monthly or yearly
        #[arg(short, long, default_value = "monthly")]
        timeframe: Timeframe,
    },
}

/// Handle chart commands
pub fn handle_chart_command(
    store: &TransactionStore,
    settings: &Settings,
    cmd: ChartCommands,
) -> BudgetResult<()> {
    let symbol = &settings.currency_symbol;
    match cmd {
        ChartCommands::Trend { kind, timeframe } => {
            let chart = TrendChart::generate(store.rows(), parse_kind(&kind)?, timeframe)?;
            print!("{}", chart.format_terminal(symbol));
        }
        ChartCommands::Breakdown { kind, timeframe } => {
            let chart = BreakdownChart::generate(store.rows(), parse_kind(&kind)?, timeframe)?;
            print!("{}", chart.format_terminal(symbol));
        }
    }
    Ok(())
}
