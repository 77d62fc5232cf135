use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use budget_tracker::cli::{
    handle_add_command, handle_chart_command, handle_export_command, handle_list_command,
    handle_overview_command, handle_transfer_command, AddArgs, ChartCommands, ExportArgs,
    ListArgs, OverviewArgs, TransferArgs,
};
use budget_tracker::config::{BudgetPaths, Settings};
use budget_tracker::storage::TransactionStore;
use budget_tracker::BudgetResult;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Track income, expenses and savings from the terminal",
    long_about = "Records income, expense and saving transactions in a CSV file and \
                  reports this month's balance, lifetime savings and charts by day, \
                  month, year or category."
)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an income, expense or saving
    Add(AddArgs),

    /// Move money from savings back into the balance
    Transfer(TransferArgs),

    /// List transactions in the order they were recorded
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show this month's balance, income, expenses and lifetime savings
    Overview(OverviewArgs),

    /// Text charts
    #[command(subcommand)]
    Chart(ChartCommands),

    /// Export totals, transactions and chart series
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    });

    if let Err(e) = run(cli) {
        // Validation and empty-data errors are reported by their message alone
        if !e.is_validation() && !e.is_no_data() {
            error!(error = %e, "command failed");
        }
        return Err(e.into());
    }
    Ok(())
}

fn run(cli: Cli) -> BudgetResult<()> {
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let data_file = settings.data_file_path(&paths);
    debug!(base_dir = %paths.base_dir().display(), data_file = %data_file.display(), "resolved paths");

    let mut store = TransactionStore::open(&data_file)?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&mut store, &settings, args)?,
        Some(Commands::Transfer(args)) => handle_transfer_command(&mut store, &settings, args)?,
        Some(Commands::List(args)) => handle_list_command(&mut store, &settings, args)?,
        Some(Commands::Overview(args)) => handle_overview_command(&store, &settings, args)?,
        Some(Commands::Chart(cmd)) => handle_chart_command(&store, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&store, &settings, args)?,
        Some(Commands::Config) => {
            if settings.save_if_missing(&paths)? {
                println!("Created default settings at {}", paths.settings_file().display());
                println!();
            }
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Data file:      {}", data_file.display());
            println!("Transactions:   {}", store.len());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("budget - income, expense and savings tracker");
            println!();
            println!("Run 'budget --help' for usage information.");
        }
    }

    Ok(())
}

/// Use `RUST_LOG` if set, otherwise `level` for this crate and its library
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "budget_tracker={},{}={}",
            level,
            env!("CARGO_CRATE_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
