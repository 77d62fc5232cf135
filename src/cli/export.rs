//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_json, export_yaml, BudgetExport};
use crate::storage::TransactionStore;

use super::today;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format
    Json,
    /// YAML format (human-readable)
    Yaml,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn handle_export_command(
    store: &TransactionStore,
    settings: &Settings,
    args: ExportArgs,
) -> BudgetResult<()> {
    let export = BudgetExport::from_rows(
        store.rows(),
        today(),
        &settings.currency_symbol,
        &settings.date_format,
    )?;

    let file = File::create(&args.output).map_err(|e| {
        BudgetError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Json => export_json(&export, &mut writer, args.pretty)?,
        ExportFormat::Yaml => export_yaml(&export, &mut writer)?,
    }
    writer.flush()?;

    println!(
        "Exported {} transactions, {} trend and {} breakdown charts to: {}",
        export.transactions.len(),
        export.trends.len(),
        export.breakdowns.len(),
        args.output.display()
    );
    Ok(())
}
