//! JSON Export functionality
//!
//! Writes a snapshot of the overview, the listing and every chart series
//! that has data, for use by external chart tools.

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::display::{listing_rows, TransactionListing};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Timeframe, Transaction, TransactionKind};
use crate::reports::{BreakdownChart, OverviewReport, TrendChart};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything the terminal views show, in one document
#[derive(Debug, Clone, Serialize)]
pub struct BudgetExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub currency_symbol: String,

    pub overview: OverviewReport,

    pub transactions: Vec<TransactionListing>,

    /// Trend charts for each kind and timeframe with data
    pub trends: Vec<TrendChart>,

    /// Breakdown charts for each kind and timeframe with data
    pub breakdowns: Vec<BreakdownChart>,
}

impl BudgetExport {
    /// Build the snapshot, skipping charts that have no data
    pub fn from_rows(
        rows: &[Transaction],
        today: NaiveDate,
        symbol: &str,
        date_format: &str,
    ) -> BudgetResult<Self> {
        let mut trends = Vec::new();
        let mut breakdowns = Vec::new();

        for kind in TransactionKind::ALL {
            for timeframe in Timeframe::ALL {
                if let Some(chart) = skip_no_data(TrendChart::generate(rows, kind, timeframe))? {
                    trends.push(chart);
                }
                if let Some(chart) = skip_no_data(BreakdownChart::generate(rows, kind, timeframe))? {
                    breakdowns.push(chart);
                }
            }
        }

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency_symbol: symbol.to_string(),
            overview: OverviewReport::generate(rows, today)?,
            transactions: listing_rows(rows, symbol, date_format),
            trends,
            breakdowns,
        })
    }
}

fn skip_no_data<T>(result: BudgetResult<T>) -> BudgetResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(BudgetError::NoData) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Export the snapshot to JSON
pub fn export_json<W: Write>(export: &BudgetExport, writer: &mut W, pretty: bool) -> BudgetResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
