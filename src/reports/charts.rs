//! Chart presets
//!
//! A trend plots one kind over time; a breakdown splits one kind into
//! slices with their share of the total.

use serde::Serialize;

use crate::display::report::{format_bar, format_percentage, truncate};
use crate::error::BudgetResult;
use crate::models::money::serialize_decimal;
use crate::models::{GroupBy, GroupKey, Money, Timeframe, Transaction, TransactionKind};

use super::series::{group_by, Series};

const BAR_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 20;

/// Line-chart data: one point per day, month or year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChart {
    pub title: String,
    pub timeframe: Timeframe,
    pub series: Series,
}

impl TrendChart {
    pub fn grouping(timeframe: Timeframe) -> GroupBy {
        match timeframe {
            Timeframe::Daily => GroupBy::Day,
            Timeframe::Monthly => GroupBy::Month,
            Timeframe::Yearly => GroupBy::Year,
        }
    }

    pub fn generate(
        rows: &[Transaction],
        kind: TransactionKind,
        timeframe: Timeframe,
    ) -> BudgetResult<Self> {
        let series = group_by(rows, kind, Self::grouping(timeframe))?;
        Ok(Self {
            title: format!("{} Overview ({})", kind, timeframe),
            timeframe,
            series,
        })
    }

    /// Format the chart as horizontal bars
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        output.push_str(&self.title);
        output.push('\n');
        output.push_str(&"=".repeat(LABEL_WIDTH + BAR_WIDTH + 18));
        output.push('\n');

        let max = self.series.max_abs().as_f64();
        for point in &self.series.points {
            output.push_str(&format!(
                "{:<width$} {} {:>15}\n",
                truncate(&point.key.to_string(), LABEL_WIDTH),
                format_bar(point.total.abs().as_f64(), max, BAR_WIDTH),
                point.total.format_with_symbol(symbol),
                width = LABEL_WIDTH
            ));
        }
        output
    }
}

/// One pie slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownSlice {
    pub key: GroupKey,
    #[serde(serialize_with = "serialize_decimal")]
    pub total: Money,
    /// Share of the summed absolute totals, 0-100
    pub percentage: f64,
}

/// Pie-chart data for one kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownChart {
    pub title: String,
    pub timeframe: Timeframe,
    pub kind: TransactionKind,
    pub group_by: GroupBy,
    pub slices: Vec<BreakdownSlice>,
    #[serde(serialize_with = "serialize_decimal")]
    pub total: Money,
}

impl BreakdownChart {
    /// Daily and yearly views slice by category; the monthly view slices by month
    pub fn grouping(timeframe: Timeframe) -> GroupBy {
        match timeframe {
            Timeframe::Daily | Timeframe::Yearly => GroupBy::Category,
            Timeframe::Monthly => GroupBy::Month,
        }
    }

    pub fn generate(
        rows: &[Transaction],
        kind: TransactionKind,
        timeframe: Timeframe,
    ) -> BudgetResult<Self> {
        let series = group_by(rows, kind, Self::grouping(timeframe))?;

        let abs_total: i128 = series
            .points
            .iter()
            .map(|p| i128::from(p.total.abs().cents()))
            .sum();
        let slices = series
            .points
            .iter()
            .map(|p| BreakdownSlice {
                key: p.key.clone(),
                total: p.total,
                percentage: if abs_total == 0 {
                    0.0
                } else {
                    (p.total.abs().cents() as f64 / abs_total as f64) * 100.0
                },
            })
            .collect();

        Ok(Self {
            title: format!("{} Breakdown ({})", kind, timeframe),
            timeframe,
            kind,
            group_by: series.group_by,
            total: series.total()?,
            slices,
        })
    }

    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        output.push_str(&self.title);
        output.push('\n');
        output.push_str(&"=".repeat(LABEL_WIDTH + BAR_WIDTH + 26));
        output.push('\n');

        for slice in &self.slices {
            output.push_str(&format!(
                "{:<width$} {} {:>7} {:>15}\n",
                truncate(&slice.key.to_string(), LABEL_WIDTH),
                format_bar(slice.percentage, 100.0, BAR_WIDTH),
                format_percentage(slice.percentage),
                slice.total.format_with_symbol(symbol),
                width = LABEL_WIDTH
            ));
        }

        output.push_str(&"-".repeat(LABEL_WIDTH + BAR_WIDTH + 26));
        output.push('\n');
        output.push_str(&format!(
            "{:<width$} {:>w2$}\n",
            "Total",
            self.total.format_with_symbol(symbol),
            width = LABEL_WIDTH,
            w2 = BAR_WIDTH + 24
        ));
        output
    }
}
