//! Reports module for budget-tracker
//!
//! Pure aggregation over the transaction table: the monthly overview,
//! grouped series and the chart presets built on them.

pub mod charts;
pub mod series;
pub mod summary;

pub use charts::{BreakdownChart, BreakdownSlice, TrendChart};
pub use series::{group_by, Series, SeriesPoint};
pub use summary::{
    monthly_expense, monthly_income, monthly_total, total_balance, total_savings, OverviewReport,
};
