//! Core data models for budget-tracker
//!
//! Transactions, the money amount they carry, and the calendar periods and
//! grouping keys used by the aggregator.

pub mod money;
pub mod period;
pub mod transaction;

pub use money::{Money, MoneyParseError, MAX_UNITS};
pub use period::{
    parse_calendar_date, GroupBy, GroupKey, MonthPeriod, PeriodParseError, Timeframe,
};
pub use transaction::{
    Transaction, TransactionKind, SAVINGS_DEDUCTION, SAVINGS_REDUCTION, SAVINGS_TRANSFER,
};
