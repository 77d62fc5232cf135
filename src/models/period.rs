//! Calendar periods and grouping keys
//!
//! A `MonthPeriod` scopes the overview totals; a `GroupBy` selects how rows
//! are bucketed for chart series and produces an ordered `GroupKey`.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::transaction::Transaction;

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a calendar date from `YYYY-MM-DD`, or from a timestamp whose time is dropped
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// A calendar month (e.g., "2024-05")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthPeriod {
    pub year: i32,
    pub month: u32,
}

impl MonthPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Get the current month from the local clock
    pub fn current() -> Self {
        Self::of(chrono::Local::now().date_naive())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Parse "YYYY-MM"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        Self::new(year, month)
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthPeriod {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Timeframe picked for a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Daily,
    #[default]
    Monthly,
    Yearly,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Self::Daily, Self::Monthly, Self::Yearly];
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "Daily"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "monthly" | "month" => Ok(Self::Monthly),
            "yearly" | "year" => Ok(Self::Yearly),
            _ => Err(format!("unknown timeframe '{}', use daily, monthly or yearly", s)),
        }
    }
}

/// How rows are bucketed for a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    Day,
    Month,
    Year,
    Category,
}

impl GroupBy {
    /// Whether the key is derived from the row's date
    pub fn is_date_based(&self) -> bool {
        !matches!(self, Self::Category)
    }

    /// Key for a row, or `None` when a date-based key meets an undated row
    pub fn key_for(&self, txn: &Transaction) -> Option<GroupKey> {
        match self {
            Self::Day => txn.date.map(GroupKey::Day),
            Self::Month => txn.date.map(|d| GroupKey::Month(MonthPeriod::of(d))),
            Self::Year => txn.date.map(|d| GroupKey::Year(d.year())),
            Self::Category => Some(GroupKey::Category(txn.category.clone())),
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
            Self::Category => write!(f, "category"),
        }
    }
}

/// A bucket label. Date-based keys order chronologically, categories lexically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    Day(NaiveDate),
    Month(MonthPeriod),
    Year(i32),
    Category(String),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Month(period) => write!(f, "{}", period),
            Self::Year(year) => write!(f, "{}", year),
            Self::Category(name) => f.write_str(name),
        }
    }
}

impl Serialize for GroupKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format: {} (expected YYYY-MM)", s)
            }
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_calendar_date() {
        assert_eq!(parse_calendar_date("2024-05-01"), Some(date(2024, 5, 1)));
        assert_eq!(parse_calendar_date(" 2024-05-01 "), Some(date(2024, 5, 1)));
        assert_eq!(
            parse_calendar_date("2024-05-01 13:45:10.123456"),
            Some(date(2024, 5, 1))
        );
        assert_eq!(parse_calendar_date("2024-05-01T08:00:00"), Some(date(2024, 5, 1)));
        assert_eq!(parse_calendar_date("2024-02-30"), None);
        assert_eq!(parse_calendar_date("05/01/2024"), None);
        assert_eq!(parse_calendar_date(""), None);
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(MonthPeriod::parse("2025-01").unwrap(), MonthPeriod { year: 2025, month: 1 });
        assert_eq!(
            MonthPeriod::parse("2025-13"),
            Err(PeriodParseError::InvalidMonth(13))
        );
        assert!(MonthPeriod::parse("2025").is_err());
        assert!(MonthPeriod::parse("May 2025").is_err());
    }

    #[test]
    fn test_month_display_and_contains() {
        let may = MonthPeriod::of(date(2024, 5, 17));
        assert_eq!(may.to_string(), "2024-05");
        assert!(may.contains(date(2024, 5, 1)));
        assert!(may.contains(date(2024, 5, 31)));
        assert!(!may.contains(date(2024, 6, 1)));
        assert!(!may.contains(date(2023, 5, 15)));
    }

    #[test]
    fn test_month_ordering() {
        let mut months = vec![
            MonthPeriod::of(date(2024, 2, 1)),
            MonthPeriod::of(date(2023, 12, 1)),
            MonthPeriod::of(date(2024, 1, 1)),
        ];
        months.sort();
        let labels: Vec<String> = months.iter().map(|m| m.to_string()).collect();
        assert_eq!(labels, vec!["2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn test_timeframe_parse() {
        assert_eq!("Daily".parse::<Timeframe>(), Ok(Timeframe::Daily));
        assert_eq!("month".parse::<Timeframe>(), Ok(Timeframe::Monthly));
        assert!("weekly".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_key_for() {
        let txn = Transaction::expense("Food", Money::from_units(5), date(2024, 5, 15));
        assert_eq!(GroupBy::Day.key_for(&txn), Some(GroupKey::Day(date(2024, 5, 15))));
        assert_eq!(GroupBy::Year.key_for(&txn), Some(GroupKey::Year(2024)));
        assert_eq!(
            GroupBy::Category.key_for(&txn),
            Some(GroupKey::Category("Food".into()))
        );

        let undated = Transaction {
            kind: TransactionKind::Expense,
            category: "Food".into(),
            amount: Money::from_units(5),
            date: None,
        };
        assert_eq!(GroupBy::Month.key_for(&undated), None);
        assert!(GroupBy::Category.key_for(&undated).is_some());
    }

    #[test]
    fn test_group_key_serializes_as_label() {
        let key = GroupKey::Month(MonthPeriod { year: 2024, month: 3 });
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2024-03\"");
    }
}
