//! Overview totals
//!
//! Income and expense are scoped to one calendar month; the balance is
//! that month's income minus expense, not a lifetime net. Savings are
//! summed over the whole table regardless of date.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{BudgetError, BudgetResult};
use crate::models::money::serialize_decimal;
use crate::models::{Money, MonthPeriod, Transaction, TransactionKind};

/// Sum amounts, failing instead of wrapping when the total leaves the money range
pub fn sum_amounts<I: IntoIterator<Item = Money>>(amounts: I) -> BudgetResult<Money> {
    Money::checked_sum(amounts).ok_or(BudgetError::AmountOverflow)
}

/// Sum of `kind` amounts dated within the given calendar month
pub fn monthly_total(
    rows: &[Transaction],
    kind: TransactionKind,
    year: i32,
    month: u32,
) -> BudgetResult<Money> {
    sum_amounts(
        rows.iter()
            .filter(|t| t.is_kind(kind) && t.in_month(year, month))
            .map(|t| t.amount),
    )
}

pub fn monthly_income(rows: &[Transaction], year: i32, month: u32) -> BudgetResult<Money> {
    monthly_total(rows, TransactionKind::Income, year, month)
}

pub fn monthly_expense(rows: &[Transaction], year: i32, month: u32) -> BudgetResult<Money> {
    monthly_total(rows, TransactionKind::Expense, year, month)
}

/// Income minus expense for one month
pub fn total_balance(rows: &[Transaction], year: i32, month: u32) -> BudgetResult<Money> {
    monthly_income(rows, year, month)?
        .checked_sub(monthly_expense(rows, year, month)?)
        .ok_or(BudgetError::AmountOverflow)
}

/// Lifetime sum of Saving amounts, undated rows included
pub fn total_savings(rows: &[Transaction]) -> BudgetResult<Money> {
    sum_amounts(
        rows.iter()
            .filter(|t| t.is_kind(TransactionKind::Saving))
            .map(|t| t.amount),
    )
}

/// The four headline figures for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewReport {
    #[serde(serialize_with = "serialize_period")]
    pub period: MonthPeriod,
    #[serde(serialize_with = "serialize_decimal")]
    pub income: Money,
    #[serde(serialize_with = "serialize_decimal")]
    pub expense: Money,
    #[serde(serialize_with = "serialize_decimal")]
    pub balance: Money,
    #[serde(serialize_with = "serialize_decimal")]
    pub savings: Money,
}

fn serialize_period<S: serde::Serializer>(period: &MonthPeriod, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(period)
}

impl OverviewReport {
    /// Totals for the month containing `today`
    pub fn generate(rows: &[Transaction], today: NaiveDate) -> BudgetResult<Self> {
        Self::for_period(rows, MonthPeriod::of(today))
    }

    pub fn for_period(rows: &[Transaction], period: MonthPeriod) -> BudgetResult<Self> {
        Ok(Self {
            period,
            income: monthly_income(rows, period.year, period.month)?,
            expense: monthly_expense(rows, period.year, period.month)?,
            balance: total_balance(rows, period.year, period.month)?,
            savings: total_savings(rows)?,
        })
    }

    /// The labelled totals, formatted with `symbol`
    pub fn lines(&self, symbol: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Total Balance", self.balance.format_with_symbol(symbol)),
            ("Total Monthly Income", self.income.format_with_symbol(symbol)),
            ("Total Monthly Expenses", self.expense.format_with_symbol(symbol)),
            ("Total Savings", self.savings.format_with_symbol(symbol)),
        ]
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("Overview: {}\n", self.period));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        for (label, value) in self.lines(symbol) {
            output.push_str(&format!("{:<24} {:>15}\n", format!("{}:", label), value));
        }
        output
    }
}
