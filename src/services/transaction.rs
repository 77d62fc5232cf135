//! Transaction service
//!
//! Turns raw entry text into validated rows, appends them (with the mirrored
//! deduction for savings) and persists. Also serves filtered listings.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::storage::TransactionStore;

use super::CommandOutcome;

/// Raw input for a new transaction, as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEntry {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: String,
    /// `None` means today
    pub date: Option<String>,
}

impl TransactionEntry {
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: impl Into<String>,
        date: Option<String>,
    ) -> Self {
        Self {
            kind,
            category: category.into(),
            amount: amount.into(),
            date,
        }
    }

    /// Build an entry from a type name, mapping an unknown name to `InvalidType`
    pub fn from_text(
        kind: &str,
        category: impl Into<String>,
        amount: impl Into<String>,
        date: Option<String>,
    ) -> BudgetResult<Self> {
        let kind = kind.parse().map_err(BudgetError::InvalidType)?;
        Ok(Self::new(kind, category, amount, date))
    }
}

/// Options for filtering the listing
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Only rows of this kind
    pub kind: Option<TransactionKind>,
    /// Keep only the most recent N rows
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Parse amount text, rejecting anything that is not a plain decimal
pub fn parse_amount(text: &str) -> BudgetResult<Money> {
    Money::parse(text).map_err(|_| BudgetError::InvalidAmount(text.trim().to_string()))
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(text: &str) -> BudgetResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| BudgetError::InvalidDate(text.trim().to_string()))
}

/// Service for recording and listing transactions
pub struct TransactionService<'a> {
    store: &'a mut TransactionStore,
}

impl<'a> TransactionService<'a> {
    pub fn new(store: &'a mut TransactionStore) -> Self {
        Self { store }
    }

    /// Validate an entry into the row it describes
    ///
    /// Checks run amount, then date, then category; the first failure wins.
    pub fn validate(entry: &TransactionEntry, today: NaiveDate) -> BudgetResult<Transaction> {
        let amount = parse_amount(&entry.amount)?;
        let date = match entry.date.as_deref() {
            Some(text) => parse_date(text)?,
            None => today,
        };
        let category = entry.category.trim();
        if category.is_empty() {
            return Err(BudgetError::MissingCategory);
        }
        Ok(Transaction::new(entry.kind, category, amount, date))
    }

    /// Record a transaction
    ///
    /// A saving also appends an expense of the same amount and date, so the
    /// money leaves the spendable balance as it enters savings.
    pub fn add(&mut self, entry: &TransactionEntry, today: NaiveDate) -> BudgetResult<CommandOutcome> {
        let txn = Self::validate(entry, today)?;

        let mut appended = vec![txn.clone()];
        if txn.is_kind(TransactionKind::Saving) {
            if let Some(date) = txn.date {
                appended.push(Transaction::savings_deduction(txn.amount, date));
            }
        }

        self.store.commit(&appended)?;
        info!(
            kind = %txn.kind,
            category = %txn.category,
            amount = %txn.amount,
            rows = appended.len(),
            "transaction added"
        );

        Ok(CommandOutcome { appended })
    }

    /// Rows in insertion order, filtered
    pub fn list(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        let mut rows: Vec<Transaction> = self
            .store
            .rows()
            .iter()
            .filter(|t| filter.kind.map_or(true, |k| t.is_kind(k)))
            .cloned()
            .collect();

        if let Some(limit) = filter.limit {
            let skip = rows.len().saturating_sub(limit);
            rows.drain(..skip);
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SAVINGS_DEDUCTION;
    use crate::reports::{total_balance, total_savings};
    use std::fs;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_store() -> (TempDir, TransactionStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = TransactionStore::new(temp_dir.path().join("budget_data.csv"));
        (temp_dir, store)
    }

    fn entry(kind: TransactionKind, category: &str, amount: &str, date: &str) -> TransactionEntry {
        TransactionEntry::new(kind, category, amount, Some(date.to_string()))
    }

    #[test]
    fn test_add_income() {
        let (_temp_dir, mut store) = create_test_store();
        let today = date(2024, 5, 28);

        let outcome = TransactionService::new(&mut store)
            .add(&entry(TransactionKind::Income, "Salary", "1000", "2024-05-01"), today)
            .unwrap();

        assert_eq!(
            outcome.appended,
            vec![Transaction::income("Salary", Money::from_units(1000), date(2024, 5, 1))]
        );
        assert_eq!(store.len(), 1);
        assert_eq!(TransactionStore::open(store.path()).unwrap().len(), 1);
    }

    #[test]
    fn test_add_saving_appends_deduction() {
        let (_temp_dir, mut store) = create_test_store();
        let today = date(2024, 5, 28);
        let mut service = TransactionService::new(&mut store);

        service
            .add(&entry(TransactionKind::Income, "Salary", "1000", "2024-05-01"), today)
            .unwrap();
        let outcome = service
            .add(&entry(TransactionKind::Saving, "Emergency", "100", "2024-05-20"), today)
            .unwrap();

        assert_eq!(outcome.appended.len(), 2);
        assert_eq!(
            outcome.appended[1],
            Transaction::expense(SAVINGS_DEDUCTION, Money::from_units(100), date(2024, 5, 20))
        );

        let rows = store.rows();
        assert_eq!(total_savings(rows).unwrap(), Money::from_units(100));
        assert_eq!(total_balance(rows, 2024, 5).unwrap(), Money::from_units(900));
    }

    #[test]
    fn test_missing_date_defaults_to_today() {
        let (_temp_dir, mut store) = create_test_store();
        let today = date(2024, 7, 4);

        let outcome = TransactionService::new(&mut store)
            .add(&TransactionEntry::new(TransactionKind::Expense, "Food", "12.50", None), today)
            .unwrap();
        assert_eq!(outcome.appended[0].date, Some(today));
    }

    #[test]
    fn test_category_is_trimmed() {
        let txn = TransactionService::validate(
            &entry(TransactionKind::Expense, "  Food  ", "5", "2024-01-01"),
            date(2024, 1, 1),
        )
        .unwrap();
        assert_eq!(txn.category, "Food");
    }

    #[test]
    fn test_validation_order() {
        let today = date(2024, 1, 1);

        let err = TransactionService::validate(&entry(TransactionKind::Income, "", "abc", "nope"), today)
            .unwrap_err();
        assert!(matches!(err, BudgetError::InvalidAmount(_)));

        let err = TransactionService::validate(&entry(TransactionKind::Income, "", "10", "nope"), today)
            .unwrap_err();
        assert!(matches!(err, BudgetError::InvalidDate(_)));

        let err = TransactionService::validate(&entry(TransactionKind::Income, "  ", "10", "2024-01-01"), today)
            .unwrap_err();
        assert!(matches!(err, BudgetError::MissingCategory));
    }

    #[test]
    fn test_amounts_are_exact_and_bounded() {
        let (_temp_dir, mut store) = create_test_store();
        let today = date(2024, 5, 28);
        let mut service = TransactionService::new(&mut store);

        for text in ["0.999", "90000000000000000"] {
            let err = service
                .add(&entry(TransactionKind::Income, "Salary", text, "2024-05-01"), today)
                .unwrap_err();
            assert!(matches!(err, BudgetError::InvalidAmount(_)), "{}", text);
        }

        let outcome = service
            .add(&entry(TransactionKind::Income, "Bonus", "1.5e3", "2024-05-01"), today)
            .unwrap();
        assert_eq!(outcome.appended[0].amount, Money::from_units(1500));

        for _ in 0..2 {
            service
                .add(&entry(TransactionKind::Income, "Salary", "1000000000000", "2024-05-01"), today)
                .unwrap();
        }
        let report = crate::reports::OverviewReport::generate(store.rows(), today).unwrap();
        assert_eq!(report.income, Money::from_cents(200_000_000_000_150_000));
    }

    #[test]
    fn test_invalid_entry_leaves_store_untouched() {
        let (_temp_dir, mut store) = create_test_store();
        let result = TransactionService::new(&mut store)
            .add(&entry(TransactionKind::Income, "Salary", "ten", "2024-01-01"), date(2024, 1, 1));

        assert!(result.is_err());
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_from_text_rejects_unknown_type() {
        let err = TransactionEntry::from_text("Refund", "Shop", "5", None).unwrap_err();
        assert!(matches!(err, BudgetError::InvalidType(_)));

        let entry = TransactionEntry::from_text("savings", "Trip", "5", None).unwrap();
        assert_eq!(entry.kind, TransactionKind::Saving);
    }

    #[test]
    fn test_list_filters_and_limits() {
        let (_temp_dir, mut store) = create_test_store();
        fs::write(
            store.path(),
            "Type,Category,Amount,Date\n\
             Income,Salary,1000,2024-05-01\n\
             Expense,Food,20,2024-05-02\n\
             Expense,Rent,500,2024-05-03\n\
             Expense,Fuel,40,2024-05-04\n",
        )
        .unwrap();
        store.load().unwrap();
        let service = TransactionService::new(&mut store);

        assert_eq!(service.list(&TransactionFilter::new()).len(), 4);

        let expenses = service.list(&TransactionFilter::new().kind(TransactionKind::Expense));
        assert_eq!(expenses.len(), 3);

        let recent = service.list(&TransactionFilter::new().kind(TransactionKind::Expense).limit(2));
        let categories: Vec<&str> = recent.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(categories, vec!["Rent", "Fuel"]);
    }
}
