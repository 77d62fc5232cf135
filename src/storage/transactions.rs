//! Transaction store backed by a CSV file
//!
//! The whole table is held in memory and the whole file is rewritten on
//! every persist. The store assumes it is the only writer of its file for
//! the lifetime of the process: there is no locking, so two processes
//! sharing a file will lose each other's appends.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::BudgetError;
use crate::models::{parse_calendar_date, Money, Transaction, TransactionKind};

use super::file_io::{read_csv, write_csv};

/// Fixed header row of the data file
pub const HEADER: [&str; 4] = ["Type", "Category", "Amount", "Date"];

/// One row of the data file as text
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TransactionRecord {
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Date", default)]
    date: String,
}

impl From<&Transaction> for TransactionRecord {
    fn from(txn: &Transaction) -> Self {
        Self {
            kind: txn.kind.to_string(),
            category: txn.category.clone(),
            amount: txn.amount.to_decimal_string(),
            date: txn
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}

/// In-memory transaction table with whole-file persistence
#[derive(Debug)]
pub struct TransactionStore {
    path: PathBuf,
    rows: Vec<Transaction>,
}

impl TransactionStore {
    /// Create an empty store for the given file without touching disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rows: Vec::new(),
        }
    }

    /// Create a store and load whatever the file holds
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, BudgetError> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory table with the file's contents
    ///
    /// A missing file is a first run and yields an empty table. Rows whose
    /// date cannot be parsed are kept with no date.
    pub fn load(&mut self) -> Result<(), BudgetError> {
        let lines = read_csv::<TransactionRecord, _>(&self.path)?;
        let mut rows = Vec::with_capacity(lines.len());

        for line in lines {
            let record = line.record;
            let kind: TransactionKind = record.kind.parse().map_err(|kind| {
                BudgetError::Storage(format!(
                    "{} line {}: unknown transaction type '{}'",
                    self.path.display(),
                    line.line,
                    kind
                ))
            })?;
            let amount = Money::parse(&record.amount).map_err(|e| {
                BudgetError::Storage(format!(
                    "{} line {}: {}",
                    self.path.display(),
                    line.line,
                    e
                ))
            })?;
            let date = parse_calendar_date(&record.date);
            if date.is_none() {
                warn!(line = line.line, date = %record.date, "unparseable date, row kept undated");
            }

            rows.push(Transaction {
                kind,
                category: record.category,
                amount,
                date,
            });
        }

        debug!(path = %self.path.display(), rows = rows.len(), "loaded transactions");
        self.rows = rows;
        Ok(())
    }

    /// Add one row to the in-memory table
    pub fn append(&mut self, txn: Transaction) {
        self.rows.push(txn);
    }

    /// Append rows and persist them as one change
    ///
    /// If the write fails the appended rows are dropped again, so the
    /// in-memory table never runs ahead of the file.
    pub fn commit(&mut self, txns: &[Transaction]) -> Result<(), BudgetError> {
        let previous_len = self.rows.len();
        self.rows.extend_from_slice(txns);
        if let Err(e) = self.persist() {
            self.rows.truncate(previous_len);
            return Err(e);
        }
        Ok(())
    }

    /// Write the full table back to disk, overwriting prior content
    pub fn persist(&self) -> Result<(), BudgetError> {
        let records: Vec<TransactionRecord> = self.rows.iter().map(Into::into).collect();
        write_csv(&self.path, &HEADER, &records)?;
        debug!(path = %self.path.display(), rows = records.len(), "persisted transactions");
        Ok(())
    }

    /// All rows in insertion order
    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
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

    #[test]
    fn test_missing_file_is_first_run() {
        let (_temp_dir, mut store) = create_test_store();
        store.load().unwrap();
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_append_persist_load_round_trip() {
        let (_temp_dir, mut store) = create_test_store();

        store.append(Transaction::income("Salary", Money::from_units(1000), date(2024, 5, 1)));
        store.append(Transaction::expense("Food, Drinks", Money::from_cents(2050), date(2024, 5, 15)));
        store.append(Transaction::saving("Emergency", Money::from_cents(-1000), date(2024, 5, 20)));
        store.persist().unwrap();

        let reloaded = TransactionStore::open(store.path()).unwrap();
        assert_eq!(reloaded.rows(), store.rows());
    }

    #[test]
    fn test_persisted_format() {
        let (_temp_dir, mut store) = create_test_store();
        store.append(Transaction::expense("Rent", Money::from_units(500), date(2024, 6, 1)));
        store.persist().unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "Type,Category,Amount,Date\nExpense,Rent,500.00,2024-06-01\n");
    }

    #[test]
    fn test_empty_table_persists_header_only() {
        let (_temp_dir, store) = create_test_store();
        store.persist().unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "Type,Category,Amount,Date\n");
    }

    #[test]
    fn test_unparseable_date_becomes_undated() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            "Type,Category,Amount,Date\n\
             Income,Salary,1000.0,2024-05-01 00:00:00\n\
             Expense,Food,20,not-a-date\n\
             Saving,Emergency,5,\n",
        )
        .unwrap();

        let store = TransactionStore::open(store.path()).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.rows()[0].date, Some(date(2024, 5, 1)));
        assert_eq!(store.rows()[0].amount, Money::from_units(1000));
        assert_eq!(store.rows()[1].date, None);
        assert_eq!(store.rows()[2].date, None);
    }

    #[test]
    fn test_undated_rows_persist_with_empty_date() {
        let (_temp_dir, mut store) = create_test_store();
        store.append(Transaction {
            kind: TransactionKind::Expense,
            category: "Food".into(),
            amount: Money::from_units(20),
            date: None,
        });
        store.persist().unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "Type,Category,Amount,Date\nExpense,Food,20.00,\n");

        let reloaded = TransactionStore::open(store.path()).unwrap();
        assert_eq!(reloaded.rows(), store.rows());
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            "Date,Amount,Category,Type\n2024-05-01,12.5,Lunch,Expense\n",
        )
        .unwrap();

        let store = TransactionStore::open(store.path()).unwrap();
        assert_eq!(
            store.rows(),
            &[Transaction::expense("Lunch", Money::from_cents(1250), date(2024, 5, 1))]
        );
    }

    #[test]
    fn test_unknown_type_is_storage_error() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            "Type,Category,Amount,Date\nIncome,Salary,10,2024-05-01\nRefund,Shop,5,2024-05-02\n",
        )
        .unwrap();

        let err = TransactionStore::open(store.path()).unwrap_err();
        assert!(matches!(err, BudgetError::Storage(_)));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_bad_amount_is_storage_error() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            "Type,Category,Amount,Date\nIncome,Salary,lots,2024-05-01\n",
        )
        .unwrap();

        let err = TransactionStore::open(store.path()).unwrap_err();
        assert!(matches!(err, BudgetError::Storage(_)));
    }

    #[test]
    fn test_commit_appends_and_persists() {
        let (_temp_dir, mut store) = create_test_store();
        store
            .commit(&[
                Transaction::saving("Emergency", Money::from_units(100), date(2024, 5, 20)),
                Transaction::savings_deduction(Money::from_units(100), date(2024, 5, 20)),
            ])
            .unwrap();

        assert_eq!(store.len(), 2);
        let reloaded = TransactionStore::open(store.path()).unwrap();
        assert_eq!(reloaded.rows(), store.rows());
    }

    #[test]
    fn test_failed_commit_leaves_table_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should be makes the rename fail
        let path = temp_dir.path().join("budget_data.csv");
        fs::create_dir_all(path.join("occupied")).unwrap();

        let mut store = TransactionStore::new(&path);
        let result = store.commit(&[Transaction::income("Salary", Money::from_units(1), date(2024, 1, 1))]);

        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_out_of_range_amount_is_storage_error() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            "Type,Category,Amount,Date\nIncome,Salary,90000000000000000,2024-05-01\n",
        )
        .unwrap();

        let err = TransactionStore::open(store.path()).unwrap_err();
        assert!(matches!(err, BudgetError::Storage(_)));
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_persist_overwrites_previous_content() {
        let (_temp_dir, mut store) = create_test_store();
        fs::write(store.path(), "garbage that is not csv\n").unwrap();

        store.append(Transaction::income("Gift", Money::from_units(50), date(2024, 1, 2)));
        store.persist().unwrap();

        let reloaded = TransactionStore::open(store.path()).unwrap();
        assert_eq!(reloaded.len(), 1);
    }
}
