//! Savings transfers
//!
//! Moving money out of savings records it twice: as income, so it shows up
//! in the month's balance, and as a negative saving.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Transaction, SAVINGS_REDUCTION, SAVINGS_TRANSFER};
use crate::reports::total_savings;
use crate::storage::TransactionStore;

use super::transaction::parse_amount;
use super::CommandOutcome;

/// Service for moving savings back into the spendable balance
pub struct SavingsService<'a> {
    store: &'a mut TransactionStore,
}

impl<'a> SavingsService<'a> {
    pub fn new(store: &'a mut TransactionStore) -> Self {
        Self { store }
    }

    /// Transfer `amount` from lifetime savings, dated `today`
    ///
    /// The amount must be positive and no larger than current savings;
    /// otherwise nothing is appended.
    pub fn transfer(&mut self, amount: &str, today: NaiveDate) -> BudgetResult<CommandOutcome> {
        let amount = parse_amount(amount)?;
        if !amount.is_positive() {
            return Err(BudgetError::InvalidAmount(amount.to_decimal_string()));
        }

        let available = total_savings(self.store.rows())?;
        if amount > available {
            return Err(BudgetError::InsufficientSavings {
                requested: amount,
                available,
            });
        }

        let appended = vec![
            Transaction::income(SAVINGS_TRANSFER, amount, today),
            Transaction::saving(SAVINGS_REDUCTION, -amount, today),
        ];
        self.store.commit(&appended)?;
        info!(amount = %amount, remaining = %(available - amount), "savings transferred");

        Ok(CommandOutcome { appended })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::reports::monthly_income;
    use std::fs;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with_savings(units: i64) -> (TempDir, TransactionStore) {
        let temp_dir = TempDir::new().unwrap();
        let mut store = TransactionStore::new(temp_dir.path().join("budget_data.csv"));
        store
            .commit(&[
                Transaction::saving("Emergency", Money::from_units(units), date(2024, 1, 10)),
                Transaction::savings_deduction(Money::from_units(units), date(2024, 1, 10)),
            ])
            .unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_transfer_moves_savings_to_income() {
        let (_temp_dir, mut store) = store_with_savings(200);
        let today = date(2024, 5, 28);

        let outcome = SavingsService::new(&mut store).transfer("50", today).unwrap();
        assert_eq!(
            outcome.appended,
            vec![
                Transaction::income(SAVINGS_TRANSFER, Money::from_units(50), today),
                Transaction::saving(SAVINGS_REDUCTION, Money::from_units(-50), today),
            ]
        );

        assert_eq!(total_savings(store.rows()).unwrap(), Money::from_units(150));
        assert_eq!(monthly_income(store.rows(), 2024, 5).unwrap(), Money::from_units(50));
        assert_eq!(TransactionStore::open(store.path()).unwrap().len(), 4);
    }

    #[test]
    fn test_transfer_whole_balance() {
        let (_temp_dir, mut store) = store_with_savings(80);
        SavingsService::new(&mut store)
            .transfer("80.00", date(2024, 2, 1))
            .unwrap();
        assert!(total_savings(store.rows()).unwrap().is_zero());
    }

    #[test]
    fn test_insufficient_savings_leaves_table_and_file_unchanged() {
        let (_temp_dir, mut store) = store_with_savings(100);
        let before = fs::read_to_string(store.path()).unwrap();

        let err = SavingsService::new(&mut store)
            .transfer("100.01", date(2024, 5, 28))
            .unwrap_err();

        match err {
            BudgetError::InsufficientSavings {
                requested,
                available,
            } => {
                assert_eq!(requested, Money::from_cents(10001));
                assert_eq!(available, Money::from_units(100));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(store.len(), 2);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_transfer_rejects_non_positive_amounts() {
        let (_temp_dir, mut store) = store_with_savings(100);
        let mut service = SavingsService::new(&mut store);

        for bad in ["0", "-5", "abc", ""] {
            let err = service.transfer(bad, date(2024, 5, 28)).unwrap_err();
            assert!(matches!(err, BudgetError::InvalidAmount(_)), "{}", bad);
        }
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_transfer_from_empty_table() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = TransactionStore::new(temp_dir.path().join("budget_data.csv"));

        let err = SavingsService::new(&mut store)
            .transfer("1", date(2024, 5, 28))
            .unwrap_err();
        assert!(matches!(err, BudgetError::InsufficientSavings { .. }));
    }
}
