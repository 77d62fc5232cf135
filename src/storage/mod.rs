//! Storage layer for budget-tracker
//!
//! A single CSV file with a fixed `Type,Category,Amount,Date` header holds
//! every transaction. It is read once at startup and rewritten in full
//! after each mutation.

pub mod file_io;
pub mod transactions;

pub use file_io::{read_csv, write_csv, CsvLine};
pub use transactions::{TransactionStore, HEADER};
