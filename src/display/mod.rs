//! Display formatting for terminal output
//!
//! Listing tables and the small text helpers the chart renderings share.

pub mod report;
pub mod transaction;

pub use report::{format_bar, format_percentage, truncate};
pub use transaction::{
    format_date, format_listing_amount, format_outcome, format_transaction_table, listing_rows,
    TransactionListing,
};
