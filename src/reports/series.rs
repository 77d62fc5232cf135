//! Grouped sums for charting
//!
//! `group_by` buckets one kind of transaction by day, month, year or
//! category and sums each bucket. Points come back sorted by key.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{BudgetError, BudgetResult};
use crate::models::money::serialize_decimal;
use crate::models::{GroupBy, GroupKey, Money, Transaction, TransactionKind};

use super::summary::sum_amounts;

/// One bucket of a series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub key: GroupKey,
    #[serde(serialize_with = "serialize_decimal")]
    pub total: Money,
}

/// Summed amounts of one kind, keyed and ordered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    pub kind: TransactionKind,
    pub group_by: GroupBy,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    pub fn get(&self, key: &GroupKey) -> Option<Money> {
        self.points.iter().find(|p| &p.key == key).map(|p| p.total)
    }

    pub fn total(&self) -> BudgetResult<Money> {
        sum_amounts(self.points.iter().map(|p| p.total))
    }

    /// Largest absolute bucket, for scaling bars
    pub fn max_abs(&self) -> Money {
        self.points
            .iter()
            .map(|p| p.total.abs())
            .max()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Sum `kind` amounts per key
///
/// Returns `NoData` for an empty table, checked before any grouping, and
/// also when no row of `kind` yields a key (undated rows have no date key).
pub fn group_by(rows: &[Transaction], kind: TransactionKind, by: GroupBy) -> BudgetResult<Series> {
    if rows.is_empty() {
        return Err(BudgetError::NoData);
    }

    let mut buckets: BTreeMap<GroupKey, Money> = BTreeMap::new();
    for txn in rows.iter().filter(|t| t.is_kind(kind)) {
        if let Some(key) = by.key_for(txn) {
            let bucket = buckets.entry(key).or_default();
            *bucket = bucket
                .checked_add(txn.amount)
                .ok_or(BudgetError::AmountOverflow)?;
        }
    }

    if buckets.is_empty() {
        return Err(BudgetError::NoData);
    }

    Ok(Series {
        kind,
        group_by: by,
        points: buckets
            .into_iter()
            .map(|(key, total)| SeriesPoint { key, total })
            .collect(),
    })
}
