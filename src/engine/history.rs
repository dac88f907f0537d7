//! Balance-history aggregator
//!
//! Walks the partitioned ledger bucket by bucket, invoking the saving-goal
//! projector between consecutive transactions, and reports open/high/low/
//! close/volume statistics per bucket. The priming region (everything before
//! the first boundary) seeds the balance baseline without projection.

use chrono::{DateTime, Utc};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BalanceHistoryBucket, Money, SavingGoal, Transaction};

use super::partition::partition;
use super::projector::project_in_place;

/// Aggregation output: the per-bucket statistics plus the goal values after
/// all projected contributions, for the caller to persist
#[derive(Debug, Clone)]
pub struct BalanceReport {
    pub buckets: Vec<BalanceHistoryBucket>,
    pub goals: Vec<SavingGoal>,
}

/// Aggregate a sorted ledger into one balance-history bucket per boundary
/// span.
///
/// `boundaries` must be ascending (as produced by
/// [`super::interval::boundaries`]); `transactions` must be ascending by
/// timestamp. Returns [`LedgerError::EmptyLedger`] when the buckets contain
/// transactions but the priming region is empty, since no baseline can be
/// established for the reported balances.
pub fn aggregate(
    transactions: &[Transaction],
    goals: &[SavingGoal],
    boundaries: &[DateTime<Utc>],
) -> LedgerResult<BalanceReport> {
    let parts = partition(transactions, boundaries);

    if parts.priming.is_empty() && parts.has_bucket_activity() {
        return Err(LedgerError::EmptyLedger);
    }

    // The priming region establishes the baseline as a plain signed sum.
    let mut balance = Money::zero();
    for transaction in parts.priming {
        balance = transaction.apply_to(balance);
    }
    let mut system_time = parts.priming.last().map(|t| t.timestamp);

    let mut goals = goals.to_vec();
    let mut buckets = Vec::with_capacity(parts.buckets.len());

    for (index, bucket) in parts.buckets.iter().enumerate() {
        let mut open = balance.abs();
        let mut high = open;
        let mut low = open;
        let mut volume = Money::zero();

        for (position, transaction) in bucket.iter().enumerate() {
            if let Some(previous) = system_time {
                balance = project_in_place(&mut goals, balance, previous, transaction.timestamp);
            }

            // Contributions swept in before the bucket's first transaction
            // belong to this bucket's opening balance.
            if position == 0 {
                open = balance.abs();
                high = open;
                low = open;
            }

            balance = transaction.apply_to(balance);
            high = high.max(balance.abs());
            low = low.min(balance.abs());
            volume += transaction.amount.abs();
            system_time = Some(transaction.timestamp);
        }

        buckets.push(BalanceHistoryBucket {
            open,
            close: balance.abs(),
            high,
            low,
            volume,
            timestamp: boundaries[index + 1],
        });
    }

    Ok(BalanceReport { buckets, goals })
}
