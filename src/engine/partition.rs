//! Ledger partitioner
//!
//! Splits a time-ordered transaction ledger into per-bucket slices using the
//! boundaries produced by the time bucketer. Because the input is sorted,
//! every group is a contiguous slice and a single forward sweep suffices.

use chrono::{DateTime, Utc};

use crate::models::Transaction;

/// A sorted ledger split along bucket boundaries
#[derive(Debug)]
pub struct PartitionedLedger<'a> {
    /// Transactions before the first boundary; they seed the initial balance
    /// and are not part of any reported bucket
    pub priming: &'a [Transaction],

    /// One slice per bucket, in chronological order; bucket `i` holds the
    /// transactions with `boundary[i] ≤ timestamp < boundary[i+1]`
    pub buckets: Vec<&'a [Transaction]>,
}

impl<'a> PartitionedLedger<'a> {
    /// Total number of transactions assigned to priming region and buckets
    pub fn assigned_len(&self) -> usize {
        self.priming.len() + self.buckets.iter().map(|b| b.len()).sum::<usize>()
    }

    /// Whether any reported bucket contains a transaction
    pub fn has_bucket_activity(&self) -> bool {
        self.buckets.iter().any(|b| !b.is_empty())
    }
}

/// Partition an ascending-by-timestamp ledger along `boundaries`.
///
/// Each transaction is assigned to exactly one group; transactions at or
/// after the final boundary are dropped. The sweep never re-scans consumed
/// transactions, so this is O(n + boundaries).
pub fn partition<'a>(
    transactions: &'a [Transaction],
    boundaries: &[DateTime<Utc>],
) -> PartitionedLedger<'a> {
    let mut groups = Vec::with_capacity(boundaries.len());
    let mut cursor = 0;

    for boundary in boundaries {
        let start = cursor;
        while cursor < transactions.len() && transactions[cursor].timestamp < *boundary {
            cursor += 1;
        }
        groups.push(&transactions[start..cursor]);
    }

    let priming = groups.first().copied().unwrap_or(&[]);
    let buckets = if groups.is_empty() {
        Vec::new()
    } else {
        groups.split_off(1)
    };

    PartitionedLedger { priming, buckets }
}
