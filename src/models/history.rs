//! Balance-history bucket model
//!
//! One reporting interval of the balance-history output. Produced by the
//! aggregator, never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Open/high/low/close balance statistics for one bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceHistoryBucket {
    /// Absolute balance before the bucket's first transaction
    pub open: Money,

    /// Absolute balance after the bucket's last transaction
    pub close: Money,

    /// Running maximum of the absolute balance within the bucket
    pub high: Money,

    /// Running minimum of the absolute balance within the bucket
    pub low: Money,

    /// Sum of absolute transaction amounts in the bucket
    pub volume: Money,

    /// The bucket's end boundary
    pub timestamp: DateTime<Utc>,
}

impl BalanceHistoryBucket {
    /// An empty bucket: the balance held flat at `close` with no activity
    pub fn flat(close: Money, timestamp: DateTime<Utc>) -> Self {
        Self {
            open: close,
            close,
            high: close,
            low: close,
            volume: Money::zero(),
            timestamp,
        }
    }
}
