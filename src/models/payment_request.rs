//! Payment request model
//!
//! A request for one or more incoming deposits of an exact amount. The
//! `filled` flag and matched transaction list are derived by reconciliation,
//! never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::RequestId;
use super::money::Money;
use super::transaction::Transaction;

/// An outstanding request for incoming payments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Unique identifier
    pub id: RequestId,

    /// What the request is for
    pub description: String,

    /// Deposits only qualify strictly after this instant
    #[serde(rename = "dueDate")]
    pub due_date: DateTime<Utc>,

    /// Each qualifying deposit must equal this amount exactly
    pub amount: Money,

    /// Number of matching deposits required to fill the request
    #[serde(rename = "numberOfRequests")]
    pub number_of_requests: usize,

    /// Derived: true once the match count reaches `number_of_requests`
    #[serde(default)]
    pub filled: bool,

    /// Derived: the deposits consumed by this request
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl PaymentRequest {
    /// Create a new, unfilled payment request
    pub fn new(
        description: impl Into<String>,
        due_date: DateTime<Utc>,
        amount: Money,
        number_of_requests: usize,
    ) -> Self {
        Self {
            id: RequestId::new(),
            description: description.into(),
            due_date,
            amount,
            number_of_requests,
            filled: false,
            transactions: Vec::new(),
        }
    }

    /// Reset the derived annotation fields before a reconciliation pass
    pub fn clear_matches(&mut self) {
        self.filled = false;
        self.transactions.clear();
    }

    /// Record a matched deposit, updating the filled flag
    pub fn consume(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
        if self.transactions.len() == self.number_of_requests {
            self.filled = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::TimeZone;

    #[test]
    fn test_filled_exactly_at_required_count() {
        let due = Utc.with_ymd_and_hms(2018, 4, 1, 0, 0, 0).unwrap();
        let mut request = PaymentRequest::new("Dinner", due, Money::from_minor(2500), 2);

        let deposit = Transaction::new(
            Utc.with_ymd_and_hms(2018, 4, 2, 0, 0, 0).unwrap(),
            Money::from_minor(2500),
            TransactionKind::Deposit,
            "NL39RABO0300065264",
        );

        request.consume(deposit.clone());
        assert!(!request.filled);

        request.consume(deposit);
        assert!(request.filled);
        assert_eq!(request.transactions.len(), 2);
    }
}
