//! Transaction model
//!
//! A ledger entry: a timestamped, unsigned amount plus a direction that
//! determines its sign when applied to a balance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Direction of a transaction relative to the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money flowing into the account
    Deposit,
    /// Money flowing out of the account
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "deposit"),
            Self::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

/// A financial transaction in a session's ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier; absent for transactions not yet persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TransactionId>,

    /// When the transaction occurred
    pub timestamp: DateTime<Utc>,

    /// Unsigned amount; `kind` determines the sign
    pub amount: Money,

    /// Direction of the transaction
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Counterparty account identifier
    #[serde(rename = "externalIBAN")]
    pub external_iban: String,

    /// Assigned category, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,

    /// Free-text description
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a new, not-yet-persisted transaction
    pub fn new(
        timestamp: DateTime<Utc>,
        amount: Money,
        kind: TransactionKind,
        external_iban: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            timestamp,
            amount,
            kind,
            external_iban: external_iban.into(),
            category: None,
            description: String::new(),
        }
    }

    /// Set the free-text description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    /// Check whether this transaction is a deposit
    pub fn is_deposit(&self) -> bool {
        self.kind == TransactionKind::Deposit
    }

    /// The amount with its direction applied (positive for deposits,
    /// negative for withdrawals)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Deposit => self.amount,
            TransactionKind::Withdrawal => -self.amount,
        }
    }

    /// Apply this transaction to a running balance
    pub fn apply_to(&self, balance: Money) -> Money {
        balance + self.signed_amount()
    }

    /// Validate the transaction's invariants
    pub fn validate(&self) -> Result<(), String> {
        if self.amount.is_negative() {
            return Err("transaction amount must be non-negative".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_signed_amount() {
        let deposit = Transaction::new(
            at(2018, 4, 1),
            Money::from_minor(500),
            TransactionKind::Deposit,
            "NL39RABO0300065264",
        );
        let withdrawal = Transaction::new(
            at(2018, 4, 2),
            Money::from_minor(500),
            TransactionKind::Withdrawal,
            "NL39RABO0300065264",
        );

        assert_eq!(deposit.signed_amount(), Money::from_minor(500));
        assert_eq!(withdrawal.signed_amount(), Money::from_minor(-500));
    }

    #[test]
    fn test_apply_to_balance() {
        let tx = Transaction::new(
            at(2018, 4, 1),
            Money::from_minor(250),
            TransactionKind::Withdrawal,
            "NL39RABO0300065264",
        );
        assert_eq!(tx.apply_to(Money::from_minor(100)), Money::from_minor(-150));
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Deposit).unwrap();
        assert_eq!(json, "\"deposit\"");
    }

    #[test]
    fn test_negative_amount_rejected() {
        let tx = Transaction::new(
            at(2018, 4, 1),
            Money::from_minor(-1),
            TransactionKind::Deposit,
            "NL39RABO0300065264",
        );
        assert!(tx.validate().is_err());
    }
}
