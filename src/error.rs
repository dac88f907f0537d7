//! Custom error types for ledgerscope
//!
//! This module defines the error hierarchy for the engine and its thin I/O
//! layers using thiserror for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledgerscope operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The requested bucketing unit is not one of hour/day/week/month/year
    #[error("Invalid interval unit: {0}")]
    InvalidInterval(String),

    /// A category rule is missing one of its required fields
    #[error("Malformed category rule: {0}")]
    MalformedRule(String),

    /// A saving goal is missing a required amount or violates an invariant
    #[error("Malformed saving goal: {0}")]
    MalformedGoal(String),

    /// No transactions exist before the first bucket boundary, so no balance
    /// baseline can be established for the requested history
    #[error("No transactions available to establish a balance baseline")]
    EmptyLedger,

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors (ledger file could not be read or written)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for category rules
    pub fn rule_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category rule",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is the recoverable "no data" result of aggregation
    pub fn is_empty_ledger(&self) -> bool {
        matches!(self, Self::EmptyLedger)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledgerscope operations
pub type LedgerResult<T> = Result<T, LedgerError>;
