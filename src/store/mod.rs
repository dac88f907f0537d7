//! Ledger store abstraction
//!
//! The engine never reaches for ambient global state; whatever supplies the
//! per-session collections is passed in explicitly through the
//! [`LedgerStore`] trait. The JSON-file implementation in [`json`] doubles as
//! the in-memory store for tests.

pub mod json;

pub use json::LedgerFile;

use crate::error::LedgerResult;
use crate::models::{
    Category, CategoryRule, PaymentRequest, SavingGoal, SessionId, Transaction,
};

/// Supplies a session's collections in the orderings the engine relies on
pub trait LedgerStore {
    /// The session's transactions, ascending by timestamp
    fn transactions(&self, session: SessionId) -> LedgerResult<Vec<Transaction>>;

    /// The session's categories
    fn categories(&self, session: SessionId) -> LedgerResult<Vec<Category>>;

    /// The session's category rules, descending by creation time (newest
    /// first, as the matcher expects)
    fn category_rules(&self, session: SessionId) -> LedgerResult<Vec<CategoryRule>>;

    /// The session's saving goals in contribution-priority order (creation
    /// order)
    fn saving_goals(&self, session: SessionId) -> LedgerResult<Vec<SavingGoal>>;

    /// The session's payment requests in creation order
    fn payment_requests(&self, session: SessionId) -> LedgerResult<Vec<PaymentRequest>>;
}
