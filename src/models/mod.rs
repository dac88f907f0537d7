//! Core data models
//!
//! Typed records for the ledger entities consumed and produced by the
//! analytics engine.

pub mod category;
pub mod history;
pub mod ids;
pub mod money;
pub mod payment_request;
pub mod rule;
pub mod saving_goal;
pub mod transaction;

pub use category::Category;
pub use history::BalanceHistoryBucket;
pub use ids::{CategoryId, GoalId, RequestId, RuleId, SessionId, TransactionId};
pub use money::Money;
pub use payment_request::PaymentRequest;
pub use rule::{CategoryRule, RuleDraft};
pub use saving_goal::{GoalDraft, SavingGoal};
pub use transaction::{Transaction, TransactionKind};
