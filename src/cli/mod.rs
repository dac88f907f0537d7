//! CLI command handlers
//!
//! Bridges clap argument parsing with the store and the analytics engine.

pub mod goal;
pub mod history;
pub mod request;
pub mod rule;
pub mod txn;

pub use goal::{handle_goal_command, GoalCommands};
pub use history::{handle_history_command, HistoryArgs};
pub use request::{handle_request_command, RequestCommands};
pub use rule::{handle_rule_command, RuleCommands};
pub use txn::{handle_txn_command, TransactionCommands};
