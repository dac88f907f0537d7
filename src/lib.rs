//! ledgerscope - Ledger analytics for a personal-finance backend
//!
//! This library turns a session's time-ordered transaction ledger into
//! derived analytics: bucketed balance-history statistics, simulated monthly
//! saving-goal contributions, wildcard rule-based categorization, and
//! greedy reconciliation of deposits against outstanding payment requests.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, rules, goals, requests)
//! - `engine`: The pure analytics algorithms and the request-level service
//! - `store`: The `LedgerStore` trait and the JSON-file implementation
//! - `display`: Terminal formatting for engine results
//! - `cli`: Command handlers for the binary
//!
//! The engine is synchronous and stateless: it consumes already-fetched,
//! ordered collections and returns values (including updated saving-goal
//! balances) for the caller to persist.

pub mod cli;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;

pub use error::{LedgerError, LedgerResult};
