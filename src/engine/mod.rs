//! Ledger analytics engine
//!
//! The algorithmic core: pure, synchronous computations over a session's
//! already-fetched collections. Everything here is a function of its inputs;
//! updated goal balances are returned to the caller rather than written
//! anywhere.

pub mod history;
pub mod interval;
pub mod partition;
pub mod projector;
pub mod requests;
pub mod rules;
pub mod service;

pub use history::{aggregate, BalanceReport};
pub use interval::{boundaries, Interval, DEFAULT_BUCKET_COUNT};
pub use partition::{partition, PartitionedLedger};
pub use projector::{month_crossings, project, replay_goal_balances, Projection};
pub use requests::reconcile;
pub use service::AnalyticsService;
