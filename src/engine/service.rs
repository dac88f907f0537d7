//! Analytics service
//!
//! Request-level orchestration over a [`LedgerStore`]: fetches a session's
//! collections in the orderings the engine expects and runs the pure
//! algorithms over them. One instance serves one request; the engine holds no
//! state between invocations.

use chrono::{DateTime, Utc};

use crate::error::LedgerResult;
use crate::models::{PaymentRequest, SavingGoal, SessionId, Transaction};
use crate::store::LedgerStore;

use super::history::{aggregate, BalanceReport};
use super::interval::{boundaries, Interval};
use super::projector::replay_goal_balances;
use super::requests::reconcile;
use super::rules::categorize;

/// Service tying the ledger store to the analytics engine
pub struct AnalyticsService<'a, S: LedgerStore> {
    store: &'a S,
}

impl<'a, S: LedgerStore> AnalyticsService<'a, S> {
    /// Create a new analytics service over a store
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Bucketed balance history for a session: `count` buckets of `interval`
    /// width ending at `anchor`. The returned report carries the projected
    /// goal balances for the caller to persist.
    pub fn balance_history(
        &self,
        session: SessionId,
        interval: Interval,
        count: usize,
        anchor: DateTime<Utc>,
    ) -> LedgerResult<BalanceReport> {
        let transactions = self.store.transactions(session)?;
        let goals = self.store.saving_goals(session)?;
        let bounds = boundaries(anchor, interval, count);
        aggregate(&transactions, &goals, &bounds)
    }

    /// The session's saving goals with balances accumulated over the full
    /// ledger
    pub fn goal_balances(&self, session: SessionId) -> LedgerResult<Vec<SavingGoal>> {
        let goals = self.store.saving_goals(session)?;
        let transactions = self.store.transactions(session)?;
        Ok(replay_goal_balances(&goals, &transactions))
    }

    /// The session's payment requests annotated with matched deposits and
    /// filled flags
    pub fn payment_requests(&self, session: SessionId) -> LedgerResult<Vec<PaymentRequest>> {
        let requests = self.store.payment_requests(session)?;
        let transactions = self.store.transactions(session)?;
        Ok(reconcile(&requests, &transactions))
    }

    /// Auto-categorize a not-yet-persisted transaction against the session's
    /// rules; returns whether a category was assigned
    pub fn categorize(
        &self,
        session: SessionId,
        transaction: &mut Transaction,
    ) -> LedgerResult<bool> {
        let rules = self.store.category_rules(session)?;
        Ok(categorize(&rules, transaction))
    }
}
