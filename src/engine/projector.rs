//! Saving-goal projector
//!
//! Simulates the monthly contribution sweeps that occur between two instants.
//! Every first-of-month crossed triggers one sweep over the goals in priority
//! order (list order): a goal receives its monthly contribution when the
//! account balance is above the goal's floor and the goal is not yet complete.
//! Contributions are capped so a goal never overshoots its target, and an
//! exhausted balance for one goal does not block later goals in the same
//! sweep.

use chrono::{DateTime, Datelike, Months, NaiveTime, Utc};

use crate::models::{Money, SavingGoal, Transaction};

/// The outcome of a projection: the new account balance plus the updated goal
/// values, for the caller to persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub balance: Money,
    pub goals: Vec<SavingGoal>,
}

/// The first first-of-month midnight strictly after `instant`
fn next_month_start(instant: DateTime<Utc>) -> DateTime<Utc> {
    let month_start = instant
        .date_naive()
        .with_day(1)
        .and_then(|d| d.and_time(NaiveTime::MIN).and_local_timezone(Utc).single())
        .unwrap_or(instant);
    month_start
        .checked_add_months(Months::new(1))
        .unwrap_or(instant)
}

/// Count the whole calendar-month boundaries crossed between `from` and `to`:
/// first-of-month instants strictly greater than `from` and ≤ `to`.
pub fn month_crossings(from: DateTime<Utc>, to: DateTime<Utc>) -> u32 {
    let mut crossings = 0;
    let mut cursor = next_month_start(from);
    while cursor <= to {
        crossings += 1;
        match cursor.checked_add_months(Months::new(1)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    crossings
}

/// One contribution sweep over the goals in priority order
fn sweep(goals: &mut [SavingGoal], mut balance: Money) -> Money {
    for goal in goals.iter_mut() {
        if balance <= goal.min_balance_required || goal.is_complete() {
            continue;
        }
        let contribution = goal.monthly_contribution();
        goal.balance += contribution;
        balance -= contribution;
    }
    balance
}

/// Apply every month-crossing between `from` and `to` to the goals in place,
/// returning the new account balance
pub(crate) fn project_in_place(
    goals: &mut [SavingGoal],
    mut balance: Money,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Money {
    for _ in 0..month_crossings(from, to) {
        balance = sweep(goals, balance);
    }
    balance
}

/// Project the contribution sweeps between `from` and `to`.
///
/// The inputs are untouched; the returned [`Projection`] carries the new
/// account balance and the updated goal values.
pub fn project(
    goals: &[SavingGoal],
    balance: Money,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Projection {
    let mut goals = goals.to_vec();
    let balance = project_in_place(&mut goals, balance, from, to);
    Projection { balance, goals }
}

/// Replay a full ledger to derive each goal's current balance.
///
/// The first transaction seeds the running balance; every subsequent
/// transaction is applied and then the span since the previous transaction is
/// projected. Used when listing goals with their accumulated balances.
pub fn replay_goal_balances(goals: &[SavingGoal], transactions: &[Transaction]) -> Vec<SavingGoal> {
    let mut goals = goals.to_vec();

    let Some((first, rest)) = transactions.split_first() else {
        return goals;
    };

    let mut balance = first.signed_amount();
    let mut system_time = first.timestamp;

    for transaction in rest {
        balance = transaction.apply_to(balance);
        balance = project_in_place(&mut goals, balance, system_time, transaction.timestamp);
        system_time = transaction.timestamp;
    }

    goals
}
