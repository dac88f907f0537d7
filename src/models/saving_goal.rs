//! Saving goal model
//!
//! A goal accumulates a fixed monthly contribution out of the account balance
//! until its target is reached. Goals are prioritized by their position in the
//! session's goal list.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

use super::ids::GoalId;
use super::money::Money;

/// A saving goal funded by monthly contribution sweeps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingGoal {
    /// Unique identifier
    pub id: GoalId,

    /// Goal name
    pub name: String,

    /// Target amount to save toward
    pub goal: Money,

    /// Contribution swept into the goal per month-crossing
    #[serde(rename = "savePerMonth")]
    pub save_per_month: Money,

    /// The account balance must exceed this floor for a contribution to occur
    #[serde(rename = "minBalanceRequired")]
    pub min_balance_required: Money,

    /// Amount saved so far; starts at zero, never exceeds `goal`
    #[serde(default)]
    pub balance: Money,
}

impl SavingGoal {
    /// Create a new saving goal with a zero balance
    pub fn new(
        name: impl Into<String>,
        goal: Money,
        save_per_month: Money,
        min_balance_required: Money,
    ) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            goal,
            save_per_month,
            min_balance_required,
            balance: Money::zero(),
        }
    }

    /// Check whether the goal has reached its target
    pub fn is_complete(&self) -> bool {
        self.balance >= self.goal
    }

    /// The amount still needed to reach the target
    pub fn remaining(&self) -> Money {
        if self.is_complete() {
            Money::zero()
        } else {
            self.goal - self.balance
        }
    }

    /// The contribution for one month-crossing: the monthly amount, capped so
    /// the balance never overshoots the target.
    pub fn monthly_contribution(&self) -> Money {
        self.save_per_month.min(self.remaining())
    }
}

/// Incoming saving goal with every field optional, as received off the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoalDraft {
    pub name: Option<String>,
    pub goal: Option<Money>,
    #[serde(rename = "savePerMonth")]
    pub save_per_month: Option<Money>,
    #[serde(rename = "minBalanceRequired")]
    pub min_balance_required: Option<Money>,
}

impl GoalDraft {
    /// Validate the draft into a well-formed goal
    pub fn build(self) -> LedgerResult<SavingGoal> {
        let name = self
            .name
            .ok_or_else(|| LedgerError::MalformedGoal("name is required".into()))?;
        let goal = self
            .goal
            .ok_or_else(|| LedgerError::MalformedGoal("goal is required".into()))?;
        let save_per_month = self
            .save_per_month
            .ok_or_else(|| LedgerError::MalformedGoal("savePerMonth is required".into()))?;
        let min_balance_required = self
            .min_balance_required
            .ok_or_else(|| LedgerError::MalformedGoal("minBalanceRequired is required".into()))?;

        if goal.is_negative() {
            return Err(LedgerError::MalformedGoal(
                "goal amount must be non-negative".into(),
            ));
        }
        if save_per_month.is_negative() {
            return Err(LedgerError::MalformedGoal(
                "savePerMonth must be non-negative".into(),
            ));
        }

        Ok(SavingGoal::new(name, goal, save_per_month, min_balance_required))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_goal_starts_empty() {
        let goal = SavingGoal::new(
            "Holiday",
            Money::from_minor(50_000),
            Money::from_minor(10_000),
            Money::zero(),
        );
        assert_eq!(goal.balance, Money::zero());
        assert!(!goal.is_complete());
        assert_eq!(goal.remaining(), Money::from_minor(50_000));
    }

    #[test]
    fn test_contribution_caps_at_remaining() {
        let mut goal = SavingGoal::new(
            "Holiday",
            Money::from_minor(500),
            Money::from_minor(300),
            Money::zero(),
        );
        goal.balance = Money::from_minor(400);
        assert_eq!(goal.monthly_contribution(), Money::from_minor(100));
    }

    #[test]
    fn test_draft_requires_amounts() {
        let draft = GoalDraft {
            name: Some("Holiday".into()),
            goal: Some(Money::from_minor(500)),
            save_per_month: None,
            min_balance_required: Some(Money::zero()),
        };
        assert!(matches!(draft.build(), Err(LedgerError::MalformedGoal(_))));
    }

    #[test]
    fn test_draft_rejects_negative_target() {
        let draft = GoalDraft {
            name: Some("Holiday".into()),
            goal: Some(Money::from_minor(-1)),
            save_per_month: Some(Money::zero()),
            min_balance_required: Some(Money::zero()),
        };
        assert!(matches!(draft.build(), Err(LedgerError::MalformedGoal(_))));
    }
}
