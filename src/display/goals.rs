//! Saving-goal display formatting

use crate::models::SavingGoal;

/// Format one goal as a table row
pub fn format_goal_row(goal: &SavingGoal) -> String {
    let status = if goal.is_complete() { "✓" } else { " " };
    format!(
        "{} {:20} {:>12} {:>12} {:>12} {:>12}",
        status,
        truncate(&goal.name, 20),
        goal.balance.to_string(),
        goal.goal.to_string(),
        goal.save_per_month.to_string(),
        goal.min_balance_required.to_string(),
    )
}

/// Format a list of goals as a table
pub fn format_goals_table(goals: &[SavingGoal]) -> String {
    if goals.is_empty() {
        return "No saving goals defined.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:20} {:>12} {:>12} {:>12} {:>12}\n",
        "Goal", "Saved", "Target", "Per month", "Min balance"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for goal in goals {
        output.push_str(&format_goal_row(goal));
        output.push('\n');
    }

    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_complete_goal_is_marked() {
        let mut goal = SavingGoal::new(
            "Holiday",
            Money::from_minor(500),
            Money::from_minor(100),
            Money::zero(),
        );
        goal.balance = Money::from_minor(500);
        assert!(format_goal_row(&goal).starts_with('✓'));
    }

    #[test]
    fn test_empty_goals() {
        assert_eq!(format_goals_table(&[]), "No saving goals defined.\n");
    }
}
