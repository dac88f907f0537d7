//! Saving-goal CLI commands

use std::path::Path;

use clap::Subcommand;

use crate::display::format_goals_table;
use crate::engine::AnalyticsService;
use crate::error::LedgerResult;
use crate::models::{GoalDraft, Money};
use crate::store::LedgerFile;

/// Saving-goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a saving goal at the lowest contribution priority
    Add {
        /// Goal name
        name: String,
        /// Target amount in minor units
        target: i64,
        /// Contribution per month-crossing, in minor units
        #[arg(short = 'm', long)]
        per_month: i64,
        /// Balance floor below which no contribution occurs, in minor units
        #[arg(long, default_value_t = 0)]
        min_balance: i64,
    },
    /// List goals with balances accumulated over the ledger
    List,
}

/// Handle a goal command
pub fn handle_goal_command(path: &Path, cmd: GoalCommands) -> LedgerResult<()> {
    match cmd {
        GoalCommands::Add {
            name,
            target,
            per_month,
            min_balance,
        } => {
            let mut ledger = LedgerFile::load(path)?;
            let draft = GoalDraft {
                name: Some(name),
                goal: Some(Money::from_minor(target)),
                save_per_month: Some(Money::from_minor(per_month)),
                min_balance_required: Some(Money::from_minor(min_balance)),
            };
            let goal = ledger.add_goal(draft)?;
            println!("Added goal '{}' with target {}", goal.name, goal.goal);
            ledger.save(path)
        }
        GoalCommands::List => {
            let ledger = LedgerFile::load(path)?;
            let service = AnalyticsService::new(&ledger);
            let goals = service.goal_balances(ledger.session)?;
            print!("{}", format_goals_table(&goals));
            Ok(())
        }
    }
}
