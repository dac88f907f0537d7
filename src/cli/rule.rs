//! Category-rule CLI commands

use std::path::Path;

use clap::Subcommand;

use crate::error::LedgerResult;
use crate::models::{Category, RuleDraft};
use crate::store::LedgerFile;

/// Category-rule subcommands
#[derive(Subcommand)]
pub enum RuleCommands {
    /// Add a categorization rule (empty pattern fields match anything)
    Add {
        /// Category name to assign; created if it does not exist yet
        category: String,
        /// Description pattern
        #[arg(short, long, default_value = "")]
        description: String,
        /// Counterparty IBAN pattern
        #[arg(short, long, default_value = "")]
        iban: String,
        /// Direction pattern (deposit, withdrawal, or empty)
        #[arg(short = 't', long = "type", default_value = "")]
        kind: String,
        /// Also apply the rule to the existing transaction history, once
        #[arg(long)]
        apply_on_history: bool,
    },
    /// List rules, newest first
    List,
}

/// Handle a rule command
pub fn handle_rule_command(path: &Path, cmd: RuleCommands) -> LedgerResult<()> {
    match cmd {
        RuleCommands::Add {
            category,
            description,
            iban,
            kind,
            apply_on_history,
        } => {
            let mut ledger = LedgerFile::load(path)?;

            let category_id = match ledger.category_by_name(&category) {
                Some(existing) => existing.id,
                None => {
                    let created = Category::new(category.clone());
                    let id = created.id;
                    ledger.categories.push(created);
                    println!("Created category '{}'", category);
                    id
                }
            };

            let draft = RuleDraft {
                description: Some(description),
                iban: Some(iban),
                kind: Some(kind),
                category: Some(category_id),
                apply_on_history: Some(apply_on_history),
            };
            let (rule, updated) = ledger.add_rule(draft)?;
            println!("Added rule {} assigning '{}'", rule.id, category);
            if apply_on_history {
                println!("Categorized {} historical transaction(s)", updated);
            }
            ledger.save(path)
        }
        RuleCommands::List => {
            let ledger = LedgerFile::load(path)?;
            let rules = ledger.rules.iter().rev();

            let name_of = |id| {
                ledger
                    .categories
                    .iter()
                    .find(|c| c.id == id)
                    .map(|c| c.name.as_str())
                    .unwrap_or("?")
            };

            let mut any = false;
            for rule in rules {
                any = true;
                println!(
                    "{} description={:?} iban={:?} type={:?} -> {}",
                    rule.id, rule.description, rule.iban, rule.kind, name_of(rule.category)
                );
            }
            if !any {
                println!("No rules defined.");
            }
            Ok(())
        }
    }
}
