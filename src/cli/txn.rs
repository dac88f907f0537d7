//! Transaction CLI commands

use std::path::Path;

use chrono::{DateTime, Utc};
use clap::Subcommand;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::store::LedgerFile;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a transaction; uncategorized ones are matched against the rules
    Add {
        /// When the transaction occurred (RFC 3339)
        timestamp: String,
        /// Unsigned amount in minor units
        amount: i64,
        /// Direction (deposit or withdrawal)
        #[arg(short = 't', long = "type", default_value = "withdrawal")]
        kind: String,
        /// Counterparty IBAN
        #[arg(short, long, default_value = "")]
        iban: String,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Category name to assign explicitly
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List transactions in ledger order
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle a transaction command
pub fn handle_txn_command(path: &Path, cmd: TransactionCommands) -> LedgerResult<()> {
    match cmd {
        TransactionCommands::Add {
            timestamp,
            amount,
            kind,
            iban,
            description,
            category,
        } => {
            let timestamp = DateTime::parse_from_rfc3339(&timestamp)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| {
                    LedgerError::Validation(format!("Invalid timestamp '{}': {}", timestamp, e))
                })?;
            let kind = match kind.as_str() {
                "deposit" => TransactionKind::Deposit,
                "withdrawal" => TransactionKind::Withdrawal,
                other => {
                    return Err(LedgerError::Validation(format!(
                        "Invalid transaction type '{}': expected deposit or withdrawal",
                        other
                    )))
                }
            };

            let mut ledger = LedgerFile::load(path)?;

            let mut transaction = Transaction::new(timestamp, Money::from_minor(amount), kind, iban)
                .with_description(description);
            if let Some(name) = category {
                let found = ledger
                    .category_by_name(&name)
                    .ok_or_else(|| LedgerError::category_not_found(&name))?;
                transaction = transaction.with_category(found.id);
            }

            let stored = ledger.add_transaction(transaction)?;
            match stored.category {
                Some(_) => println!("Added {} {} (categorized)", stored.kind, stored.amount),
                None => println!("Added {} {}", stored.kind, stored.amount),
            }
            ledger.save(path)
        }
        TransactionCommands::List { limit } => {
            let ledger = LedgerFile::load(path)?;
            if ledger.transactions.is_empty() {
                println!("No transactions.");
                return Ok(());
            }
            for transaction in ledger.transactions.iter().take(limit) {
                println!(
                    "{} {:10} {:>12} {:20} {}",
                    transaction.timestamp.format("%Y-%m-%d %H:%M"),
                    transaction.kind.to_string(),
                    transaction.amount.to_string(),
                    transaction.external_iban,
                    transaction.description,
                );
            }
            Ok(())
        }
    }
}
